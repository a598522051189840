use crate::error::ElectionError;
use crate::registry::Positions;

/// Id of the candidate whose positions are nearest to `answer`.
///
/// Distance is squared Euclidean. Candidates are visited in id order and only
/// a strictly smaller distance replaces the current best, so the lowest id
/// wins an exact tie.
pub fn find_closest<I>(answer: &Positions, candidates: I) -> Result<u32, ElectionError>
where
    I: IntoIterator<Item = Positions>,
{
    answer.validate()?;

    let mut best: Option<(u32, u32)> = None;
    for (id, positions) in (0u32..).zip(candidates) {
        let distance = answer.distance_sq(&positions);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((id, distance)),
        }
    }

    best.map(|(id, _)| id).ok_or(ElectionError::NoCandidates)
}
