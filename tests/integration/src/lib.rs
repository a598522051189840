#![no_std]

// Integration test crate - all code is test-only

#[cfg(test)]
mod tests {
    extern crate std;
    use soroban_sdk::{
        testutils::{Address as _, Ledger as _},
        Address, Bytes, BytesN, Env, String, Vec,
    };
    use std::vec::Vec as StdVec;

    // Import actual contract clients
    use achievement_nft::AchievementNftClient;
    use election::{ElectionClient, ElectionConfig, ElectionError, Phase, Positions};
    use reward_token::RewardTokenClient;

    const REWARD: i128 = 10_000_000; // 1 BAL at 7 decimals
    const START: u64 = 1_000;
    const END: u64 = 5_000;

    /// Helper to set up the election with its two real collaborators
    struct ElectionSystem {
        env: Env,
        owner: Address,
        election: Address,
        token: Address,
        nft: Address,
    }

    impl ElectionSystem {
        fn new() -> Self {
            let env = Env::default();
            env.mock_all_auths();

            let owner = Address::generate(&env);
            let token = env.register(
                reward_token::RewardToken,
                (
                    owner.clone(),
                    String::from_str(&env, "Ballot Token"),
                    String::from_str(&env, "BAL"),
                ),
            );
            let nft = env.register(achievement_nft::AchievementNft, (owner.clone(),));
            let election = env.register(
                election::Election,
                (
                    owner.clone(),
                    ElectionConfig {
                        reward_token: token.clone(),
                        reward_amount: REWARD,
                        achievement_nft: nft.clone(),
                    },
                ),
            );

            // election must be the minter of both collaborators
            RewardTokenClient::new(&env, &token).set_minter(&owner, &election);
            AchievementNftClient::new(&env, &nft).set_minter(&owner, &election);

            Self {
                env,
                owner,
                election,
                token,
                nft,
            }
        }

        fn election_client(&self) -> ElectionClient {
            ElectionClient::new(&self.env, &self.election)
        }

        fn token_client(&self) -> RewardTokenClient {
            RewardTokenClient::new(&self.env, &self.token)
        }

        fn nft_client(&self) -> AchievementNftClient {
            AchievementNftClient::new(&self.env, &self.nft)
        }

        fn name(&self, s: &str) -> String {
            String::from_str(&self.env, s)
        }

        fn set_time(&self, timestamp: u64) {
            self.env.ledger().with_mut(|li| li.timestamp = timestamp);
        }

        fn add_reference_candidates(&self) {
            let client = self.election_client();
            client.add_candidate(&self.owner, &self.name("Alice"), &Positions(8, 3, 6));
            client.add_candidate(&self.owner, &self.name("Bob"), &Positions(2, 9, 4));
            client.add_candidate(&self.owner, &self.name("Charlie"), &Positions(5, 5, 8));
        }

        fn open_election(&self, voters: &[Address]) -> Allowlist {
            let allowlist = Allowlist::new(self, voters);
            let client = self.election_client();
            client.set_merkle_root(&self.owner, &allowlist.root());
            client.set_window(&self.owner, &START, &END);
            self.set_time(START);
            allowlist
        }

        fn voters(&self, n: usize) -> StdVec<Address> {
            (0..n).map(|_| Address::generate(&self.env)).collect()
        }
    }

    /// Off-chain proof builder: keccak leaves over the contract's voter keys,
    /// sorted-pair inner nodes, odd tail promoted.
    struct Allowlist {
        env: Env,
        voters: StdVec<Address>,
        layers: StdVec<StdVec<BytesN<32>>>,
    }

    impl Allowlist {
        fn new(system: &ElectionSystem, voters: &[Address]) -> Self {
            let env = &system.env;
            let client = system.election_client();
            let mut layer: StdVec<BytesN<32>> = voters
                .iter()
                .map(|v| {
                    let key = client.voter_key(v);
                    env.crypto()
                        .keccak256(&Bytes::from_array(env, &key.to_array()))
                        .into()
                })
                .collect();

            let mut layers = StdVec::new();
            while layer.len() > 1 {
                let next = layer
                    .chunks(2)
                    .map(|pair| match pair {
                        [a, b] => hash_pair(env, a, b),
                        [a] => a.clone(),
                        _ => unreachable!(),
                    })
                    .collect();
                layers.push(layer);
                layer = next;
            }
            layers.push(layer);

            Self {
                env: env.clone(),
                voters: voters.to_vec(),
                layers,
            }
        }

        fn root(&self) -> BytesN<32> {
            self.layers[self.layers.len() - 1][0].clone()
        }

        fn proof(&self, voter: &Address) -> Vec<BytesN<32>> {
            let mut index = self
                .voters
                .iter()
                .position(|v| v == voter)
                .expect("voter not in allowlist");
            let mut proof = Vec::new(&self.env);
            for layer in &self.layers[..self.layers.len() - 1] {
                if let Some(sibling) = layer.get(index ^ 1) {
                    proof.push_back(sibling.clone());
                }
                index /= 2;
            }
            proof
        }
    }

    fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
        let (a, b) = (a.to_array(), b.to_array());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut data = Bytes::from_array(env, &lo);
        data.append(&Bytes::from_array(env, &hi));
        env.crypto().keccak256(&data).into()
    }

    #[test]
    fn test_candidates_mint_badges_to_owner() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();

        let nft = system.nft_client();
        assert_eq!(nft.next_id(), 3);
        assert_eq!(nft.balance_of(&system.owner), 3);
        for id in 0..3u64 {
            assert_eq!(nft.owner_of(&id), system.owner);
        }

        let client = system.election_client();
        assert_eq!(client.candidate_count(), 3);
        assert_eq!(client.get_candidate(&0).badge_id, 0);
        assert_eq!(client.get_candidate(&2).badge_id, 2);
    }

    #[test]
    fn test_batch_candidates_mint_one_badge_each() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();

        let mut names = Vec::new(&system.env);
        names.push_back(system.name("Dana"));
        names.push_back(system.name("Eve"));
        let count = system
            .election_client()
            .set_candidates(&system.owner, &names);

        assert_eq!(count, 5);
        assert_eq!(system.nft_client().next_id(), 5);
        assert_eq!(
            system.election_client().get_candidate(&4).positions,
            Positions(5, 5, 5)
        );
    }

    #[test]
    fn test_full_election_flow() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let voters = system.voters(5);
        let allowlist = system.open_election(&voters);
        let client = system.election_client();
        assert_eq!(client.phase(), Phase::Open);

        client.vote(&voters[0], &0, &allowlist.proof(&voters[0]));
        client.vote(&voters[1], &2, &allowlist.proof(&voters[1]));
        client.vote_by_questionnaire(&voters[2], &Positions(3, 10, 5), &allowlist.proof(&voters[2]));
        client.vote_by_questionnaire(&voters[3], &Positions(5, 6, 5), &allowlist.proof(&voters[3]));

        let (names, votes) = client.get_results();
        assert_eq!(names.get(0).unwrap(), system.name("Alice"));
        assert_eq!(votes.get(0).unwrap(), 2); // direct + tie on (5,6,5)
        assert_eq!(votes.get(1).unwrap(), 1);
        assert_eq!(votes.get(2).unwrap(), 1);

        let token = system.token_client();
        for voter in &voters[..4] {
            assert_eq!(token.balance(voter), REWARD);
            assert!(client.has_voted(voter));
        }
        assert_eq!(token.balance(&voters[4]), 0);
        assert!(!client.has_voted(&voters[4]));
        assert_eq!(token.total_supply(), 4 * REWARD);

        system.set_time(END);
        assert_eq!(client.phase(), Phase::Closed);
        assert_eq!(
            client.try_vote(&voters[4], &0, &allowlist.proof(&voters[4])),
            Err(Ok(ElectionError::VotingClosed))
        );
    }

    #[test]
    fn test_tally_matches_reward_supply() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let voters = system.voters(7);
        let allowlist = system.open_election(&voters);
        let client = system.election_client();

        for (i, voter) in voters.iter().enumerate() {
            let proof = allowlist.proof(voter);
            if i % 2 == 0 {
                client.vote(voter, &((i % 3) as u32), &proof);
            } else {
                client.vote_by_questionnaire(voter, &Positions(i as u32, 5, 5), &proof);
            }
        }

        let (_, votes) = client.get_results();
        let total: u64 = votes.iter().sum();
        assert_eq!(total, 7);
        assert_eq!(system.token_client().total_supply(), 7 * REWARD);
    }

    #[test]
    fn test_double_vote_mints_once() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let voters = system.voters(2);
        let allowlist = system.open_election(&voters);
        let client = system.election_client();
        let proof = allowlist.proof(&voters[0]);

        client.vote(&voters[0], &1, &proof);
        assert_eq!(
            client.try_vote(&voters[0], &2, &proof),
            Err(Ok(ElectionError::AlreadyVoted))
        );
        assert_eq!(
            client.try_vote_by_questionnaire(&voters[0], &Positions(1, 1, 1), &proof),
            Err(Ok(ElectionError::AlreadyVoted))
        );

        assert_eq!(system.token_client().balance(&voters[0]), REWARD);
        assert_eq!(client.get_results().1.get(1).unwrap(), 1);
    }

    #[test]
    fn test_window_gates_voting() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let voters = system.voters(3);
        let allowlist = system.open_election(&voters);
        let client = system.election_client();
        let proof = allowlist.proof(&voters[0]);

        system.set_time(START - 1);
        assert_eq!(
            client.try_vote(&voters[0], &0, &proof),
            Err(Ok(ElectionError::VotingNotStarted))
        );

        system.set_time(END - 1);
        client.vote(&voters[0], &0, &proof);

        system.set_time(END);
        assert_eq!(
            client.try_vote(&voters[1], &0, &allowlist.proof(&voters[1])),
            Err(Ok(ElectionError::VotingClosed))
        );
        assert_eq!(system.token_client().total_supply(), REWARD);
    }

    #[test]
    fn test_outsider_cannot_vote() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let voters = system.voters(4);
        let allowlist = system.open_election(&voters);
        let client = system.election_client();
        let outsider = Address::generate(&system.env);

        // a member's proof does not transfer to another address
        assert_eq!(
            client.try_vote(&outsider, &0, &allowlist.proof(&voters[0])),
            Err(Ok(ElectionError::NotEligible))
        );
        assert!(!client.is_eligible(&outsider, &allowlist.proof(&voters[0])));
        assert_eq!(system.token_client().balance(&outsider), 0);
    }

    #[test]
    fn test_root_rotation_changes_eligibility() {
        let system = ElectionSystem::new();
        system.add_reference_candidates();
        let first = system.voters(3);
        let first_list = system.open_election(&first);
        let client = system.election_client();

        client.vote(&first[0], &0, &first_list.proof(&first[0]));

        let second = system.voters(2);
        let second_list = Allowlist::new(&system, &second);
        client.set_merkle_root(&system.owner, &second_list.root());

        assert_eq!(
            client.try_vote(&first[1], &0, &first_list.proof(&first[1])),
            Err(Ok(ElectionError::NotEligible))
        );
        client.vote(&second[0], &1, &second_list.proof(&second[0]));

        // earlier ballots survive the rotation
        assert!(client.has_voted(&first[0]));
        assert_eq!(client.get_results().1.get(0).unwrap(), 1);
        assert_eq!(client.get_results().1.get(1).unwrap(), 1);
    }

    #[test]
    fn test_election_without_minter_rights_cannot_register() {
        let env = Env::default();
        env.mock_all_auths();
        let owner = Address::generate(&env);
        let token = env.register(
            reward_token::RewardToken,
            (
                owner.clone(),
                String::from_str(&env, "Ballot Token"),
                String::from_str(&env, "BAL"),
            ),
        );
        let nft = env.register(achievement_nft::AchievementNft, (owner.clone(),));
        let election = env.register(
            election::Election,
            (
                owner.clone(),
                ElectionConfig {
                    reward_token: token,
                    reward_amount: REWARD,
                    achievement_nft: nft.clone(),
                },
            ),
        );
        let client = ElectionClient::new(&env, &election);

        let result = client.try_add_candidate(
            &owner,
            &String::from_str(&env, "Alice"),
            &Positions(8, 3, 6),
        );
        assert!(result.is_err());
        assert_eq!(client.candidate_count(), 0);
        assert_eq!(AchievementNftClient::new(&env, &nft).next_id(), 0);
    }
}
