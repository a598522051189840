//! Merkle allowlist check.
//!
//! Leaves are `keccak256(voter_key)` where `voter_key` is a packed 20-byte
//! identifier, and inner nodes hash the two children in ascending byte order
//! (`sortPairs`), so proofs carry no left/right flags. Proof generation lives
//! off-chain and must reproduce this scheme bit for bit.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// 20-byte allowlist identity of a Soroban address: the low 20 bytes of
/// `keccak256(xdr(address))`.
pub fn voter_key(env: &Env, voter: &Address) -> BytesN<20> {
    let digest: BytesN<32> = env.crypto().keccak256(&voter.clone().to_xdr(env)).into();
    let mut key = [0u8; 20];
    key.copy_from_slice(&digest.to_array()[12..]);
    BytesN::from_array(env, &key)
}

pub fn leaf(env: &Env, key: &BytesN<20>) -> BytesN<32> {
    env.crypto()
        .keccak256(&Bytes::from_array(env, &key.to_array()))
        .into()
}

pub fn hash_sorted_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (a, b) = (a.to_array(), b.to_array());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut data = Bytes::from_array(env, &lo);
    data.append(&Bytes::from_array(env, &hi));
    env.crypto().keccak256(&data).into()
}

pub fn is_unset(root: &BytesN<32>) -> bool {
    root.to_array() == [0u8; 32]
}

/// An all-zero root admits nobody.
pub fn verify(env: &Env, root: &BytesN<32>, key: &BytesN<20>, proof: &Vec<BytesN<32>>) -> bool {
    if is_unset(root) {
        return false;
    }

    let mut node = leaf(env, key);
    for sibling in proof.iter() {
        node = hash_sorted_pair(env, &node, &sibling);
    }
    &node == root
}
