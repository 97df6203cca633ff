//! Event id derivation for outgoing locks
//!
//! A lock's event id is what the relayer carries to the destination chain
//! and what the destination bridge keys its replay guard on. It is derived
//! from the identity of the locking transaction:
//!
//! ```text
//! keccak256(
//!     u32 len(chain_id)  || chain_id
//!  || u32 len(contract)  || contract
//!  || u64 block height
//!  || u32 transaction index
//!  || u64 outgoing nonce
//! )
//! ```
//!
//! All integers are big-endian. The strings are length-prefixed so that no
//! two distinct inputs share an encoding. The nonce keeps ids distinct when
//! one transaction carries several locks.

use cosmwasm_std::Env;
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the event id of a lock.
pub fn compute_lock_event_id(
    chain_id: &str,
    contract: &str,
    height: u64,
    tx_index: u32,
    nonce: u64,
) -> [u8; 32] {
    let mut data = Vec::with_capacity(4 + chain_id.len() + 4 + contract.len() + 8 + 4 + 8);
    data.extend_from_slice(&(chain_id.len() as u32).to_be_bytes());
    data.extend_from_slice(chain_id.as_bytes());
    data.extend_from_slice(&(contract.len() as u32).to_be_bytes());
    data.extend_from_slice(contract.as_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&tx_index.to_be_bytes());
    data.extend_from_slice(&nonce.to_be_bytes());
    keccak256(&data)
}

/// Event id of a lock executing in `env` with the given nonce.
pub fn lock_event_id(env: &Env, nonce: u64) -> [u8; 32] {
    let tx_index = env.transaction.as_ref().map(|t| t.index).unwrap_or(0);
    compute_lock_event_id(
        &env.block.chain_id,
        env.contract.address.as_str(),
        env.block.height,
        tx_index,
        nonce,
    )
}

/// Render bytes as a 0x-prefixed hex string for event attributes.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
