//! Stablecoin Bridge Contract - Lock/Unlock Bridging Between Two Ledgers
//!
//! # Outgoing Flow (Lock)
//! 1. User approves the bridge as spender on the stablecoin contract
//! 2. User calls `Lock`; tokens move into bridge custody and a `locked`
//!    event carries the event id
//! 3. A relayer observes the event and settles it on the other chain
//!
//! # Incoming Flow (Unlock)
//! 1. A relayer observes a burn/lock on the other chain
//! 2. Relayer calls `Unlock` with the source event id
//! 3. The replay guard records the id and custody releases the funds, in one
//!    atomic call
//!
//! # Security
//! - Tagged roles (admin, relayer, guardian) checked per call, no inheritance
//! - Replay guard keyed by the full source event id
//! - Per-transaction limit and optional 24h window cap on locks
//! - Pause switch for guardians and admins

pub mod access;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
pub mod pause;
mod query;
pub mod replay;
pub mod risk;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{compute_lock_event_id, keccak256};
pub use crate::state::Role;
