//! State definitions for the stablecoin bridge contract
//!
//! All cross-call state lives here: the custodied token, role assignments,
//! risk limits, the pause flag, and the append-only settlement set.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// CW20 stablecoin held in custody by this bridge
    pub token: Addr,
}

/// Capability roles. Each is checked on its own; none implies another.
#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Manages roles and risk limits, may pause
    Admin,
    /// Settles source-chain events via `Unlock`
    Relayer,
    /// Emergency pause
    Guardian,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Relayer => "relayer",
            Role::Guardian => "guardian",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount policy applied to every lock
#[cw_serde]
pub struct RiskLimits {
    /// Maximum amount per single lock (must be > 0)
    pub max_per_transaction: Uint128,
    /// Optional cap on the cumulative amount locked per window
    pub max_per_period: Option<Uint128>,
}

/// Usage of the current risk window
#[cw_serde]
pub struct RiskWindow {
    /// Timestamp when the current window started
    pub window_start: Timestamp,
    /// Amount locked in the current window
    pub used: Uint128,
}

/// One completed cross-chain unlock. Written once, never changed.
#[cw_serde]
pub struct SettlementRecord {
    /// Identifier of the originating source-chain event (full bytes)
    pub source_event_id: Binary,
    /// Account credited on this chain
    pub recipient: Addr,
    /// Amount released from custody
    pub amount: Uint128,
    /// Relayer that reported the event
    pub relayer: Addr,
    /// Block time of settlement
    pub settled_at: Timestamp,
}

/// Outgoing lock, kept so the counter-chain side can be verified by event id
#[cw_serde]
pub struct LockRecord {
    pub event_id: Binary,
    pub sender: Addr,
    pub amount: Uint128,
    /// Recipient on the destination chain, in that chain's native format
    pub destination: String,
    pub nonce: u64,
    pub locked_at: Timestamp,
}

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub lock_count: u64,
    pub unlock_count: u64,
    pub total_locked: Uint128,
    pub total_unlocked: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:stable-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Risk window length in seconds (24 hours)
pub const RISK_WINDOW_PERIOD: u64 = 86_400;

/// Longest accepted destination address, in bytes
pub const MAX_DESTINATION_LEN: usize = 128;

/// Longest accepted source event id, in bytes
pub const MAX_EVENT_ID_LEN: usize = 128;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Process-wide pause flag
pub const PAUSED: Item<bool> = Item::new("paused");

/// Bridge statistics
pub const STATS: Item<Stats> = Item::new("stats");

/// Current risk limits
pub const RISK_LIMITS: Item<RiskLimits> = Item::new("risk_limits");

/// Window tracking for `RiskLimits::max_per_period`
pub const RISK_WINDOW: Item<RiskWindow> = Item::new("risk_window");

// ============================================================================
// Access Control
// ============================================================================

/// Role membership
/// Key: (role name, account), Value: always true while held
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");

/// Number of members per role
/// Key: role name, Value: member count
pub const ROLE_COUNTS: Map<&str, u32> = Map::new("role_counts");

// ============================================================================
// Lock / Unlock Records
// ============================================================================

/// Outgoing nonce counter (one per lock)
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Locks indexed by event id
/// Key: 32-byte event id, Value: LockRecord
pub const LOCKS: Map<&[u8], LockRecord> = Map::new("locks");

/// Lock event id by nonce (for convenience lookups)
pub const LOCK_BY_NONCE: Map<u64, Binary> = Map::new("lock_by_nonce");

/// Settled source events. This is the replay set.
/// Key: full source event id bytes, Value: SettlementRecord
pub const SETTLEMENTS: Map<&[u8], SettlementRecord> = Map::new("settlements");
