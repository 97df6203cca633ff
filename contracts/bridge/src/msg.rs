//! Message types for the stablecoin bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::state::Role;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 stablecoin contract held in custody
    pub token: String,
    /// Initial admins (at least one)
    pub admins: Vec<String>,
    /// Initial relayers
    pub relayers: Vec<String>,
    /// Initial guardians
    pub guardians: Vec<String>,
    /// Maximum amount per lock (must be > 0)
    pub max_per_transaction: Uint128,
    /// Optional cap on the amount locked per 24-hour window
    pub max_per_period: Option<Uint128>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Bridge Operations
    // ========================================================================
    /// Lock tokens into custody for release on the destination chain
    ///
    /// Authorization: Anyone. The caller must first approve the bridge as
    /// spender of `amount` on the token contract.
    Lock {
        amount: Uint128,
        /// Recipient on the destination chain (chain-native format)
        destination: String,
    },

    /// Release custody funds for a settled source-chain event
    ///
    /// Authorization: Relayer only
    Unlock {
        recipient: String,
        amount: Uint128,
        /// Identifier of the source-chain event (e.g. its transaction hash)
        source_event_id: Binary,
    },

    /// Reserved for liquidity providers; disabled in the current phase
    StakeLiquidity { amount: Uint128 },

    // ========================================================================
    // Access Control
    // ========================================================================
    /// Authorization: Admin only
    GrantRole { account: String, role: Role },

    /// Authorization: Admin only. The last admin cannot be revoked.
    RevokeRole { account: String, role: Role },

    /// Drop one of the caller's own roles
    RenounceRole { role: Role },

    // ========================================================================
    // Risk & Pause
    // ========================================================================
    /// Authorization: Admin only
    SetLimits {
        max_per_transaction: Uint128,
        max_per_period: Option<Uint128>,
    },

    /// Authorization: Guardian or Admin
    SetPaused { paused: bool },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(StatusResponse)]
    Status {},

    #[returns(StatsResponse)]
    Stats {},

    #[returns(IsPausedResponse)]
    IsPaused {},

    #[returns(HasRoleResponse)]
    HasRole { account: String, role: Role },

    /// Members of a role, ordered by address
    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(LimitsResponse)]
    Limits {},

    /// Usage of the current risk window
    #[returns(PeriodUsageResponse)]
    PeriodUsage {},

    #[returns(IsProcessedResponse)]
    IsProcessed { source_event_id: Binary },

    #[returns(Option<SettlementResponse>)]
    Settlement { source_event_id: Binary },

    #[returns(SettlementsResponse)]
    Settlements {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    #[returns(Option<LockResponse>)]
    Lock { event_id: Binary },

    #[returns(Option<LockResponse>)]
    LockByNonce { nonce: u64 },

    /// Nonce the next lock will use
    #[returns(NonceResponse)]
    CurrentNonce {},

    /// Token balance of the custody account (this contract)
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct StatusResponse {
    pub paused: bool,
    pub admin_count: u32,
    pub relayer_count: u32,
    pub guardian_count: u32,
}

#[cw_serde]
pub struct StatsResponse {
    pub lock_count: u64,
    pub unlock_count: u64,
    pub total_locked: Uint128,
    pub total_unlocked: Uint128,
}

#[cw_serde]
pub struct IsPausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct LimitsResponse {
    pub max_per_transaction: Uint128,
    pub max_per_period: Option<Uint128>,
}

#[cw_serde]
pub struct PeriodUsageResponse {
    pub current_period_start: Timestamp,
    pub used_amount: Uint128,
    /// `None` when no period cap is configured
    pub remaining_amount: Option<Uint128>,
    pub period_ends_at: Timestamp,
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}

#[cw_serde]
pub struct SettlementResponse {
    pub source_event_id: Binary,
    pub recipient: Addr,
    pub amount: Uint128,
    pub relayer: Addr,
    pub settled_at: Timestamp,
}

#[cw_serde]
pub struct SettlementsResponse {
    pub settlements: Vec<SettlementResponse>,
}

#[cw_serde]
pub struct LockResponse {
    pub event_id: Binary,
    pub sender: Addr,
    pub amount: Uint128,
    pub destination: String,
    pub nonce: u64,
    pub locked_at: Timestamp,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub custody: Addr,
    pub balance: Uint128,
}
