//! Query handlers for the stablecoin bridge contract.

use cosmwasm_std::{Binary, Deps, Env, StdResult};

use crate::access::{has_role, role_count, role_members};
use crate::msg::{
    ConfigResponse, CustodyBalanceResponse, HasRoleResponse, IsPausedResponse,
    IsProcessedResponse, LimitsResponse, LockResponse, NonceResponse, PeriodUsageResponse,
    RoleMembersResponse, SettlementResponse, SettlementsResponse, StatsResponse, StatusResponse,
};
use crate::pause::is_paused;
use crate::replay::{is_processed, list_settlements, load_settlement};
use crate::risk::current_window;
use crate::state::{
    LockRecord, Role, SettlementRecord, CONFIG, LOCKS, LOCK_BY_NONCE, OUTGOING_NONCE,
    RISK_LIMITS, RISK_WINDOW, RISK_WINDOW_PERIOD, STATS,
};
use common::Cw20Ledger;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn page_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    Ok(StatusResponse {
        paused: is_paused(deps.storage)?,
        admin_count: role_count(deps.storage, Role::Admin)?,
        relayer_count: role_count(deps.storage, Role::Relayer)?,
        guardian_count: role_count(deps.storage, Role::Guardian)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        lock_count: stats.lock_count,
        unlock_count: stats.unlock_count,
        total_locked: stats.total_locked,
        total_unlocked: stats.total_unlocked,
    })
}

pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    Ok(IsPausedResponse {
        paused: is_paused(deps.storage)?,
    })
}

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_has_role(deps: Deps, account: String, role: Role) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, &account, role)?,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let members = role_members(deps.storage, role, start.as_ref(), page_limit(limit))?;
    Ok(RoleMembersResponse { role, members })
}

// ============================================================================
// Risk Queries
// ============================================================================

pub fn query_limits(deps: Deps) -> StdResult<LimitsResponse> {
    let limits = RISK_LIMITS.load(deps.storage)?;
    Ok(LimitsResponse {
        max_per_transaction: limits.max_per_transaction,
        max_per_period: limits.max_per_period,
    })
}

pub fn query_period_usage(deps: Deps, env: Env) -> StdResult<PeriodUsageResponse> {
    let limits = RISK_LIMITS.load(deps.storage)?;
    let window = current_window(RISK_WINDOW.may_load(deps.storage)?, env.block.time);
    let remaining_amount = limits
        .max_per_period
        .map(|cap| cap.saturating_sub(window.used));

    Ok(PeriodUsageResponse {
        current_period_start: window.window_start,
        used_amount: window.used,
        remaining_amount,
        period_ends_at: window.window_start.plus_seconds(RISK_WINDOW_PERIOD),
    })
}

// ============================================================================
// Settlement Queries
// ============================================================================

fn settlement_response(record: SettlementRecord) -> SettlementResponse {
    SettlementResponse {
        source_event_id: record.source_event_id,
        recipient: record.recipient,
        amount: record.amount,
        relayer: record.relayer,
        settled_at: record.settled_at,
    }
}

pub fn query_is_processed(deps: Deps, source_event_id: Binary) -> StdResult<IsProcessedResponse> {
    Ok(IsProcessedResponse {
        processed: is_processed(deps.storage, source_event_id.as_slice())?,
    })
}

pub fn query_settlement(
    deps: Deps,
    source_event_id: Binary,
) -> StdResult<Option<SettlementResponse>> {
    Ok(load_settlement(deps.storage, source_event_id.as_slice())?.map(settlement_response))
}

pub fn query_settlements(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<SettlementsResponse> {
    let settlements = list_settlements(
        deps.storage,
        start_after.as_ref().map(|id| id.as_slice()),
        page_limit(limit),
    )?
    .into_iter()
    .map(settlement_response)
    .collect();
    Ok(SettlementsResponse { settlements })
}

// ============================================================================
// Lock Queries
// ============================================================================

fn lock_response(record: LockRecord) -> LockResponse {
    LockResponse {
        event_id: record.event_id,
        sender: record.sender,
        amount: record.amount,
        destination: record.destination,
        nonce: record.nonce,
        locked_at: record.locked_at,
    }
}

pub fn query_lock(deps: Deps, event_id: Binary) -> StdResult<Option<LockResponse>> {
    Ok(LOCKS
        .may_load(deps.storage, event_id.as_slice())?
        .map(lock_response))
}

pub fn query_lock_by_nonce(deps: Deps, nonce: u64) -> StdResult<Option<LockResponse>> {
    match LOCK_BY_NONCE.may_load(deps.storage, nonce)? {
        Some(event_id) => query_lock(deps, event_id),
        None => Ok(None),
    }
}

pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: OUTGOING_NONCE.load(deps.storage)?,
    })
}

pub fn query_custody_balance(deps: Deps, env: Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let account = Cw20Ledger::new(config.token).account(&deps.querier, &env.contract.address)?;
    Ok(CustodyBalanceResponse {
        custody: account.address,
        balance: account.balance,
    })
}
