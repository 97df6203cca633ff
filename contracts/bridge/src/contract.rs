//! Stablecoin Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `access`, `pause`, `risk`, `replay` - the checks the handlers compose

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::access::insert_member;
use crate::error::ContractError;
use crate::execute::{
    execute_grant_role, execute_lock, execute_renounce_role, execute_revoke_role,
    execute_set_limits, execute_set_paused, execute_stake_liquidity, execute_unlock,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_nonce, query_custody_balance, query_has_role, query_is_paused,
    query_is_processed, query_limits, query_lock, query_lock_by_nonce, query_period_usage,
    query_role_members, query_settlement, query_settlements, query_stats, query_status,
};
use crate::risk::validate_limits;
use crate::state::{
    Config, RiskLimits, Role, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE,
    PAUSED, RISK_LIMITS, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;

    if msg.admins.is_empty() {
        return Err(ContractError::NoAdmin);
    }

    let limits = RiskLimits {
        max_per_transaction: msg.max_per_transaction,
        max_per_period: msg.max_per_period,
    };
    validate_limits(&limits)?;

    CONFIG.save(deps.storage, &Config { token: token.clone() })?;
    RISK_LIMITS.save(deps.storage, &limits)?;
    PAUSED.save(deps.storage, &false)?;
    STATS.save(deps.storage, &Stats::default())?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    let assignments = [
        (Role::Admin, &msg.admins),
        (Role::Relayer, &msg.relayers),
        (Role::Guardian, &msg.guardians),
    ];
    for (role, accounts) in assignments {
        for account in accounts {
            let addr = deps.api.addr_validate(account)?;
            insert_member(deps.storage, &addr, role)?;
        }
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("token", token)
        .add_attribute("admin_count", msg.admins.len().to_string())
        .add_attribute("relayer_count", msg.relayers.len().to_string())
        .add_attribute("guardian_count", msg.guardians.len().to_string())
        .add_attribute("max_per_transaction", msg.max_per_transaction.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Bridge operations
        ExecuteMsg::Lock {
            amount,
            destination,
        } => execute_lock(deps, env, info, amount, destination),
        ExecuteMsg::Unlock {
            recipient,
            amount,
            source_event_id,
        } => execute_unlock(deps, env, info, recipient, amount, source_event_id),
        ExecuteMsg::StakeLiquidity { amount } => execute_stake_liquidity(amount),

        // Access control
        ExecuteMsg::GrantRole { account, role } => execute_grant_role(deps, info, account, role),
        ExecuteMsg::RevokeRole { account, role } => execute_revoke_role(deps, info, account, role),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, info, role),

        // Risk & pause
        ExecuteMsg::SetLimits {
            max_per_transaction,
            max_per_period,
        } => execute_set_limits(deps, info, max_per_transaction, max_per_period),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::HasRole { account, role } => to_json_binary(&query_has_role(deps, account, role)?),
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
        QueryMsg::Limits {} => to_json_binary(&query_limits(deps)?),
        QueryMsg::PeriodUsage {} => to_json_binary(&query_period_usage(deps, env)?),
        QueryMsg::IsProcessed { source_event_id } => {
            to_json_binary(&query_is_processed(deps, source_event_id)?)
        }
        QueryMsg::Settlement { source_event_id } => {
            to_json_binary(&query_settlement(deps, source_event_id)?)
        }
        QueryMsg::Settlements { start_after, limit } => {
            to_json_binary(&query_settlements(deps, start_after, limit)?)
        }
        QueryMsg::Lock { event_id } => to_json_binary(&query_lock(deps, event_id)?),
        QueryMsg::LockByNonce { nonce } => to_json_binary(&query_lock_by_nonce(deps, nonce)?),
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
