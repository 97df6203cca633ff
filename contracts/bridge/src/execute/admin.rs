//! Admin operations handlers.
//!
//! This module handles:
//! - Pause switch (guardian or admin)
//! - Risk limit updates (admin)
//! - Reserved operations that are disabled in this phase

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use crate::access::ensure_role;
use crate::error::ContractError;
use crate::pause::set_paused;
use crate::risk::validate_limits;
use crate::state::{RiskLimits, Role, RISK_LIMITS};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Set the pause flag (guardian or admin).
pub fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    set_paused(deps.storage, &info.sender, paused)?;

    let event = if paused {
        Event::new("paused")
    } else {
        Event::new("unpaused")
    };

    Ok(Response::new()
        .add_event(event.add_attribute("by", info.sender.to_string()))
        .add_attribute("method", if paused { "pause" } else { "unpause" }))
}

// ============================================================================
// Risk Limits
// ============================================================================

/// Replace the risk limits (admin only).
///
/// Usage already counted in the current window is kept.
pub fn execute_set_limits(
    deps: DepsMut,
    info: MessageInfo,
    max_per_transaction: Uint128,
    max_per_period: Option<Uint128>,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Admin)?;

    let limits = RiskLimits {
        max_per_transaction,
        max_per_period,
    };
    validate_limits(&limits)?;
    RISK_LIMITS.save(deps.storage, &limits)?;

    Ok(Response::new()
        .add_attribute("method", "set_limits")
        .add_attribute("max_per_transaction", max_per_transaction.to_string())
        .add_attribute(
            "max_per_period",
            max_per_period
                .map(|cap| cap.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ))
}

// ============================================================================
// Reserved
// ============================================================================

/// Liquidity staking is reserved for a later phase and always rejected.
pub fn execute_stake_liquidity(_amount: Uint128) -> Result<Response, ContractError> {
    Err(ContractError::FeatureDisabled)
}
