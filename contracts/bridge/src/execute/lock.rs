//! Outgoing transfer handler (Lock).
//!
//! Pulls tokens from the caller into custody and publishes the event id the
//! relayer carries to the destination chain.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::{bytes_to_hex, lock_event_id};
use crate::pause::ensure_not_paused;
use crate::risk::{check_limit, check_window};
use crate::state::{
    LockRecord, CONFIG, LOCKS, LOCK_BY_NONCE, MAX_DESTINATION_LEN, OUTGOING_NONCE, RISK_LIMITS,
    RISK_WINDOW, STATS,
};
use common::Cw20Ledger;

/// Execute handler for locking tokens into custody.
///
/// Checks run in a fixed order: pause, input, allowance and balance, risk
/// limits.
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
    destination: String,
) -> Result<Response, ContractError> {
    ensure_not_paused(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    validate_destination(&destination)?;

    let config = CONFIG.load(deps.storage)?;
    let ledger = Cw20Ledger::new(config.token);

    let approved = ledger.spendable_allowance(
        &deps.querier,
        &info.sender,
        &env.contract.address,
        &env.block,
    )?;
    if approved < amount {
        return Err(ContractError::InsufficientAllowance {
            approved,
            required: amount,
        });
    }
    let available = ledger.balance(&deps.querier, &info.sender)?;
    if available < amount {
        return Err(ContractError::InsufficientBalance {
            available,
            required: amount,
        });
    }

    let limits = RISK_LIMITS.load(deps.storage)?;
    check_limit(&limits, amount)?;
    let window = check_window(
        &limits,
        RISK_WINDOW.may_load(deps.storage)?,
        env.block.time,
        amount,
    )?;
    RISK_WINDOW.save(deps.storage, &window)?;

    // Increment nonce
    let nonce = OUTGOING_NONCE.load(deps.storage)?;
    OUTGOING_NONCE.save(deps.storage, &(nonce + 1))?;

    let event_id = lock_event_id(&env, nonce);
    let record = LockRecord {
        event_id: Binary::from(event_id.to_vec()),
        sender: info.sender.clone(),
        amount,
        destination: destination.clone(),
        nonce,
        locked_at: env.block.time,
    };
    LOCKS.save(deps.storage, &event_id, &record)?;
    LOCK_BY_NONCE.save(deps.storage, nonce, &record.event_id)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.lock_count += 1;
    stats.total_locked = stats.total_locked.checked_add(amount)?;
    STATS.save(deps.storage, &stats)?;

    let transfer = ledger.transfer_from_msg(&info.sender, &env.contract.address, amount)?;
    let event_id_hex = bytes_to_hex(&event_id);

    Ok(Response::new()
        .add_message(transfer)
        .add_event(
            Event::new("locked")
                .add_attribute("caller", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("destination", destination)
                .add_attribute("event_id", event_id_hex.clone())
                .add_attribute("nonce", nonce.to_string()),
        )
        .add_attribute("method", "lock")
        .add_attribute("event_id", event_id_hex)
        .set_data(record.event_id))
}

fn validate_destination(destination: &str) -> Result<(), ContractError> {
    if destination.is_empty() {
        return Err(ContractError::InvalidDestination {
            reason: "destination must not be empty".to_string(),
        });
    }
    if destination.len() > MAX_DESTINATION_LEN {
        return Err(ContractError::InvalidDestination {
            reason: format!(
                "destination longer than {} bytes",
                MAX_DESTINATION_LEN
            ),
        });
    }
    if destination.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ContractError::InvalidDestination {
            reason: "destination contains whitespace or control characters".to_string(),
        });
    }
    Ok(())
}
