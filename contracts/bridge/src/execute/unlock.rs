//! Incoming settlement handler (Unlock).
//!
//! A relayer reports a source-chain event; the bridge releases custody funds
//! for it exactly once.

use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::access::ensure_role;
use crate::error::ContractError;
use crate::hash::bytes_to_hex;
use crate::pause::ensure_not_paused;
use crate::replay::record_if_new;
use crate::state::{Role, SettlementRecord, CONFIG, MAX_EVENT_ID_LEN, STATS};
use common::Cw20Ledger;

/// Execute handler for releasing custody funds (relayer only).
///
/// The settlement record is written before the custody check. Any later
/// error reverts the whole call, record included, so a failed unlock leaves
/// the event id free for a retry.
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
    source_event_id: Binary,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, &info.sender, Role::Relayer)?;
    ensure_not_paused(deps.storage)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    validate_event_id(&source_event_id)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if recipient_addr == env.contract.address {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient cannot be the bridge itself".to_string(),
        });
    }

    let record = SettlementRecord {
        source_event_id: source_event_id.clone(),
        recipient: recipient_addr.clone(),
        amount,
        relayer: info.sender.clone(),
        settled_at: env.block.time,
    };
    record_if_new(deps.storage, &record)?;

    let config = CONFIG.load(deps.storage)?;
    let ledger = Cw20Ledger::new(config.token);
    let available = ledger.balance(&deps.querier, &env.contract.address)?;
    if available < amount {
        return Err(ContractError::InsufficientCustody {
            available,
            required: amount,
        });
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.unlock_count += 1;
    stats.total_unlocked = stats.total_unlocked.checked_add(amount)?;
    STATS.save(deps.storage, &stats)?;

    let transfer = ledger.transfer_msg(&recipient_addr, amount)?;
    let event_id_hex = bytes_to_hex(source_event_id.as_slice());

    Ok(Response::new()
        .add_message(transfer)
        .add_event(
            Event::new("unlocked")
                .add_attribute("recipient", recipient_addr.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("source_event_id", event_id_hex.clone())
                .add_attribute("relayer", info.sender.to_string()),
        )
        .add_attribute("method", "unlock")
        .add_attribute("source_event_id", event_id_hex))
}

fn validate_event_id(event_id: &Binary) -> Result<(), ContractError> {
    if event_id.is_empty() {
        return Err(ContractError::InvalidEventId {
            reason: "event id must not be empty".to_string(),
        });
    }
    if event_id.len() > MAX_EVENT_ID_LEN {
        return Err(ContractError::InvalidEventId {
            reason: format!("event id longer than {} bytes", MAX_EVENT_ID_LEN),
        });
    }
    Ok(())
}
