//! Replay guard: the set of settled source events.
//!
//! Keyed by the full event id bytes. An id is inserted together with its
//! `SettlementRecord` in the same call that dispatches the custody transfer,
//! so the record and the payout commit or revert together.

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::hash::bytes_to_hex;
use crate::state::{SettlementRecord, SETTLEMENTS};

pub fn is_processed(storage: &dyn Storage, event_id: &[u8]) -> StdResult<bool> {
    Ok(SETTLEMENTS.has(storage, event_id))
}

/// Insert `record` unless its source event was already settled.
pub fn record_if_new(
    storage: &mut dyn Storage,
    record: &SettlementRecord,
) -> Result<(), ContractError> {
    let key = record.source_event_id.as_slice();
    if SETTLEMENTS.has(storage, key) {
        return Err(ContractError::AlreadyProcessed {
            event_id: bytes_to_hex(key),
        });
    }
    SETTLEMENTS.save(storage, key, record)?;
    Ok(())
}

pub fn load_settlement(
    storage: &dyn Storage,
    event_id: &[u8],
) -> StdResult<Option<SettlementRecord>> {
    SETTLEMENTS.may_load(storage, event_id)
}

/// Settlements in event id byte order, paginated.
pub fn list_settlements(
    storage: &dyn Storage,
    start_after: Option<&[u8]>,
    limit: usize,
) -> StdResult<Vec<SettlementRecord>> {
    let start = start_after.map(Bound::exclusive);
    SETTLEMENTS
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect()
}
