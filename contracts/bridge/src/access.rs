//! Role registry and capability checks.
//!
//! Membership is tagged per role: holding `Admin` says nothing about
//! `Relayer` or `Guardian`. Every handler names the exact roles it accepts.
//! The registry never lets the admin count reach zero.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::state::{Role, ROLES, ROLE_COUNTS};

pub fn has_role(storage: &dyn Storage, account: &Addr, role: Role) -> StdResult<bool> {
    Ok(ROLES
        .may_load(storage, (role.as_str(), account))?
        .unwrap_or(false))
}

/// Fail with `Unauthorized` unless `account` holds `role`.
pub fn ensure_role(storage: &dyn Storage, account: &Addr, role: Role) -> Result<(), ContractError> {
    if !has_role(storage, account, role)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Fail with `Unauthorized` unless `account` holds at least one of `roles`.
pub fn ensure_any_role(
    storage: &dyn Storage,
    account: &Addr,
    roles: &[Role],
) -> Result<(), ContractError> {
    for role in roles {
        if has_role(storage, account, *role)? {
            return Ok(());
        }
    }
    Err(ContractError::Unauthorized)
}

pub fn role_count(storage: &dyn Storage, role: Role) -> StdResult<u32> {
    Ok(ROLE_COUNTS.may_load(storage, role.as_str())?.unwrap_or(0))
}

/// Members of `role` in address order, paginated.
pub fn role_members(
    storage: &dyn Storage,
    role: Role,
    start_after: Option<&Addr>,
    limit: usize,
) -> StdResult<Vec<Addr>> {
    let start = start_after.map(Bound::exclusive);
    ROLES
        .prefix(role.as_str())
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

/// Add `account` to `role` without an authorization check.
///
/// Used at instantiation and behind [`grant_role`].
pub fn insert_member(
    storage: &mut dyn Storage,
    account: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    if has_role(storage, account, role)? {
        return Err(ContractError::RoleAlreadyGranted {
            account: account.to_string(),
            role: role.to_string(),
        });
    }
    ROLES.save(storage, (role.as_str(), account), &true)?;
    let count = role_count(storage, role)?;
    ROLE_COUNTS.save(storage, role.as_str(), &(count + 1))?;
    Ok(())
}

fn remove_member(
    storage: &mut dyn Storage,
    account: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    if !has_role(storage, account, role)? {
        return Err(ContractError::RoleNotGranted {
            account: account.to_string(),
            role: role.to_string(),
        });
    }
    let count = role_count(storage, role)?;
    if role == Role::Admin && count <= 1 {
        return Err(ContractError::LastAdminInvariant);
    }
    ROLES.remove(storage, (role.as_str(), account));
    ROLE_COUNTS.save(storage, role.as_str(), &(count - 1))?;
    Ok(())
}

/// Admin grants `role` to `target`.
pub fn grant_role(
    storage: &mut dyn Storage,
    caller: &Addr,
    target: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    ensure_role(storage, caller, Role::Admin)?;
    insert_member(storage, target, role)
}

/// Admin revokes `role` from `target`. The last admin cannot be revoked.
pub fn revoke_role(
    storage: &mut dyn Storage,
    caller: &Addr,
    target: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    ensure_role(storage, caller, Role::Admin)?;
    remove_member(storage, target, role)
}

/// A holder gives up one of its own roles. The last admin cannot renounce.
pub fn renounce_role(
    storage: &mut dyn Storage,
    caller: &Addr,
    role: Role,
) -> Result<(), ContractError> {
    remove_member(storage, caller, role)
}
