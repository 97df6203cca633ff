//! Role management handlers.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::access::{grant_role, renounce_role, revoke_role};
use crate::error::ContractError;
use crate::state::Role;

/// Grant a role (admin only).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    role: Role,
) -> Result<Response, ContractError> {
    let target = deps.api.addr_validate(&account)?;
    grant_role(deps.storage, &info.sender, &target, role)?;

    Ok(Response::new()
        .add_event(role_event("role_granted", &target.to_string(), role))
        .add_attribute("method", "grant_role")
        .add_attribute("account", target)
        .add_attribute("role", role.as_str()))
}

/// Revoke a role (admin only).
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    role: Role,
) -> Result<Response, ContractError> {
    let target = deps.api.addr_validate(&account)?;
    revoke_role(deps.storage, &info.sender, &target, role)?;

    Ok(Response::new()
        .add_event(role_event("role_revoked", &target.to_string(), role))
        .add_attribute("method", "revoke_role")
        .add_attribute("account", target)
        .add_attribute("role", role.as_str()))
}

/// Give up one of the caller's own roles.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
) -> Result<Response, ContractError> {
    renounce_role(deps.storage, &info.sender, role)?;

    Ok(Response::new()
        .add_event(role_event("role_revoked", info.sender.as_str(), role))
        .add_attribute("method", "renounce_role")
        .add_attribute("account", info.sender)
        .add_attribute("role", role.as_str()))
}

fn role_event(ty: &str, account: &str, role: Role) -> Event {
    Event::new(ty)
        .add_attribute("account", account)
        .add_attribute("role", role.as_str())
}
