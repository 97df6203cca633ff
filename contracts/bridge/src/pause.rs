//! Pause switch.
//!
//! Checked at entry of every value-moving handler. Flipping it never touches
//! calls that already committed.

use cosmwasm_std::{Addr, StdResult, Storage};

use crate::access::ensure_any_role;
use crate::error::ContractError;
use crate::state::{Role, PAUSED};

pub fn is_paused(storage: &dyn Storage) -> StdResult<bool> {
    Ok(PAUSED.may_load(storage)?.unwrap_or(false))
}

pub fn ensure_not_paused(storage: &dyn Storage) -> Result<(), ContractError> {
    if is_paused(storage)? {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Guardian or Admin sets the flag.
pub fn set_paused(
    storage: &mut dyn Storage,
    caller: &Addr,
    paused: bool,
) -> Result<(), ContractError> {
    ensure_any_role(storage, caller, &[Role::Guardian, Role::Admin])?;
    PAUSED.save(storage, &paused)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::insert_member;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn test_pause_roles() {
        let mut deps = mock_dependencies();
        let guardian = Addr::unchecked("guardian");
        let admin = Addr::unchecked("admin");
        let relayer = Addr::unchecked("relayer");
        insert_member(deps.as_mut().storage, &guardian, Role::Guardian).unwrap();
        insert_member(deps.as_mut().storage, &admin, Role::Admin).unwrap();
        insert_member(deps.as_mut().storage, &relayer, Role::Relayer).unwrap();

        assert!(!is_paused(deps.as_ref().storage).unwrap());

        assert_eq!(
            set_paused(deps.as_mut().storage, &relayer, true).unwrap_err(),
            ContractError::Unauthorized
        );
        assert!(!is_paused(deps.as_ref().storage).unwrap());

        set_paused(deps.as_mut().storage, &guardian, true).unwrap();
        assert_eq!(
            ensure_not_paused(deps.as_ref().storage).unwrap_err(),
            ContractError::Paused
        );

        set_paused(deps.as_mut().storage, &admin, false).unwrap();
        ensure_not_paused(deps.as_ref().storage).unwrap();
    }
}
