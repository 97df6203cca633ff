//! CW20 ledger access: balance and allowance queries plus the transfer
//! messages the bridge dispatches (approve-then-`TransferFrom` on lock,
//! direct `Transfer` on unlock).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Snapshot of a holder on the token ledger.
#[cw_serde]
pub struct LedgerAccount {
    pub address: Addr,
    /// Balance in the token's smallest unit
    pub balance: Uint128,
}

/// Handle on a single CW20 token contract.
#[cw_serde]
pub struct Cw20Ledger {
    pub token: Addr,
}

impl Cw20Ledger {
    pub fn new(token: Addr) -> Self {
        Self { token }
    }

    /// Current balance of `holder`.
    pub fn balance(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<Uint128> {
        let res: BalanceResponse = querier.query_wasm_smart(
            &self.token,
            &Cw20QueryMsg::Balance {
                address: holder.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    pub fn account(&self, querier: &QuerierWrapper, holder: &Addr) -> StdResult<LedgerAccount> {
        Ok(LedgerAccount {
            address: holder.clone(),
            balance: self.balance(querier, holder)?,
        })
    }

    /// Allowance `owner` has granted `spender` that is still usable at `block`.
    ///
    /// An expired allowance counts as zero, matching what `TransferFrom`
    /// would accept.
    pub fn spendable_allowance(
        &self,
        querier: &QuerierWrapper,
        owner: &Addr,
        spender: &Addr,
        block: &BlockInfo,
    ) -> StdResult<Uint128> {
        let res: AllowanceResponse = querier.query_wasm_smart(
            &self.token,
            &Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: spender.to_string(),
            },
        )?;
        if res.expires.is_expired(block) {
            return Ok(Uint128::zero());
        }
        Ok(res.allowance)
    }

    /// Pull `amount` from `owner` into `recipient` using a prior allowance.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }))
    }

    /// Send `amount` from the calling contract's own balance.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount,
            })?,
            funds: vec![],
        }))
    }
}
