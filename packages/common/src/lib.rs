//! Common - Shared Token Ledger Types for the Stablecoin Bridge
//!
//! The bridge never stores user balances. Every read of a balance or allowance
//! and every movement of value goes through the CW20 token contract, wrapped
//! here by [`Cw20Ledger`].

pub mod ledger;

pub use ledger::{Cw20Ledger, LedgerAccount};
