//! Error types for the stablecoin bridge contract

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[error("Cannot remove the last admin")]
    LastAdminInvariant,

    #[error("At least one admin required")]
    NoAdmin,

    #[error("Account {account} already holds role {role}")]
    RoleAlreadyGranted { account: String, role: String },

    #[error("Account {account} does not hold role {role}")]
    RoleNotGranted { account: String, role: String },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    Paused,

    #[error("Feature disabled in the current phase")]
    FeatureDisabled,

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Source event already processed: {event_id}")]
    AlreadyProcessed { event_id: String },

    #[error("Invalid event id: {reason}")]
    InvalidEventId { reason: String },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid destination address: {reason}")]
    InvalidDestination { reason: String },

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Insufficient allowance: approved {approved}, required {required}")]
    InsufficientAllowance { approved: Uint128, required: Uint128 },

    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Uint128, required: Uint128 },

    #[error("Insufficient custody balance: available {available}, required {required}")]
    InsufficientCustody { available: Uint128, required: Uint128 },

    // ========================================================================
    // Risk Limit Errors
    // ========================================================================

    #[error("Limit exceeded: {limit_type} limit is {limit}, requested {requested}")]
    ExceedsLimit {
        limit_type: String,
        limit: Uint128,
        requested: Uint128,
    },

    #[error("Invalid limits: {reason}")]
    InvalidLimits { reason: String },
}
