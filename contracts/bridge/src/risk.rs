//! Risk policy: pure checks of a proposed lock amount against `RiskLimits`.
//!
//! Nothing here touches storage. `check_window` hands back the window the
//! caller persists once the lock commits, so a rejected lock leaves no trace.

use cosmwasm_std::{Timestamp, Uint128};

use crate::error::ContractError;
use crate::state::{RiskLimits, RiskWindow, RISK_WINDOW_PERIOD};

/// Validate limits before they are stored.
pub fn validate_limits(limits: &RiskLimits) -> Result<(), ContractError> {
    if limits.max_per_transaction.is_zero() {
        return Err(ContractError::InvalidLimits {
            reason: "max_per_transaction must be greater than zero".to_string(),
        });
    }
    if let Some(cap) = limits.max_per_period {
        if cap.is_zero() {
            return Err(ContractError::InvalidLimits {
                reason: "max_per_period must be greater than zero when set".to_string(),
            });
        }
    }
    Ok(())
}

/// Per-transaction check.
pub fn check_limit(limits: &RiskLimits, amount: Uint128) -> Result<(), ContractError> {
    if amount > limits.max_per_transaction {
        return Err(ContractError::ExceedsLimit {
            limit_type: "per_transaction".to_string(),
            limit: limits.max_per_transaction,
            requested: amount,
        });
    }
    Ok(())
}

/// Window view at `now`: the stored window, or a fresh one if none exists or
/// the stored one has run out.
pub fn current_window(window: Option<RiskWindow>, now: Timestamp) -> RiskWindow {
    match window {
        Some(w) if now.seconds() < w.window_start.seconds() + RISK_WINDOW_PERIOD => w,
        _ => RiskWindow {
            window_start: now,
            used: Uint128::zero(),
        },
    }
}

/// Cumulative check against `max_per_period`.
///
/// Returns the window including `amount`. With no cap configured, the usage
/// is still tracked so that a cap set later starts from real numbers.
pub fn check_window(
    limits: &RiskLimits,
    window: Option<RiskWindow>,
    now: Timestamp,
    amount: Uint128,
) -> Result<RiskWindow, ContractError> {
    let mut window = current_window(window, now);
    let used = window.used.checked_add(amount)?;

    if let Some(cap) = limits.max_per_period {
        if used > cap {
            return Err(ContractError::ExceedsLimit {
                limit_type: "per_period".to_string(),
                limit: cap,
                requested: amount,
            });
        }
    }

    window.used = used;
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_tx: u128, max_period: Option<u128>) -> RiskLimits {
        RiskLimits {
            max_per_transaction: Uint128::new(max_tx),
            max_per_period: max_period.map(Uint128::new),
        }
    }

    #[test]
    fn test_validate_limits() {
        validate_limits(&limits(1, None)).unwrap();
        validate_limits(&limits(100, Some(1_000))).unwrap();

        assert!(matches!(
            validate_limits(&limits(0, None)).unwrap_err(),
            ContractError::InvalidLimits { .. }
        ));
        assert!(matches!(
            validate_limits(&limits(10, Some(0))).unwrap_err(),
            ContractError::InvalidLimits { .. }
        ));
    }

    #[test]
    fn test_check_limit_boundary() {
        let l = limits(100, None);
        check_limit(&l, Uint128::new(1)).unwrap();
        check_limit(&l, Uint128::new(100)).unwrap();

        let err = check_limit(&l, Uint128::new(101)).unwrap_err();
        assert_eq!(
            err,
            ContractError::ExceedsLimit {
                limit_type: "per_transaction".to_string(),
                limit: Uint128::new(100),
                requested: Uint128::new(101),
            }
        );
    }

    #[test]
    fn test_window_accumulates_until_cap() {
        let l = limits(100, Some(250));
        let t0 = Timestamp::from_seconds(1_000);

        let w = check_window(&l, None, t0, Uint128::new(100)).unwrap();
        assert_eq!(w.used, Uint128::new(100));
        assert_eq!(w.window_start, t0);

        let w = check_window(&l, Some(w), t0.plus_seconds(10), Uint128::new(100)).unwrap();
        assert_eq!(w.used, Uint128::new(200));

        let err = check_window(&l, Some(w.clone()), t0.plus_seconds(20), Uint128::new(51))
            .unwrap_err();
        assert!(matches!(
            err,
            ContractError::ExceedsLimit { ref limit_type, .. } if limit_type == "per_period"
        ));

        let w = check_window(&l, Some(w), t0.plus_seconds(30), Uint128::new(50)).unwrap();
        assert_eq!(w.used, Uint128::new(250));
    }

    #[test]
    fn test_window_resets_after_period() {
        let l = limits(100, Some(100));
        let t0 = Timestamp::from_seconds(1_000);

        let w = check_window(&l, None, t0, Uint128::new(100)).unwrap();
        assert!(check_window(&l, Some(w.clone()), t0.plus_seconds(1), Uint128::new(1)).is_err());

        let later = t0.plus_seconds(RISK_WINDOW_PERIOD);
        let w = check_window(&l, Some(w), later, Uint128::new(100)).unwrap();
        assert_eq!(w.window_start, later);
        assert_eq!(w.used, Uint128::new(100));
    }

    #[test]
    fn test_window_without_cap_tracks_usage() {
        let l = limits(100, None);
        let t0 = Timestamp::from_seconds(5);
        let w = check_window(&l, None, t0, Uint128::new(100)).unwrap();
        let w = check_window(&l, Some(w), t0, Uint128::new(100)).unwrap();
        assert_eq!(w.used, Uint128::new(200));
    }
}
