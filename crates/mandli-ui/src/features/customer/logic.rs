//! Derived rows for the customer dashboard.

use crate::core::format::{days_until, is_near_maturity};
use chrono::NaiveDate;
use mandli_models::FixedDeposit;

/// Fixed deposit with its maturity countdown.
#[derive(Clone, Debug, PartialEq)]
pub struct DepositCountdown {
    /// Underlying deposit.
    pub deposit: FixedDeposit,
    /// Days left until maturity (negative once matured).
    pub days_left: i64,
    /// Whether the row is highlighted as maturing soon.
    pub near_maturity: bool,
}

/// Attach countdowns to deposits, preserving fixture order.
#[must_use]
pub fn deposit_countdowns(deposits: &[FixedDeposit], today: NaiveDate) -> Vec<DepositCountdown> {
    deposits
        .iter()
        .map(|deposit| {
            let days_left = days_until(deposit.maturity_date, today);
            DepositCountdown {
                deposit: deposit.clone(),
                days_left,
                near_maturity: is_near_maturity(days_left),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit(id: &str, maturity: NaiveDate) -> FixedDeposit {
        FixedDeposit {
            id: id.into(),
            amount: 10_000.0,
            rate: 7.0,
            maturity_date: maturity,
        }
    }

    #[test]
    fn countdowns_flag_deposits_inside_the_window() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap_or_default();
        let soon = NaiveDate::from_ymd_opt(2026, 11, 5).unwrap_or_default();
        let later = NaiveDate::from_ymd_opt(2027, 3, 31).unwrap_or_default();
        let rows = deposit_countdowns(&[deposit("a", later), deposit("b", soon)], today);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].deposit.id, "a");
        assert!(!rows[0].near_maturity);
        assert_eq!(rows[1].days_left, 18);
        assert!(rows[1].near_maturity);
    }
}
