//! Embedded demo fixtures.
//!
//! # Design
//! - Fixtures are compiled in with `include_str!`; there is no runtime IO.
//! - Each document is parsed independently so a broken file names itself.
//! - Records are handed out by value; callers own their view state.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{
    Account, Customer, Dividend, FixedDeposit, LoanApplication, Notice, Reports, ShareHolding,
    Transaction,
};

const ACCOUNT: &str = include_str!("../data/account.json");
const TRANSACTIONS: &str = include_str!("../data/transactions.json");
const FIXED_DEPOSITS: &str = include_str!("../data/fixed-deposits.json");
const SHARE_CAPITAL: &str = include_str!("../data/share-capital.json");
const DIVIDENDS: &str = include_str!("../data/dividends.json");
const NOTICES: &str = include_str!("../data/notices.json");
const CUSTOMERS: &str = include_str!("../data/customers.json");
const LOAN_APPLICATIONS: &str = include_str!("../data/loan-applications.json");
const REPORTS: &str = include_str!("../data/reports.json");

/// Errors raised while decoding an embedded fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture document is not valid for its record type.
    #[error("fixture {fixture} is malformed: {source}")]
    Malformed {
        /// Fixture file name.
        fixture: &'static str,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Every fixture the portals render, decoded in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    /// Customer account summary.
    pub account: Account,
    /// Recent transactions.
    pub transactions: Vec<Transaction>,
    /// Fixed deposits.
    pub fixed_deposits: Vec<FixedDeposit>,
    /// Member share capital register.
    pub share_capital: Vec<ShareHolding>,
    /// Declared dividends.
    pub dividends: Vec<Dividend>,
    /// Member notices.
    pub notices: Vec<Notice>,
    /// Seed customers for the admin portal.
    pub customers: Vec<Customer>,
    /// Seed loan applications for the admin portal.
    pub loan_applications: Vec<LoanApplication>,
    /// Admin report series.
    pub reports: Reports,
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self {
            account: Account {
                holder: String::new(),
                number: String::new(),
                balance: 0.0,
            },
            transactions: Vec::new(),
            fixed_deposits: Vec::new(),
            share_capital: Vec::new(),
            dividends: Vec::new(),
            notices: Vec::new(),
            customers: Vec::new(),
            loan_applications: Vec::new(),
            reports: Reports::default(),
        }
    }
}

impl FixtureSet {
    /// Decode every embedded fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Malformed`] naming the first document that fails
    /// to decode.
    pub fn load() -> Result<Self, FixtureError> {
        Ok(Self {
            account: decode("account.json", ACCOUNT)?,
            transactions: decode("transactions.json", TRANSACTIONS)?,
            fixed_deposits: decode("fixed-deposits.json", FIXED_DEPOSITS)?,
            share_capital: decode("share-capital.json", SHARE_CAPITAL)?,
            dividends: decode("dividends.json", DIVIDENDS)?,
            notices: decode("notices.json", NOTICES)?,
            customers: decode("customers.json", CUSTOMERS)?,
            loan_applications: decode("loan-applications.json", LOAN_APPLICATIONS)?,
            reports: decode("reports.json", REPORTS)?,
        })
    }
}

fn decode<T: DeserializeOwned>(fixture: &'static str, raw: &str) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Malformed { fixture, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoanStatus;

    #[test]
    fn embedded_fixtures_decode() -> Result<(), FixtureError> {
        let set = FixtureSet::load()?;
        assert!(!set.transactions.is_empty());
        assert!(!set.fixed_deposits.is_empty());
        assert!(!set.share_capital.is_empty());
        assert!(!set.customers.is_empty());
        assert_eq!(set.reports.audit.len(), 3);
        assert!(
            set.loan_applications
                .iter()
                .any(|loan| loan.status == LoanStatus::Pending)
        );
        Ok(())
    }

    #[test]
    fn malformed_fixture_names_the_document() {
        let err = decode::<Vec<Notice>>("notices.json", "{ not json").err();
        let message = err.map(|err| err.to_string()).unwrap_or_default();
        assert!(message.starts_with("fixture notices.json is malformed"));
    }

    #[test]
    fn customer_fixture_ids_are_unique() -> Result<(), FixtureError> {
        let set = FixtureSet::load()?;
        let mut ids: Vec<_> = set.customers.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), set.customers.len());
        Ok(())
    }
}
