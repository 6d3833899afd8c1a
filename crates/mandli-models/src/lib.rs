#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(unused, unreachable_pub, missing_docs)]
#![allow(clippy::multiple_crate_versions)]
//! Fixture records for the Mandli Bank demo portals.
//!
//! The UI never talks to a backend: every table it renders comes from the JSON
//! documents embedded by [`fixtures`]. Field names follow the camelCase keys
//! used by those documents so the files stay editable by hand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod fixtures;

pub use fixtures::{FixtureError, FixtureSet};

/// Customer account summary shown on the customer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account holder display name.
    pub holder: String,
    /// Masked account number.
    pub number: String,
    /// Current balance in rupees.
    pub balance: f64,
}

/// Single ledger line. Negative amounts are debits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Fixture identifier.
    pub id: String,
    /// Posting date.
    pub date: NaiveDate,
    /// Free-form description.
    pub desc: String,
    /// Signed amount in rupees.
    pub amount: f64,
}

impl Transaction {
    /// Whether the line credits the account.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.amount >= 0.0
    }
}

/// Fixed deposit held by the customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FixedDeposit {
    /// Fixture identifier.
    pub id: String,
    /// Principal in rupees.
    pub amount: f64,
    /// Annual interest rate in percent.
    pub rate: f64,
    /// Date the deposit matures.
    pub maturity_date: NaiveDate,
}

/// Row of the member share capital register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareHolding {
    /// Membership number.
    pub member_id: String,
    /// Member name.
    pub name: String,
    /// Number of shares held.
    pub shares: u64,
    /// Face value of the holding in rupees.
    pub value: f64,
}

/// Dividend declared for a financial year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dividend {
    /// Fixture identifier.
    pub id: String,
    /// Financial year.
    pub year: i32,
    /// Dividend rate in percent.
    pub rate: f64,
    /// Amount paid in rupees.
    pub amount: f64,
}

/// Notice published to members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    /// Fixture identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Publication date.
    pub date: NaiveDate,
    /// Body text.
    pub details: String,
}

/// Customer managed from the admin portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Stable identifier; fresh records get a random UUID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl Customer {
    /// Build a new customer with a freshly generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Workflow state of a loan application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

impl LoanStatus {
    /// Wire name of the status, also used as the badge label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Loan application reviewed in the admin workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanApplication {
    /// Application reference.
    pub id: String,
    /// Applicant name.
    pub customer: String,
    /// Loan product (agriculture, personal, gold).
    #[serde(rename = "type")]
    pub kind: String,
    /// Requested amount in rupees.
    pub amount: f64,
    /// Current workflow state.
    pub status: LoanStatus,
}

/// Named value plotted by the admin report charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// Series label.
    pub name: String,
    /// Raw value.
    pub value: f64,
}

/// Report series consumed by the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reports {
    /// Audit outcome breakdown.
    pub audit: Vec<ChartPoint>,
    /// Compliance scores per area.
    pub compliance: Vec<ChartPoint>,
}
