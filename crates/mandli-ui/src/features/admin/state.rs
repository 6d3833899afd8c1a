//! Admin portal state and reducers.
//!
//! # Design
//! - Seeded from fixtures; new customers get random UUIDs.
//! - Presence is the only validation: blank name or email is rejected.
//! - Edits treat an empty replacement as "keep the current value".

use mandli_models::{Customer, FixtureSet, LoanApplication, LoanStatus};
use thiserror::Error;

/// Validation failures for admin edits.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AdminError {
    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Access level of a staff account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaffRole {
    /// Full administrative access.
    Admin,
    /// Day-to-day operations.
    Staff,
}

impl StaffRole {
    /// The other role.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::Staff,
            Self::Staff => Self::Admin,
        }
    }

    /// Translation key of the role badge.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Admin => "roleAdmin",
            Self::Staff => "roleStaff",
        }
    }
}

/// Staff account listed under user management.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffMember {
    /// Display name, also the row key.
    pub name: String,
    /// Current role.
    pub role: StaffRole,
}

/// Default staff roster: the first account is an admin.
#[must_use]
pub fn default_staff() -> Vec<StaffMember> {
    ["Alice", "Bob", "Carol"]
        .into_iter()
        .enumerate()
        .map(|(index, name)| StaffMember {
            name: name.to_string(),
            role: if index == 0 {
                StaffRole::Admin
            } else {
                StaffRole::Staff
            },
        })
        .collect()
}

/// In-memory admin data.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    /// Managed customers.
    pub customers: Vec<Customer>,
    /// Loan applications under review.
    pub loans: Vec<LoanApplication>,
    /// Staff roster.
    pub staff: Vec<StaffMember>,
}

impl AdminState {
    /// Seed state from fixtures.
    #[must_use]
    pub fn from_fixtures(fixtures: &FixtureSet) -> Self {
        Self {
            customers: fixtures.customers.clone(),
            loans: fixtures.loan_applications.clone(),
            staff: default_staff(),
        }
    }
}

impl Default for AdminState {
    fn default() -> Self {
        Self::from_fixtures(crate::core::data::fixtures())
    }
}

/// Append a customer after trimming both fields.
///
/// # Errors
///
/// Returns [`AdminError::MissingField`] when either field is blank.
pub fn add_customer<'a>(
    state: &'a mut AdminState,
    name: &str,
    email: &str,
) -> Result<&'a Customer, AdminError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(AdminError::MissingField("name"));
    }
    if email.is_empty() {
        return Err(AdminError::MissingField("email"));
    }
    state.customers.push(Customer::new(name, email));
    state
        .customers
        .last()
        .ok_or(AdminError::MissingField("name"))
}

/// Replace a customer's name and email. `None` or blank input keeps the old value.
pub fn edit_customer(
    state: &mut AdminState,
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> bool {
    let Some(customer) = state.customers.iter_mut().find(|c| c.id == id) else {
        return false;
    };
    if let Some(name) = non_blank(name) {
        customer.name = name.to_string();
    }
    if let Some(email) = non_blank(email) {
        customer.email = email.to_string();
    }
    true
}

/// Remove a customer by id.
pub fn delete_customer(state: &mut AdminState, id: &str) -> bool {
    let before = state.customers.len();
    state.customers.retain(|c| c.id != id);
    state.customers.len() != before
}

/// Set the status of one loan application.
pub fn set_loan_status(state: &mut AdminState, id: &str, status: LoanStatus) -> bool {
    match state.loans.iter_mut().find(|loan| loan.id == id) {
        Some(loan) => {
            loan.status = status;
            true
        }
        None => false,
    }
}

/// Flip a staff member between admin and staff.
pub fn toggle_role(state: &mut AdminState, name: &str) -> Option<StaffRole> {
    let member = state.staff.iter_mut().find(|m| m.name == name)?;
    member.role = member.role.toggled();
    Some(member.role)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> AdminState {
        AdminState {
            customers: vec![
                Customer {
                    id: "c-1".into(),
                    name: "Asha".into(),
                    email: "asha@example.com".into(),
                },
                Customer {
                    id: "c-2".into(),
                    name: "Bhavin".into(),
                    email: "bhavin@example.com".into(),
                },
            ],
            loans: vec![
                LoanApplication {
                    id: "L-1".into(),
                    customer: "Asha".into(),
                    kind: "gold".into(),
                    amount: 1_000.0,
                    status: LoanStatus::Pending,
                },
                LoanApplication {
                    id: "L-2".into(),
                    customer: "Bhavin".into(),
                    kind: "personal".into(),
                    amount: 2_000.0,
                    status: LoanStatus::Pending,
                },
            ],
            staff: default_staff(),
        }
    }

    #[test]
    fn add_requires_both_fields() {
        let mut state = seeded();
        assert_eq!(
            add_customer(&mut state, "  ", "x@example.com").err(),
            Some(AdminError::MissingField("name"))
        );
        assert_eq!(
            add_customer(&mut state, "Jane", "").err(),
            Some(AdminError::MissingField("email"))
        );
        assert_eq!(state.customers.len(), 2);
    }

    #[test]
    fn add_appends_trimmed_customer() -> Result<(), AdminError> {
        let mut state = seeded();
        let added = add_customer(&mut state, " Jane Doe ", "jane@example.com")?.clone();
        assert_eq!(added.name, "Jane Doe");
        assert_eq!(state.customers.last(), Some(&added));
        assert_eq!(state.customers.len(), 3);
        Ok(())
    }

    #[test]
    fn edit_keeps_old_values_for_blank_input() {
        let mut state = seeded();
        assert!(edit_customer(&mut state, "c-1", Some(""), Some("new@example.com")));
        assert_eq!(state.customers[0].name, "Asha");
        assert_eq!(state.customers[0].email, "new@example.com");
        assert!(edit_customer(&mut state, "c-1", None, None));
        assert_eq!(state.customers[0].email, "new@example.com");
        assert!(!edit_customer(&mut state, "missing", Some("X"), None));
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut state = seeded();
        assert!(delete_customer(&mut state, "c-1"));
        assert!(!delete_customer(&mut state, "c-1"));
        assert_eq!(state.customers.len(), 1);
        assert_eq!(state.customers[0].id, "c-2");
    }

    #[test]
    fn loan_decisions_touch_one_application() {
        let mut state = seeded();
        assert!(set_loan_status(&mut state, "L-2", LoanStatus::Approved));
        assert_eq!(state.loans[0].status, LoanStatus::Pending);
        assert_eq!(state.loans[1].status, LoanStatus::Approved);
        assert!(set_loan_status(&mut state, "L-2", LoanStatus::Rejected));
        assert_eq!(state.loans[1].status, LoanStatus::Rejected);
        assert!(!set_loan_status(&mut state, "L-9", LoanStatus::Approved));
    }

    #[test]
    fn roles_toggle_per_member() {
        let mut state = seeded();
        assert_eq!(state.staff[0].role, StaffRole::Admin);
        assert_eq!(toggle_role(&mut state, "Bob"), Some(StaffRole::Admin));
        assert_eq!(toggle_role(&mut state, "Bob"), Some(StaffRole::Staff));
        assert_eq!(toggle_role(&mut state, "Alice"), Some(StaffRole::Staff));
        assert_eq!(toggle_role(&mut state, "Mallory"), None);
        assert_eq!(state.staff[2].role, StaffRole::Staff);
    }

    #[test]
    fn fixture_seed_includes_roster() {
        let state = AdminState::from_fixtures(crate::core::data::fixtures());
        assert_eq!(state.staff.len(), 3);
        assert!(!state.customers.is_empty());
    }
}
