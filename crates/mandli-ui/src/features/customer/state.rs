//! Customer portal state.
//!
//! # Design
//! - Select values round-trip through stable wire strings (`cheque-book`).
//! - Labels are translation keys, resolved by the view.

/// Demo session for the customer portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CustomerSession {
    /// Whether the demo login was submitted.
    pub logged_in: bool,
}

impl CustomerSession {
    /// Accept any credentials.
    pub const fn login(&mut self) {
        self.logged_in = true;
    }

    /// Return to the login card.
    pub const fn logout(&mut self) {
        self.logged_in = false;
    }
}

/// Loan products offered on the application form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoanKind {
    /// Crop and equipment loans.
    #[default]
    Agriculture,
    /// Unsecured personal loans.
    Personal,
    /// Loans against gold.
    Gold,
}

impl LoanKind {
    /// Options in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Agriculture, Self::Personal, Self::Gold]
    }

    /// Select control value.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Agriculture => "agriculture",
            Self::Personal => "personal",
            Self::Gold => "gold",
        }
    }

    /// Translation key of the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Agriculture => "loanAgriculture",
            Self::Personal => "loanPersonal",
            Self::Gold => "loanGold",
        }
    }

    /// Parse a select value; unknown values keep the default.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_value() == value)
            .unwrap_or_default()
    }
}

/// Service request categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestKind {
    /// New cheque book.
    #[default]
    ChequeBook,
    /// General complaint.
    Complaint,
    /// Address update.
    AddressChange,
}

impl RequestKind {
    /// Options in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ChequeBook, Self::Complaint, Self::AddressChange]
    }

    /// Select control value.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::ChequeBook => "cheque-book",
            Self::Complaint => "complaint",
            Self::AddressChange => "address-change",
        }
    }

    /// Translation key of the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::ChequeBook => "requestChequeBook",
            Self::Complaint => "requestComplaint",
            Self::AddressChange => "requestAddressChange",
        }
    }

    /// Parse a select value; unknown values keep the default.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|kind| kind.as_value() == value)
            .unwrap_or_default()
    }
}

/// Submitted service request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Request category.
    pub kind: RequestKind,
    /// Free-form comments.
    pub comments: String,
}

/// Editable service request form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceRequestDraft {
    /// Selected category.
    pub kind: RequestKind,
    /// Comments typed so far.
    pub comments: String,
}

impl ServiceRequestDraft {
    /// Take the request out of the form, clearing comments but keeping the category.
    pub fn submit(&mut self) -> ServiceRequest {
        ServiceRequest {
            kind: self.kind,
            comments: std::mem::take(&mut self.comments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_accepts_anything_and_logout_resets() {
        let mut session = CustomerSession::default();
        assert!(!session.logged_in);
        session.login();
        assert!(session.logged_in);
        session.logout();
        assert!(!session.logged_in);
    }

    #[test]
    fn select_values_round_trip() {
        for kind in LoanKind::all() {
            assert_eq!(LoanKind::from_value(kind.as_value()), kind);
        }
        for kind in RequestKind::all() {
            assert_eq!(RequestKind::from_value(kind.as_value()), kind);
        }
        assert_eq!(LoanKind::from_value("boat"), LoanKind::Agriculture);
        assert_eq!(RequestKind::from_value(""), RequestKind::ChequeBook);
    }

    #[test]
    fn submit_clears_comments_only() {
        let mut draft = ServiceRequestDraft {
            kind: RequestKind::AddressChange,
            comments: "Moved to Anand".into(),
        };
        let request = draft.submit();
        assert_eq!(request.kind, RequestKind::AddressChange);
        assert_eq!(request.comments, "Moved to Anand");
        assert_eq!(draft.comments, "");
        assert_eq!(draft.kind, RequestKind::AddressChange);
    }
}
