//! Browser-side integrations (checkout endpoint and widget).

pub(crate) mod checkout;
