//! App-wide yewdux store slices.
//!
//! # Design
//! - Portal state that must survive route changes lives here.
//! - The locale is not a slice; it is owned by the locale provider.
//! - Nothing is persisted: a reload reseeds from fixtures.

use crate::features::admin::state::AdminState;
use crate::features::customer::state::CustomerSession;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Customer portal session.
    pub customer: CustomerSession,
    /// Admin portal data.
    pub admin: AdminState,
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::features::admin::state::{StaffRole, toggle_role};

    #[test]
    fn default_store_is_logged_out_and_seeded() {
        let mut store = AppStore::default();
        assert!(!store.customer.logged_in);
        assert!(!store.admin.loans.is_empty());
        let before = store.clone();
        assert_eq!(toggle_role(&mut store.admin, "Carol"), Some(StaffRole::Admin));
        assert_ne!(store, before);
    }
}
