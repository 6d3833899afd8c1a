//! Routing definitions for the Mandli UI.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/customer")]
    Customer,
    #[at("/member")]
    Member,
    #[at("/admin")]
    Admin,
    #[at("/payment")]
    Payment,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes listed in the navbar, with their label keys.
    pub(crate) const fn nav() -> [(Self, &'static str); 5] {
        [
            (Self::Home, "home"),
            (Self::Customer, "customer"),
            (Self::Member, "member"),
            (Self::Admin, "admin"),
            (Self::Payment, "payment"),
        ]
    }
}
