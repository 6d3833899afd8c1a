//! Customer portal: demo login, balances, deposits and request forms.
//!
//! # Design
//! - Login accepts any input; the session is a single flag in the app store.
//! - Form drafts stay local to the view; submission only raises a toast.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
