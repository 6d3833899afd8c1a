//! Admin portal: customer CRUD, loan approvals, reports and staff roles.
//!
//! # Design
//! - All edits live in the app store and vanish on reload.
//! - Reducers return whether they touched a row so views can skip no-op toasts.
//! - Chart rendering is reduced to proportional bars computed in `logic`.

pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
