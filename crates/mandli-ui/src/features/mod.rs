//! Portal features, one slice per page.
//!
//! Each slice keeps DOM-free state and helpers in `state`/`logic` modules that
//! compile and test natively; the Yew views are wasm-only.

pub mod admin;
pub mod customer;
pub mod home;
pub mod member;
pub mod payment;
