//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod data;
pub mod format;
pub mod store;
pub mod theme;
