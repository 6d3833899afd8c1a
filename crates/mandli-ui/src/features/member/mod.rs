//! Member portal: share capital, dividends and notices.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
