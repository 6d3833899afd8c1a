#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(unused, missing_docs)]
//! CLI entrypoint for the translation table audit.
//!
//! # Design
//! Installs an fmt subscriber filtered by `RUST_LOG` (default `info`), then
//! delegates to the library and surfaces errors via `anyhow`.

use anyhow::{Result, anyhow};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_LEVEL: &str = "info";

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    let summaries = locale_audit::run()?;
    info!(tables = summaries.len(), "translation tables are in parity");
    Ok(())
}
