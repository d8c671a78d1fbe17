//! Elegant Revolution landing site.
//!
//! Serves the landing page, its static assets and the newsletter `subscribe` endpoint.

pub mod app;
pub mod config;
mod error;
pub mod templ_manager;
pub mod web;

// re-exports
pub use app::{serve, App, AppState};
pub use error::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Compact, human readable logs for local development.
/// `RUST_LOG` takes precedence over the default `debug` filter.
pub fn init_dbg_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .compact()
        .init();
}

/// JSON logs for production.
/// `RUST_LOG` takes precedence over the default `info` filter.
pub fn init_production_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(filter)
        .init();
}
