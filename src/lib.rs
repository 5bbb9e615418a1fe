//! An activity signup service for Mergington High School.
//!
//! Serves the catalog of extracurricular activities as JSON and lets students
//! sign up for (or leave) them. State lives in memory for the lifetime of the process.

pub mod app;
pub mod config;
mod error;
pub mod store;
pub mod web;

pub use app::{App, AppState};
pub use error::{Error, Result};
pub use web::serve;

use tracing_subscriber::EnvFilter;

/// Human readable, compact console logging. Defaults to `debug` unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .compact()
        .init();
}

/// Full format logging for release builds. Defaults to `info` unless `RUST_LOG` says otherwise.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
