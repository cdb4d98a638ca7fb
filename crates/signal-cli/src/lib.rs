//! Signal Thread CLI
//!
//! Library half of the `signal-thread` binary: command definitions,
//! subcommand logic and the `POST /api/generate` endpoint.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod cli;
pub mod commands;
pub mod logging;
pub mod server;

// Re-exports
pub use cli::build_cli;
pub use logging::init_tracing;
pub use server::routes;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
