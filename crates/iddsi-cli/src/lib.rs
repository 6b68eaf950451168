//! # iddsi-cli
//!
//! Command-line front end for the IDDSI dashboard: manage the food library,
//! watch reported issues, inspect statistics and delivered notifications.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::Cli;
pub use context::AppContext;
