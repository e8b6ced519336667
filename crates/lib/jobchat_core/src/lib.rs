//! # jobchat_core
//!
//! Core logic for the jobchat relay: input sanitization, prompt composition,
//! the outbound completion client and reply truncation.

pub mod completion;
pub mod config;
pub mod prompt;
pub mod sanitize;
pub mod truncate;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
