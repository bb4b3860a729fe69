//! One module per Drush command family.
//!
//! Primary operations return `Result` and are fatal to the invocation;
//! secondary informational operations return `Option<String>` via
//! [`crate::runner::best_effort`] and the caller supplies a fallback line.

pub mod cache;
pub mod config;
pub mod entity;
pub mod status;
pub mod user;
