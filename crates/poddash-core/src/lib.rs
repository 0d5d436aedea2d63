//! Shared core for the poddash workspace.
//!
//! Holds the episode data model, the workspace-wide error type, timestamp
//! parsing, number/date formatting, and CLI settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod timestamps;
