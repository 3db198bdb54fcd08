//! Workspace-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one variant
//! via `#[from]` where they surface core failures.

use thiserror::Error;

/// The base error type for `nav-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
