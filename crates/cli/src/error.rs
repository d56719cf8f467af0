//! Runner error types.

use domain::DomainError;
use thiserror::Error;

/// Errors that end a demo run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog, cart or checkout failure.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The checkout report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Convenience type alias for runner results.
pub type Result<T> = std::result::Result<T, CliError>;
