//! Error types for NextStat

use thiserror::Error;

/// NextStat error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A distribution parameter or probability argument is outside its domain
    #[error("Validation error: {0}")]
    Validation(String),

    /// A numeric routine cannot produce a meaningful value (overflow/underflow)
    #[error("Computation error: {0}")]
    Computation(String),

    /// An iterative routine exhausted its budget without converging
    #[error("Convergence error: {0}")]
    Convergence(String),
}

impl Error {
    /// `true` for [`Error::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
