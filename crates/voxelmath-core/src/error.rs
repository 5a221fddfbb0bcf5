//! Error types for the math primitives.

use thiserror::Error;

/// Math error type.
///
/// Only the `try_*` functions return these. Their infallible counterparts
/// let NaN/Inf propagate instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Normalizing a value whose length is zero or not finite
    #[error("Cannot normalize zero-length {0}")]
    ZeroLength(&'static str),

    /// Rotation between opposite vectors has no unique axis
    #[error("Rotation axis is undefined: vectors are anti-parallel")]
    AntiParallel,

    /// Input contains NaN or infinity
    #[error("Non-finite component in {0}")]
    NonFinite(&'static str),

    /// Malformed text input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
