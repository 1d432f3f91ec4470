use thiserror::Error;

/// Failures a client can cause when submitting a review.
///
/// `Display` is the bare message, since that is what the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// A required field is missing or holds an unacceptable value
    #[error("{0}")]
    Validation(String),
    /// The request body could not be read or decoded
    #[error("{0}")]
    Parse(String),
}

pub type ReviewResult<T> = Result<T, ReviewError>;
