use thiserror::Error;

/// Failure signalled by an upstream feed collaborator.
///
/// The engine never propagates these to the read side; a failed fetch is
/// treated as an empty input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Feed '{0}' is unavailable: {1}")]
    Unavailable(String, String),

    #[error("Feed '{0}' returned a malformed payload: {1}")]
    MalformedPayload(String, String),
}
