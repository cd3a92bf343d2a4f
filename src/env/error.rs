use crate::rules::CodeError;
use thiserror::Error;

/// Rejected call into an episode.
///
/// Both variants are caller precondition violations. Nothing is retried and
/// episode state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid action: {0}")]
    InvalidAction(#[from] CodeError),

    #[error("step called on a terminal episode, reset first")]
    IllegalStateTransition,
}
