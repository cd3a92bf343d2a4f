use crate::VALUES;
use thiserror::Error;

/// Malformed sequence at the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("expected {expected} symbols, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("symbol {0} outside alphabet 0..{max}", max = VALUES)]
    SymbolOutOfRange(u8),

    #[error("{0:?} is not a digit")]
    NotADigit(char),
}
