//! Error types for ngport.

use thiserror::Error;

/// Reasons an initial state could not be extracted from component source.
///
/// Neither variant is fatal. `extract_initial_state` folds both into an
/// empty [`StateList`](crate::StateList); the typed form exists so callers
/// and logs can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no state-initialization call found")]
    NoMatch,

    #[error("malformed state literal {literal:?} at offset {offset}: {reason}")]
    MalformedLiteral {
        literal: String,
        offset: usize,
        reason: String,
    },
}

impl ExtractError {
    /// Build a [`ExtractError::MalformedLiteral`] for `literal`, pointing at the
    /// byte offset where the unparsed remainder `rest` begins.
    pub fn malformed(literal: &str, rest: &str, reason: impl Into<String>) -> Self {
        ExtractError::MalformedLiteral {
            literal: literal.to_string(),
            offset: literal.len().saturating_sub(rest.len()),
            reason: reason.into(),
        }
    }
}
