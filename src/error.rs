//! Validation failures.

use serde::Serialize;
use thiserror::Error;

/// Why a string is not a legal identifier.
///
/// Every variant carries the label of what was being validated ("Class name",
/// "Package segment", ...) so the message reads on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("{label} cannot be empty")]
    EmptyIdentifier { label: String },

    #[error("{label} must start with a letter, underscore (_), or dollar sign ($)")]
    InvalidStartCharacter { label: String, ch: char },

    #[error("{label} can only contain letters, numbers, underscores (_), or dollar signs ($)")]
    InvalidContinuationCharacter {
        label: String,
        ch: char,
        /// Character (not byte) index of `ch`
        index: usize,
    },

    #[error("{label} cannot be a Java keyword")]
    ReservedWord { label: String, word: String },
}

/// Field-less discriminant of [`IdentifierError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    EmptyIdentifier,
    InvalidStartCharacter,
    InvalidContinuationCharacter,
    ReservedWord,
}

impl IdentifierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentifierError::EmptyIdentifier { .. } => ErrorKind::EmptyIdentifier,
            IdentifierError::InvalidStartCharacter { .. } => ErrorKind::InvalidStartCharacter,
            IdentifierError::InvalidContinuationCharacter { .. } => {
                ErrorKind::InvalidContinuationCharacter
            }
            IdentifierError::ReservedWord { .. } => ErrorKind::ReservedWord,
        }
    }

    /// The label the failing validation was run with
    pub fn label(&self) -> &str {
        match self {
            IdentifierError::EmptyIdentifier { label }
            | IdentifierError::InvalidStartCharacter { label, .. }
            | IdentifierError::InvalidContinuationCharacter { label, .. }
            | IdentifierError::ReservedWord { label, .. } => label,
        }
    }
}
