//! Error types for the vector, window and simulation APIs.

use derive_more::Display;
use thiserror::Error;
use validator::ValidationErrors;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when building or manipulating vectors and
/// windows. Simulation outcomes (e.g. "No Shot") are *not* errors, see
/// [ShellstarOutcome](crate::ShellstarOutcome).
#[derive(Debug, Error)]
pub enum Error {
    /// A token in a vector string could not be parsed. No partial vector is
    /// ever produced.
    #[error("malformed vector token {token:?}: {fault}")]
    MalformedVector { token: String, fault: VectorFault },

    /// A window label did not name any AVID window.
    #[error("invalid AVID window {label:?}")]
    InvalidWindow { label: String },

    /// The operation exists but is deliberately not defined for this input.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Offset rings only exist for distances 0 through 6.
    #[error("offset distance {distance} is outside [0, 6]")]
    OffsetOutOfRange { distance: u8 },

    /// A configuration struct failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ValidationErrors),
}

/// The specific reason a vector token was rejected.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum VectorFault {
    #[display(fmt = "magnitude is negative")]
    NegativeMagnitude,
    #[display(fmt = "direction given more than once")]
    DuplicateDirection,
    #[display(fmt = "direction is not one of A-F, + or -")]
    UnknownDirection,
    #[display(fmt = "missing numeric magnitude")]
    MissingMagnitude,
    #[display(fmt = "magnitude is not a number in range")]
    InvalidMagnitude,
}

impl Error {
    pub(crate) fn malformed(token: &str, fault: VectorFault) -> Self {
        Self::MalformedVector {
            token: token.into(),
            fault,
        }
    }

    /// The vector fault behind this error, if it is a parse failure
    pub fn vector_fault(&self) -> Option<VectorFault> {
        match self {
            Self::MalformedVector { fault, .. } => Some(*fault),
            _ => None,
        }
    }
}
