//! Error types for the exact-inference runtime

use thiserror::Error;

/// Runtime error type
#[derive(Error, Debug)]
pub enum Error {
    /// An operator received a combination of value kinds it has no rule for
    #[error("{op}: incompatible operand types ({operands})")]
    TypeMismatch {
        /// Operation name (e.g. "add")
        op: &'static str,
        /// Comma separated kinds of the operands that were supplied
        operands: String,
    },

    /// An operation was called with the wrong number of operands
    #[error("{op}: expected {expected} operand(s), got {got}")]
    Arity {
        /// Operation name
        op: &'static str,
        /// Operand count the operation takes
        expected: usize,
        /// Operand count supplied
        got: usize,
    },

    /// Literal kind that cannot be lifted into a sample
    #[error("Incompatible constant: {0}")]
    UnsupportedConstant(String),

    /// A distribution parameter was not a deterministic single-valued float sample
    #[error("Unable to create {distribution} distribution: {reason}")]
    DistributionConstruction {
        /// Distribution family name
        distribution: &'static str,
        /// What was wrong with the parameters
        reason: String,
    },

    /// The conditioning draw of an observation came out false
    #[error("Observation failed")]
    ObservationFailed,

    /// Weighted selection ran past the end of the support
    #[error("Failed to select a value from sample (total mass {total_mass})")]
    SelectionExhausted {
        /// Mass accumulated over the whole support
        total_mass: f64,
    },

    /// Checked integer arithmetic failed (overflow, division by zero)
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build a [`Error::TypeMismatch`] from the operation name and operand kinds.
    pub fn type_mismatch(op: &'static str, operands: &[&str]) -> Self {
        Error::TypeMismatch { op, operands: operands.join(", ") }
    }

    /// `true` for the expected outcome of a failed conditioning statement,
    /// `false` for errors that indicate a defect in the program or runtime.
    pub fn is_observation_failure(&self) -> bool {
        matches!(self, Error::ObservationFailed)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
