use thiserror::Error;

use crate::dtype::ElementType;

/// Errors surfaced by the padding engine.
///
/// No partial output is valid once any of these is returned; callers must
/// discard the output buffer's contents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PadError {
    #[error("pad spec has {spec_rank} rows but input rank is {input_rank}")]
    RankMismatch { spec_rank: usize, input_rank: usize },

    #[error("negative pad amount {amount} for dimension {dimension}")]
    NegativePad { dimension: usize, amount: i64 },

    #[error("buffer holds {actual} elements but the shape implies {expected}")]
    ElementCountMismatch { expected: usize, actual: usize },

    #[error("buffer is {actual} bytes but {expected} were expected")]
    ByteLengthMismatch { expected: usize, actual: usize },

    #[error(
        "not enough values for mirror pad on dimension {dimension}, \
         required {required}, available {available}"
    )]
    InsufficientPadData {
        dimension: usize,
        required: usize,
        available: usize,
    },

    #[error("unsupported element type {0:?}")]
    UnsupportedType(ElementType),

    /// A bounds violation detected after validation succeeded. Indicates a
    /// bug in the engine itself, not a caller error.
    #[error("internal consistency violation: {0}")]
    InternalConsistency(&'static str),
}

impl PadError {
    /// `true` for the malformed shape/spec family of errors.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            PadError::RankMismatch { .. }
                | PadError::NegativePad { .. }
                | PadError::ElementCountMismatch { .. }
                | PadError::ByteLengthMismatch { .. }
        )
    }
}
