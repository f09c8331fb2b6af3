//! Validation errors for tableaux construction.

use derive_more::Display;

/// Error raised when a (shape, weight) pair fails validation.
///
/// Every variant is an unrecoverable input error: construction aborts
/// before any search begins, so a caller never receives a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationError {
    /// The shape has no rows.
    #[display("shape of rim hook tableaux is empty")]
    EmptyShape,

    /// The weight has no entries.
    #[display("content of rim hook tableaux is empty")]
    EmptyWeight,

    /// Shape and weight disagree on the total number of cells.
    #[display("sum of shape ({shape}) does not equal sum of weight ({weight})")]
    TotalMismatch {
        /// Total number of cells in the shape.
        shape: usize,
        /// Total length of the weight sequence.
        weight: usize,
    },

    /// Row lengths decrease, so the shape is not in French notation.
    #[display("invalid shape in french notation: row {index} is shorter than the row above")]
    DecreasingShape {
        /// Index of the offending row.
        index: usize,
    },

    /// A shape row has length zero.
    #[display("shape row {index} has length zero")]
    ZeroRow {
        /// Index of the offending row.
        index: usize,
    },

    /// A weight entry is zero.
    #[display("weight entry {index} is a hook of length zero")]
    ZeroHook {
        /// Index of the offending entry.
        index: usize,
    },
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_violated_condition() {
        assert_eq!(
            ValidationError::TotalMismatch { shape: 4, weight: 5 }.to_string(),
            "sum of shape (4) does not equal sum of weight (5)"
        );
        assert_eq!(
            ValidationError::DecreasingShape { index: 1 }.to_string(),
            "invalid shape in french notation: row 1 is shorter than the row above"
        );
    }
}
