use thiserror::Error;

/// Assignment solver failures. Both indicate a caller bug, not bad input text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AssignmentError {
    /// The cost matrix holds NaN or `-inf`.
    #[error("invalid cost {value} at ({row}, {col}): costs must not be NaN or -inf")]
    InvalidCost { row: usize, col: usize, value: f64 },

    /// Forbidden (`+inf`) entries leave no complete assignment.
    #[error("no feasible assignment: row {row} cannot be matched without a forbidden pairing")]
    Infeasible { row: usize },
}
