//! Public error types of the engine boundary.

/// Error for a malformed 81-cell input buffer.
///
/// Raised before any search; the output buffer is never touched when the
/// input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// Buffer is not 81 cells long.
    #[error("input buffer should have length 81, found {0}")]
    WrongLength(usize),
    /// A cell holds a value outside `0..=9`.
    #[error("cell {cell} contains {value}, cell values must be 0..=9")]
    ValueOutOfRange {
        /// Row-major index of the offending cell.
        cell: usize,
        /// The out-of-range value found there.
        value: u8,
    },
}

/// Error for [`Engine`](crate::Engine) operations.
///
/// An unsolvable board is *not* an error; `solve` reports it as `false` and
/// `count_solutions` as `0`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The input buffer was rejected before searching.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// A worker died without reporting its sub-problem. The call's result
    /// would be partial, so none is returned.
    #[error("a solver worker terminated without reporting a result")]
    WorkerFailure,
}
