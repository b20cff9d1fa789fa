// ============================================================================
// Array Errors
// Error types for checked access and archive transfer
// ============================================================================

use core::fmt;

/// Errors reported by the checked tier of [`FixedArray`](super::FixedArray).
///
/// Unchecked accessors never produce these; they rely on the caller's
/// precondition instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayError {
    /// Index was not strictly less than the array length
    OutOfRange { index: usize, len: usize },
    /// Source slice length differs from the array length
    LengthMismatch { expected: usize, actual: usize },
    /// Reader ran out of elements before the array was filled
    ArchiveExhausted { expected: usize, read: usize },
    /// Writer has no room left for another element
    ArchiveFull { capacity: usize },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::OutOfRange { index, len } => {
                write!(f, "array access out of bounds: index {} >= length {}", index, len)
            },
            ArrayError::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch: expected {} elements, got {}",
                expected, actual
            ),
            ArrayError::ArchiveExhausted { expected, read } => write!(
                f,
                "archive exhausted: expected {} elements, read {}",
                expected, read
            ),
            ArrayError::ArchiveFull { capacity } => {
                write!(f, "archive full: capacity of {} elements reached", capacity)
            },
        }
    }
}

impl core::error::Error for ArrayError {}

/// Result type alias for checked array operations
pub type ArrayResult<T> = Result<T, ArrayError>;
