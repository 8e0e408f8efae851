//! Record validation errors.
//!
//! Defined in `examtrack-core` so the store boundary can classify bad
//! creation input without string matching.

use thiserror::Error;

/// Errors raised when a draft record fails validation at creation time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A zero question count would divide by zero when the percentage is
    /// derived, contaminating every downstream aggregate.
    #[error("total question count must be greater than zero")]
    ZeroTotal,

    /// The exam name is the primary display string and must be non-empty.
    #[error("exam name must not be empty")]
    EmptyName,

    /// Not-attempted cannot be derived when the answered counts already
    /// exceed the total.
    #[error("correct ({correct}) + incorrect ({incorrect}) exceed total ({total})")]
    CountsExceedTotal {
        total: u32,
        correct: u32,
        incorrect: u32,
    },
}
