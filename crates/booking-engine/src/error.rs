//! Error types for the booking engine.

use thiserror::Error;

/// Errors the engine reports to its caller.
///
/// Most malformed input degrades to an empty result instead of erroring (an
/// empty grid, an absent day, `NoSelection`); only the booking boundary
/// refuses to produce output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A booking draft was requested while no time slot was selected.
    #[error("no time slot selected")]
    InvalidSelection,

    /// A non-positive meeting duration reached the booking boundary.
    #[error("invalid meeting duration: {0} minutes")]
    InvalidDuration(u32),
}

pub type Result<T> = std::result::Result<T, EngineError>;
