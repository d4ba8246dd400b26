//! Error types for bout resolution.

use crate::profile::Attribute;

/// Errors that can occur while resolving a bout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A profile value is outside its declared bounds.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The fortune stream ran out before the bout was decided.
    #[error("entropy exhausted: needed {needed} draws, {available} available")]
    EntropyExhausted {
        /// Draws the resolution path requires.
        needed: usize,
        /// Draws that were available.
        available: usize,
    },

    /// A fortune value is neither in the normal range nor a sentinel.
    #[error("fortune value {0} is out of range")]
    EntropyOutOfRange(i32),

    /// The technique decision table has no entry for this pairing.
    ///
    /// The table is total, so this signals a defect in the engine.
    #[error("no technique for winner {winner_top} against loser {loser_weakest}")]
    NoApplicableTechnique {
        /// The winner's strongest attribute.
        winner_top: Attribute,
        /// The loser's weakest attribute.
        loser_weakest: Attribute,
    },
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
