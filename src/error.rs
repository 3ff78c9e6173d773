//! Errors shared by the note, scale, and chord lookups.

use thiserror::Error;

/// Errors returned when resolving notes, scales, or chords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The name is not one of the 12 pitch classes.
    #[error("invalid pitch class `{name}`")]
    InvalidPitchClass {
        /// The name that failed to parse.
        name: String,
    },

    /// The name, after alias resolution, is not in the mode table.
    #[error("unknown mode `{name}`")]
    UnknownMode {
        /// The name that failed to parse.
        name: String,
    },

    /// A chord was requested with no notes, or more than `MAX_NOTE_COUNT`.
    #[error("invalid note count {count}: must be in 1..=128")]
    InvalidNoteCount {
        /// The requested count.
        count: usize,
    },

    /// The name is not one of the built-in chord shapes.
    #[error("unknown chord shape `{name}`")]
    UnknownChordShape {
        /// The name that failed to parse.
        name: String,
    },

    /// A chord shape needs at least one scale degree.
    #[error("chord shape must contain at least one scale degree")]
    EmptyChordShape,

    /// A chord shape named a scale degree beyond `MAX_SHAPE_DEGREE`.
    #[error("chord shape degree {degree} is outside -127..=127")]
    ChordShapeDegreeOutOfRange {
        /// The offending degree.
        degree: i32,
    },
}
