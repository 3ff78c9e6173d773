//! # midi_tools
//!
//! Music-theory lookups over MIDI note numbers: resolve note names to MIDI
//! notes, expand a root and a mode into a scale, and pick chords out of that
//! scale.
//!
//! Octaves follow scientific pitch notation, so C4 (middle C) is MIDI note 60.
//!
//! ## Example
//! ```rust
//! use midi_tools::{build_chord, build_scale, resolve_midi_note};
//! use midi_tools::{ChordBuilder, ChordShape, Mode, PitchClass};
//!
//! fn run() -> Result<(), midi_tools::Error> {
//!     // 1) Single notes
//!     assert_eq!(resolve_midi_note("C", 4)?, 60);
//!
//!     // 2) Scales, by mode name or alias
//!     let a_minor = build_scale("A", 4, "minor")?;
//!     assert_eq!(a_minor, [69, 71, 72, 74, 76, 77, 79]);
//!
//!     // 3) Chords out of the scale
//!     assert_eq!(build_chord("A", 4, "aeolian", 3)?, vec![69, 72, 76]);
//!
//!     let d_dorian_seventh = ChordBuilder::new()
//!         .root(PitchClass::D)
//!         .mode(Mode::Dorian)
//!         .shape(ChordShape::seventh())
//!         .note_count(4)
//!         .build()?;
//!     assert_eq!(d_dorian_seventh, vec![62, 65, 69, 72]);
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde`: derives `Serialize`/`Deserialize` for `PitchClass`, `Mode`,
//!   and `ChordShape`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Errors shared by every lookup.
pub use error::Error;

/// Pitch classes and MIDI note resolution.
pub use pitch::{
    pitch_class_names, resolve_midi_note, PitchClass, DEFAULT_OCTAVE, DEFAULT_PITCH_CLASS,
    HIGHEST_MIDI_NOTE, LOWEST_MIDI_NOTE, PITCH_CLASSES,
};

/// Mode table.
pub use mode::{mode_names, Mode, DEFAULT_MODE, MODES, MODE_ALIASES};

/// Scale construction.
pub use scale::{build_scale, scale, Scale};

/// Chord construction.
pub use chord::{
    build_chord, chord_from_scale, chord_shape_names, Chord, ChordBuilder, ChordShape,
    DEFAULT_NOTE_COUNT, MAX_NOTE_COUNT, MAX_SHAPE_DEGREE,
};

/// Chord module.
pub mod chord;

/// Error module.
pub mod error;

/// Mode module.
pub mod mode;

/// Pitch class module.
pub mod pitch;

/// Scale module.
pub mod scale;
