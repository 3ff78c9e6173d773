//! Pitch classes
//!
//! The 12 chromatic pitch classes and their conversion to MIDI note numbers.
//!
//! Octaves follow scientific pitch notation: C4 is middle C, MIDI note 60.
//! Some applications (Ableton, for one) call the same note C3.

use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: usize = 12;

/// Lowest valid MIDI note (C-1).
pub const LOWEST_MIDI_NOTE: u8 = 0;

/// Highest valid MIDI note (G9).
pub const HIGHEST_MIDI_NOTE: u8 = 127;

/// Octave used when the caller does not name one.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Pitch class used when the caller does not name one.
pub const DEFAULT_PITCH_CLASS: PitchClass = PitchClass::C;

/// All pitch classes, ordered by offset from C.
pub const PITCH_CLASSES: [PitchClass; SEMITONES] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

/// Canonical names matching `PITCH_CLASSES` order
const PITCH_CLASS_NAMES: [&str; SEMITONES] =
    ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Twelve chromatic pitch classes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PitchClass {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

impl PitchClass {
    /// Pitch class at `offset` semitones above C, if `offset < 12`.
    pub const fn from_offset(offset: usize) -> Option<PitchClass> {
        if offset < SEMITONES {
            Some(PITCH_CLASSES[offset])
        } else {
            None
        }
    }

    /// Semitones above C (0..=11). Also the lowest MIDI note of this class.
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Canonical name, uppercase with sharps (e.g. `"C#"`).
    pub const fn name(self) -> &'static str {
        PITCH_CLASS_NAMES[self as usize]
    }

    /// MIDI note number of this pitch class in `octave`, clamped to 0..=127.
    pub fn midi_note(self, octave: i32) -> u8 {
        let note = i64::from(self.offset()) + (i64::from(octave) + 1) * SEMITONES as i64;
        // clamp keeps the value inside u8
        note.clamp(i64::from(LOWEST_MIDI_NOTE), i64::from(HIGHEST_MIDI_NOTE)) as u8
    }
}

impl Default for PitchClass {
    fn default() -> Self {
        DEFAULT_PITCH_CLASS
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Case-insensitive. Sharps (`C#`) are canonical; the common flats
    /// (`Db`, `Eb`, `Gb`, `Ab`, `Bb`) parse to their enharmonic sharp.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pitch = match s.trim().to_ascii_uppercase().as_str() {
            "C" => PitchClass::C,
            "C#" | "DB" => PitchClass::Cs,
            "D" => PitchClass::D,
            "D#" | "EB" => PitchClass::Ds,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "GB" => PitchClass::Fs,
            "G" => PitchClass::G,
            "G#" | "AB" => PitchClass::Gs,
            "A" => PitchClass::A,
            "A#" | "BB" => PitchClass::As,
            "B" => PitchClass::B,
            _ => {
                return Err(Error::InvalidPitchClass {
                    name: s.to_string(),
                })
            }
        };
        Ok(pitch)
    }
}

/// The 12 canonical pitch-class names from C through B.
pub fn pitch_class_names() -> [&'static str; SEMITONES] {
    PITCH_CLASS_NAMES
}

/// Resolve a note name and octave to a MIDI note number.
///
/// The result is clamped to 0..=127, so extreme octaves saturate at C-1 or G9.
///
/// Returns `Err(Error::InvalidPitchClass)` if `pitch_class` is not a note name.
pub fn resolve_midi_note(pitch_class: &str, octave: i32) -> Result<u8, Error> {
    let pitch: PitchClass = pitch_class.parse()?;
    Ok(pitch.midi_note(octave))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_table_order() {
        for (i, pitch) in PITCH_CLASSES.iter().enumerate() {
            assert_eq!(pitch.offset() as usize, i);
            assert_eq!(PitchClass::from_offset(i), Some(*pitch));
        }
        assert_eq!(PitchClass::from_offset(SEMITONES), None);
    }

    #[test]
    fn names_parse_back_to_their_class() {
        for pitch in PITCH_CLASSES {
            assert_eq!(pitch.name().parse::<PitchClass>(), Ok(pitch));
        }
    }

    #[test]
    fn flats_parse_as_sharps() {
        assert_eq!("Db".parse::<PitchClass>(), Ok(PitchClass::Cs));
        assert_eq!("bb".parse::<PitchClass>(), Ok(PitchClass::As));
        assert_eq!(" eb ".parse::<PitchClass>(), Ok(PitchClass::Ds));
    }

    #[test]
    fn extreme_octaves_do_not_overflow() {
        assert_eq!(PitchClass::B.midi_note(i32::MAX), HIGHEST_MIDI_NOTE);
        assert_eq!(PitchClass::C.midi_note(i32::MIN), LOWEST_MIDI_NOTE);
    }
}
