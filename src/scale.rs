//! Scales
//!
//! Expands a root note and a mode into seven absolute MIDI note numbers.

use crate::{error::Error, mode::Mode, mode::MODE_LEN, pitch::PitchClass};

/// Seven MIDI note numbers, root first.
///
/// Only the root is clamped to the MIDI range; the upper degrees of a scale
/// rooted near G9 may exceed 127.
pub type Scale = [i32; MODE_LEN];

/// Build the scale of `mode` rooted at `root` in `octave`.
pub fn scale(root: PitchClass, octave: i32, mode: Mode) -> Scale {
    let root_note = i32::from(root.midi_note(octave));
    mode.intervals().map(|interval| root_note + i32::from(interval))
}

/// Build a scale from a root note name, an octave, and a mode name.
///
/// Returns:
/// - `Err(InvalidPitchClass)` if `root` is not a note name.
/// - `Err(UnknownMode)` if `mode` is neither a mode nor an alias of one.
pub fn build_scale(root: &str, octave: i32, mode: &str) -> Result<Scale, Error> {
    let root: PitchClass = root.parse()?;
    let mode: Mode = mode.parse()?;
    Ok(scale(root, octave, mode))
}
