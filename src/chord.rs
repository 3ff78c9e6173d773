//! Chords
//!
//! Picks chord tones out of a scale by scale degree. A chord shape lists the
//! degrees within one octave; asking for more notes than the shape holds
//! repeats the shape one octave (7 degrees) higher each time around.

use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    mode::{Mode, MODE_LEN},
    pitch::{PitchClass, DEFAULT_OCTAVE, SEMITONES},
    scale::{scale, Scale},
};

/// Notes in a chord when the caller does not ask for a count.
pub const DEFAULT_NOTE_COUNT: usize = 3;

/// Most notes a single chord may hold; one per MIDI note number.
pub const MAX_NOTE_COUNT: usize = 128;

/// Largest scale degree (in either direction) a chord shape may name.
pub const MAX_SHAPE_DEGREE: i32 = 127;

/// Root, third, fifth
const TRIAD: &[i32] = &[0, 2, 4];

/// Triad plus the seventh
const SEVENTH: &[i32] = &[0, 2, 4, 6];

/// Seventh chord plus the ninth
const NINTH: &[i32] = &[0, 2, 4, 6, 8];

/// (name, degrees) for every built-in shape
const NAMED_SHAPES: &[(&str, &[i32])] =
    &[("triad", TRIAD), ("seventh", SEVENTH), ("ninth", NINTH)];

/// A chord as MIDI note numbers, lowest first.
pub type Chord = Vec<i32>;

/// Scale degrees (0 = root) picked for each chord tone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<i32>", into = "Vec<i32>"))]
pub struct ChordShape {
    degrees: Vec<i32>,
}

impl ChordShape {
    /// A custom shape. Degrees past 6 reach into higher octaves.
    ///
    /// Returns:
    /// - `Err(EmptyChordShape)` if `degrees` is empty.
    /// - `Err(ChordShapeDegreeOutOfRange)` if a degree lies outside
    ///   `-MAX_SHAPE_DEGREE..=MAX_SHAPE_DEGREE`.
    pub fn new(degrees: Vec<i32>) -> Result<Self, Error> {
        if degrees.is_empty() {
            return Err(Error::EmptyChordShape);
        }
        if let Some(&degree) = degrees
            .iter()
            .find(|degree| !(-MAX_SHAPE_DEGREE..=MAX_SHAPE_DEGREE).contains(*degree))
        {
            return Err(Error::ChordShapeDegreeOutOfRange { degree });
        }
        Ok(ChordShape { degrees })
    }

    /// Degrees 0, 2, 4.
    pub fn triad() -> Self {
        ChordShape {
            degrees: TRIAD.to_vec(),
        }
    }

    /// Degrees 0, 2, 4, 6.
    pub fn seventh() -> Self {
        ChordShape {
            degrees: SEVENTH.to_vec(),
        }
    }

    /// Degrees 0, 2, 4, 6, 8.
    pub fn ninth() -> Self {
        ChordShape {
            degrees: NINTH.to_vec(),
        }
    }

    /// The scale degrees of one pass through the shape.
    pub fn degrees(&self) -> &[i32] {
        &self.degrees
    }

    /// Scale degree of the `step`th chord tone.
    ///
    /// Callers keep `step < MAX_NOTE_COUNT`, which with bounded degrees keeps
    /// the result well inside `i32`.
    fn degree_at(&self, step: usize) -> i32 {
        let len = self.degrees.len();
        let cycle = (step / len) as i32;
        self.degrees[step % len] + MODE_LEN as i32 * cycle
    }
}

impl Default for ChordShape {
    fn default() -> Self {
        Self::triad()
    }
}

impl Display for ChordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match NAMED_SHAPES
            .iter()
            .find(|(_, degrees)| *degrees == self.degrees.as_slice())
        {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "{:?}", self.degrees),
        }
    }
}

impl FromStr for ChordShape {
    type Err = Error;

    /// Parses a built-in shape name: `triad`, `seventh`, or `ninth`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        NAMED_SHAPES
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, degrees)| ChordShape {
                degrees: degrees.to_vec(),
            })
            .ok_or_else(|| Error::UnknownChordShape {
                name: s.to_string(),
            })
    }
}

impl TryFrom<Vec<i32>> for ChordShape {
    type Error = Error;

    fn try_from(degrees: Vec<i32>) -> Result<Self, Self::Error> {
        ChordShape::new(degrees)
    }
}

impl From<ChordShape> for Vec<i32> {
    fn from(shape: ChordShape) -> Self {
        shape.degrees
    }
}

/// Names of the built-in chord shapes.
pub fn chord_shape_names() -> Vec<&'static str> {
    NAMED_SHAPES.iter().map(|(name, _)| *name).collect()
}

/// Builder for a chord; every field starts at its default
/// (C, octave 4, ionian, 3 notes, triad).
#[derive(Debug, Clone)]
pub struct ChordBuilder {
    root: PitchClass,
    octave: i32,
    mode: Mode,
    note_count: usize,
    shape: ChordShape,
}

impl ChordBuilder {
    /// Create a new builder with the defaults.
    pub fn new() -> Self {
        ChordBuilder {
            root: PitchClass::default(),
            octave: DEFAULT_OCTAVE,
            mode: Mode::default(),
            note_count: DEFAULT_NOTE_COUNT,
            shape: ChordShape::default(),
        }
    }

    /// Set the root of the underlying scale.
    pub fn root(mut self, root: PitchClass) -> Self {
        self.root = root;
        self
    }

    /// Set the octave of the root.
    pub fn octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    /// Set the mode of the underlying scale.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how many chord tones to produce.
    pub fn note_count(mut self, count: usize) -> Self {
        self.note_count = count;
        self
    }

    /// Set the chord shape.
    pub fn shape(mut self, shape: ChordShape) -> Self {
        self.shape = shape;
        self
    }

    /// Build the chord.
    ///
    /// Returns `Err(InvalidNoteCount)` unless the note count is in
    /// `1..=MAX_NOTE_COUNT`.
    pub fn build(self) -> Result<Chord, Error> {
        let scale = scale(self.root, self.octave, self.mode);
        chord_from_scale(&scale, &self.shape, self.note_count)
    }
}

impl Default for ChordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick `note_count` chord tones out of `scale` following `shape`.
///
/// Returns `Err(InvalidNoteCount)` unless `1 <= note_count <= MAX_NOTE_COUNT`.
pub fn chord_from_scale(
    scale: &Scale,
    shape: &ChordShape,
    note_count: usize,
) -> Result<Chord, Error> {
    if note_count == 0 || note_count > MAX_NOTE_COUNT {
        return Err(Error::InvalidNoteCount { count: note_count });
    }
    Ok((0..note_count)
        .map(|step| chord_tone(scale, shape.degree_at(step)))
        .collect())
}

/// Build a triad-shaped chord from a root note name, octave, and mode name.
///
/// Returns:
/// - `Err(InvalidPitchClass)` if `root` is not a note name.
/// - `Err(UnknownMode)` if `mode` is neither a mode nor an alias of one.
/// - `Err(InvalidNoteCount)` unless `1 <= note_count <= MAX_NOTE_COUNT`.
pub fn build_chord(
    root: &str,
    octave: i32,
    mode: &str,
    note_count: usize,
) -> Result<Chord, Error> {
    ChordBuilder::new()
        .root(root.parse()?)
        .octave(octave)
        .mode(mode.parse()?)
        .note_count(note_count)
        .build()
}

/// MIDI note of scale degree `degree`, folding whole octaves out of the index
#[inline]
fn chord_tone(scale: &Scale, degree: i32) -> i32 {
    let len = MODE_LEN as i32;
    let octave_offset = degree.div_euclid(len);
    let index = degree.rem_euclid(len) as usize;
    scale[index] + SEMITONES as i32 * octave_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_MAJOR: Scale = [60, 62, 64, 65, 67, 69, 71];

    #[test]
    fn degrees_wrap_into_higher_octaves() {
        assert_eq!(chord_tone(&C_MAJOR, 7), 72);
        assert_eq!(chord_tone(&C_MAJOR, 9), 76);
        assert_eq!(chord_tone(&C_MAJOR, 15), 86);
    }

    #[test]
    fn negative_degrees_reach_below_the_root() {
        assert_eq!(chord_tone(&C_MAJOR, -1), 59);
        assert_eq!(chord_tone(&C_MAJOR, -7), 48);
        assert_eq!(chord_tone(&C_MAJOR, -8), 47);
    }

    #[test]
    fn shape_repeats_a_scale_octave_higher() {
        let triad = ChordShape::triad();
        let degrees: Vec<i32> = (0..7).map(|step| triad.degree_at(step)).collect();
        assert_eq!(degrees, vec![0, 2, 4, 7, 9, 11, 14]);
    }

    #[test]
    fn empty_shape_is_rejected() {
        assert_eq!(ChordShape::new(Vec::new()), Err(Error::EmptyChordShape));
    }

    #[test]
    fn shape_degrees_past_the_limit_are_rejected() {
        assert_eq!(
            ChordShape::new(vec![0, i32::MAX]),
            Err(Error::ChordShapeDegreeOutOfRange { degree: i32::MAX })
        );
        assert_eq!(
            ChordShape::new(vec![i32::MIN]),
            Err(Error::ChordShapeDegreeOutOfRange { degree: i32::MIN })
        );
        assert_eq!(
            ChordShape::new(vec![MAX_SHAPE_DEGREE + 1]),
            Err(Error::ChordShapeDegreeOutOfRange {
                degree: MAX_SHAPE_DEGREE + 1
            })
        );
        assert!(ChordShape::new(vec![-MAX_SHAPE_DEGREE, MAX_SHAPE_DEGREE]).is_ok());
    }

    #[test]
    fn widest_shape_at_the_note_limit_stays_in_range() {
        let scale: Scale = [127, 129, 131, 132, 134, 136, 138];
        let shape = ChordShape::new(vec![MAX_SHAPE_DEGREE]).unwrap();
        let chord = chord_from_scale(&scale, &shape, MAX_NOTE_COUNT).unwrap();
        assert_eq!(chord.len(), MAX_NOTE_COUNT);
        // degree 127 + 7 * 127 = 1016 = 145 octaves + 1
        assert_eq!(chord[MAX_NOTE_COUNT - 1], 129 + 12 * 145);

        let shape = ChordShape::new(vec![-MAX_SHAPE_DEGREE]).unwrap();
        let chord = chord_from_scale(&[0; 7], &shape, 1).unwrap();
        assert_eq!(chord, vec![-12 * 19]);
    }

    #[test]
    fn note_count_past_the_limit_is_rejected() {
        let shape = ChordShape::triad();
        assert_eq!(
            chord_from_scale(&C_MAJOR, &shape, MAX_NOTE_COUNT + 1),
            Err(Error::InvalidNoteCount {
                count: MAX_NOTE_COUNT + 1
            })
        );
        assert_eq!(
            chord_from_scale(&C_MAJOR, &shape, usize::MAX),
            Err(Error::InvalidNoteCount { count: usize::MAX })
        );
        let widest = chord_from_scale(&C_MAJOR, &shape, MAX_NOTE_COUNT).unwrap();
        assert_eq!(widest.len(), MAX_NOTE_COUNT);
    }

    #[test]
    fn named_shapes_display_by_name() {
        assert_eq!(ChordShape::seventh().to_string(), "seventh");
        let custom = ChordShape::new(vec![0, 3]).unwrap();
        assert_eq!(custom.to_string(), "[0, 3]");
    }
}
