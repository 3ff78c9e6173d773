//! Modes
//!
//! Named seven-note interval patterns, each given as semitone offsets from the
//! root of the scale.

use std::{fmt::Display, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Notes per mode (and per scale built from one).
pub const MODE_LEN: usize = 7;

/// Number of canonical modes
const NUM_MODES: usize = 9;

/// Mode used when the caller does not name one.
pub const DEFAULT_MODE: Mode = Mode::Ionian;

/// Canonical modes, in the same order as `MODE_NAMES` and `MODE_INTERVALS`
pub const MODES: [Mode; NUM_MODES] = [
    Mode::Ionian,
    Mode::Dorian,
    Mode::Phrygian,
    Mode::Lydian,
    Mode::Mixolydian,
    Mode::Aeolian,
    Mode::Locrian,
    Mode::Harmonic,
    Mode::Melodic,
];

const MODE_NAMES: [&str; NUM_MODES] = [
    "ionian",
    "dorian",
    "phrygian",
    "lydian",
    "mixolydian",
    "aeolian",
    "locrian",
    "harmonic",
    "melodic",
];

/// Semitone offsets from the root, matching `MODES` order
const MODE_INTERVALS: [[u8; MODE_LEN]; NUM_MODES] = [
    [0, 2, 4, 5, 7, 9, 11], // W-W-H-W-W-W-H
    [0, 2, 3, 5, 7, 9, 10], // W-H-W-W-W-H-W
    [0, 1, 3, 5, 7, 8, 10], // H-W-W-W-H-W-W
    [0, 2, 4, 6, 7, 9, 11], // W-W-W-H-W-W-H
    [0, 2, 4, 5, 7, 9, 10], // W-W-H-W-W-H-W
    [0, 2, 3, 5, 7, 8, 10], // W-H-W-W-H-W-W
    [0, 1, 3, 5, 6, 8, 10], // H-W-W-H-W-W-W
    [0, 2, 3, 5, 7, 8, 11], // W-H-W-W-H-A2-H
    [0, 2, 3, 5, 7, 9, 11], // W-H-W-W-W-W-H
];

/// Alternative names, resolved before the canonical table is consulted.
pub const MODE_ALIASES: &[(&str, Mode)] = &[
    ("major", Mode::Ionian),
    ("minor", Mode::Aeolian),
    ("jazz", Mode::Melodic),
];

/// Heptatonic modes
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Major scale
    Ionian,
    /// Minor with a raised sixth
    Dorian,
    /// Minor with a lowered second
    Phrygian,
    /// Major with a raised fourth
    Lydian,
    /// Major with a lowered seventh
    Mixolydian,
    /// Natural minor
    Aeolian,
    /// Lowered second and fifth
    Locrian,
    /// Harmonic minor (aeolian with a raised seventh)
    Harmonic,
    /// Ascending melodic minor, a.k.a. jazz minor (ionian with a lowered third)
    Melodic,
}

impl Mode {
    /// Semitone offsets from the root for each of the 7 degrees.
    pub const fn intervals(self) -> [u8; MODE_LEN] {
        MODE_INTERVALS[self as usize]
    }

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        MODE_NAMES[self as usize]
    }
}

impl Default for Mode {
    fn default() -> Self {
        DEFAULT_MODE
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Case-insensitive; accepts canonical names and `MODE_ALIASES`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let canonical = MODE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == wanted)
            .map_or(wanted.as_str(), |(_, mode)| mode.name());

        MODE_NAMES
            .iter()
            .position(|&name| name == canonical)
            .map(|idx| MODES[idx])
            .ok_or_else(|| Error::UnknownMode {
                name: s.to_string(),
            })
    }
}

/// The 9 canonical mode names. Aliases are listed in `MODE_ALIASES`.
pub fn mode_names() -> [&'static str; NUM_MODES] {
    MODE_NAMES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_starts_on_the_root_and_stays_in_one_octave() {
        for mode in MODES {
            let intervals = mode.intervals();
            assert_eq!(intervals[0], 0, "{mode}");
            assert!(intervals.windows(2).all(|w| w[0] < w[1]), "{mode}");
            assert!(intervals[MODE_LEN - 1] < 12, "{mode}");
        }
    }

    #[test]
    fn aliases_resolve_to_their_mode() {
        assert_eq!("major".parse::<Mode>(), Ok(Mode::Ionian));
        assert_eq!("Minor".parse::<Mode>(), Ok(Mode::Aeolian));
        assert_eq!("JAZZ".parse::<Mode>(), Ok(Mode::Melodic));
    }

    #[test]
    fn unknown_name_keeps_the_input() {
        assert_eq!(
            "blues".parse::<Mode>(),
            Err(Error::UnknownMode {
                name: "blues".into()
            })
        );
    }
}
