#![doc = r#"
Spelling durations as note lengths.

A duration is given as a fraction of a whole note (`0.25` is a quarter note).
The [`Quantizer`] first looks for a single note length within ten percent of
the duration. Failing that, it takes the longest length that fits, subtracts
it, and tries again with what is left, tying the pieces together.

# Example
```rust
# use smfdump::prelude::*;
let q = Quantizer::new();

assert_eq!(q.quantize(0.25).unwrap().to_string(), "1/4");
assert_eq!(q.quantize(0.375).unwrap().to_string(), "1/4 .");
assert_eq!(q.quantize(1.75).unwrap().to_string(), "1/1 . ~ 1/4");
```
"#]

mod table;
pub use table::*;

use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

use crate::Note;

/// A remainder that no note length can represent, from [`Quantizer::strict`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Duration {0} is shorter than any note length")]
pub struct DurationTooShort(pub f32);

#[doc = r#"
Converts durations into tied note lengths.

[`Quantizer::new`] drops any remainder shorter than [`Quantizer::EPSILON`].
A duration at or above the epsilon that is shorter than every note length is
spelled as the shortest one, a 64th. A remainder left after earlier lengths
that fits nothing is dropped with a warning. [`Quantizer::strict`] has no
epsilon and fails with [`DurationTooShort`] instead.
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantizer {
    tolerance: f32,
    strict: bool,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Quantizer {
    /// Relative distance from a table entry that still counts as that entry
    pub const TOLERANCE: f32 = 0.1;
    /// Remainders below this many whole notes are dropped
    pub const EPSILON: f32 = 0.005;
    /// The most segments one duration is split into
    pub const MAX_SEGMENTS: usize = 256;

    /// A quantizer that drops negligible remainders
    pub const fn new() -> Self {
        Self {
            tolerance: Self::TOLERANCE,
            strict: false,
        }
    }

    /// A quantizer that fails on any remainder it cannot spell
    pub const fn strict() -> Self {
        Self {
            tolerance: Self::TOLERANCE,
            strict: true,
        }
    }

    /// True if built with [`Quantizer::strict`]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    fn is_significant(&self, remaining: f32) -> bool {
        if self.strict {
            remaining > 0.
        } else {
            remaining >= Self::EPSILON
        }
    }

    /// Spell `duration`, in whole notes, as tied note lengths.
    ///
    /// Durations below the epsilon give an empty [`TiedDuration`].
    pub fn quantize(&self, duration: f32) -> Result<TiedDuration, DurationTooShort> {
        let mut remaining = duration;
        let mut lengths = Vec::new();

        while self.is_significant(remaining) {
            if lengths.len() == Self::MAX_SEGMENTS {
                tracing::warn!(duration, remaining, "note too long to spell, truncating");
                break;
            }
            if let Some(entry) = NOTE_LENGTHS
                .iter()
                .find(|e| e.matches(remaining, self.tolerance))
            {
                lengths.push(entry.length);
                break;
            }
            match NOTE_LENGTHS.iter().rev().find(|e| e.fraction < remaining) {
                Some(entry) => {
                    lengths.push(entry.length);
                    remaining -= entry.fraction;
                }
                None if self.strict => return Err(DurationTooShort(remaining)),
                None if lengths.is_empty() => {
                    lengths.push(NOTE_LENGTHS[0].length);
                    break;
                }
                None => {
                    tracing::warn!(duration, remaining, "dropping remainder shorter than any note");
                    break;
                }
            }
        }

        Ok(TiedDuration { lengths })
    }
}

#[doc = r#"
One or more note lengths tied together, longest first.

Displays as the lengths joined by `~`, e.g. `1/2 ~ 1/8`.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TiedDuration {
    lengths: Vec<NoteLength>,
}

impl TiedDuration {
    /// The tied lengths in order
    pub fn lengths(&self) -> &[NoteLength] {
        &self.lengths
    }

    /// True if the duration was too short to spell
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// True if more than one length is tied
    pub fn is_tied(&self) -> bool {
        self.lengths.len() > 1
    }

    /// The exact sum of the lengths, in whole notes
    pub fn total(&self) -> f32 {
        self.lengths.iter().map(NoteLength::fraction).sum()
    }

    /// Renders every tied segment with the note it belongs to,
    /// e.g. `C5 1/2 ~ C5 1/8`.
    pub fn display_with(&self, note: Note) -> WithNote<'_> {
        WithNote {
            duration: self,
            note,
        }
    }
}

impl fmt::Display for TiedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, length) in self.lengths.iter().enumerate() {
            if i > 0 {
                f.write_str(" ~ ")?;
            }
            write!(f, "{length}")?;
        }
        Ok(())
    }
}

/// See [`TiedDuration::display_with`]
pub struct WithNote<'a> {
    duration: &'a TiedDuration,
    note: Note,
}

impl fmt::Display for WithNote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, length) in self.duration.lengths.iter().enumerate() {
            if i > 0 {
                f.write_str(" ~ ")?;
            }
            write!(f, "{} {length}", self.note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    fn spell(duration: f32) -> TiedDuration {
        Quantizer::new().quantize(duration).unwrap()
    }

    #[test]
    fn exact_entries_are_single_tokens() {
        for entry in NOTE_LENGTHS.iter() {
            assert_eq!(spell(entry.fraction).lengths(), &[entry.length]);
        }
    }

    #[test]
    fn dotted_quarter() {
        assert_eq!(spell(0.375).to_string(), "1/4 .");
    }

    #[test]
    fn within_tolerance() {
        // 100 ticks at 96 per quarter
        assert_eq!(spell(100. / 384.).to_string(), "1/4");
        assert_eq!(spell(0.26).to_string(), "1/4");
    }

    #[test]
    fn greedy_ties() {
        let d = spell(1.75);
        assert!(d.is_tied());
        assert!(d.total() > 1.75 - Quantizer::EPSILON);
        assert!(d.total() < 1.75 + Quantizer::EPSILON);
        assert!(d.lengths().iter().all(|l| l.fraction() <= 1.75));
        assert_eq!(d.to_string(), "1/1 . ~ 1/4");

        assert_eq!(spell(0.625).to_string(), "1/2 ~ 1/8");
    }

    #[test]
    fn longer_than_a_breve() {
        let d = spell(5.0);
        assert_eq!(d.to_string(), "2/1 ~ 2/1 ~ 1/1");
        assert_eq!(d.total(), 5.0);
    }

    #[test]
    fn negligible_remainder_dropped() {
        // between the 64th and dotted 64th windows; 0.003375 is left over
        assert_eq!(spell(0.019).to_string(), "1/64");

        assert!(spell(0.004).is_empty());
        assert!(spell(0.).is_empty());
    }

    #[test]
    fn unspellable_remainder() {
        // below the 64th window, above the epsilon
        for short in [0.006, 0.01, 0.013] {
            assert_eq!(spell(short).to_string(), "1/64");
        }
        assert_eq!(
            Quantizer::strict().quantize(0.01),
            Err(DurationTooShort(0.01))
        );
        assert_eq!(
            Quantizer::strict().quantize(0.375).unwrap().to_string(),
            "1/4 ."
        );
    }

    #[test]
    fn short_remainder_after_a_length_is_dropped() {
        // a 64th leaves 0.005175, above the epsilon but fitting nothing
        let d = spell(0.0208);
        assert_eq!(d.to_string(), "1/64");
        assert!(!d.is_tied());
    }

    #[test]
    fn display_with_note() {
        let d = spell(0.625);
        assert_eq!(
            d.display_with(Note::from_byte(60)).to_string(),
            "C5 1/2 ~ C5 1/8"
        );
    }
}
