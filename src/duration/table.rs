use core::fmt;

/// The undotted note values, longest first.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseLength {
    Breve,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
}

impl BaseLength {
    /// Length in whole notes
    pub const fn fraction(&self) -> f32 {
        use BaseLength::*;
        match self {
            Breve => 2.,
            Whole => 1.,
            Half => 0.5,
            Quarter => 0.25,
            Eighth => 0.125,
            Sixteenth => 0.0625,
            ThirtySecond => 0.031_25,
            SixtyFourth => 0.015_625,
        }
    }

    /// Fraction notation, `1/4` for a quarter and `2/1` for a breve
    pub const fn symbol(&self) -> &'static str {
        use BaseLength::*;
        match self {
            Breve => "2/1",
            Whole => "1/1",
            Half => "1/2",
            Quarter => "1/4",
            Eighth => "1/8",
            Sixteenth => "1/16",
            ThirtySecond => "1/32",
            SixtyFourth => "1/64",
        }
    }

    /// LilyPond duration, `4` for a quarter and `\breve` for a breve
    pub const fn lilypond(&self) -> &'static str {
        use BaseLength::*;
        match self {
            Breve => "\\breve",
            Whole => "1",
            Half => "2",
            Quarter => "4",
            Eighth => "8",
            Sixteenth => "16",
            ThirtySecond => "32",
            SixtyFourth => "64",
        }
    }
}

#[doc = r#"
A note value, optionally dotted.

A dot makes the note half again as long. Displays in fraction notation with
a trailing ` .` when dotted: `1/8 .`.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteLength {
    base: BaseLength,
    dotted: bool,
}

impl NoteLength {
    /// An undotted note
    pub const fn plain(base: BaseLength) -> Self {
        Self {
            base,
            dotted: false,
        }
    }
    /// A dotted note
    pub const fn dotted(base: BaseLength) -> Self {
        Self { base, dotted: true }
    }
    /// The undotted value
    pub const fn base(&self) -> BaseLength {
        self.base
    }
    /// True if dotted
    pub const fn is_dotted(&self) -> bool {
        self.dotted
    }
    /// Length in whole notes
    pub const fn fraction(&self) -> f32 {
        let base = self.base.fraction();
        if self.dotted { base * 1.5 } else { base }
    }
    /// LilyPond spelling, `4.` for a dotted quarter
    pub fn lilypond(&self) -> LilyPond {
        LilyPond(*self)
    }
}

impl fmt::Display for NoteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.symbol())?;
        if self.dotted {
            f.write_str(" .")?;
        }
        Ok(())
    }
}

/// See [`NoteLength::lilypond`]
pub struct LilyPond(NoteLength);

impl fmt::Display for LilyPond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.base.lilypond())?;
        if self.0.dotted {
            f.write_str(".")?;
        }
        Ok(())
    }
}

/// A row of [`NOTE_LENGTHS`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteLengthEntry {
    /// Length in whole notes
    pub fraction: f32,
    /// The note value
    pub length: NoteLength,
}

impl NoteLengthEntry {
    const fn plain(base: BaseLength) -> Self {
        let length = NoteLength::plain(base);
        Self {
            fraction: length.fraction(),
            length,
        }
    }

    const fn dotted(base: BaseLength) -> Self {
        let length = NoteLength::dotted(base);
        Self {
            fraction: length.fraction(),
            length,
        }
    }

    /// True if `duration` lies strictly within `tolerance` (relative) of this entry.
    pub fn matches(&self, duration: f32, tolerance: f32) -> bool {
        duration > self.fraction * (1. - tolerance) && duration < self.fraction * (1. + tolerance)
    }
}

/// Every spellable note value, shortest first.
///
/// Dotted values are rows of their own. Nothing is longer than a breve.
pub const NOTE_LENGTHS: [NoteLengthEntry; 15] = {
    use BaseLength::*;
    [
        NoteLengthEntry::plain(SixtyFourth),
        NoteLengthEntry::dotted(SixtyFourth),
        NoteLengthEntry::plain(ThirtySecond),
        NoteLengthEntry::dotted(ThirtySecond),
        NoteLengthEntry::plain(Sixteenth),
        NoteLengthEntry::dotted(Sixteenth),
        NoteLengthEntry::plain(Eighth),
        NoteLengthEntry::dotted(Eighth),
        NoteLengthEntry::plain(Quarter),
        NoteLengthEntry::dotted(Quarter),
        NoteLengthEntry::plain(Half),
        NoteLengthEntry::dotted(Half),
        NoteLengthEntry::plain(Whole),
        NoteLengthEntry::dotted(Whole),
        NoteLengthEntry::plain(Breve),
    ]
};

#[test]
fn table_is_ascending() {
    for pair in NOTE_LENGTHS.windows(2) {
        assert!(pair[0].fraction < pair[1].fraction);
    }
}

#[test]
fn spellings() {
    use alloc::string::ToString;
    let dotted_quarter = NoteLength::dotted(BaseLength::Quarter);
    assert_eq!(dotted_quarter.to_string(), "1/4 .");
    assert_eq!(dotted_quarter.lilypond().to_string(), "4.");
    assert_eq!(
        NoteLength::plain(BaseLength::Breve).lilypond().to_string(),
        "\\breve"
    );
}
