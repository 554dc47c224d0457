use core::fmt;

use crate::UMicros;

/// A tempo, in microseconds per quarter note.
///
/// Set-Tempo meta events carry this as a 24-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Tempo {
    /// 120 beats per minute, the tempo a file has until told otherwise
    pub const DEFAULT: Self = Self(500_000);

    /// A tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute. Zero for a zero tempo.
    pub fn beats_per_minute(&self) -> f64 {
        if self.0 == 0 {
            return 0.;
        }
        60_000_000. / self.0 as f64
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} us/quarter", self.0)
    }
}

#[doc = r#"
The timing parameters in force while decoding.

`ticks_per_quarter_note` comes from the header's division unless the caller
overrides it. The tempo changes whenever a Set-Tempo meta event is decoded
and only affects time computed afterwards: tick counts never depend on it.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoState {
    ticks_per_quarter_note: u16,
    tempo: Tempo,
}

impl Default for TempoState {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICKS_PER_QUARTER_NOTE, Tempo::DEFAULT)
    }
}

impl TempoState {
    /// Division assumed before a header has been read
    pub const DEFAULT_TICKS_PER_QUARTER_NOTE: u16 = 120;

    /// Timing from a division and a starting tempo
    pub const fn new(ticks_per_quarter_note: u16, tempo: Tempo) -> Self {
        Self {
            ticks_per_quarter_note,
            tempo,
        }
    }

    /// Ticks in one quarter note
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.ticks_per_quarter_note
    }

    /// The current tempo
    pub const fn tempo(&self) -> Tempo {
        self.tempo
    }

    pub(crate) fn set_ticks_per_quarter_note(&mut self, tpqn: u16) {
        self.ticks_per_quarter_note = tpqn;
    }

    pub(crate) fn set_tempo(&mut self, tempo: Tempo) {
        self.tempo = tempo;
    }

    /// Microseconds per tick at the current tempo, zero for a zero division
    pub fn micros_per_tick(&self) -> f64 {
        if self.ticks_per_quarter_note == 0 {
            return 0.;
        }
        // µs_per_tick = tempo_meta / TPQN
        self.tempo.micros_per_quarter_note() as f64 / self.ticks_per_quarter_note as f64
    }

    pub(crate) fn micros_for(&self, ticks: u64) -> f64 {
        if self.ticks_per_quarter_note == 0 {
            return 0.;
        }
        self.tempo.micros_per_quarter_note() as f64 * ticks as f64
            / self.ticks_per_quarter_note as f64
    }

    /// Real time spanned by `ticks` at the current tempo
    pub fn ticks_to_micros(&self, ticks: u64) -> UMicros {
        UMicros::new((self.micros_for(ticks) + 0.5) as u64)
    }

    /// `ticks` as a fraction of a whole note, four quarter notes.
    ///
    /// `None` for a zero division.
    pub fn whole_notes(&self, ticks: u64) -> Option<f32> {
        if self.ticks_per_quarter_note == 0 {
            return None;
        }
        Some(ticks as f32 / (4. * self.ticks_per_quarter_note as f32))
    }
}

#[test]
fn tick_conversions() {
    let state = TempoState::new(96, Tempo::DEFAULT);
    assert_eq!(state.whole_notes(96), Some(0.25));
    assert_eq!(state.whole_notes(576), Some(1.5));
    assert_eq!(state.ticks_to_micros(96), UMicros::new(500_000));
    assert_eq!(Tempo::DEFAULT.beats_per_minute(), 120.);
    assert_eq!(state.micros_per_tick(), 500_000. / 96.);
    assert_eq!(TempoState::new(100, Tempo::new(250_000)).micros_per_tick(), 2500.);

    let zero = TempoState::new(0, Tempo::DEFAULT);
    assert_eq!(zero.whole_notes(96), None);
    assert_eq!(zero.ticks_to_micros(96), UMicros::ZERO);
    assert_eq!(zero.micros_per_tick(), 0.);
}
