use super::{DecodeEvent, DecodeOptions, HeaderInfo, Tempo, TempoState, Ticked};
use crate::{UMicros, message::channel::EventInterpreter};

#[doc = r#"
Everything that persists from one event to the next during a decode.

One session belongs to one [`Decoder`](super::Decoder) and is dropped with it.

# Running time is file-wide

The tick counter is **not** reset when a new track chunk begins: every delta
time in the file, whatever track it is in, adds to the same counter. For a
format 1 file this means the second track's timestamps start where the first
track ended. This matches the behavior this decoder has always had; callers
that need per-track time should subtract the tick of the track's
[`ChunkDecoded`](DecodeEvent::ChunkDecoded) event.
"#]
#[derive(Debug, Clone)]
pub struct DecodeSession {
    ticks: u64,
    micros: f64,
    timing: TempoState,
    ticks_override: Option<u16>,
    interpreter: EventInterpreter,
}

impl DecodeSession {
    /// A fresh session at tick zero
    pub fn new(options: &DecodeOptions) -> Self {
        let tpqn = options
            .ticks_override()
            .unwrap_or(TempoState::DEFAULT_TICKS_PER_QUARTER_NOTE);
        Self {
            ticks: 0,
            micros: 0.,
            timing: TempoState::new(tpqn, options.tempo()),
            ticks_override: options.ticks_override(),
            interpreter: EventInterpreter::new(options.quantizer(), options.reports_rests()),
        }
    }

    /// Ticks since the start of the file
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Real time since the start of the file
    pub fn micros(&self) -> UMicros {
        UMicros::new((self.micros + 0.5) as u64)
    }

    /// The timing in force
    pub const fn timing(&self) -> &TempoState {
        &self.timing
    }

    pub(crate) fn interpreter(&mut self) -> (&mut EventInterpreter, &TempoState, u64) {
        (&mut self.interpreter, &self.timing, self.ticks)
    }

    /// Moves time forward by a delta, at the tempo in force before the move.
    pub(crate) fn advance(&mut self, delta: u32) {
        self.ticks += delta as u64;
        self.micros += self.timing.micros_for(delta as u64);
    }

    pub(crate) fn apply_header(&mut self, header: &HeaderInfo) {
        match self.ticks_override {
            Some(tpqn) => {
                tracing::debug!(
                    header = header.division_ticks(),
                    tpqn,
                    "ignoring header division in favor of override"
                );
            }
            None => self.timing.set_ticks_per_quarter_note(header.division_ticks()),
        }
    }

    pub(crate) fn set_tempo(&mut self, tempo: Tempo) {
        tracing::debug!(tick = self.ticks, %tempo, "tempo change");
        self.timing.set_tempo(tempo);
    }

    /// Stamps an event with the current time
    pub(crate) fn ticked<'a>(&self, event: DecodeEvent<'a>) -> Ticked<DecodeEvent<'a>> {
        Ticked::new(self.ticks, self.micros(), event)
    }
}
