use super::Tempo;
use crate::duration::Quantizer;

#[doc = r#"
Settings for one decode.

```rust
# use smfdump::prelude::*;
let options = DecodeOptions::new()
    .ticks_per_quarter_note(Some(480))
    .quantize(true)
    .report_rests(true);

assert_eq!(options.ticks_override(), Some(480));
assert!(options.quantizer().is_some());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeOptions {
    ticks_per_quarter_note: Option<u16>,
    tempo: Tempo,
    quantize: bool,
    strict_durations: bool,
    report_rests: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeOptions {
    /// Header division, default tempo, no quantizing, no rests
    pub const fn new() -> Self {
        Self {
            ticks_per_quarter_note: None,
            tempo: Tempo::DEFAULT,
            quantize: false,
            strict_durations: false,
            report_rests: false,
        }
    }

    /// Use this division instead of the header's
    pub const fn ticks_per_quarter_note(mut self, tpqn: Option<u16>) -> Self {
        self.ticks_per_quarter_note = tpqn;
        self
    }

    /// The tempo before any Set-Tempo event
    pub const fn default_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = tempo;
        self
    }

    /// Spell every Note-Off's duration as note lengths
    pub const fn quantize(mut self, quantize: bool) -> Self {
        self.quantize = quantize;
        self
    }

    /// Fail on durations the note lengths cannot spell instead of
    /// dropping the remainder. Implies [`DecodeOptions::quantize`].
    pub const fn strict_durations(mut self, strict: bool) -> Self {
        self.strict_durations = strict;
        if strict {
            self.quantize = true;
        }
        self
    }

    /// Report the gap before each Note-On as a rest.
    ///
    /// Gaps are measured from the channel's last Note-On or Note-Off.
    pub const fn report_rests(mut self, report: bool) -> Self {
        self.report_rests = report;
        self
    }

    /// The division override, if any
    pub const fn ticks_override(&self) -> Option<u16> {
        self.ticks_per_quarter_note
    }

    /// The starting tempo
    pub const fn tempo(&self) -> Tempo {
        self.tempo
    }

    /// True if rests are reported
    pub const fn reports_rests(&self) -> bool {
        self.report_rests
    }

    /// The quantizer to use, if durations are quantized
    pub const fn quantizer(&self) -> Option<Quantizer> {
        match (self.quantize, self.strict_durations) {
            (false, _) => None,
            (true, false) => Some(Quantizer::new()),
            (true, true) => Some(Quantizer::strict()),
        }
    }
}
