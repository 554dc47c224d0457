use super::{Channel, ChannelEvent, VoiceKind, VoiceMessage};
use crate::{
    Note,
    duration::{DurationTooShort, Quantizer, TiedDuration},
    file::TempoState,
};

/// A silence on one channel, reported before the Note-On that ends it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rest {
    /// The silent channel
    pub channel: Channel,
    /// Ticks since the channel's last note started or ended
    pub elapsed_ticks: u64,
    /// The rest spelled as note lengths, when quantizing
    pub duration: Option<TiedDuration>,
}

/// What one channel message decoded to.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpreted {
    /// A rest preceding the event, when rests are reported
    pub rest: Option<Rest>,
    /// The event itself
    pub event: ChannelEvent,
}

#[doc = r#"
Turns channel status and data bytes into [`ChannelEvent`]s.

Keeps one start tick per channel, set by every Note-On. A Note-Off reports
the ticks since its channel's start; with rests reported the Note-Off moves
the start too, so the next Note-On can measure the gap.

The start is per channel, not per key: overlapping notes on one channel
measure from the most recent Note-On.
"#]
#[derive(Debug, Clone)]
pub struct EventInterpreter {
    note_starts: [u64; 16],
    quantizer: Option<Quantizer>,
    report_rests: bool,
}

impl EventInterpreter {
    /// An interpreter with every channel starting at tick zero
    pub const fn new(quantizer: Option<Quantizer>, report_rests: bool) -> Self {
        Self {
            note_starts: [0; 16],
            quantizer,
            report_rests,
        }
    }

    /// The tick of the last note start on `channel`
    pub const fn note_start(&self, channel: Channel) -> u64 {
        self.note_starts[channel.index() as usize]
    }

    /// Decodes one message.
    ///
    /// `data` holds the [`VoiceKind::data_len`] bytes after the status byte;
    /// missing bytes read as zero. `now` is the message's absolute tick.
    pub fn interpret(
        &mut self,
        kind: VoiceKind,
        status: u8,
        data: &[u8],
        now: u64,
        timing: &TempoState,
    ) -> Result<Interpreted, DurationTooShort> {
        let channel = Channel::from_status(status);
        let d0 = data.first().copied().unwrap_or_default();
        let d1 = data.get(1).copied().unwrap_or_default();
        let start = &mut self.note_starts[channel.index() as usize];
        let mut rest = None;

        let message = match kind {
            VoiceKind::NoteOn => {
                if self.report_rests && now > *start {
                    let elapsed_ticks = now - *start;
                    rest = Some(Rest {
                        channel,
                        elapsed_ticks,
                        duration: spell(self.quantizer, timing, elapsed_ticks)?,
                    });
                }
                *start = now;
                VoiceMessage::NoteOn {
                    note: Note::from_byte(d0),
                    velocity: d1,
                }
            }
            VoiceKind::NoteOff => {
                let elapsed_ticks = now.saturating_sub(*start);
                if self.report_rests {
                    *start = now;
                }
                VoiceMessage::NoteOff {
                    note: Note::from_byte(d0),
                    velocity: d1,
                    elapsed_ticks,
                    duration: spell(self.quantizer, timing, elapsed_ticks)?,
                }
            }
            VoiceKind::PolyPressure => VoiceMessage::PolyPressure {
                note: Note::from_byte(d0),
                pressure: d1,
            },
            VoiceKind::ControlChange => VoiceMessage::ControlChange {
                controller: d0,
                value: d1,
            },
            VoiceKind::ProgramChange => VoiceMessage::ProgramChange { program: d0 },
            VoiceKind::ChannelPressure => VoiceMessage::ChannelPressure { pressure: d0 },
            VoiceKind::PitchBend => VoiceMessage::PitchBend { lsb: d0, msb: d1 },
        };

        Ok(Interpreted {
            rest,
            event: ChannelEvent::new(channel, message),
        })
    }
}

fn spell(
    quantizer: Option<Quantizer>,
    timing: &TempoState,
    ticks: u64,
) -> Result<Option<TiedDuration>, DurationTooShort> {
    let Some(quantizer) = quantizer else {
        return Ok(None);
    };
    let Some(whole_notes) = timing.whole_notes(ticks) else {
        tracing::warn!(ticks, "division is zero, durations cannot be spelled");
        return Ok(None);
    };
    quantizer.quantize(whole_notes).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::Tempo;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    const TIMING: TempoState = TempoState::new(96, Tempo::DEFAULT);

    fn run(interp: &mut EventInterpreter, bytes: [u8; 3], now: u64) -> Interpreted {
        let kind = VoiceKind::from_status(bytes[0]).unwrap();
        interp
            .interpret(kind, bytes[0], &bytes[1..1 + kind.data_len()], now, &TIMING)
            .unwrap()
    }

    #[test]
    fn note_off_measures_from_note_on() {
        let mut interp = EventInterpreter::new(Some(Quantizer::new()), false);
        run(&mut interp, [0x90, 60, 64], 10);
        let off = run(&mut interp, [0x80, 60, 64], 106);

        let VoiceMessage::NoteOff {
            note,
            elapsed_ticks,
            duration,
            ..
        } = off.event.message()
        else {
            panic!("expected a note off");
        };
        assert_eq!(note.to_string(), "C5");
        assert_eq!(*elapsed_ticks, 96);
        assert_eq!(duration.as_ref().map(|d| d.to_string()).as_deref(), Some("1/4"));
    }

    #[test]
    fn channels_are_independent() {
        let mut interp = EventInterpreter::new(None, false);
        run(&mut interp, [0x90, 60, 64], 0);
        run(&mut interp, [0x91, 64, 64], 50);
        assert_eq!(interp.note_start(Channel::One), 0);
        assert_eq!(interp.note_start(Channel::Two), 50);

        let off = run(&mut interp, [0x80, 60, 0], 192);
        assert_eq!(
            off.event.message(),
            &VoiceMessage::NoteOff {
                note: Note::from_byte(60),
                velocity: 0,
                elapsed_ticks: 192,
                duration: None,
            }
        );
    }

    #[test]
    fn rests_between_notes() {
        let mut interp = EventInterpreter::new(Some(Quantizer::new()), true);
        assert_eq!(run(&mut interp, [0x90, 60, 64], 0).rest, None);
        run(&mut interp, [0x80, 60, 64], 96);
        let on = run(&mut interp, [0x90, 62, 64], 144);

        let rest = on.rest.unwrap();
        assert_eq!(rest.channel, Channel::One);
        assert_eq!(rest.elapsed_ticks, 48);
        assert_eq!(rest.duration.unwrap().to_string(), "1/8");
    }

    #[test]
    fn other_messages() {
        let mut interp = EventInterpreter::new(None, false);
        let cc = run(&mut interp, [0xB3, 0x78, 0], 0).event;
        assert_eq!(cc.channel(), Channel::Four);
        assert!(cc.message().is_channel_mode());

        let pc = run(&mut interp, [0xC0, 40, 0], 0).event;
        assert_eq!(pc.message(), &VoiceMessage::ProgramChange { program: 40 });
        assert_eq!(pc.message().instrument_name(), Some("Violin"));

        let bend = run(&mut interp, [0xE0, 0x7F, 0x7F], 0).event;
        assert_eq!(bend.message().bend(), Some(0x3FFF));

        let pressure = run(&mut interp, [0xD2, 0x33, 0], 0).event;
        assert_eq!(
            pressure.message(),
            &VoiceMessage::ChannelPressure { pressure: 0x33 }
        );
    }

    #[test]
    fn strict_quantizer_fails_on_tiny_notes() {
        let mut interp = EventInterpreter::new(Some(Quantizer::strict()), false);
        run(&mut interp, [0x90, 60, 64], 0);
        // one tick at 96 per quarter is 1/384 of a whole note
        let err = interp
            .interpret(VoiceKind::NoteOff, 0x80, &[60, 0], 1, &TIMING)
            .unwrap_err();
        assert_eq!(err, DurationTooShort(1. / 384.));
    }
}
