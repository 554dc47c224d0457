use alloc::collections::VecDeque;

use super::{DecodeEvent, DecodeSession, MetaType, Tempo, Ticked};
use crate::{
    message::channel::VoiceKind,
    reader::{DecodeError, DecodeErrorKind, DecodeResult, Reader},
};

#[doc = r#"
Walks the events of one `MTrk` payload.

Each step reads a delta time, adds it to the session's running tick count,
then reads one event:

- status `0x80..=0xEF`: a channel message with one data byte for Program
  Change and Channel Pressure and two otherwise
- `0xF0` / `0xF7`: a SysEx event, skipped by its length
- `0xFF`: a meta event; Set-Tempo updates the session tempo and End-Of-Track
  ends the track

Running status is not supported: every event must carry its status byte. A
data byte found where a status byte belongs is reported as
[`DecodeErrorKind::UnknownMidiEvent`].

The track must end with End-Of-Track. Running off the end of the payload
first is [`DecodeErrorKind::TruncatedTrack`].
"#]
#[derive(Debug, Clone)]
pub struct TrackDecoder<'a> {
    reader: Reader<'a>,
    terminated: bool,
}

impl<'a> TrackDecoder<'a> {
    /// A decoder over a track payload beginning `base` bytes into the file
    pub const fn new(payload: &'a [u8], base: usize) -> Self {
        Self {
            reader: Reader::with_base(payload, base),
            terminated: false,
        }
    }

    /// True once End-Of-Track has been read
    pub const fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Decodes the next event, pushing what it produced onto `out`.
    ///
    /// A Note-On may produce a rest before it; everything else produces
    /// exactly one event.
    pub fn step(
        &mut self,
        session: &mut DecodeSession,
        out: &mut VecDeque<Ticked<DecodeEvent<'a>>>,
    ) -> DecodeResult<()> {
        self.read_event(session, out)
            .map_err(DecodeError::into_truncated_track)
    }

    fn read_event(
        &mut self,
        session: &mut DecodeSession,
        out: &mut VecDeque<Ticked<DecodeEvent<'a>>>,
    ) -> DecodeResult<()> {
        let delta = self.reader.read_varlen()?;
        session.advance(delta.value());

        let status_position = self.reader.buffer_position();
        let status = self.reader.read_u8()?;

        match status {
            s if s & 0xF0 < 0xF0 => {
                let kind = VoiceKind::from_status(s)
                    .map_err(|k| DecodeError::new(status_position, k))?;
                let data = self.reader.read_slice(kind.data_len())?;

                let (interpreter, timing, now) = session.interpreter();
                let interpreted = interpreter
                    .interpret(kind, s, data, now, timing)
                    .map_err(|e| DecodeError::new(status_position, e.into()))?;

                if let Some(rest) = interpreted.rest {
                    out.push_back(session.ticked(DecodeEvent::Rest(rest)));
                }
                out.push_back(session.ticked(DecodeEvent::Channel(interpreted.event)));
            }
            0xF0 | 0xF7 => {
                let length = self.reader.read_varlen()?.value();
                self.reader.skip(length as usize)?;
                tracing::trace!(length, "skipping sysex");
                out.push_back(session.ticked(DecodeEvent::SysExSkipped { length }));
            }
            0xFF => {
                let meta_type = MetaType::from(self.reader.read_u8()?);
                let length = self.reader.read_varlen()?.value();

                if meta_type == MetaType::SetTempo {
                    let tempo = Tempo::new(self.reader.u24_be_at(self.reader.position())?);
                    self.reader.skip(length as usize)?;
                    session.set_tempo(tempo);
                    out.push_back(session.ticked(DecodeEvent::TempoChanged(tempo)));
                    return Ok(());
                }

                let data = self.reader.read_slice(length as usize)?;
                tracing::trace!(?meta_type, length, "meta event");
                if meta_type == MetaType::EndOfTrack {
                    self.terminated = true;
                }
                out.push_back(session.ticked(DecodeEvent::Meta { meta_type, data }));
            }
            other => {
                return Err(DecodeError::new(
                    status_position,
                    DecodeErrorKind::UnknownEventType(other),
                ));
            }
        }
        Ok(())
    }
}
