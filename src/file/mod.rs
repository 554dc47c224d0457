#![doc = r#"
Decoding a Standard MIDI File

A [`Decoder`] walks the file's chunks in order. The header chunk sets the
division; each track chunk is handed to a [`TrackDecoder`]. Everything the
decoder finds comes out as a [`Ticked`] [`DecodeEvent`], stamped with the
file-wide tick count and the real time at that tick.

```rust
# use smfdump::prelude::*;
let bytes: &[u8] = &[
    0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    0x4D, 0x54, 0x72, 0x6B, 0, 0, 0, 4,
    0x00, 0xFF, 0x2F, 0x00,
];

let mut decoder = Decoder::new(bytes, DecodeOptions::new());
let header = decoder.next().unwrap().unwrap();
let DecodeEvent::ChunkDecoded(info) = header.event() else {
    panic!("the header comes first");
};
assert_eq!(info.header().map(|h| h.division_ticks()), Some(96));
assert_eq!(decoder.count(), 2);
```
"#]

mod chunk;
pub use chunk::*;

mod header;
pub use header::*;

mod meta;
pub use meta::*;

mod options;
pub use options::*;

mod session;
pub use session::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use alloc::{collections::VecDeque, vec::Vec};
use core::iter::FusedIterator;

use crate::{
    UMicros,
    message::channel::{ChannelEvent, Rest},
    reader::{DecodeError, DecodeErrorKind, DecodeResult, Reader},
};

/// Something the decoder found in the file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DecodeEvent<'a> {
    /// A chunk was entered
    ChunkDecoded(ChunkInfo),
    /// A Set-Tempo meta event; the new tempo applies from here on
    TempoChanged(Tempo),
    /// A SysEx event of `length` data bytes was skipped
    SysExSkipped {
        /// Data bytes skipped
        length: u32,
    },
    /// Any other meta event, End-Of-Track included
    Meta {
        /// The meta type byte
        meta_type: MetaType,
        /// The payload, borrowed from the file
        data: &'a [u8],
    },
    /// A channel message
    Channel(ChannelEvent),
    /// A gap before a Note-On, with [`DecodeOptions::report_rests`]
    Rest(Rest),
}

#[doc = r#"
An event with the time it occurred.

`accumulated_ticks` counts every delta time since the start of the file.
`micros` converts each delta at the tempo in force when it was read, so a
tempo change affects only what comes after it.
"#]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ticked<T> {
    accumulated_ticks: u64,
    micros: UMicros,
    event: T,
}

impl<T> Ticked<T> {
    /// Stamps an event
    pub const fn new(accumulated_ticks: u64, micros: UMicros, event: T) -> Self {
        Self {
            accumulated_ticks,
            micros,
            event,
        }
    }
    /// Ticks since the start of the file
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }
    /// Real time since the start of the file
    pub const fn micros(&self) -> UMicros {
        self.micros
    }
    /// The event
    pub const fn event(&self) -> &T {
        &self.event
    }
    /// Takes the event, dropping the time
    pub fn into_event(self) -> T {
        self.event
    }
}

#[doc = r#"
An iterator over the events of a MIDI file.

Chunks are decoded strictly in file order, one at a time, as the iterator is
advanced. The first error ends the iteration: it is yielded once and the
iterator returns `None` from then on.
"#]
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    reader: Reader<'a>,
    session: DecodeSession,
    track: Option<TrackDecoder<'a>>,
    pending: VecDeque<Ticked<DecodeEvent<'a>>>,
    finished: bool,
}

impl<'a> Decoder<'a> {
    /// Decode `bytes` with the given options
    pub fn new(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            reader: Reader::from_byte_slice(bytes),
            session: DecodeSession::new(&options),
            track: None,
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// The file-wide state so far
    pub fn session(&self) -> &DecodeSession {
        &self.session
    }

    /// Bytes of the file consumed by whole chunks so far
    pub fn buffer_position(&self) -> usize {
        self.reader.buffer_position()
    }

    fn advance(&mut self) -> DecodeResult<()> {
        if let Some(track) = self.track.as_mut().filter(|t| !t.is_terminated()) {
            return track.step(&mut self.session, &mut self.pending);
        }
        self.track = None;
        self.next_chunk()
    }

    fn next_chunk(&mut self) -> DecodeResult<()> {
        if self.reader.remaining() == 0 {
            self.finished = true;
            return Ok(());
        }

        let offset = self.reader.buffer_position();
        let available = self.reader.remaining();
        if available < ChunkInfo::HEADER_LEN {
            return Err(DecodeError::new(
                offset,
                DecodeErrorKind::TruncatedChunk {
                    declared: 0,
                    available,
                },
            ));
        }
        let tag = self.reader.read_u32_be()?;
        let length = self.reader.read_u32_be()?;

        let available = self.reader.remaining();
        if length as usize > available {
            return Err(DecodeError::new(
                offset,
                DecodeErrorKind::TruncatedChunk {
                    declared: length,
                    available,
                },
            ));
        }
        let kind = ChunkKind::try_from(tag)
            .map_err(|_| DecodeError::new(offset, DecodeErrorKind::UnknownChunkType(tag)))?;

        let payload_base = self.reader.buffer_position();
        let payload = self.reader.read_slice(length as usize)?;
        tracing::debug!(?kind, offset, length, "chunk");

        let header = match kind {
            ChunkKind::Header => {
                let header = HeaderInfo::parse(payload, payload_base)?;
                self.session.apply_header(&header);
                Some(header)
            }
            ChunkKind::Track => {
                self.track = Some(TrackDecoder::new(payload, payload_base));
                None
            }
        };

        self.pending
            .push_back(self.session.ticked(DecodeEvent::ChunkDecoded(ChunkInfo {
                kind,
                offset,
                length,
                header,
            })));
        Ok(())
    }
}

impl<'a> Iterator for Decoder<'a> {
    type Item = DecodeResult<Ticked<DecodeEvent<'a>>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }
            if self.finished {
                return None;
            }
            if let Err(e) = self.advance() {
                tracing::debug!(%e, "decode failed");
                self.finished = true;
                return Some(Err(e));
            }
        }
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decodes a whole file, stopping at the first error.
pub fn decode_all(
    bytes: &[u8],
    options: DecodeOptions,
) -> DecodeResult<Vec<Ticked<DecodeEvent<'_>>>> {
    Decoder::new(bytes, options).collect()
}
