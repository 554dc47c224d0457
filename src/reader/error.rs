use thiserror::Error;

use crate::duration::DurationTooShort;

#[doc = r#"
A set of errors that can occur while decoding a MIDI file.

Every error is fatal: once a [`Decoder`](crate::file::Decoder) yields one,
it yields nothing else.
"#]
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct DecodeError {
    position: usize,
    pub(crate) kind: DecodeErrorKind,
}

/// A kind of error that the decoder can produce
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeErrorKind {
    /// Reading out of bounds.
    #[error("Read out of bounds!")]
    OutOfBounds,
    /// A chunk declares more payload than the buffer holds.
    ///
    /// `declared` is zero when the buffer ends inside the chunk's own
    /// eight-byte header.
    #[error("Chunk declares {declared} bytes but only {available} remain")]
    TruncatedChunk {
        /// Length from the chunk header
        declared: u32,
        /// Bytes left in the buffer after the chunk header
        available: usize,
    },
    /// A track ran past its payload before an End-Of-Track meta event.
    #[error("Track ended without an End-Of-Track event")]
    TruncatedTrack,
    /// The header uses SMPTE division.
    #[error("SMPTE timing is not supported")]
    UnsupportedTiming,
    /// A top-level chunk is neither `MThd` nor `MTrk`.
    #[error("Unknown chunk type: {0:08x}")]
    UnknownChunkType(u32),
    /// A status byte that is not a channel, SysEx or meta event.
    #[error("Unknown event type {0:02x}")]
    UnknownEventType(u8),
    /// A channel status whose high nibble names no voice message.
    #[error("Unknown MIDI event: {0:x}")]
    UnknownMidiEvent(u8),
    /// A duration remainder that no note length can represent.
    ///
    /// Only produced by [`Quantizer::strict`](crate::duration::Quantizer::strict).
    #[error("{0}")]
    DurationTooShort(#[from] DurationTooShort),
}

impl DecodeError {
    /// Create a decode error from a position and kind
    pub const fn new(position: usize, kind: DecodeErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if out of bounds or a truncated chunk/track
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(
            self.kind,
            DecodeErrorKind::OutOfBounds
                | DecodeErrorKind::TruncatedChunk { .. }
                | DecodeErrorKind::TruncatedTrack
        )
    }
    /// Returns the error kind.
    pub fn error_kind(&self) -> &DecodeErrorKind {
        &self.kind
    }
    /// Returns the absolute buffer offset where the error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: DecodeErrorKind::OutOfBounds,
        }
    }

    /// Rewrites an out of bounds error as a truncated track, keeping the position.
    pub(crate) fn into_truncated_track(self) -> Self {
        match self.kind {
            DecodeErrorKind::OutOfBounds => Self {
                position: self.position,
                kind: DecodeErrorKind::TruncatedTrack,
            },
            _ => self,
        }
    }
}

/// The Decode Result type (see [`DecodeError`])
pub type DecodeResult<T> = Result<T, DecodeError>;
