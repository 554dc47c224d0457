#![doc = r#"
Top-level chunks

MIDI files are organized into chunks, each identified by a 4-character ASCII
type tag followed by a 32-bit length and then the payload.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
```

Only these two tags are accepted. A chunk with any other tag stops the
decode with [`DecodeErrorKind::UnknownChunkType`](crate::reader::DecodeErrorKind::UnknownChunkType);
it is not skipped.
"#]

use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::HeaderInfo;

/// The two chunk types a file may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum ChunkKind {
    /// `MThd`
    Header = 0x4D54_6864,
    /// `MTrk`
    Track = 0x4D54_726B,
}

impl ChunkKind {
    /// The ASCII tag as it appears in the file
    pub const fn tag(&self) -> [u8; 4] {
        (*self as u32).to_be_bytes()
    }
}

/// Announces a chunk as the decoder enters it.
///
/// For a track, this comes before any of the track's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkInfo {
    pub(crate) kind: ChunkKind,
    pub(crate) offset: usize,
    pub(crate) length: u32,
    pub(crate) header: Option<HeaderInfo>,
}

impl ChunkInfo {
    /// Bytes of tag and length before every chunk's payload
    pub const HEADER_LEN: usize = 8;

    /// Header or track
    pub const fn kind(&self) -> ChunkKind {
        self.kind
    }
    /// Offset of the chunk's tag in the file
    pub const fn offset(&self) -> usize {
        self.offset
    }
    /// Payload length, excluding the eight-byte tag and length
    pub const fn length(&self) -> u32 {
        self.length
    }
    /// Bytes the chunk occupies in the file
    pub const fn total_len(&self) -> usize {
        Self::HEADER_LEN + self.length as usize
    }
    /// The parsed header, for header chunks
    pub const fn header(&self) -> Option<&HeaderInfo> {
        self.header.as_ref()
    }
}

#[test]
fn chunk_tags() {
    assert_eq!(&ChunkKind::Header.tag(), b"MThd");
    assert_eq!(&ChunkKind::Track.tag(), b"MTrk");
    assert_eq!(ChunkKind::try_from(u32::from_be_bytes(*b"MTrk")), Ok(ChunkKind::Track));
    assert!(ChunkKind::try_from(u32::from_be_bytes(*b"XFIH")).is_err());
}
