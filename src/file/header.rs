use num_enum::{FromPrimitive, IntoPrimitive};

use crate::reader::{DecodeError, DecodeErrorKind, DecodeResult, Reader};

#[doc = r#"
The track layout a header declares.

Format 0 files have only one track. Format 1 files have multiple tracks
played simultaneously. Format 2 files have multiple tracks played one after
another. Any other value is kept as [`Format::Unknown`].
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Format {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
    /// Some other number
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// How delta times are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DivisionType {
    /// Division bit 15 clear: ticks per quarter note
    TicksPerQuarterNote,
    /// Division bit 15 set: SMPTE frames and ticks per frame
    Smpte,
}

#[doc = r#"
The contents of an `MThd` chunk.

```text
format       u16
track count  u16
division     u16   bit 15: division type, bits 0-14: ticks per quarter note
```

Bytes beyond the first six are ignored, as the file format asks of readers.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderInfo {
    format: Format,
    track_count: u16,
    division_ticks: u16,
    division_type: DivisionType,
}

impl HeaderInfo {
    /// The number of header bytes that are read
    pub const LEN: usize = 6;

    /// A header with ticks-per-quarter-note division
    pub const fn new(format: Format, track_count: u16, division_ticks: u16) -> Self {
        Self {
            format,
            track_count,
            division_ticks: division_ticks & 0x7FFF,
            division_type: DivisionType::TicksPerQuarterNote,
        }
    }

    /// Parses a header chunk payload that begins `base` bytes into the file.
    ///
    /// # Errors
    /// - [`DecodeErrorKind::OutOfBounds`] if the payload is shorter than six bytes
    /// - [`DecodeErrorKind::UnsupportedTiming`] for SMPTE division
    pub fn parse(payload: &[u8], base: usize) -> DecodeResult<Self> {
        let reader = Reader::with_base(payload, base);
        let format = Format::from(reader.u16_be_at(0)?);
        let track_count = reader.u16_be_at(2)?;
        let division = reader.u16_be_at(4)?;

        if division >> 15 != 0 {
            return Err(DecodeError::new(
                base + 4,
                DecodeErrorKind::UnsupportedTiming,
            ));
        }

        Ok(Self::new(format, track_count, division))
    }

    /// The declared track layout
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The declared number of track chunks. Not checked against the file.
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Ticks per quarter note
    pub const fn division_ticks(&self) -> u16 {
        self.division_ticks
    }

    /// Always [`DivisionType::TicksPerQuarterNote`] for a parsed header
    pub const fn division_type(&self) -> DivisionType {
        self.division_type
    }
}

#[test]
fn parse_header() {
    let header = HeaderInfo::parse(&[0, 1, 0, 3, 0x01, 0xE0], 8).unwrap();
    assert_eq!(header.format(), Format::Simultaneous);
    assert_eq!(header.track_count(), 3);
    assert_eq!(header.division_ticks(), 480);
}

#[test]
fn header_ignores_extra_bytes() {
    let header = HeaderInfo::parse(&[0, 0, 0, 1, 0, 96, 0xAA, 0xBB], 8).unwrap();
    assert_eq!(header, HeaderInfo::new(Format::SingleMultiChannel, 1, 96));
}

#[test]
fn header_unknown_format_kept() {
    let header = HeaderInfo::parse(&[0, 7, 0, 1, 0, 96], 8).unwrap();
    assert_eq!(header.format(), Format::Unknown(7));
}

#[test]
fn header_rejects_smpte() {
    // -25 fps, 40 ticks per frame
    let err = HeaderInfo::parse(&[0, 0, 0, 1, 0xE7, 0x28], 8).unwrap_err();
    assert_eq!(err.error_kind(), &DecodeErrorKind::UnsupportedTiming);
    assert_eq!(err.position(), 12);
}

#[test]
fn header_too_short() {
    let err = HeaderInfo::parse(&[0, 0, 0, 1], 8).unwrap_err();
    assert_eq!(err, DecodeError::oob(12));
}
