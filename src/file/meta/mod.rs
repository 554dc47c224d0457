use num_enum::{FromPrimitive, IntoPrimitive};

#[doc = r#"
The type byte following `0xFF` in a meta event.

Meta events only carry information; apart from Set-Tempo and End-Of-Track
the decoder hands their payload through untouched.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00`
    SequenceNumber = 0x00,
    /// `FF 01`
    Text = 0x01,
    /// `FF 02`
    Copyright = 0x02,
    /// `FF 03`
    TrackName = 0x03,
    /// `FF 04`
    InstrumentName = 0x04,
    /// `FF 05`
    Lyric = 0x05,
    /// `FF 06`
    Marker = 0x06,
    /// `FF 07`
    CuePoint = 0x07,
    /// `FF 20`
    ChannelPrefix = 0x20,
    /// `FF 2F`, the last event of every track
    EndOfTrack = 0x2F,
    /// `FF 51`, a 24-bit microseconds per quarter note
    SetTempo = 0x51,
    /// `FF 54`
    SmpteOffset = 0x54,
    /// `FF 58`
    TimeSignature = 0x58,
    /// `FF 59`
    KeySignature = 0x59,
    /// `FF 7F`
    SequencerSpecific = 0x7F,
    /// Any other type byte
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl MetaType {
    /// True for the text-carrying types `0x01` through `0x07`
    pub fn is_text(&self) -> bool {
        matches!(u8::from(*self), 0x01..=0x07)
    }
}

#[test]
fn meta_type_bytes() {
    assert_eq!(MetaType::from(0x2F), MetaType::EndOfTrack);
    assert_eq!(MetaType::from(0x51), MetaType::SetTempo);
    assert_eq!(MetaType::from(0x60), MetaType::Unknown(0x60));
    assert_eq!(u8::from(MetaType::Unknown(0x60)), 0x60);
    assert!(MetaType::Lyric.is_text());
    assert!(!MetaType::SetTempo.is_text());
}
