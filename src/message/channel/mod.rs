#![doc = r#"
Contains all Channel Message types

# Hierarchy
```text
                |-----------------|
                | Channel Message |
                |-----------------|
                 /               \
|-----------------------|   |----------------------|
| Channel Voice Message |   | Channel Mode Message |
|-----------------------|   |----------------------|
```

Mode messages share the Control Change status; they are reported as
[`VoiceMessage::ControlChange`] with a controller number from `0x78` up
(see [`VoiceMessage::is_channel_mode`]).
"#]

mod interpreter;
pub use interpreter::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{Note, duration::TiedDuration, names, reader::DecodeErrorKind};

/// One of the sixteen MIDI channels, from the low nibble of a status byte.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// The channel addressed by a status byte
    pub const fn from_status(status: u8) -> Self {
        use Channel::*;
        match status & 0x0F {
            0 => One,
            1 => Two,
            2 => Three,
            3 => Four,
            4 => Five,
            5 => Six,
            6 => Seven,
            7 => Eight,
            8 => Nine,
            9 => Ten,
            10 => Eleven,
            11 => Twelve,
            12 => Thirteen,
            13 => Fourteen,
            14 => Fifteen,
            _ => Sixteen,
        }
    }

    /// The low nibble, 0 through 15
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// The number musicians use, 1 through 16
    pub const fn number(&self) -> u8 {
        self.index() + 1
    }

    /// True for channel 10, which General MIDI reserves for percussion
    pub const fn is_percussion(&self) -> bool {
        matches!(self, Channel::Ten)
    }
}

/// The high nibble of a channel status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n`
    NoteOff = 0x8,
    /// `0x9n`
    NoteOn = 0x9,
    /// `0xAn`
    PolyPressure = 0xA,
    /// `0xBn`, also the channel mode messages
    ControlChange = 0xB,
    /// `0xCn`
    ProgramChange = 0xC,
    /// `0xDn`
    ChannelPressure = 0xD,
    /// `0xEn`
    PitchBend = 0xE,
}

impl VoiceKind {
    /// The kind named by a status byte.
    ///
    /// # Errors
    /// [`DecodeErrorKind::UnknownMidiEvent`] with the masked message type
    /// when the high nibble is below `0x8` or is `0xF`.
    pub fn from_status(status: u8) -> Result<Self, DecodeErrorKind> {
        Self::try_from(status >> 4).map_err(|_| DecodeErrorKind::UnknownMidiEvent(status & 0xF0))
    }

    /// Data bytes following the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }

    /// Human-readable name, e.g. `Note On`
    pub fn name(&self) -> &'static str {
        names::VOICE_MESSAGES[(u8::from(*self) - 0x8) as usize]
    }
}

/// The payload of a channel message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceMessage {
    /// A key released
    NoteOff {
        /// The key
        note: Note,
        /// Release velocity
        velocity: u8,
        /// Ticks since the channel's note start
        elapsed_ticks: u64,
        /// The elapsed time spelled as note lengths, when quantizing
        duration: Option<TiedDuration>,
    },
    /// A key pressed
    NoteOn {
        /// The key
        note: Note,
        /// Attack velocity. Zero is not reinterpreted as a release.
        velocity: u8,
    },
    /// Aftertouch on one key
    PolyPressure {
        /// The key
        note: Note,
        /// Pressure amount
        pressure: u8,
    },
    /// A controller or channel mode change
    ControlChange {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// A new instrument
    ProgramChange {
        /// Program number
        program: u8,
    },
    /// Aftertouch on the whole channel
    ChannelPressure {
        /// Pressure amount
        pressure: u8,
    },
    /// Pitch wheel position
    PitchBend {
        /// First data byte, low seven bits
        lsb: u8,
        /// Second data byte, high seven bits
        msb: u8,
    },
}

impl VoiceMessage {
    /// The kind of message
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::PolyPressure { .. } => VoiceKind::PolyPressure,
            Self::ControlChange { .. } => VoiceKind::ControlChange,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchBend { .. } => VoiceKind::PitchBend,
        }
    }

    /// The key, for note and key pressure messages
    pub const fn note(&self) -> Option<Note> {
        match self {
            Self::NoteOff { note, .. } | Self::NoteOn { note, .. } | Self::PolyPressure { note, .. } => {
                Some(*note)
            }
            _ => None,
        }
    }

    /// True for a Control Change in the channel mode range `0x78..=0x7F`
    pub const fn is_channel_mode(&self) -> bool {
        matches!(self, Self::ControlChange { controller: 0x78..=0x7F, .. })
    }

    /// The controller's name, for Control Change
    pub fn controller_name(&self) -> Option<&'static str> {
        match self {
            Self::ControlChange { controller, .. } => names::controller(*controller),
            _ => None,
        }
    }

    /// The General MIDI instrument, for Program Change
    pub fn instrument_name(&self) -> Option<&'static str> {
        match self {
            Self::ProgramChange { program } => names::instrument(*program),
            _ => None,
        }
    }

    /// The 14-bit wheel position, `0x2000` being centered, for Pitch Bend
    pub const fn bend(&self) -> Option<u16> {
        match self {
            Self::PitchBend { lsb, msb } => Some(((*msb as u16 & 0x7F) << 7) | (*lsb as u16 & 0x7F)),
            _ => None,
        }
    }
}

/// A channel message with the channel it addresses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    pub(crate) channel: Channel,
    pub(crate) message: VoiceMessage,
}

impl ChannelEvent {
    /// Pairs a message with a channel
    pub const fn new(channel: Channel, message: VoiceMessage) -> Self {
        Self { channel, message }
    }
    /// The addressed channel
    pub const fn channel(&self) -> Channel {
        self.channel
    }
    /// The message
    pub const fn message(&self) -> &VoiceMessage {
        &self.message
    }
}

#[test]
fn voice_kinds() {
    assert_eq!(VoiceKind::from_status(0x93), Ok(VoiceKind::NoteOn));
    assert_eq!(VoiceKind::from_status(0xC5).map(|k| k.data_len()), Ok(1));
    assert_eq!(VoiceKind::from_status(0xE0).map(|k| k.data_len()), Ok(2));
    assert_eq!(
        VoiceKind::from_status(0x40),
        Err(DecodeErrorKind::UnknownMidiEvent(0x40))
    );
    assert_eq!(VoiceKind::PolyPressure.name(), "Polyphonic Key Pressure");
}

#[test]
fn channel_nibbles() {
    assert_eq!(Channel::from_status(0x99), Channel::Ten);
    assert!(Channel::from_status(0x99).is_percussion());
    assert_eq!(Channel::from_status(0x8F).number(), 16);
    assert_eq!(Channel::One.index(), 0);
}

#[test]
fn message_helpers() {
    let bend = VoiceMessage::PitchBend { lsb: 0x00, msb: 0x40 };
    assert_eq!(bend.bend(), Some(0x2000));

    let all_notes_off = VoiceMessage::ControlChange {
        controller: 0x7B,
        value: 0,
    };
    assert!(all_notes_off.is_channel_mode());
    assert_eq!(all_notes_off.controller_name(), Some("Mode: All Notes Off"));

    let volume = VoiceMessage::ControlChange {
        controller: 7,
        value: 100,
    };
    assert!(!volume.is_channel_mode());

    let piano = VoiceMessage::ProgramChange { program: 0 };
    assert_eq!(piano.instrument_name(), Some("Acoustic Grand Piano"));
}
