#![doc = r#"
A decoder for Standard MIDI Files that turns a byte buffer into a stream of
musical events, and can spell note durations the way a score would
(`1/4`, `1/8 .`, `1/1 . ~ 1/4`).

# Example
```rust
use smfdump::prelude::*;

let bytes: &[u8] = &[
    // MThd, length 6, format 0, one track, 96 ticks per quarter note
    0x4D, 0x54, 0x68, 0x64, 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    // MTrk, length 12
    0x4D, 0x54, 0x72, 0x6B, 0, 0, 0, 12,
    0x00, 0x90, 60, 64, // note on
    0x60, 0x80, 60, 64, // note off, 96 ticks later
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

let events = decode_all(bytes, DecodeOptions::new().quantize(true)).unwrap();
let off = events
    .iter()
    .find_map(|e| match e.event() {
        DecodeEvent::Channel(c) => match c.message() {
            VoiceMessage::NoteOff { duration, .. } => duration.clone(),
            _ => None,
        },
        _ => None,
    })
    .unwrap();

assert_eq!(off.to_string(), "1/4");
```
"#]
#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod duration;
pub mod file;
pub mod message;
pub mod names;
pub mod reader;

mod micros;
pub use micros::*;

mod note;
pub use note::*;

#[doc = r#"
Commonly used types, re-exported in one place.
"#]
pub mod prelude {
    pub use crate::{
        Key, Note, Octave, UMicros,
        duration::{NoteLength, Quantizer, TiedDuration},
        file::{
            ChunkInfo, ChunkKind, DecodeEvent, DecodeOptions, Decoder, Format, HeaderInfo,
            MetaType, Tempo, TempoState, Ticked, decode_all,
        },
        message::channel::{Channel, ChannelEvent, Rest, VoiceKind, VoiceMessage},
        reader::{DecodeError, DecodeErrorKind, DecodeResult, Reader, VarLen},
    };
}
