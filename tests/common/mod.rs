#![allow(dead_code)]

use smfdump::prelude::*;

/// Assembles MIDI files in memory.
#[derive(Default)]
pub struct SmfBuilder {
    bytes: Vec<u8>,
}

impl SmfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(self, format: u16, tracks: u16, division: u16) -> Self {
        let mut payload = Vec::new();
        payload.extend_from_slice(&format.to_be_bytes());
        payload.extend_from_slice(&tracks.to_be_bytes());
        payload.extend_from_slice(&division.to_be_bytes());
        self.chunk(b"MThd", &payload)
    }

    pub fn track(self, events: &[u8]) -> Self {
        self.chunk(b"MTrk", events)
    }

    pub fn chunk(mut self, tag: &[u8; 4], payload: &[u8]) -> Self {
        self.bytes.extend_from_slice(tag);
        self.bytes
            .extend_from_slice(&(payload.len() as u32).to_be_bytes());
        self.bytes.extend_from_slice(payload);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// A delta time followed by event bytes
pub fn event(delta: u32, bytes: &[u8]) -> Vec<u8> {
    let (enc, len) = VarLen::encode(delta);
    let mut out = enc[..len].to_vec();
    out.extend_from_slice(bytes);
    out
}

pub const END_OF_TRACK: [u8; 3] = [0xFF, 0x2F, 0x00];

pub fn set_tempo(micros: u32) -> [u8; 6] {
    let [_, a, b, c] = micros.to_be_bytes();
    [0xFF, 0x51, 0x03, a, b, c]
}

/// Concatenates events into a track payload
pub fn track(events: &[Vec<u8>]) -> Vec<u8> {
    events.concat()
}

pub fn decode(bytes: &[u8], options: DecodeOptions) -> Vec<Ticked<DecodeEvent<'_>>> {
    decode_all(bytes, options).unwrap()
}

pub fn first_error(bytes: &[u8]) -> DecodeError {
    Decoder::new(bytes, DecodeOptions::new())
        .find_map(Result::err)
        .expect("decoding should fail")
}

pub fn channel_events<'a, 'b>(
    events: &'b [Ticked<DecodeEvent<'a>>],
) -> Vec<(u64, &'b ChannelEvent)> {
    events
        .iter()
        .filter_map(|e| match e.event() {
            DecodeEvent::Channel(c) => Some((e.accumulated_ticks(), c)),
            _ => None,
        })
        .collect()
}
