#![doc = r#"
Structured MIDI messages decoded from track events
"#]

pub mod channel;
