use core::fmt;

use crate::names;

#[doc = r#"
Identifies a key for some message.

Keys are the first data byte of note and key-pressure messages.

Each value corresponds to some [`Key`] (pitch class, `byte % 12`) and
[`Octave`] (`byte / 12`), so middle C, byte `60`, is `C5`.

# Example
```rust
# use smfdump::prelude::*;

let note = Note::from_byte(63);

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(5));
assert_eq!(note.to_string(), "D#5");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note(u8);

impl Note {
    /// Wraps a key byte as read from the file.
    ///
    /// The byte is not checked for a clear top bit; malformed files are
    /// decoded as they are.
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Create a note from a given key and octave
    pub const fn new(key: Key, octave: Octave) -> Self {
        Self(octave.value() * 12 + key.get_mod_12())
    }

    /// Identifies the pitch class of the note
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_byte(self.0)
    }

    /// Returns true if the key of the note is sharp.
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        self.key().is_sharp()
    }

    /// Identifies the octave of the note
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave(self.0 / 12)
    }

    /// The General MIDI percussion name, for notes on channel 10.
    pub fn drum_name(&self) -> Option<&'static str> {
        names::drum(self.0)
    }

    /// Returns the underlying byte of the note
    pub const fn byte(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[test]
fn test_note() {
    let c = Note::from_byte(12);
    assert_eq!(Key::C, c.key());

    let a_sharp = Note::from_byte(94);
    assert_eq!(Key::ASharp, a_sharp.key());
}

#[test]
fn test_octave() {
    assert_eq!(1, Note::from_byte(12).octave().value());
    assert_eq!(7, Note::from_byte(94).octave().value());
    assert_eq!(0, Note::from_byte(11).octave().value());
}

#[test]
fn note_from_key_octave_pairs() {
    for byte in 0..128 {
        let note = Note::from_byte(byte);
        assert_eq!(note, Note::new(note.key(), note.octave()));
    }
}

#[test]
fn drum_names() {
    assert_eq!(Note::from_byte(38).drum_name(), Some("Acoustic Snare"));
    assert_eq!(Note::from_byte(60).drum_name(), Some("Hi Bongo"));
    assert_eq!(Note::from_byte(20).drum_name(), None);
}

#[test]
fn keys_build_notes() {
    use alloc::string::ToString;

    let middle_c = Key::C.with_octave(Octave::new(5));
    assert_eq!(middle_c.byte(), 60);
    assert_eq!(Key::FSharp.with_octave(Octave::new(2)).to_string(), "F#2");
    assert!(Key::FSharp.with_octave(Octave::new(2)).is_sharp());
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
The pitch class of a [`Note`]
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}
impl Key {
    /// Returns true if the key is sharp.
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Identify the pitch class from a key byte.
    #[inline]
    pub const fn from_byte(key: u8) -> Self {
        use Key::*;
        match key % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }

    const fn get_mod_12(&self) -> u8 {
        *self as u8
    }

    /// The sharp spelling of this pitch class
    pub const fn name(&self) -> &'static str {
        names::NOTE_NAMES[self.get_mod_12() as usize]
    }

    /// Create a [`Note`] given this key and a provided [`Octave`]
    pub const fn with_octave(self, octave: Octave) -> Note {
        Note::new(self, octave)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[doc = r#"
Identifies the octave of a [`Note`]: the key byte divided by twelve.

Octaves count from 0, so key byte `0` is `C0` and middle C is `C5`.
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(u8);

impl Octave {
    /// Clamps to 0 through 10, the octaves a 7-bit key can reach.
    pub const fn new(octave: u8) -> Self {
        if octave > 10 { Self(10) } else { Self(octave) }
    }

    /// The octave number
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
