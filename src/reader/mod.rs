#![doc = r#"
Bounds-checked reads over an immutable byte buffer.

MIDI files store every fixed-width integer big-endian. Delta times and event
lengths use a variable-length encoding (see [`VarLen`]).
"#]

mod error;
pub use error::*;

/// A variable-length quantity: seven data bits per byte, most significant
/// first, the top bit flagging that another byte follows.
///
/// At most four bytes are read, so the value holds at most 28 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarLen {
    value: u32,
    bytes_consumed: u8,
}

impl VarLen {
    /// The largest number of bytes a value may span.
    pub const MAX_BYTES: usize = 4;

    /// Decodes a value from the start of `bytes`.
    ///
    /// The fourth byte ends the value even when its continuation bit is set.
    /// Returns `None` if `bytes` ends before the value does.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let mut value = 0u32;
        for (i, byte) in bytes.iter().take(Self::MAX_BYTES).enumerate() {
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 || i + 1 == Self::MAX_BYTES {
                return Some(Self {
                    value,
                    bytes_consumed: i as u8 + 1,
                });
            }
        }
        None
    }

    /// Encodes `value` (masked to 28 bits) in the fewest bytes possible.
    ///
    /// Returns the buffer and the number of meaningful bytes in it.
    pub fn encode(value: u32) -> ([u8; 4], usize) {
        let value = value & 0x0FFF_FFFF;
        let mut len = 1;
        while len < Self::MAX_BYTES && value >> (7 * len) != 0 {
            len += 1;
        }
        let mut out = [0u8; 4];
        for (i, slot) in out.iter_mut().take(len).enumerate() {
            let shift = 7 * (len - 1 - i);
            let cont = if i + 1 < len { 0x80 } else { 0 };
            *slot = ((value >> shift) & 0x7F) as u8 | cont;
        }
        (out, len)
    }

    /// The decoded number
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// How many bytes the encoding took, 1 through 4
    pub const fn bytes_consumed(&self) -> usize {
        self.bytes_consumed as usize
    }
}

#[doc = r#"
A cursor over a borrowed byte slice.

Positions reported in errors are absolute: a reader created with
[`Reader::with_base`] over a chunk payload adds the payload's offset in the
whole file, so an error always points into the original buffer.
"#]
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    base: usize,
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Read from the start of a byte slice
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self::with_base(data, 0)
    }

    /// Read from a slice that begins `base` bytes into the whole buffer.
    pub const fn with_base(data: &'slc [u8], base: usize) -> Self {
        Self {
            data,
            base,
            position: 0,
        }
    }

    /// The cursor's offset relative to the start of this reader's slice
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The cursor's offset in the whole buffer
    pub const fn buffer_position(&self) -> usize {
        self.base + self.position
    }

    /// Bytes remaining after the cursor
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// The total length of this reader's slice
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the underlying slice is empty
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn bytes_at<const N: usize>(&self, offset: usize) -> DecodeResult<[u8; N]> {
        offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end))
            .and_then(|slc| slc.try_into().ok())
            .ok_or(DecodeError::oob(self.base + offset))
    }

    /// A single byte at `offset`
    pub fn u8_at(&self, offset: usize) -> DecodeResult<u8> {
        self.bytes_at::<1>(offset).map(|[b]| b)
    }

    /// A big-endian `u16` at `offset`
    pub fn u16_be_at(&self, offset: usize) -> DecodeResult<u16> {
        self.bytes_at(offset).map(u16::from_be_bytes)
    }

    /// A big-endian 24-bit value at `offset`, as used by Set-Tempo events
    pub fn u24_be_at(&self, offset: usize) -> DecodeResult<u32> {
        self.bytes_at::<3>(offset)
            .map(|[a, b, c]| u32::from_be_bytes([0, a, b, c]))
    }

    /// A big-endian `u32` at `offset`
    pub fn u32_be_at(&self, offset: usize) -> DecodeResult<u32> {
        self.bytes_at(offset).map(u32::from_be_bytes)
    }

    /// A variable-length value at `offset`, with the offset just past it
    pub fn varlen_at(&self, offset: usize) -> DecodeResult<(VarLen, usize)> {
        let tail = self.data.get(offset..).unwrap_or_default();
        match VarLen::decode(tail) {
            Some(v) => Ok((v, offset + v.bytes_consumed())),
            None => Err(DecodeError::oob(self.base + offset + tail.len())),
        }
    }

    /// `len` bytes at `offset`, borrowed from the buffer
    pub fn slice_at(&self, offset: usize, len: usize) -> DecodeResult<&'slc [u8]> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(DecodeError::oob(self.base + self.data.len().max(offset)))
    }

    /// Reads a byte and advances
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let v = self.u8_at(self.position)?;
        self.position += 1;
        Ok(v)
    }

    /// Reads a big-endian `u16` and advances
    pub fn read_u16_be(&mut self) -> DecodeResult<u16> {
        let v = self.u16_be_at(self.position)?;
        self.position += 2;
        Ok(v)
    }

    /// Reads a big-endian 24-bit value and advances
    pub fn read_u24_be(&mut self) -> DecodeResult<u32> {
        let v = self.u24_be_at(self.position)?;
        self.position += 3;
        Ok(v)
    }

    /// Reads a big-endian `u32` and advances
    pub fn read_u32_be(&mut self) -> DecodeResult<u32> {
        let v = self.u32_be_at(self.position)?;
        self.position += 4;
        Ok(v)
    }

    /// Reads a variable-length value and advances past it
    pub fn read_varlen(&mut self) -> DecodeResult<VarLen> {
        let (v, next) = self.varlen_at(self.position)?;
        self.position = next;
        Ok(v)
    }

    /// Borrows the next `len` bytes and advances
    pub fn read_slice(&mut self, len: usize) -> DecodeResult<&'slc [u8]> {
        let slc = self.slice_at(self.position, len)?;
        self.position += len;
        Ok(slc)
    }

    /// Advances `len` bytes without looking at them
    pub fn skip(&mut self, len: usize) -> DecodeResult<()> {
        self.read_slice(len).map(|_| ())
    }
}

#[test]
fn varlen_single_byte() {
    let v = VarLen::decode(&[0x40]).unwrap();
    assert_eq!(v.value(), 0x40);
    assert_eq!(v.bytes_consumed(), 1);
}

#[test]
fn varlen_reference_values() {
    // Values from the Standard MIDI File document
    let cases: &[(&[u8], u32)] = &[
        (&[0x00], 0x00),
        (&[0x7F], 0x7F),
        (&[0x81, 0x00], 0x80),
        (&[0xC0, 0x00], 0x2000),
        (&[0xFF, 0x7F], 0x3FFF),
        (&[0x81, 0x80, 0x00], 0x4000),
        (&[0xFF, 0xFF, 0x7F], 0x1F_FFFF),
        (&[0x81, 0x80, 0x80, 0x00], 0x20_0000),
        (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    ];
    for (bytes, expected) in cases {
        let v = VarLen::decode(bytes).unwrap();
        assert_eq!(v.value(), *expected);
        assert_eq!(v.bytes_consumed(), bytes.len());

        let (enc, len) = VarLen::encode(*expected);
        assert_eq!(&enc[..len], *bytes);
    }
}

#[test]
fn varlen_stops_after_four_bytes() {
    let v = VarLen::decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).unwrap();
    assert_eq!(v.bytes_consumed(), 4);
    assert_eq!(v.value(), 0x0FFF_FFFF);
}

#[test]
fn varlen_runs_out() {
    assert_eq!(VarLen::decode(&[0x81, 0x80]), None);
    let reader = Reader::with_base(&[0x81, 0x80], 10);
    assert_eq!(reader.varlen_at(0), Err(DecodeError::oob(12)));
}

#[test]
fn big_endian_reads() {
    let mut reader = Reader::from_byte_slice(&[0x12, 0x34, 0x56, 0x78, 0x07, 0xA1, 0x20]);
    assert_eq!(reader.u16_be_at(0), Ok(0x1234));
    assert_eq!(reader.u32_be_at(0), Ok(0x1234_5678));
    assert_eq!(reader.u24_be_at(4), Ok(500_000));
    assert_eq!(reader.u32_be_at(4), Err(DecodeError::oob(4)));

    assert_eq!(reader.read_u16_be(), Ok(0x1234));
    assert_eq!(reader.read_u8(), Ok(0x56));
    assert_eq!(reader.remaining(), 4);
    assert_eq!(reader.read_slice(5), Err(DecodeError::oob(7)));
    assert_eq!(reader.position(), 3);
}
