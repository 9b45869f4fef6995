pub(crate) mod utf16sequence;
pub(crate) mod utf32;
pub(crate) mod utf8sequence;

use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;

pub(crate) trait Utf {
    type Point;
    fn get_codepoint(&self) -> u32;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn is_valid(&self) -> bool {
        is_valid_codepoint(self.get_codepoint())
    }
}
pub(crate) const fn is_valid_codepoint(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_some()
}
/// Why `codepoint` is not a scalar value.
pub(crate) const fn invalid_reason(codepoint: u32) -> DecodeReason {
    if codepoint >= 0xD800 && codepoint <= 0xDFFF {
        DecodeReason::Surrogate(codepoint)
    } else {
        DecodeReason::OutOfRange(codepoint)
    }
}
/// Checks a code point handed to a UTF encoder.
pub(crate) fn to_scalar(encoding: Encoding, index: usize, codepoint: u32) -> Result<char> {
    char::from_u32(codepoint).ok_or_else(|| Error::encode(encoding, index, codepoint))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    pub(crate) const fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::BigEndian => u16::from_be_bytes(bytes),
            Self::LittleEndian => u16::from_le_bytes(bytes),
        }
    }
    pub(crate) const fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => u32::from_be_bytes(bytes),
            Self::LittleEndian => u32::from_le_bytes(bytes),
        }
    }
    pub(crate) const fn write_u16(self, value: u16) -> [u8; 2] {
        match self {
            Self::BigEndian => value.to_be_bytes(),
            Self::LittleEndian => value.to_le_bytes(),
        }
    }
    pub(crate) const fn write_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::BigEndian => value.to_be_bytes(),
            Self::LittleEndian => value.to_le_bytes(),
        }
    }
}

/// Fails unless `bytes` splits evenly into `width`-byte units.
pub(crate) fn check_width(encoding: Encoding, bytes: &[u8], width: usize) -> Result<()> {
    let rest = bytes.len() % width;
    if rest != 0 {
        return Err(Error::decode(
            encoding,
            bytes.len() - rest,
            DecodeReason::Length {
                len: bytes.len(),
                width,
            },
        ));
    }
    Ok(())
}
