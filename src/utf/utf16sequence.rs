use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;
use crate::utf::*;

pub struct Utf16Sequence {
    units: [u16; 2],
    is_surrogate: bool,
    is_paired: bool,
}

impl Utf for Utf16Sequence {
    type Point = u16;

    #[inline]
    fn get_codepoint(&self) -> u32 {
        let high = self.units[0] as u32;
        if self.is_paired {
            let low = self.units[1] as u32;
            ((high - 0xD800) * 0x400) + (low - 0xDC00) + 0x10000
        } else {
            high
        }
    }
    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if !self.is_surrogate || self.is_paired {
            return false;
        }
        if !(0xDC00..=0xDFFF).contains(&point) {
            return false;
        }
        self.units[1] = point;
        self.is_paired = true;
        true
    }
    #[inline]
    fn is_valid(&self) -> bool {
        let value = self.get_codepoint();
        if self.is_paired {
            matches!(value, 0x010000..=0x10FFFF) && is_valid_codepoint(value)
        } else {
            matches!(value, 0x0000..=0xD7FF | 0xE000..=0xFFFF) && is_valid_codepoint(value)
        }
    }
}

impl Utf16Sequence {
    #[inline]
    pub const fn new(unit: u16) -> Self {
        Self {
            units: [unit, 0],
            is_surrogate: matches!(unit, 0xD800..=0xDBFF),
            is_paired: false,
        }
    }
    pub const fn is_surrogate(&self) -> bool {
        self.is_surrogate
    }
    pub const fn lead(&self) -> u16 {
        self.units[0]
    }
}

pub(crate) fn decode(bytes: &[u8], endianness: Endianness) -> Result<Vec<u32>> {
    let encoding = encoding(endianness);
    let fail = |offset, reason| Error::decode(encoding, offset, reason);
    check_width(encoding, bytes, 2)?;
    let mut chars = Vec::with_capacity(bytes.len() / 2);
    let mut units = bytes
        .chunks_exact(2)
        .map(|pair| endianness.read_u16([pair[0], pair[1]]))
        .enumerate();
    while let Some((index, unit)) = units.next() {
        let mut sequence = Utf16Sequence::new(unit);
        if sequence.is_surrogate() {
            let (_, low) = units
                .next()
                .ok_or_else(|| fail(index * 2, DecodeReason::LoneSurrogate(unit)))?;
            if !sequence.add_point(low) {
                return Err(fail(index * 2, DecodeReason::LoneSurrogate(unit)));
            }
        }
        if !sequence.is_valid() {
            return Err(fail(index * 2, DecodeReason::LoneSurrogate(sequence.lead())));
        }
        chars.push(sequence.get_codepoint());
    }
    Ok(chars)
}

pub(crate) fn encode(chars: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
    let encoding = encoding(endianness);
    let mut bytes = Vec::with_capacity(chars.len() * 2);
    let mut buffer = [0u16; 2];
    for (index, &codepoint) in chars.iter().enumerate() {
        let scalar = to_scalar(encoding, index, codepoint)?;
        for unit in scalar.encode_utf16(&mut buffer) {
            bytes.extend_from_slice(&endianness.write_u16(*unit));
        }
    }
    Ok(bytes)
}

const fn encoding(endianness: Endianness) -> Encoding {
    match endianness {
        Endianness::BigEndian => Encoding::Utf16Be,
        Endianness::LittleEndian => Encoding::Utf16Le,
    }
}
