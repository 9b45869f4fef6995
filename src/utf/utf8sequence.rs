use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;
use crate::utf::*;

#[derive(Copy, Clone)]
enum Utf8Type {
    Ascii,
    Western,
    Bmp,
    Other,
}

pub struct Utf8Sequence {
    utf8_type: Utf8Type,
    bytes: [u8; 4],
    current_length: u8,
}

impl Utf for Utf8Sequence {
    type Point = u8;
    #[inline]
    fn get_codepoint(&self) -> u32 {
        let mut codepoint = match self.utf8_type {
            Utf8Type::Ascii => return self.bytes[0] as u32,
            Utf8Type::Western => self.bytes[0] ^ 0b1100_0000,
            Utf8Type::Bmp => self.bytes[0] ^ 0b1110_0000,
            Utf8Type::Other => self.bytes[0] ^ 0b1111_0000,
        } as u32;
        for byte in &self.bytes[1..self.current_len()] {
            codepoint = (codepoint << 6) | ((byte ^ 0b10_000000) as u32);
        }
        codepoint
    }
    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if self.current_len() >= self.full_len() {
            return false;
        }
        if !(0x80..=0xBF).contains(&point) {
            return false;
        }
        self.bytes[self.current_len()] = point;
        self.current_length += 1;
        true
    }
    #[inline]
    fn is_valid(&self) -> bool {
        let codepoint = self.get_codepoint();
        if !is_valid_codepoint(codepoint) {
            return false;
        }
        self.shortest_form(codepoint)
    }
}

impl Utf8Sequence {
    #[inline]
    pub const fn build(byte: u8) -> Option<Self> {
        if (byte >= 0x80 && byte <= 0xBF) || Self::is_invalid(byte) {
            return None;
        }
        let utf8_type = match byte.leading_ones() {
            0 => Utf8Type::Ascii,
            2 => Utf8Type::Western,
            3 => Utf8Type::Bmp,
            4 => Utf8Type::Other,
            _ => return None,
        };
        Some(Self {
            utf8_type,
            bytes: [byte, 0, 0, 0],
            current_length: 1,
        })
    }
    pub const fn full_len(&self) -> usize {
        match self.utf8_type {
            Utf8Type::Ascii => 1,
            Utf8Type::Western => 2,
            Utf8Type::Bmp => 3,
            Utf8Type::Other => 4,
        }
    }
    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }
    pub const fn is_complete(&self) -> bool {
        self.current_len() == self.full_len()
    }
    const fn is_invalid(byte: u8) -> bool {
        matches!(byte, 0xC0 | 0xC1 | 0xF5..)
    }
    fn shortest_form(&self, codepoint: u32) -> bool {
        match self.utf8_type {
            Utf8Type::Ascii => (..=0x7F).contains(&codepoint),
            Utf8Type::Western => (0x80..=0x7FF).contains(&codepoint),
            Utf8Type::Bmp => (0x800..=0xFFFF).contains(&codepoint),
            Utf8Type::Other => (0x10000..=0x10FFFF).contains(&codepoint),
        }
    }
    fn invalid_reason(&self) -> DecodeReason {
        let codepoint = self.get_codepoint();
        if is_valid_codepoint(codepoint) {
            DecodeReason::Overlong(codepoint)
        } else {
            invalid_reason(codepoint)
        }
    }
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<u32>> {
    let fail = |offset, reason| Error::decode(Encoding::Utf8, offset, reason);
    let mut chars = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().enumerate();
    while let Some((start, lead)) = iter.next() {
        let mut sequence =
            Utf8Sequence::build(lead).ok_or_else(|| fail(start, DecodeReason::InvalidLeadByte(lead)))?;
        while !sequence.is_complete() {
            let (offset, byte) = iter.next().ok_or_else(|| fail(start, DecodeReason::Truncated))?;
            if !sequence.add_point(byte) {
                return Err(fail(offset, DecodeReason::InvalidContinuation(byte)));
            }
        }
        if !sequence.is_valid() {
            return Err(fail(start, sequence.invalid_reason()));
        }
        chars.push(sequence.get_codepoint());
    }
    Ok(chars)
}

pub(crate) fn encode(chars: &[u32]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(chars.len());
    let mut buffer = [0u8; 4];
    for (index, &codepoint) in chars.iter().enumerate() {
        let scalar = to_scalar(Encoding::Utf8, index, codepoint)?;
        bytes.extend_from_slice(scalar.encode_utf8(&mut buffer).as_bytes());
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(bytes: &[u8]) -> (usize, DecodeReason) {
        match decode(bytes) {
            Err(Error::Decode { offset, reason, .. }) => (offset, reason),
            other => panic!("expected decode error for {bytes:02X?}, got {other:?}"),
        }
    }

    #[test]
    fn decodes_every_length() {
        let text = "A\u{E9}\u{20AC}\u{1F600}";
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        assert_eq!(decode(text.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn sequence_reports_lengths() {
        let sequence = Utf8Sequence::build(0xF0).unwrap();
        assert_eq!(sequence.full_len(), 4);
        assert_eq!(sequence.current_len(), 1);
        assert!(Utf8Sequence::build(0x80).is_none());
        assert!(Utf8Sequence::build(0xC1).is_none());
        assert!(Utf8Sequence::build(0xF8).is_none());
    }

    #[test]
    fn rejects_bad_continuation() {
        assert_eq!(reason(&[0xC3, 0x41]), (1, DecodeReason::InvalidContinuation(0x41)));
        assert_eq!(reason(&[0x41, 0xE2, 0x82, 0xC0]), (3, DecodeReason::InvalidContinuation(0xC0)));
    }

    #[test]
    fn rejects_overlong() {
        assert_eq!(reason(&[0xE0, 0x80, 0xAF]), (0, DecodeReason::Overlong(0x2F)));
        assert_eq!(reason(&[0xF0, 0x8F, 0xBF, 0xBF]), (0, DecodeReason::Overlong(0xFFFF)));
    }

    #[test]
    fn rejects_surrogates_and_out_of_range() {
        assert_eq!(reason(&[0xED, 0xA0, 0x80]), (0, DecodeReason::Surrogate(0xD800)));
        assert_eq!(reason(&[0xF4, 0x90, 0x80, 0x80]), (0, DecodeReason::OutOfRange(0x110000)));
    }

    #[test]
    fn rejects_truncated_and_stray_bytes() {
        assert_eq!(reason(&[0x41, 0xF0, 0x9F, 0x98]), (1, DecodeReason::Truncated));
        assert_eq!(reason(&[0xBF]), (0, DecodeReason::InvalidLeadByte(0xBF)));
        assert_eq!(reason(&[0xFF]), (0, DecodeReason::InvalidLeadByte(0xFF)));
    }

    #[test]
    fn encode_rejects_non_scalars() {
        assert_eq!(encode(&[0x41, 0x1F600]).unwrap(), "A\u{1F600}".as_bytes());
        assert!(matches!(
            encode(&[0x41, 0xDC00]),
            Err(Error::Encode { index: 1, value: 0xDC00, .. })
        ));
        assert!(matches!(encode(&[0x110000]), Err(Error::Encode { index: 0, .. })));
    }
}
