//! Fixed-width unsigned integer codecs. Values carry no Unicode meaning here,
//! they only have to fit the width.

use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;
use crate::utf::{check_width, Endianness};

pub(crate) fn decode_u7(bytes: &[u8]) -> Result<Vec<u32>> {
    if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::decode(
            Encoding::Uint7,
            offset,
            DecodeReason::NotSevenBit(bytes[offset]),
        ));
    }
    Ok(decode_u8(bytes))
}

pub(crate) fn decode_u8(bytes: &[u8]) -> Vec<u32> {
    bytes.iter().map(|&b| u32::from(b)).collect()
}

pub(crate) fn decode_u16(bytes: &[u8], endianness: Endianness) -> Result<Vec<u32>> {
    check_width(u16_encoding(endianness), bytes, 2)?;
    Ok(bytes
        .chunks_exact(2)
        .map(|unit| u32::from(endianness.read_u16([unit[0], unit[1]])))
        .collect())
}

pub(crate) fn decode_u32(bytes: &[u8], endianness: Endianness) -> Result<Vec<u32>> {
    check_width(u32_encoding(endianness), bytes, 4)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|unit| endianness.read_u32([unit[0], unit[1], unit[2], unit[3]]))
        .collect())
}

pub(crate) fn encode_u7(chars: &[u32]) -> Result<Vec<u8>> {
    narrow(chars, Encoding::Uint7, 0x7F)
}

pub(crate) fn encode_u8(chars: &[u32]) -> Result<Vec<u8>> {
    narrow(chars, Encoding::Uint8, 0xFF)
}

pub(crate) fn encode_u16(chars: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
    let encoding = u16_encoding(endianness);
    let mut bytes = Vec::with_capacity(chars.len() * 2);
    for (index, &value) in chars.iter().enumerate() {
        let unit = u16::try_from(value).map_err(|_| Error::encode(encoding, index, value))?;
        bytes.extend_from_slice(&endianness.write_u16(unit));
    }
    Ok(bytes)
}

pub(crate) fn encode_u32(chars: &[u32], endianness: Endianness) -> Vec<u8> {
    chars
        .iter()
        .flat_map(|&value| endianness.write_u32(value))
        .collect()
}

fn narrow(chars: &[u32], encoding: Encoding, max: u32) -> Result<Vec<u8>> {
    chars
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value <= max {
                Ok(value as u8)
            } else {
                Err(Error::encode(encoding, index, value))
            }
        })
        .collect()
}

const fn u16_encoding(endianness: Endianness) -> Encoding {
    match endianness {
        Endianness::BigEndian => Encoding::Uint16Be,
        Endianness::LittleEndian => Encoding::Uint16Le,
    }
}

const fn u32_encoding(endianness: Endianness) -> Encoding {
    match endianness {
        Endianness::BigEndian => Encoding::Uint32Be,
        Endianness::LittleEndian => Encoding::Uint32Le,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_bit_rejects_high_bytes() {
        assert_eq!(decode_u7(b"Az\x7F").unwrap(), vec![0x41, 0x7A, 0x7F]);
        assert!(matches!(
            decode_u7(&[0x41, 0x80]),
            Err(Error::Decode {
                offset: 1,
                reason: DecodeReason::NotSevenBit(0x80),
                ..
            })
        ));
        assert!(matches!(
            encode_u7(&[0x41, 0x80]),
            Err(Error::Encode {
                encoding: Encoding::Uint7,
                index: 1,
                value: 0x80,
            })
        ));
    }

    #[test]
    fn eight_bit_accepts_everything() {
        let all: Vec<u8> = (0..=255).collect();
        let chars = decode_u8(&all);
        assert_eq!(chars.len(), 256);
        assert_eq!(encode_u8(&chars).unwrap(), all);
        assert!(encode_u8(&[0x100]).is_err());
    }

    #[test]
    fn sixteen_bit_orders() {
        assert_eq!(decode_u16(&[0x12, 0x34], Endianness::BigEndian).unwrap(), vec![0x1234]);
        assert_eq!(decode_u16(&[0x12, 0x34], Endianness::LittleEndian).unwrap(), vec![0x3412]);
        // surrogates are plain numbers here
        assert_eq!(encode_u16(&[0xD800], Endianness::LittleEndian).unwrap(), vec![0x00, 0xD8]);
        assert!(matches!(
            encode_u16(&[0x10000], Endianness::BigEndian),
            Err(Error::Encode {
                encoding: Encoding::Uint16Be,
                ..
            })
        ));
        assert!(decode_u16(&[0x12], Endianness::BigEndian).is_err());
    }

    #[test]
    fn thirty_two_bit_orders() {
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x41];
        assert_eq!(
            decode_u32(&bytes, Endianness::BigEndian).unwrap(),
            vec![u32::MAX, 0x41]
        );
        assert_eq!(encode_u32(&[0x41], Endianness::LittleEndian), vec![0x41, 0, 0, 0]);
        assert!(matches!(
            decode_u32(&bytes[..7], Endianness::LittleEndian),
            Err(Error::Decode {
                encoding: Encoding::Uint32Le,
                offset: 4,
                ..
            })
        ));
    }
}
