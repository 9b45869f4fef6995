use crate::error::{Error, Result};
use crate::types::Encoding;
use crate::utf::*;

pub(crate) fn decode(bytes: &[u8], endianness: Endianness) -> Result<Vec<u32>> {
    let encoding = encoding(endianness);
    check_width(encoding, bytes, 4)?;
    bytes
        .chunks_exact(4)
        .enumerate()
        .map(|(index, unit)| {
            let codepoint = endianness.read_u32([unit[0], unit[1], unit[2], unit[3]]);
            if is_valid_codepoint(codepoint) {
                Ok(codepoint)
            } else {
                Err(Error::decode(encoding, index * 4, invalid_reason(codepoint)))
            }
        })
        .collect()
}

pub(crate) fn encode(chars: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
    let encoding = encoding(endianness);
    let mut bytes = Vec::with_capacity(chars.len() * 4);
    for (index, &codepoint) in chars.iter().enumerate() {
        to_scalar(encoding, index, codepoint)?;
        bytes.extend_from_slice(&endianness.write_u32(codepoint));
    }
    Ok(bytes)
}

const fn encoding(endianness: Endianness) -> Encoding {
    match endianness {
        Endianness::BigEndian => Encoding::Utf32Be,
        Endianness::LittleEndian => Encoding::Utf32Le,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeReason;

    #[test]
    fn decodes_both_orders() {
        let be = [0, 0, 0, 0x41, 0, 0x01, 0xF6, 0x00];
        assert_eq!(decode(&be, Endianness::BigEndian).unwrap(), vec![0x41, 0x1F600]);
        let le = [0x41, 0, 0, 0, 0x00, 0xF6, 0x01, 0];
        assert_eq!(decode(&le, Endianness::LittleEndian).unwrap(), vec![0x41, 0x1F600]);
    }

    #[test]
    fn rejects_non_scalars() {
        assert!(matches!(
            decode(&[0, 0, 0, 0x41, 0, 0, 0xD8, 0], Endianness::BigEndian),
            Err(Error::Decode {
                offset: 4,
                reason: DecodeReason::Surrogate(0xD800),
                ..
            })
        ));
        assert!(matches!(
            decode(&[0, 0, 0x11, 0], Endianness::LittleEndian),
            Err(Error::Decode {
                reason: DecodeReason::OutOfRange(0x110000),
                ..
            })
        ));
    }

    #[test]
    fn rejects_partial_units() {
        assert!(matches!(
            decode(&[0, 0, 0, 0x41, 0, 0], Endianness::BigEndian),
            Err(Error::Decode {
                reason: DecodeReason::Length { len: 6, width: 4 },
                ..
            })
        ));
    }

    #[test]
    fn encode_writes_four_bytes_each() {
        assert_eq!(encode(&[0x41], Endianness::BigEndian).unwrap(), vec![0, 0, 0, 0x41]);
        assert_eq!(encode(&[0x1F600], Endianness::LittleEndian).unwrap(), vec![0x00, 0xF6, 0x01, 0]);
        assert!(matches!(
            encode(&[0xDFFF], Endianness::LittleEndian),
            Err(Error::Encode { value: 0xDFFF, .. })
        ));
    }
}
