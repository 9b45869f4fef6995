//! The internal `STRING` type: host text seen as its UTF-16 code units.

use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<u32>> {
    let text = std::str::from_utf8(bytes).map_err(|error| {
        Error::decode(Encoding::String, error.valid_up_to(), DecodeReason::InvalidText)
    })?;
    Ok(text.encode_utf16().map(u32::from).collect())
}

/// Builds text from code points. Scalar values are taken as they are and a
/// high surrogate followed by a low surrogate is read as one pair, so the
/// output of [`decode`] comes back unchanged. Returns the text's UTF-8 bytes.
pub(crate) fn encode(chars: &[u32]) -> Result<Vec<u8>> {
    let mut text = String::with_capacity(chars.len());
    let mut index = 0;
    while let Some(&value) = chars.get(index) {
        let (scalar, len) = match char::from_u32(value) {
            Some(scalar) => (scalar, 1),
            None => {
                let paired = surrogate_pair(&chars[index..])
                    .ok_or_else(|| Error::encode(Encoding::String, index, value))?;
                (paired, 2)
            }
        };
        text.push(scalar);
        index += len;
    }
    Ok(text.into_bytes())
}

fn surrogate_pair(units: &[u32]) -> Option<char> {
    let &[high, low, ..] = units else {
        return None;
    };
    let units = [u16::try_from(high).ok()?, u16::try_from(low).ok()?];
    char::decode_utf16(units).next()?.ok()
}
