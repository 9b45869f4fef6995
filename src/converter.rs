//! The conversion pipeline.
//!
//! `decode` goes type string → base64 unwrap → BOM → code points, `encode`
//! goes code points → line endings → bytes → base64 wrap. `convert` is the
//! two back to back. Nothing is kept between calls.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::Result;
use crate::types::{DestinationType, Encoding, SourceType};
use crate::utf::Endianness::{BigEndian, LittleEndian};
use crate::utf::{utf16sequence, utf32, utf8sequence};
use crate::{b64, bom, escaped, line_ends, string, uint};

/// Decodes `input` as the source type `type_name` into code points.
///
/// Text inputs are taken as their UTF-8 bytes, which is how base64 text and
/// `STRING` data are usually handed in.
pub fn decode(type_name: &str, input: impl AsRef<[u8]>) -> Result<Vec<u32>> {
    let source: SourceType = type_name.parse()?;
    decode_with(&source, input.as_ref())
}

/// Encodes `chars` as the destination type `type_name`.
pub fn encode(type_name: &str, chars: &[u32]) -> Result<Vec<u8>> {
    let destination: DestinationType = type_name.parse()?;
    encode_with(&destination, chars)
}

/// Converts `input` from `src_type` to `dst_type`. Both type strings are
/// checked before the data is looked at.
pub fn convert(src_type: &str, input: impl AsRef<[u8]>, dst_type: &str) -> Result<Vec<u8>> {
    let source: SourceType = src_type.parse()?;
    let destination: DestinationType = dst_type.parse()?;
    let chars = decode_with(&source, input.as_ref())?;
    encode_with(&destination, &chars)
}

pub fn decode_with(source: &SourceType, input: &[u8]) -> Result<Vec<u32>> {
    let data = if source.base64 {
        Cow::Owned(b64::unwrap(input)?)
    } else {
        Cow::Borrowed(input)
    };
    let (encoding, bom_len) = bom::resolve(source.declared, &data)?;
    debug!(%encoding, bom_len, len = data.len(), "decoding source");
    let chars = decode_bytes(encoding, &data[bom_len..])?;
    trace!(count = chars.len(), "decoded code points");
    Ok(chars)
}

pub fn encode_with(destination: &DestinationType, chars: &[u32]) -> Result<Vec<u8>> {
    debug!(
        encoding = %destination.encoding,
        line_ending = ?destination.line_ending,
        base64 = destination.base64,
        count = chars.len(),
        "encoding destination"
    );
    let bytes = match destination.line_ending {
        Some(ending) => encode_chars(destination.encoding, &line_ends::normalize(chars, ending))?,
        None => encode_chars(destination.encoding, chars)?,
    };
    if destination.base64 {
        return Ok(b64::wrap(&bytes));
    }
    Ok(bytes)
}

fn decode_bytes(encoding: Encoding, bytes: &[u8]) -> Result<Vec<u32>> {
    match encoding {
        Encoding::Utf8 => utf8sequence::decode(bytes),
        Encoding::Utf16Be => utf16sequence::decode(bytes, BigEndian),
        Encoding::Utf16Le => utf16sequence::decode(bytes, LittleEndian),
        Encoding::Utf32Be => utf32::decode(bytes, BigEndian),
        Encoding::Utf32Le => utf32::decode(bytes, LittleEndian),
        Encoding::Uint7 => uint::decode_u7(bytes),
        Encoding::Uint8 => Ok(uint::decode_u8(bytes)),
        Encoding::Uint16Be => uint::decode_u16(bytes, BigEndian),
        Encoding::Uint16Le => uint::decode_u16(bytes, LittleEndian),
        Encoding::Uint32Be => uint::decode_u32(bytes, BigEndian),
        Encoding::Uint32Le => uint::decode_u32(bytes, LittleEndian),
        Encoding::Escaped => escaped::decode(bytes),
        Encoding::String => string::decode(bytes),
    }
}

fn encode_chars(encoding: Encoding, chars: &[u32]) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Utf8 => utf8sequence::encode(chars),
        Encoding::Utf16Be => utf16sequence::encode(chars, BigEndian),
        Encoding::Utf16Le => utf16sequence::encode(chars, LittleEndian),
        Encoding::Utf32Be => utf32::encode(chars, BigEndian),
        Encoding::Utf32Le => utf32::encode(chars, LittleEndian),
        Encoding::Uint7 => uint::encode_u7(chars),
        Encoding::Uint8 => uint::encode_u8(chars),
        Encoding::Uint16Be => uint::encode_u16(chars, BigEndian),
        Encoding::Uint16Le => uint::encode_u16(chars, LittleEndian),
        Encoding::Uint32Be => Ok(uint::encode_u32(chars, BigEndian)),
        Encoding::Uint32Le => Ok(uint::encode_u32(chars, LittleEndian)),
        Encoding::Escaped => Ok(escaped::encode(chars)),
        Encoding::String => string::encode(chars),
    }
}
