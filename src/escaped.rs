//! The grave-accent escape format.
//!
//! ```text
//! ``         literal grave accent
//! `xhh       8-bit value
//! `uhhhh     16-bit value
//! `u{h...h}  1 to 8 hex digits
//! ```
//!
//! Everything else stands for itself. The encoder writes printable ASCII,
//! tab, CR and LF as-is and escapes every other value with the shortest form.

use std::io::{self, Write};

use crate::error::{DecodeReason, Error, Result};
use crate::types::Encoding;

const GRAVE: u8 = b'`';

pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<u32>> {
    let mut chars = Vec::with_capacity(bytes.len());
    let mut cursor = 0;
    while let Some(&byte) = bytes.get(cursor) {
        if byte != GRAVE {
            chars.push(u32::from(byte));
            cursor += 1;
            continue;
        }
        let (value, len) = escape(bytes, cursor)?;
        chars.push(value);
        cursor += len;
    }
    Ok(chars)
}

/// Reads the escape starting at the grave accent at `start`. Returns the value
/// and the length of the whole escape.
fn escape(bytes: &[u8], start: usize) -> Result<(u32, usize)> {
    let Some(&letter) = bytes.get(start + 1) else {
        return Err(fail(start, DecodeReason::UnterminatedEscape));
    };
    match letter {
        GRAVE => Ok((u32::from(GRAVE), 2)),
        b'x' => Ok((hex(bytes, start, start + 2, 2)?, 4)),
        b'u' if bytes.get(start + 2) == Some(&b'{') => braced(bytes, start),
        b'u' => Ok((hex(bytes, start, start + 2, 4)?, 6)),
        other => Err(fail(start + 1, DecodeReason::InvalidEscape(other))),
    }
}

fn braced(bytes: &[u8], start: usize) -> Result<(u32, usize)> {
    let first = start + 3;
    let digits = bytes[first..]
        .iter()
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    match bytes.get(first + digits) {
        None => Err(fail(start, DecodeReason::UnmatchedBrace)),
        Some(b'}') if (1..=8).contains(&digits) => {
            Ok((hex(bytes, start, first, digits)?, digits + 4))
        }
        Some(b'}') => Err(fail(first, DecodeReason::BraceDigits)),
        Some(_) if digits > 8 => Err(fail(first, DecodeReason::BraceDigits)),
        Some(&other) => Err(fail(first + digits, DecodeReason::InvalidHexDigit(other))),
    }
}

fn hex(bytes: &[u8], escape: usize, first: usize, count: usize) -> Result<u32> {
    let mut value = 0u32;
    for offset in first..first + count {
        let Some(&byte) = bytes.get(offset) else {
            return Err(fail(escape, DecodeReason::UnterminatedEscape));
        };
        let digit = char::from(byte)
            .to_digit(16)
            .ok_or_else(|| fail(offset, DecodeReason::InvalidHexDigit(byte)))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

fn fail(offset: usize, reason: DecodeReason) -> Error {
    Error::decode(Encoding::Escaped, offset, reason)
}

pub(crate) fn encode(chars: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(chars.len());
    for &value in chars {
        // writing into a Vec cannot fail
        let _ = write_escaped(&mut bytes, value);
    }
    bytes
}

fn write_escaped(out: &mut impl Write, value: u32) -> io::Result<()> {
    match value {
        0x60 => out.write_all(b"``"),
        0x09 | 0x0A | 0x0D | 0x20..=0x7E => out.write_all(&[value as u8]),
        0x00..=0xFF => write!(out, "`x{value:02X}"),
        0x100..=0xFFFF => write!(out, "`u{value:04X}"),
        _ => write!(out, "`u{{{value:X}}}"),
    }
}
