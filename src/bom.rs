//! Byte order mark detection.

use crate::error::{Error, Result};
use crate::types::{Declared, Encoding};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF32BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
const UTF32LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

/// Picks the concrete encoding for `declared` and the number of leading BOM
/// bytes the decoder has to skip.
///
/// Only the UTF families carry a BOM. An explicit byte order whose data starts
/// with the opposite mark is an error.
pub(crate) fn resolve(declared: Declared, data: &[u8]) -> Result<(Encoding, usize)> {
    use Encoding::{Utf16Be, Utf16Le, Utf32Be, Utf32Le};

    let resolved = match declared {
        Declared::Concrete(Encoding::Utf8) => (Encoding::Utf8, bom_len(data, &UTF8_BOM)),
        Declared::Utf16 => ambiguous(data, (Utf16Be, &UTF16BE_BOM), (Utf16Le, &UTF16LE_BOM)),
        Declared::Utf32 => ambiguous(data, (Utf32Be, &UTF32BE_BOM), (Utf32Le, &UTF32LE_BOM)),
        Declared::Concrete(Utf16Be) => explicit(data, (Utf16Be, &UTF16BE_BOM), (Utf16Le, &UTF16LE_BOM))?,
        Declared::Concrete(Utf16Le) => explicit(data, (Utf16Le, &UTF16LE_BOM), (Utf16Be, &UTF16BE_BOM))?,
        Declared::Concrete(Utf32Be) => explicit(data, (Utf32Be, &UTF32BE_BOM), (Utf32Le, &UTF32LE_BOM))?,
        Declared::Concrete(Utf32Le) => explicit(data, (Utf32Le, &UTF32LE_BOM), (Utf32Be, &UTF32BE_BOM))?,
        Declared::Concrete(other) => (other, 0),
    };
    Ok(resolved)
}

fn bom_len(data: &[u8], bom: &[u8]) -> usize {
    if data.starts_with(bom) {
        bom.len()
    } else {
        0
    }
}

/// An encoding together with its byte order mark.
type Marked<'a> = (Encoding, &'a [u8]);

fn ambiguous(data: &[u8], big: Marked<'_>, little: Marked<'_>) -> (Encoding, usize) {
    if data.starts_with(big.1) {
        (big.0, big.1.len())
    } else if data.starts_with(little.1) {
        (little.0, little.1.len())
    } else {
        (big.0, 0)
    }
}

fn explicit(data: &[u8], declared: Marked<'_>, opposite: Marked<'_>) -> Result<(Encoding, usize)> {
    if data.starts_with(opposite.1) {
        return Err(Error::BomMismatch {
            declared: declared.0,
            detected: opposite.0,
        });
    }
    Ok((declared.0, bom_len(data, declared.1)))
}
