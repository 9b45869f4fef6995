//! Error types shared by every stage of the conversion pipeline.

use crate::types::Encoding;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while resolving types, decoding or encoding.
///
/// A failure always aborts the whole call. No partial output is produced.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The type string does not follow the source or destination grammar.
    #[error("type \"{input}\" not recognized: {reason}")]
    TypeResolution { input: String, reason: TypeReason },
    /// The declared byte order contradicts the byte order mark in the data.
    #[error("source type {declared} specified but BOM is for {detected}")]
    BomMismatch {
        declared: Encoding,
        detected: Encoding,
    },
    /// The data is malformed for the resolved type.
    ///
    /// `offset` counts bytes into the decoder's input, after base64 unwrapping
    /// and BOM removal.
    #[error("{encoding} data malformed at byte {offset}: {reason}")]
    Decode {
        encoding: Encoding,
        offset: usize,
        reason: DecodeReason,
    },
    /// The `BASE64:` source text is not valid base64.
    #[error("invalid base64 source: {0}")]
    Base64(#[from] base64::DecodeError),
    /// A code point can't be represented by the destination type.
    #[error("{encoding} cannot represent value {value:#X} at index {index}")]
    Encode {
        encoding: Encoding,
        index: usize,
        value: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeReason {
    #[error("must have form {0}")]
    Malformed(&'static str),
    #[error("unknown type name \"{0}\"")]
    Unknown(String),
    #[error("base64 not allowed with type STRING")]
    Base64NotAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeReason {
    #[error("invalid lead byte {0:#04X}")]
    InvalidLeadByte(u8),
    #[error("invalid continuation byte {0:#04X}")]
    InvalidContinuation(u8),
    #[error("overlong encoding of {0:#X}")]
    Overlong(u32),
    #[error("surrogate value {0:#X}")]
    Surrogate(u32),
    #[error("value {0:#X} beyond U+10FFFF")]
    OutOfRange(u32),
    #[error("truncated sequence")]
    Truncated,
    #[error("unpaired surrogate {0:#06X}")]
    LoneSurrogate(u16),
    #[error("length {len} is not a multiple of {width}")]
    Length { len: usize, width: usize },
    #[error("byte {0:#04X} is not 7-bit")]
    NotSevenBit(u8),
    #[error("not valid UTF-8 text")]
    InvalidText,
    #[error("unterminated escape")]
    UnterminatedEscape,
    #[error("unknown escape letter, byte {0:#04X}")]
    InvalidEscape(u8),
    #[error("expected hex digit, found byte {0:#04X}")]
    InvalidHexDigit(u8),
    #[error("braced escape needs 1 to 8 hex digits")]
    BraceDigits,
    #[error("braced escape has no closing brace")]
    UnmatchedBrace,
}

impl Error {
    pub(crate) const fn decode(encoding: Encoding, offset: usize, reason: DecodeReason) -> Self {
        Self::Decode {
            encoding,
            offset,
            reason,
        }
    }

    pub(crate) const fn encode(encoding: Encoding, index: usize, value: u32) -> Self {
        Self::Encode {
            encoding,
            index,
            value,
        }
    }

    pub(crate) fn type_resolution(input: &str, reason: TypeReason) -> Self {
        Self::TypeResolution {
            input: input.to_owned(),
            reason,
        }
    }
}
