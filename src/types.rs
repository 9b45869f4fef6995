//! Type-string resolution.
//!
//! Source types have the form `[BASE64:]TYPE`, destination types the form
//! `[CRLF:|LF:]TYPE[:BASE64]`. Names are case-insensitive and aliases are
//! resolved here, so nothing downstream ever sees `ASCII` or `UINT16`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, TypeReason};

const SOURCE_FORM: &str = "[BASE64:]type";
const DESTINATION_FORM: &str = "[CRLF:|LF:]type[:BASE64]";

/// A concrete, alias-free data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    Uint7,
    Uint8,
    Uint16Be,
    Uint16Le,
    Uint32Be,
    Uint32Le,
    Escaped,
    /// Host text, treated as its UTF-16 code units. Not offered on the command line.
    String,
}

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF8",
            Self::Utf16Be => "UTF16BE",
            Self::Utf16Le => "UTF16LE",
            Self::Utf32Be => "UTF32BE",
            Self::Utf32Le => "UTF32LE",
            Self::Uint7 => "UINT7",
            Self::Uint8 => "UINT8",
            Self::Uint16Be => "UINT16BE",
            Self::Uint16Le => "UINT16LE",
            Self::Uint32Be => "UINT32BE",
            Self::Uint32Le => "UINT32LE",
            Self::Escaped => "ESCAPED",
            Self::String => "STRING",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type as named in a type string, before the BOM has had its say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    Concrete(Encoding),
    /// `UTF16`: byte order comes from the BOM, big-endian without one.
    Utf16,
    /// `UTF32`: byte order comes from the BOM, big-endian without one.
    Utf32,
}

/// Every accepted type name with what it resolves to. Order matches the help text.
pub const TYPE_NAMES: [(&str, Declared); 19] = [
    ("UTF8", Declared::Concrete(Encoding::Utf8)),
    ("UTF16", Declared::Utf16),
    ("UTF16BE", Declared::Concrete(Encoding::Utf16Be)),
    ("UTF16LE", Declared::Concrete(Encoding::Utf16Le)),
    ("UTF32", Declared::Utf32),
    ("UTF32BE", Declared::Concrete(Encoding::Utf32Be)),
    ("UTF32LE", Declared::Concrete(Encoding::Utf32Le)),
    ("UINT7", Declared::Concrete(Encoding::Uint7)),
    ("ASCII", Declared::Concrete(Encoding::Uint7)),
    ("UINT8", Declared::Concrete(Encoding::Uint8)),
    ("BINARY", Declared::Concrete(Encoding::Uint8)),
    ("UINT16", Declared::Concrete(Encoding::Uint16Be)),
    ("UINT16BE", Declared::Concrete(Encoding::Uint16Be)),
    ("UINT16LE", Declared::Concrete(Encoding::Uint16Le)),
    ("UINT32", Declared::Concrete(Encoding::Uint32Be)),
    ("UINT32BE", Declared::Concrete(Encoding::Uint32Be)),
    ("UINT32LE", Declared::Concrete(Encoding::Uint32Le)),
    ("ESCAPED", Declared::Concrete(Encoding::Escaped)),
    ("STRING", Declared::Concrete(Encoding::String)),
];

impl Declared {
    /// Looks up an upper-case type name.
    fn from_name(name: &str) -> Option<Self> {
        TYPE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, declared)| declared)
    }

    /// Resolves without looking at data, i.e. ambiguous byte orders become big-endian.
    pub const fn default_encoding(self) -> Encoding {
        match self {
            Self::Concrete(encoding) => encoding,
            Self::Utf16 => Encoding::Utf16Be,
            Self::Utf32 => Encoding::Utf32Be,
        }
    }
}

/// Line break form the destination's line endings are rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Crlf,
    Lf,
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Crlf => "CRLF",
            Self::Lf => "LF",
        })
    }
}

/// A parsed `[BASE64:]TYPE` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType {
    pub declared: Declared,
    pub base64: bool,
}

impl FromStr for SourceType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let upper = input.to_ascii_uppercase();
        let (base64, name) = match upper.strip_prefix("BASE64:") {
            Some(rest) => (true, rest),
            None => (false, upper.as_str()),
        };
        let declared = lookup(input, name, SOURCE_FORM)?;
        if base64 && declared == Declared::Concrete(Encoding::String) {
            return Err(Error::type_resolution(input, TypeReason::Base64NotAllowed));
        }
        Ok(Self { declared, base64 })
    }
}

/// A parsed `[CRLF:|LF:]TYPE[:BASE64]` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationType {
    pub encoding: Encoding,
    pub line_ending: Option<LineEnding>,
    pub base64: bool,
}

impl FromStr for DestinationType {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let upper = input.to_ascii_uppercase();
        let (line_ending, rest) = if let Some(rest) = upper.strip_prefix("CRLF:") {
            (Some(LineEnding::Crlf), rest)
        } else if let Some(rest) = upper.strip_prefix("LF:") {
            (Some(LineEnding::Lf), rest)
        } else {
            (None, upper.as_str())
        };
        let (name, base64) = match rest.split_once(':') {
            None => (rest, false),
            Some((name, "BASE64")) => (name, true),
            Some(_) => {
                return Err(Error::type_resolution(
                    input,
                    TypeReason::Malformed(DESTINATION_FORM),
                ))
            }
        };
        let encoding = lookup(input, name, DESTINATION_FORM)?.default_encoding();
        if base64 && encoding == Encoding::String {
            return Err(Error::type_resolution(input, TypeReason::Base64NotAllowed));
        }
        Ok(Self {
            encoding,
            line_ending,
            base64,
        })
    }
}

fn lookup(input: &str, name: &str, form: &'static str) -> Result<Declared> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(Error::type_resolution(input, TypeReason::Malformed(form)));
    }
    Declared::from_name(name)
        .ok_or_else(|| Error::type_resolution(input, TypeReason::Unknown(name.to_owned())))
}
