//! Transcodes byte streams between Unicode transfer formats, fixed-width
//! integer formats and the grave-accent escape format, with optional base64
//! wrapping and line-ending normalization.
//!
//! ```
//! let bytes = charconv::convert("UTF8", "A", "UINT32BE").unwrap();
//! assert_eq!(bytes, [0, 0, 0, 0x41]);
//! ```

mod b64;
mod bom;
pub mod cli;
mod converter;
pub mod error;
mod escaped;
pub mod line_ends;
mod string;
pub mod types;
mod uint;
mod utf;

pub use converter::{convert, decode, decode_with, encode, encode_with};
pub use error::{DecodeReason, Error, Result, TypeReason};
pub use types::{Declared, DestinationType, Encoding, LineEnding, SourceType};
