//! Base64 wrapping around the inner byte format.

use base64::engine::Config as _;
use base64::prelude::*;

use crate::error::Result;

/// Unwraps a `BASE64:` source. ASCII whitespace may appear anywhere in the
/// text. Padding is required.
pub(crate) fn unwrap(text: &[u8]) -> Result<Vec<u8>> {
    let compact: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(BASE64_STANDARD.decode(compact)?)
}

/// Wraps encoder output for a `:BASE64` destination, no line breaks.
pub(crate) fn wrap(bytes: &[u8]) -> Vec<u8> {
    let engine = &BASE64_STANDARD;
    let size = base64::encoded_len(bytes.len(), engine.config().encode_padding()).unwrap_or(0);
    let mut text = String::with_capacity(size);
    engine.encode_string(bytes, &mut text);
    text.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn unwrap_ignores_line_breaks() {
        assert_eq!(unwrap(b"QQ==").unwrap(), b"A");
        assert_eq!(unwrap(b"aGVs\r\nbG8g\td29y bGQ=\n").unwrap(), b"hello world");
        assert_eq!(unwrap(b"").unwrap(), b"");
        assert_eq!(unwrap(b"QQ\x0C==").unwrap(), b"A");
    }

    #[test]
    fn unwrap_rejects_bad_text() {
        assert!(matches!(unwrap(b"QQ"), Err(Error::Base64(_))));
        assert!(matches!(unwrap(b"Q*=="), Err(Error::Base64(_))));
        assert!(matches!(unwrap(b"QQ=\x0B="), Err(Error::Base64(_))));
    }

    #[test]
    fn wrap_is_single_line() {
        let bytes = vec![0xA5u8; 300];
        let text = wrap(&bytes);
        assert!(!text.contains(&b'\n'));
        assert_eq!(text.len(), 400);
        assert_eq!(unwrap(&text).unwrap(), bytes);
        assert_eq!(wrap(b"A"), b"QQ==");
    }
}
