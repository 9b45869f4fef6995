//! Line-ending normalization applied to the code points before encoding.

use crate::types::LineEnding;

const CR: u32 = 0x0D;
const LF: u32 = 0x0A;

/// Rewrites every CRLF, lone CR and lone LF in `chars` to `ending`, returning
/// a new sequence. A non-empty sequence that doesn't end with a line break gets
/// one appended.
pub fn normalize(chars: &[u32], ending: LineEnding) -> Vec<u32> {
    let target: &[u32] = match ending {
        LineEnding::Crlf => &[CR, LF],
        LineEnding::Lf => &[LF],
    };
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 16 + 2);
    let mut iter = chars.iter().copied().peekable();
    let mut terminated = true;
    while let Some(value) = iter.next() {
        match value {
            CR => {
                iter.next_if_eq(&LF);
                out.extend_from_slice(target);
                terminated = true;
            }
            LF => {
                out.extend_from_slice(target);
                terminated = true;
            }
            other => {
                out.push(other);
                terminated = false;
            }
        }
    }
    if !terminated {
        out.extend_from_slice(target);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<u32> {
        text.chars().map(u32::from).collect()
    }

    #[test]
    fn all_breaks_become_crlf() {
        assert_eq!(
            normalize(&chars("a\r\nb\rc\nd"), LineEnding::Crlf),
            chars("a\r\nb\r\nc\r\nd\r\n")
        );
    }

    #[test]
    fn all_breaks_become_lf() {
        assert_eq!(
            normalize(&chars("a\r\nb\rc\nd\n"), LineEnding::Lf),
            chars("a\nb\nc\nd\n")
        );
    }

    #[test]
    fn consecutive_breaks_are_kept() {
        assert_eq!(normalize(&chars("\n\r\r\n\n"), LineEnding::Lf), chars("\n\n\n\n"));
        assert_eq!(normalize(&chars("\n\r"), LineEnding::Crlf), chars("\r\n\r\n"));
    }

    #[test]
    fn idempotent() {
        for ending in [LineEnding::Crlf, LineEnding::Lf] {
            let once = normalize(&chars("x\ry\r\n\nz"), ending);
            assert_eq!(normalize(&once, ending), once);
        }
    }

    #[test]
    fn empty_stays_empty() {
        assert!(normalize(&[], LineEnding::Crlf).is_empty());
    }

    #[test]
    fn caller_sequence_untouched() {
        let original = chars("one\rtwo");
        let copy = original.clone();
        let _ = normalize(&original, LineEnding::Crlf);
        assert_eq!(original, copy);
    }
}
