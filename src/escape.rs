//! Backslash escape sequences in fixture input
//!
//! [`unescape`] decodes the sequences accepted when a request carries
//! [`InputMode::ESCAPE`](crate::symbol::InputMode::ESCAPE); [`escape`] goes the
//! other way and is used by generate mode to print inputs as byte-string
//! literals.

use crate::{Error, Result};

fn invalid(position: usize, reason: &'static str) -> Error {
    Error::InvalidEscape { position, reason }
}

/// Parse exactly `len` digits of `radix` starting at `start`.
fn digits(input: &[u8], start: usize, len: usize, radix: u32, position: usize) -> Result<u32> {
    let slice = input
        .get(start..start + len)
        .ok_or_else(|| invalid(position, "incomplete escape sequence"))?;
    slice.iter().try_fold(0u32, |acc, &b| {
        (b as char)
            .to_digit(radix)
            .map(|d| acc * radix + d)
            .ok_or_else(|| invalid(position, "invalid digit in escape sequence"))
    })
}

/// Decode backslash escapes.
///
/// Supported: `\0` NUL, `\E` EOT, `\a`, `\b`, `\t`, `\n`, `\v`, `\f`, `\r`,
/// `\e` ESC, `\G` GS, `\R` RS, `\\`, `\dNNN` decimal, `\oNNN` octal, `\xNN`
/// hex, and `\uNNNN` / `\UNNNNNN` Unicode scalars emitted as UTF-8.
pub fn unescape(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] != b'\\' {
            out.push(input[i]);
            i += 1;
            continue;
        }
        let position = i;
        let Some(&kind) = input.get(i + 1) else {
            return Err(invalid(position, "incomplete escape sequence"));
        };
        i += 2;
        let byte = match kind {
            b'0' => 0x00,
            b'E' => 0x04,
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => 0x09,
            b'n' => 0x0A,
            b'v' => 0x0B,
            b'f' => 0x0C,
            b'r' => 0x0D,
            b'e' => 0x1B,
            b'G' => 0x1D,
            b'R' => 0x1E,
            b'\\' => b'\\',
            b'd' | b'o' | b'x' => {
                let (len, radix) = match kind {
                    b'd' => (3, 10),
                    b'o' => (3, 8),
                    _ => (2, 16),
                };
                let value = digits(input, i, len, radix, position)?;
                i += len;
                u8::try_from(value).map_err(|_| invalid(position, "value out of range (0-255)"))?
            }
            b'u' | b'U' => {
                let len = if kind == b'u' { 4 } else { 6 };
                let value = digits(input, i, len, 16, position)?;
                i += len;
                let ch = char::from_u32(value)
                    .ok_or_else(|| invalid(position, "invalid Unicode scalar value"))?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                continue;
            }
            _ => return Err(invalid(position, "unknown escape sequence")),
        };
        out.push(byte);
    }
    Ok(out)
}

/// Render bytes as the body of a Rust byte-string literal.
pub fn escape(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &b in data {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\x{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_simple() {
        assert_eq!(unescape(b"A\\tB").unwrap(), b"A\tB");
        assert_eq!(unescape(b"\\0\\E\\e\\G\\R\\\\").unwrap(), b"\x00\x04\x1B\x1D\x1E\\");
        assert_eq!(unescape(b"").unwrap(), b"");
    }

    #[test]
    fn test_unescape_numeric() {
        assert_eq!(unescape(b"\\d065\\o101\\x41").unwrap(), b"AAA");
        assert_eq!(unescape(b"\\xFF").unwrap(), [0xFF]);
        assert_eq!(unescape(b"\\uAC00").unwrap(), "가".as_bytes());
        assert_eq!(unescape(b"\\U01F600").unwrap(), "\u{1F600}".as_bytes());
    }

    #[test]
    fn test_unescape_errors() {
        assert!(matches!(
            unescape(b"AB\\"),
            Err(Error::InvalidEscape { position: 2, .. })
        ));
        assert!(matches!(
            unescape(b"\\d256"),
            Err(Error::InvalidEscape { position: 0, .. })
        ));
        assert!(matches!(
            unescape(b"\\x4"),
            Err(Error::InvalidEscape { position: 0, .. })
        ));
        assert!(matches!(
            unescape(b"\\o8"),
            Err(Error::InvalidEscape { .. })
        ));
        assert!(matches!(
            unescape(b"\\uD800"),
            Err(Error::InvalidEscape { .. })
        ));
        assert!(matches!(
            unescape(b"1\\q"),
            Err(Error::InvalidEscape { position: 1, .. })
        ));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(b"A\"B\\"), "A\\\"B\\\\");
        assert_eq!(escape(b"\x00\xB0\xA1\n"), "\\x00\\xB0\\xA1\\n");
        assert_eq!(unescape(escape(b"\x1D12").as_bytes()).unwrap(), b"\x1D12");
    }
}
