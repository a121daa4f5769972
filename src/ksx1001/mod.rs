//! Unicode to KS X 1001 (EUC-KR) conversion
//!
//! Two implementations live here. [`u_ksx1001_int`] is the one used when
//! encoding ECI 30 data; it is built on the WHATWG EUC-KR encoder from
//! `encoding_rs`, restricted to the KS X 1001 94x94 region. The
//! [`reference`] module is a plain bucketed table scan over the Unicode
//! consortium's KSX1001.TXT mapping; the two are cross-checked exhaustively.

use encoding_rs::{EncoderResult, EUC_KR};

pub mod reference;
mod tables;

pub use reference::u_ksx1001_int2;

/// Euro sign, added in KS X 1001:1998
pub const EURO_SIGN: u32 = 0x20AC;
/// Registered trademark sign, added in KS X 1001:1998
pub const REGISTERED_SIGN: u32 = 0x00AE;
/// Korean postal code mark, added in KS X 1001:2002
pub const POSTAL_CODE_MARK: u32 = 0x327E;

/// Offset from a raw KS X 1001 row/cell code to its EUC-KR byte pair
pub const EUC_KR_OFFSET: u16 = 0x8080;

/// Result of mapping one Unicode scalar value to KS X 1001.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KsxCode {
    /// No KS X 1001 representation
    Unmappable,
    /// ASCII, passed through unchanged
    Single(u8),
    /// EUC-KR double byte value (lead byte in the high 8 bits)
    Double(u16),
}

impl KsxCode {
    /// Number of bytes produced: 0, 1 or 2.
    pub fn tag(self) -> u8 {
        match self {
            Self::Unmappable => 0,
            Self::Single(_) => 1,
            Self::Double(_) => 2,
        }
    }

    /// The encoded value, if any.
    pub fn value(self) -> Option<u16> {
        match self {
            Self::Unmappable => None,
            Self::Single(b) => Some(b as u16),
            Self::Double(v) => Some(v),
        }
    }

    pub fn is_mappable(self) -> bool {
        self != Self::Unmappable
    }

    /// The encoded bytes, empty if unmappable.
    pub fn to_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2);
        self.write_to(&mut out);
        out
    }

    /// Append the encoded bytes to `out`. Returns the number of bytes written.
    pub fn write_to(self, out: &mut Vec<u8>) -> usize {
        match self {
            Self::Unmappable => 0,
            Self::Single(b) => {
                out.push(b);
                1
            }
            Self::Double(v) => {
                out.extend_from_slice(&v.to_be_bytes());
                2
            }
        }
    }
}

/// Input character that has no KS X 1001 representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unmappable {
    /// 1-based character position in the input
    pub position: usize,
    pub ch: char,
}

fn in_ksx1001_region(b: u8) -> bool {
    (0xA1..=0xFE).contains(&b)
}

/// Convert one Unicode scalar value to KS X 1001 / EUC-KR.
pub fn u_ksx1001_int(u: u32) -> KsxCode {
    if u < 0x80 {
        return KsxCode::Single(u as u8);
    }
    // Not in the WHATWG index
    if u == POSTAL_CODE_MARK {
        return KsxCode::Double(0x2268 + EUC_KR_OFFSET);
    }
    let Some(ch) = char::from_u32(u) else {
        return KsxCode::Unmappable;
    };

    let mut buf = [0u8; 4];
    let src = ch.encode_utf8(&mut buf);
    let mut dst = [0u8; 2];
    let mut encoder = EUC_KR.new_encoder();
    let (result, _read, written) = encoder.encode_from_utf8_without_replacement(src, &mut dst, true);
    match result {
        EncoderResult::InputEmpty
            if written == 2 && in_ksx1001_region(dst[0]) && in_ksx1001_region(dst[1]) =>
        {
            KsxCode::Double(u16::from_be_bytes(dst))
        }
        // Unmappable, or a UHC extension code outside KS X 1001
        _ => KsxCode::Unmappable,
    }
}

/// Convert a UTF-8 string to EUC-KR bytes, failing on the first character
/// that KS X 1001 cannot represent.
pub fn utf8_to_euc_kr(s: &str) -> Result<Vec<u8>, Unmappable> {
    let mut out = Vec::with_capacity(s.len());
    for (i, ch) in s.chars().enumerate() {
        if u_ksx1001_int(ch as u32).write_to(&mut out) == 0 {
            return Err(Unmappable {
                position: i + 1,
                ch,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_identity() {
        for u in 0..0x80u32 {
            assert_eq!(u_ksx1001_int(u), KsxCode::Single(u as u8));
        }
    }

    #[test]
    fn test_revision_additions() {
        assert_eq!(u_ksx1001_int(EURO_SIGN), KsxCode::Double(0xA2E6));
        assert_eq!(u_ksx1001_int(REGISTERED_SIGN), KsxCode::Double(0xA2E7));
        assert_eq!(u_ksx1001_int(POSTAL_CODE_MARK), KsxCode::Double(0xA2E8));
    }

    #[test]
    fn test_hangul() {
        assert_eq!(u_ksx1001_int(0xAC00), KsxCode::Double(0xB0A1));
        assert_eq!(u_ksx1001_int(0xAC01), KsxCode::Double(0xB0A2));
        // U+AC02 only exists in the UHC extension (0x8141)
        assert_eq!(u_ksx1001_int(0xAC02), KsxCode::Unmappable);
        // Hangul filler
        assert_eq!(u_ksx1001_int(0x3164), KsxCode::Double(0xA4D4));
    }

    #[test]
    fn test_not_mappable() {
        assert_eq!(u_ksx1001_int(0x80), KsxCode::Unmappable);
        assert_eq!(u_ksx1001_int(0xD800), KsxCode::Unmappable);
        assert_eq!(u_ksx1001_int(0x1F600), KsxCode::Unmappable);
        assert_eq!(u_ksx1001_int(0x110000), KsxCode::Unmappable);
    }

    #[test]
    fn test_utf8_to_euc_kr() {
        assert_eq!(utf8_to_euc_kr("A가\u{20AC}"), Ok(vec![0x41, 0xB0, 0xA1, 0xA2, 0xE6]));
        assert_eq!(
            utf8_to_euc_kr("가갂"),
            Err(Unmappable {
                position: 2,
                ch: '갂'
            })
        );
        assert_eq!(utf8_to_euc_kr(""), Ok(vec![]));
    }

    #[test]
    fn test_code_accessors() {
        assert_eq!(KsxCode::Unmappable.tag(), 0);
        assert_eq!(KsxCode::Single(0x41).value(), Some(0x41));
        assert_eq!(KsxCode::Double(0xB0A1).tag(), 2);
        let mut out = Vec::new();
        assert_eq!(KsxCode::Double(0xB0A1).write_to(&mut out), 2);
        assert_eq!(out, [0xB0, 0xA1]);
    }
}
