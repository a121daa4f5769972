//! Reference KS X 1001 lookup
//!
//! A linear scan of one 1024-scalar bucket of [`KSX1001_TAB`]. This is the
//! control that [`u_ksx1001_int`](super::u_ksx1001_int) is checked against.

use super::tables::{KSX1001_TAB, KSX1001_TAB_IND};
use super::{KsxCode, EUC_KR_OFFSET, EURO_SIGN, POSTAL_CODE_MARK, REGISTERED_SIGN};

/// Pairs scanned per bucket (0x800 table words)
pub const BUCKET_SPAN: usize = 0x400;

/// Number of `(code, scalar)` pairs in the reference table.
pub fn table_len() -> usize {
    KSX1001_TAB.len()
}

/// The reference table, ascending by Unicode scalar.
pub fn table() -> &'static [(u16, u32)] {
    &KSX1001_TAB
}

/// Half-open range of table pairs scanned for `u`, or `None` when `u` lies
/// above the indexed blocks.
pub fn bucket_range(u: u32) -> Option<(usize, usize)> {
    let start = *KSX1001_TAB_IND.get((u >> 10) as usize)? as usize;
    let end = (start + BUCKET_SPAN).min(KSX1001_TAB.len());
    Some((start, end))
}

/// Convert one Unicode scalar value to KS X 1001 / EUC-KR using the
/// reference table.
pub fn u_ksx1001_int2(u: u32) -> KsxCode {
    if u < 0x80 {
        return KsxCode::Single(u as u8);
    }
    match u {
        EURO_SIGN => return KsxCode::Double(0x2266 + EUC_KR_OFFSET),
        REGISTERED_SIGN => return KsxCode::Double(0x2267 + EUC_KR_OFFSET),
        POSTAL_CODE_MARK => return KsxCode::Double(0x2268 + EUC_KR_OFFSET),
        _ => {}
    }
    let Some((start, end)) = bucket_range(u) else {
        return KsxCode::Unmappable;
    };
    KSX1001_TAB[start..end]
        .iter()
        .find(|&&(_, unicode)| unicode == u)
        .map_or(KsxCode::Unmappable, |&(code, _)| {
            KsxCode::Double(code + EUC_KR_OFFSET)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sorted() {
        assert!(KSX1001_TAB.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_no_double_mapping() {
        let mut seen = HashSet::new();
        for &(code, unicode) in KSX1001_TAB.iter() {
            assert!(seen.insert(code), "code 0x{code:04X} (U+{unicode:04X}) mapped twice");
        }
        // The revision additions must not collide with table entries
        for code in [0x2266, 0x2267, 0x2268] {
            assert!(!seen.contains(&code));
        }
    }

    #[test]
    fn test_codes_in_94x94() {
        for &(code, _) in KSX1001_TAB.iter() {
            let (row, cell) = (code >> 8, code & 0xFF);
            assert!((0x21..=0x7E).contains(&row) && (0x21..=0x7E).contains(&cell));
        }
    }

    #[test]
    fn test_index_points_at_bucket_start() {
        for (bucket, &start) in KSX1001_TAB_IND.iter().enumerate() {
            let start = start as usize;
            let lo = (bucket as u32) << 10;
            if start < KSX1001_TAB.len() {
                assert!(KSX1001_TAB[start].1 >= lo);
            }
            if start > 0 {
                assert!(KSX1001_TAB[start - 1].1 < lo);
            }
        }
    }

    #[test]
    fn test_bucket_range_saturates() {
        let (start, end) = bucket_range(0xFFE6).unwrap();
        assert!(start < end);
        assert_eq!(end, table_len());
        assert_eq!(bucket_range(0x10000), None);
    }

    #[test]
    fn test_bucket_boundaries() {
        // Last scalar of block 0x2D and first of block 0x2E
        assert_eq!(u_ksx1001_int2(0xB7FF), KsxCode::Double(0xB7B5));
        assert_eq!(u_ksx1001_int2(0xB800), KsxCode::Double(0xB7B6));
        assert_eq!(u_ksx1001_int2(0x3000), KsxCode::Double(0xA1A1));
        assert_eq!(u_ksx1001_int2(0x97FF), KsxCode::Double(0xFAC2));
        assert_eq!(u_ksx1001_int2(0x9800), KsxCode::Double(0xFBE1));
        assert_eq!(u_ksx1001_int2(0x400), KsxCode::Unmappable);
    }

    #[test]
    fn test_literals() {
        assert_eq!(u_ksx1001_int2(0x20), KsxCode::Single(0x20));
        assert_eq!(u_ksx1001_int2(0x20AC), KsxCode::Double(0xA2E6));
        assert_eq!(u_ksx1001_int2(0xAE), KsxCode::Double(0xA2E7));
        assert_eq!(u_ksx1001_int2(0x327E), KsxCode::Double(0xA2E8));
        assert_eq!(u_ksx1001_int2(0xAC00), KsxCode::Double(0xB0A1));
        assert_eq!(u_ksx1001_int2(0x4E00), KsxCode::Double(0xECE9));
        assert_eq!(u_ksx1001_int2(0xF900), KsxCode::Double(0xCBD0));
        assert_eq!(u_ksx1001_int2(0xFFE6), KsxCode::Double(0xA3DC));
        assert_eq!(u_ksx1001_int2(0xD7A3), KsxCode::Unmappable);
        assert_eq!(u_ksx1001_int2(0xD800), KsxCode::Unmappable);
        assert_eq!(u_ksx1001_int2(0x1F600), KsxCode::Unmappable);
    }
}
