//! Integration tests for the KS X 1001 mappers

use zedcheck::ksx1001::reference::{bucket_range, table, table_len, BUCKET_SPAN};
use zedcheck::ksx1001::{utf8_to_euc_kr, EUC_KR_OFFSET};
use zedcheck::{u_ksx1001_int, u_ksx1001_int2, KsxCode};

#[test]
fn test_table_shape() {
    assert_eq!(table_len(), 8224);
    // Sorted by Unicode value so each bucket is a contiguous run
    assert!(table().windows(2).all(|w| w[0].1 < w[1].1));
    // Raw row/cell codes, both bytes in 0x21-0x7E
    assert!(table()
        .iter()
        .all(|&(k, _)| (0x21..=0x7E).contains(&(k >> 8)) && (0x21..=0x7E).contains(&(k & 0xFF))));
}

#[test]
fn test_buckets_cover_their_span() {
    for &(_, u) in table() {
        let (start, end) = bucket_range(u).unwrap();
        assert!(start < end, "U+{u:04X}");
        assert!(table()[start..end].iter().any(|&(_, v)| v == u), "U+{u:04X}");
        assert!(end - start <= BUCKET_SPAN);
    }
}

#[test]
fn test_every_table_entry_maps() {
    for &(ksx, u) in table() {
        let expected = KsxCode::Double(ksx + EUC_KR_OFFSET);
        assert_eq!(u_ksx1001_int(u), expected, "U+{u:04X}");
        assert_eq!(u_ksx1001_int2(u), expected, "U+{u:04X}");
    }
}

#[test]
fn test_bmp_agreement() {
    let mut mapped = 0;
    for u in (0..0xFFFEu32).filter(|u| !(0xD800..=0xDFFF).contains(u)) {
        let code = u_ksx1001_int(u);
        assert_eq!(code, u_ksx1001_int2(u), "U+{u:04X}");
        if let KsxCode::Double(_) = code {
            mapped += 1;
        }
    }
    // Plus the euro sign, registered sign and postal code mark
    assert_eq!(mapped, table_len() + 3);
}

#[test]
fn test_special_characters() {
    assert_eq!(u_ksx1001_int(0x20AC).to_bytes(), [0xA2, 0xE6]);
    assert_eq!(u_ksx1001_int(0x00AE).to_bytes(), [0xA2, 0xE7]);
    assert_eq!(u_ksx1001_int(0x327E).to_bytes(), [0xA2, 0xE8]);
    assert_eq!(u_ksx1001_int(0xAC02).to_bytes(), Vec::<u8>::new());
}

#[test]
fn test_utf8_to_euc_kr_position() {
    let err = utf8_to_euc_kr("AB가\u{1F600}").unwrap_err();
    assert_eq!(err.position, 4);
    assert_eq!(err.ch, '\u{1F600}');
}
