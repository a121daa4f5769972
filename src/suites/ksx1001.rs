//! KS X 1001 mapping suite

use crate::config::DebugFlags;
use crate::escape::escape;
use crate::ksx1001::{u_ksx1001_int, u_ksx1001_int2, utf8_to_euc_kr, KsxCode};
use crate::runner::{TestCtx, TestFunction, TestResult};
use crate::{check, check_eq};
use std::time::Instant;

pub const FUNCS: [TestFunction; 3] = [
    TestFunction::new("test_u_ksx1001_int", test_u_ksx1001_int)
        .with_index()
        .with_debug(),
    TestFunction::new("test_special_cases", test_special_cases).with_index(),
    TestFunction::new("test_utf8_to_euc_kr", test_utf8_to_euc_kr)
        .with_index()
        .with_generate(),
];

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Production mapper against the reference table for every BMP scalar.
/// Index selection applies to the scalar value.
pub fn test_u_ksx1001_int(ctx: &mut TestCtx) -> TestResult {
    let start = Instant::now();
    for u in 0..0xFFFEu32 {
        if SURROGATES.contains(&u) || ctx.skip(u as usize) {
            continue;
        }
        let code = u_ksx1001_int(u);
        let code2 = u_ksx1001_int2(u);
        check_eq!(ctx, code.tag(), code2.tag(), "i:{u} 0x{u:04X} tag ({code:?} vs {code2:?})");
        check_eq!(ctx, code.value(), code2.value(), "i:{u} 0x{u:04X} value");
    }
    if ctx.debug().contains(DebugFlags::PERFORMANCE) {
        println!("    {}: {:?}", ctx.func_name(), start.elapsed());
    }
    Ok(())
}

struct SpecialItem {
    u: u32,
    tag: u8,
    value: u16,
    comment: &'static str,
}

#[rustfmt::skip]
static SPECIAL_DATA: [SpecialItem; 16] = [
    /*  0*/ SpecialItem { u: 0x0000, tag: 1, value: 0x00, comment: "NUL" },
    /*  1*/ SpecialItem { u: 0x0020, tag: 1, value: 0x20, comment: "Space" },
    /*  2*/ SpecialItem { u: 0x007F, tag: 1, value: 0x7F, comment: "DEL" },
    /*  3*/ SpecialItem { u: 0x0080, tag: 0, value: 0, comment: "First non-ASCII" },
    /*  4*/ SpecialItem { u: 0x20AC, tag: 2, value: 0xA2E6, comment: "Euro sign, KS X 1001:1998" },
    /*  5*/ SpecialItem { u: 0x00AE, tag: 2, value: 0xA2E7, comment: "Registered sign, KS X 1001:1998" },
    /*  6*/ SpecialItem { u: 0x327E, tag: 2, value: 0xA2E8, comment: "Postal code mark, KS X 1001:2002" },
    /*  7*/ SpecialItem { u: 0xAC00, tag: 2, value: 0xB0A1, comment: "First Hangul syllable, bucket 0x2B" },
    /*  8*/ SpecialItem { u: 0xAC02, tag: 0, value: 0, comment: "Hangul syllable outside KS X 1001" },
    /*  9*/ SpecialItem { u: 0xD79D, tag: 2, value: 0xC8FE, comment: "Last KS X 1001 Hangul syllable" },
    /* 10*/ SpecialItem { u: 0x3000, tag: 2, value: 0xA1A1, comment: "Ideographic space, bucket boundary" },
    /* 11*/ SpecialItem { u: 0xB800, tag: 2, value: 0xB7B6, comment: "Bucket boundary 0x2E" },
    /* 12*/ SpecialItem { u: 0x4E00, tag: 2, value: 0xECE9, comment: "First CJK ideograph" },
    /* 13*/ SpecialItem { u: 0xF900, tag: 2, value: 0xCBD0, comment: "CJK compatibility ideograph" },
    /* 14*/ SpecialItem { u: 0xFFE6, tag: 2, value: 0xA3DC, comment: "Fullwidth won sign, last bucket" },
    /* 15*/ SpecialItem { u: 0xFFFD, tag: 0, value: 0, comment: "Replacement character" },
];

/// Literal values checked against both implementations.
pub fn test_special_cases(ctx: &mut TestCtx) -> TestResult {
    for (i, item) in SPECIAL_DATA.iter().enumerate() {
        if ctx.skip(i) {
            continue;
        }
        for (name, code) in [
            ("u_ksx1001_int", u_ksx1001_int(item.u)),
            ("u_ksx1001_int2", u_ksx1001_int2(item.u)),
        ] {
            check_eq!(ctx, code.tag(), item.tag, "i:{i} {name}(0x{:04X}) tag ({})", item.u, item.comment);
            if item.tag != 0 {
                check_eq!(ctx, code.value(), Some(item.value), "i:{i} {name}(0x{:04X}) value", item.u);
            }
        }
    }
    Ok(())
}

struct Utf8Item {
    data: &'static str,
    /// 1-based position of the first unmappable character, 0 if none
    err_position: usize,
    expected: &'static [u8],
}

#[rustfmt::skip]
static UTF8_DATA: [Utf8Item; 7] = [
    /*  0*/ Utf8Item { data: "", err_position: 0, expected: b"" },
    /*  1*/ Utf8Item { data: "ABC", err_position: 0, expected: b"ABC" },
    /*  2*/ Utf8Item { data: "가", err_position: 0, expected: b"\xB0\xA1" },
    /*  3*/ Utf8Item { data: "A가\u{20AC}", err_position: 0, expected: b"A\xB0\xA1\xA2\xE6" },
    /*  4*/ Utf8Item { data: "한국어", err_position: 0, expected: b"\xC7\xD1\xB1\xB9\xBE\xEE" },
    /*  5*/ Utf8Item { data: "가갂", err_position: 2, expected: b"" },
    /*  6*/ Utf8Item { data: "\u{80}", err_position: 1, expected: b"" },
];

/// UTF-8 to EUC-KR string conversion.
pub fn test_utf8_to_euc_kr(ctx: &mut TestCtx) -> TestResult {
    for (i, item) in UTF8_DATA.iter().enumerate() {
        if ctx.skip(i) {
            continue;
        }
        let result = utf8_to_euc_kr(item.data);
        if ctx.generate() {
            let (err_position, expected) = match &result {
                Ok(bytes) => (0, escape(bytes)),
                Err(e) => (e.position, String::new()),
            };
            println!(
                "    /*{i:3}*/ Utf8Item {{ data: {:?}, err_position: {err_position}, expected: b\"{expected}\" }},",
                item.data
            );
            continue;
        }
        match result {
            Ok(bytes) => {
                check_eq!(ctx, 0, item.err_position, "i:{i} unexpected success");
                check!(
                    ctx,
                    bytes == item.expected,
                    "i:{i} \"{}\" != \"{}\"",
                    escape(&bytes),
                    escape(item.expected)
                );
            }
            Err(e) => {
                check_eq!(ctx, e.position, item.err_position, "i:{i} error position");
                check_eq!(ctx, u_ksx1001_int(e.ch as u32), KsxCode::Unmappable, "i:{i} error character");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{IndexSelection, TestRun};

    #[test]
    fn test_suite_passes() {
        let mut run = TestRun::new();
        // Sample the exhaustive scan
        let ctx = TestCtx::default().with_index(IndexSelection::parse("0-20,44032").unwrap());
        run.run(&FUNCS, None, &ctx);
        assert!(run.success(), "{}", run.summary());
    }
}
