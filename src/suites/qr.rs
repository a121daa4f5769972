//! QR Code and Micro QR suite

use crate::encoder::{EncodeRequest, Encoder, QrEncoder, ECI_KSX1001, UNSET};
use crate::escape::{escape, unescape};
use crate::modules::{modules_cmp, modules_print};
use crate::oracle::{
    bwipp, bwipp_cmp, can_bwipp, can_rqrr, can_zxingcpp, rqrr_cmp, rqrr_expected,
    rqrr_expected_eci, rqrr_roundtrip, rqrr_segments_cmp, zxingcpp, zxingcpp_cmp,
    zxingcpp_expected,
};
use crate::runner::{TestCtx, TestFunction, TestResult};
use crate::symbol::{InputMode, ReturnCode, Symbol, Symbology};
use crate::{check, check_eq};
use log::debug;

pub const FUNCS: [TestFunction; 2] = [
    TestFunction::new("test_input", test_input)
        .with_index()
        .with_generate(),
    TestFunction::new("test_encode", test_encode)
        .with_index()
        .with_generate()
        .with_debug(),
];

fn symbology_ident(symbology: Symbology) -> String {
    format!("Symbology::{symbology:?}")
}

fn input_mode_ident(input_mode: InputMode) -> &'static str {
    match (
        input_mode.contains(InputMode::UNICODE),
        input_mode.contains(InputMode::ESCAPE),
    ) {
        (false, false) => "InputMode::DATA",
        (true, false) => "InputMode::UNICODE",
        (false, true) => "InputMode::ESCAPE",
        (true, true) => "InputMode::UNICODE.union(InputMode::ESCAPE)",
    }
}

/// Data in the character set it will be encoded in, as handed to BWIPP.
fn eci_data(req: &EncodeRequest) -> Vec<u8> {
    rqrr_expected(req, &req.data).unwrap_or_else(|| req.data.clone())
}

struct InputItem {
    symbology: Symbology,
    input_mode: InputMode,
    eci: i32,
    option_1: i32,
    option_2: i32,
    data: &'static [u8],
    ret: ReturnCode,
    expected_rows: i32,
    expected_width: i32,
    expected_errtxt: &'static str,
    comment: &'static str,
}

impl InputItem {
    const DEFAULT: Self = Self {
        symbology: Symbology::MicroQr,
        input_mode: InputMode::DATA,
        eci: UNSET,
        option_1: UNSET,
        option_2: UNSET,
        data: b"",
        ret: ReturnCode::Ok,
        expected_rows: -1,
        expected_width: -1,
        expected_errtxt: "",
        comment: "",
    };

    fn request(&self) -> EncodeRequest {
        EncodeRequest::new(self.symbology, self.input_mode, self.data)
            .eci(self.eci)
            .options(self.option_1, self.option_2, UNSET)
    }
}

const ERR_ECC_H: &str = "Error correction level H not available in Micro QR";
const ERR_VERSION: &str = "Version not available at this error correction level";
const ERR_TOO_LONG: &str = "Input too long for selected version";

#[rustfmt::skip]
static INPUT_DATA: [InputItem; 53] = [
    /*  0*/ InputItem { option_1: 0, option_2: 0, data: b"12345", expected_rows: 11, expected_width: 11, ..InputItem::DEFAULT },
    /*  1*/ InputItem { option_1: 1, option_2: 0, data: b"12345", expected_rows: 11, expected_width: 11, ..InputItem::DEFAULT },
    /*  2*/ InputItem { option_1: 2, option_2: 0, data: b"12345", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /*  3*/ InputItem { option_1: 3, option_2: 0, data: b"12345", expected_rows: 17, expected_width: 17, ..InputItem::DEFAULT },
    /*  4*/ InputItem { option_1: 4, option_2: 0, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_ECC_H, ..InputItem::DEFAULT },
    /*  5*/ InputItem { option_1: 0, option_2: 1, data: b"12345", expected_rows: 11, expected_width: 11, ..InputItem::DEFAULT },
    /*  6*/ InputItem { option_1: 0, option_2: 2, data: b"12345", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /*  7*/ InputItem { option_1: 0, option_2: 3, data: b"12345", expected_rows: 15, expected_width: 15, ..InputItem::DEFAULT },
    /*  8*/ InputItem { option_1: 0, option_2: 4, data: b"12345", expected_rows: 17, expected_width: 17, ..InputItem::DEFAULT },
    /*  9*/ InputItem { option_1: 0, option_2: 5, data: b"12345", expected_rows: 11, expected_width: 11, comment: "Version > 4 ignored", ..InputItem::DEFAULT },
    /* 10*/ InputItem { option_1: 1, option_2: 5, data: b"12345", expected_rows: 11, expected_width: 11, comment: "Ignored also if ECC given", ..InputItem::DEFAULT },
    /* 11*/ InputItem { option_1: 1, option_2: 1, data: b"12345", expected_rows: 11, expected_width: 11, ..InputItem::DEFAULT },
    /* 12*/ InputItem { option_1: 1, option_2: 2, data: b"12345", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 13*/ InputItem { option_1: 1, option_2: 3, data: b"12345", expected_rows: 15, expected_width: 15, ..InputItem::DEFAULT },
    /* 14*/ InputItem { option_1: 1, option_2: 4, data: b"12345", expected_rows: 17, expected_width: 17, ..InputItem::DEFAULT },
    /* 15*/ InputItem { option_1: 2, option_2: 1, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_VERSION, comment: "M1 has error detection only", ..InputItem::DEFAULT },
    /* 16*/ InputItem { option_1: 2, option_2: 2, data: b"12345", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 17*/ InputItem { option_1: 2, option_2: 3, data: b"12345", expected_rows: 15, expected_width: 15, ..InputItem::DEFAULT },
    /* 18*/ InputItem { option_1: 2, option_2: 4, data: b"12345", expected_rows: 17, expected_width: 17, ..InputItem::DEFAULT },
    /* 19*/ InputItem { option_1: 3, option_2: 1, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_VERSION, ..InputItem::DEFAULT },
    /* 20*/ InputItem { option_1: 3, option_2: 2, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_VERSION, ..InputItem::DEFAULT },
    /* 21*/ InputItem { option_1: 3, option_2: 3, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_VERSION, ..InputItem::DEFAULT },
    /* 22*/ InputItem { option_1: 3, option_2: 4, data: b"12345", expected_rows: 17, expected_width: 17, comment: "Q only in M4", ..InputItem::DEFAULT },
    /* 23*/ InputItem { option_1: 4, option_2: 4, data: b"12345", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: ERR_ECC_H, ..InputItem::DEFAULT },
    /* 24*/ InputItem { option_1: 5, option_2: 0, data: b"12345", expected_rows: 11, expected_width: 11, comment: "ECC > 4 ignored", ..InputItem::DEFAULT },
    /* 25*/ InputItem { option_1: 5, option_2: 1, data: b"12345", expected_rows: 11, expected_width: 11, comment: "Ignored also if version given", ..InputItem::DEFAULT },
    /* 26*/ InputItem { option_1: 1, option_2: 0, data: b"123456", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 27*/ InputItem { option_1: 1, option_2: 1, data: b"123456", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, comment: "M1 holds 5 digits", ..InputItem::DEFAULT },
    /* 28*/ InputItem { option_1: 1, option_2: 2, data: b"123456", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 29*/ InputItem { option_1: 1, option_2: 0, data: b"ABCDEF", expected_rows: 13, expected_width: 13, comment: "M1 is numeric only", ..InputItem::DEFAULT },
    /* 30*/ InputItem { option_1: 1, option_2: 2, data: b"ABCDEF", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 31*/ InputItem { option_1: 2, option_2: 2, data: b"ABCDEF", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, ..InputItem::DEFAULT },
    /* 32*/ InputItem { option_1: 2, option_2: 0, data: b"ABCDE", expected_rows: 13, expected_width: 13, ..InputItem::DEFAULT },
    /* 33*/ InputItem { option_1: 1, option_2: 0, data: b"ABCDEABCDEABCD", expected_rows: 15, expected_width: 15, comment: "14 alphanumerics", ..InputItem::DEFAULT },
    /* 34*/ InputItem { option_1: 1, option_2: 3, data: b"ABCDEABCDEABCD", expected_rows: 15, expected_width: 15, ..InputItem::DEFAULT },
    /* 35*/ InputItem { option_1: 2, option_2: 3, data: b"ABCDEABCDEABCD", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, ..InputItem::DEFAULT },
    /* 36*/ InputItem { option_1: 2, option_2: 3, data: b"ABCDEABCDEA", expected_rows: 15, expected_width: 15, comment: "11 alphanumerics", ..InputItem::DEFAULT },
    /* 37*/ InputItem { option_1: 1, option_2: 0, data: b"ABCDEFGHIJABCDEFGHIJA", expected_rows: 17, expected_width: 17, comment: "21 alphanumerics", ..InputItem::DEFAULT },
    /* 38*/ InputItem { option_1: 1, option_2: 4, data: b"ABCDEFGHIJABCDEFGHIJA", expected_rows: 17, expected_width: 17, ..InputItem::DEFAULT },
    /* 39*/ InputItem { option_1: 2, option_2: 4, data: b"ABCDEFGHIJABCDEFGHIJA", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, ..InputItem::DEFAULT },
    /* 40*/ InputItem { option_1: 2, option_2: 4, data: b"ABCDEFGHIJABCDEFGH", expected_rows: 17, expected_width: 17, comment: "18 alphanumerics", ..InputItem::DEFAULT },
    /* 41*/ InputItem { option_1: 3, option_2: 4, data: b"ABCDEFGHIJABCDEFGH", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, ..InputItem::DEFAULT },
    /* 42*/ InputItem { option_1: 3, option_2: 4, data: b"ABCDEFGHIJABC", expected_rows: 17, expected_width: 17, comment: "13 alphanumerics", ..InputItem::DEFAULT },
    /* 43*/ InputItem { symbology: Symbology::QrCode, option_1: 2, option_2: 1, data: b"01234567", expected_rows: 21, expected_width: 21, ..InputItem::DEFAULT },
    /* 44*/ InputItem { symbology: Symbology::QrCode, option_2: 41, data: b"01234567", expected_rows: 21, expected_width: 21, comment: "Version > 40 ignored", ..InputItem::DEFAULT },
    /* 45*/ InputItem { symbology: Symbology::QrCode, option_1: 1, option_2: 1, data: b"12345678901234567890123456789012345678901", expected_rows: 21, expected_width: 21, comment: "41 digits fill 1-L", ..InputItem::DEFAULT },
    /* 46*/ InputItem { symbology: Symbology::QrCode, option_1: 1, option_2: 1, data: b"123456789012345678901234567890123456789012", ret: ReturnCode::ErrorTooLong, expected_errtxt: ERR_TOO_LONG, ..InputItem::DEFAULT },
    /* 47*/ InputItem { symbology: Symbology::QrCode, option_1: 1, data: b"123456789012345678901234567890123456789012", expected_rows: 25, expected_width: 25, ..InputItem::DEFAULT },
    /* 48*/ InputItem { symbology: Symbology::QrCode, input_mode: InputMode::UNICODE, eci: ECI_KSX1001, data: "가".as_bytes(), expected_rows: 21, expected_width: 21, ..InputItem::DEFAULT },
    /* 49*/ InputItem { symbology: Symbology::QrCode, input_mode: InputMode::UNICODE, eci: ECI_KSX1001, data: "가갂".as_bytes(), ret: ReturnCode::ErrorInvalidData, expected_errtxt: "Invalid character at position 2 in input (ECI 30) for U+AC02", ..InputItem::DEFAULT },
    /* 50*/ InputItem { input_mode: InputMode::UNICODE, eci: ECI_KSX1001, data: "가".as_bytes(), ret: ReturnCode::ErrorInvalidOption, expected_errtxt: "Micro QR does not support ECI", ..InputItem::DEFAULT },
    /* 51*/ InputItem { symbology: Symbology::QrCode, input_mode: InputMode::UNICODE, data: "가".as_bytes(), ret: ReturnCode::WarnUsesEci, expected_rows: 21, expected_width: 21, expected_errtxt: "Encoded data includes ECI 26", ..InputItem::DEFAULT },
    /* 52*/ InputItem { symbology: Symbology::QrCode, input_mode: InputMode::UNICODE, eci: 3, data: b"A", ret: ReturnCode::ErrorInvalidOption, expected_errtxt: "ECI '3' not supported", ..InputItem::DEFAULT },
];

/// Option handling, return codes and symbol sizes.
pub fn test_input(ctx: &mut TestCtx) -> TestResult {
    let encoder = QrEncoder::new();
    for (i, item) in INPUT_DATA.iter().enumerate() {
        if ctx.skip(i) {
            continue;
        }
        let req = item.request();
        let encoded = encoder.encode(&req);
        let (rows, width) = encoded
            .symbol
            .as_ref()
            .map_or((-1, -1), |s| (s.rows() as i32, s.width() as i32));

        if ctx.generate() {
            println!(
                "    /*{i:3}*/ InputItem {{ symbology: {}, input_mode: {}, eci: {}, option_1: {}, option_2: {}, data: b\"{}\", ret: ReturnCode::{:?}, expected_rows: {rows}, expected_width: {width}, expected_errtxt: {:?}, comment: {:?} }},",
                symbology_ident(item.symbology),
                input_mode_ident(item.input_mode),
                item.eci,
                item.option_1,
                item.option_2,
                escape(item.data),
                encoded.ret,
                encoded.errtxt,
                item.comment
            );
            continue;
        }

        check_eq!(ctx, encoded.ret, item.ret, "i:{i} ret ({})", encoded.errtxt);
        check_eq!(ctx, encoded.errtxt, item.expected_errtxt, "i:{i} errtxt");
        check_eq!(ctx, encoded.symbol.is_some(), !item.ret.is_error(), "i:{i} symbol present");
        check_eq!(ctx, rows, item.expected_rows, "i:{i} rows");
        check_eq!(ctx, width, item.expected_width, "i:{i} width");
    }
    Ok(())
}

struct EncodeItem {
    symbology: Symbology,
    input_mode: InputMode,
    eci: i32,
    option_1: i32,
    option_2: i32,
    data: &'static [u8],
    ret: ReturnCode,
    expected_rows: i32,
    expected_width: i32,
    bwipp_cmp: bool,
    zxingcpp_cmp: bool,
    comment: &'static str,
    /// Empty to check size and round trip only
    expected: &'static str,
}

impl EncodeItem {
    const DEFAULT: Self = Self {
        symbology: Symbology::QrCode,
        input_mode: InputMode::DATA,
        eci: UNSET,
        option_1: UNSET,
        option_2: UNSET,
        data: b"",
        ret: ReturnCode::Ok,
        expected_rows: -1,
        expected_width: -1,
        bwipp_cmp: true,
        zxingcpp_cmp: true,
        comment: "",
        expected: "",
    };

    fn request(&self) -> EncodeRequest {
        EncodeRequest::new(self.symbology, self.input_mode, self.data)
            .eci(self.eci)
            .options(self.option_1, self.option_2, UNSET)
    }
}

#[rustfmt::skip]
static ENCODE_DATA: [EncodeItem; 10] = [
    /*  0*/ EncodeItem {
                option_1: 2, option_2: 1, data: b"01234567", expected_rows: 21, expected_width: 21,
                comment: "ISO 18004 Annex I I.2, 1-M",
                expected: "
                    111111100101101111111
                    100000100111101000001
                    101110101000001011101
                    101110101100001011101
                    101110101011101011101
                    100000101000101000001
                    111111101010101111111
                    000000001001100000000
                    101111100100101111100
                    000101011010100101100
                    001000110101010011111
                    000010000100000111100
                    000111111001010010000
                    000000001011111001100
                    111111100110101100000
                    100000101011111000101
                    101110101000100101100
                    101110101100100100000
                    101110101011010010100
                    100000100000000110110
                    111111101111010010100
                ",
                ..EncodeItem::DEFAULT
            },
    /*  1*/ EncodeItem {
                symbology: Symbology::MicroQr, option_1: 1, option_2: 2, data: b"01234567", expected_rows: 13, expected_width: 13,
                comment: "ISO 18004 Annex I I.3, M2-L",
                expected: "
                    1111111010101
                    1000001011101
                    1011101001101
                    1011101001111
                    1011101011100
                    1000001010001
                    1111111001111
                    0000000001100
                    1101000010001
                    0110101010101
                    1110011111110
                    0001010000110
                    1110100110111
                ",
                ..EncodeItem::DEFAULT
            },
    /*  2*/ EncodeItem { data: b"HELLO WORLD", expected_rows: 21, expected_width: 21, comment: "Alphanumeric", ..EncodeItem::DEFAULT },
    /*  3*/ EncodeItem { option_1: 4, data: b"https://www.example.com/", expected_rows: 29, expected_width: 29, comment: "Byte mode, ECC H", ..EncodeItem::DEFAULT },
    /*  4*/ EncodeItem { input_mode: InputMode::UNICODE, data: "Ärger".as_bytes(), expected_rows: 21, expected_width: 21, comment: "Latin-1 without ECI", ..EncodeItem::DEFAULT },
    /*  5*/ EncodeItem { input_mode: InputMode::UNICODE, eci: ECI_KSX1001, data: "한국어".as_bytes(), expected_rows: 21, expected_width: 21, comment: "ECI 30, EUC-KR byte mode", ..EncodeItem::DEFAULT },
    /*  6*/ EncodeItem { input_mode: InputMode::ESCAPE, data: b"\\d001\\G2\\x7F", expected_rows: 21, expected_width: 21, comment: "Escaped control characters", ..EncodeItem::DEFAULT },
    /*  7*/ EncodeItem { symbology: Symbology::MicroQr, option_2: 4, data: b"ABCDEFGHIJABC", expected_rows: 17, expected_width: 17, comment: "M4 alphanumeric", ..EncodeItem::DEFAULT },
    /*  8*/ EncodeItem { input_mode: InputMode::UNICODE, data: "àá".as_bytes(), expected_rows: 21, expected_width: 21, comment: "Latin-1 in Shift JIS range, byte mode", ..EncodeItem::DEFAULT },
    /*  9*/ EncodeItem { input_mode: InputMode::UNICODE, eci: ECI_KSX1001, data: "聖".as_bytes(), expected_rows: 21, expected_width: 21, comment: "ECI 30, Hanja 0xE1A1 in byte mode", ..EncodeItem::DEFAULT },
];

fn print_encode_item(i: usize, item: &EncodeItem, ret: ReturnCode, symbol: Option<&Symbol>) {
    let (rows, width) = symbol.map_or((-1, -1), |s| (s.rows() as i32, s.width() as i32));
    println!(
        "    /*{i:3}*/ EncodeItem {{\n                symbology: {}, input_mode: {}, eci: {}, option_1: {}, option_2: {}, data: b\"{}\", ret: ReturnCode::{ret:?}, expected_rows: {rows}, expected_width: {width},\n                bwipp_cmp: {}, zxingcpp_cmp: {}, comment: {:?},",
        symbology_ident(item.symbology),
        input_mode_ident(item.input_mode),
        item.eci,
        item.option_1,
        item.option_2,
        escape(item.data),
        item.bwipp_cmp,
        item.zxingcpp_cmp,
        item.comment
    );
    match symbol {
        Some(symbol) => println!(
            "                expected: \"\n{}                \",\n            }},",
            modules_print(&symbol.matrix, "                    ", "\n")
        ),
        None => println!("                expected: \"\",\n            }},"),
    }
}

/// Golden module matrices, cross-checked against BWIPP, ZXing-C++ and rqrr.
pub fn test_encode(ctx: &mut TestCtx) -> TestResult {
    let encoder = QrEncoder::new();
    let do_bwipp = ctx.do_bwipp();
    let do_zxingcpp = ctx.do_zxingcpp();

    for (i, item) in ENCODE_DATA.iter().enumerate() {
        if ctx.skip(i) {
            continue;
        }
        let req = item.request();
        let encoded = encoder.encode(&req);

        if ctx.generate() {
            print_encode_item(i, item, encoded.ret, encoded.symbol.as_ref());
            continue;
        }

        check_eq!(ctx, encoded.ret, item.ret, "i:{i} ret ({})", encoded.errtxt);
        let Some(symbol) = encoded.symbol.as_ref() else {
            continue;
        };
        check_eq!(ctx, symbol.rows() as i32, item.expected_rows, "i:{i} rows");
        check_eq!(ctx, symbol.width() as i32, item.expected_width, "i:{i} width");

        if !item.expected.is_empty() {
            let cmp = modules_cmp(&symbol.matrix, item.expected);
            check!(
                ctx,
                cmp.is_ok(),
                "i:{i} modules_cmp: {} ({})\n{}",
                cmp.err().map(|e| e.to_string()).unwrap_or_default(),
                item.comment,
                symbol.matrix
            );
        }

        // Oracles see the data after escape processing
        let mut data_req = req.clone();
        if req.input_mode.contains(InputMode::ESCAPE) {
            data_req.data = unescape(&req.data).unwrap_or_default();
            data_req.input_mode.remove(InputMode::ESCAPE);
        }

        if can_rqrr(i, &req) {
            if let Some(expected) = rqrr_expected(&data_req, &data_req.data) {
                match rqrr_roundtrip(ctx.config(), symbol) {
                    Ok(scan) => {
                        let cmp = rqrr_cmp(&scan.bytes, &expected);
                        check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                        let eci = rqrr_expected_eci(&data_req, &data_req.data);
                        let cmp = rqrr_segments_cmp(&scan.segments, eci);
                        check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                    }
                    Err(e) => check!(ctx, false, "i:{i} rqrr: {e}"),
                }
            }
        }

        if do_bwipp && item.bwipp_cmp && can_bwipp(i, &req) {
            match bwipp(ctx.config(), &data_req, &eci_data(&data_req)) {
                Ok(dump) => {
                    let cmp = bwipp_cmp(symbol, &dump);
                    check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                }
                Err(e) => check!(ctx, false, "i:{i} {e}"),
            }
        } else if do_bwipp {
            debug!("i:{i} BWIPP comparison skipped");
        }

        if do_zxingcpp && item.zxingcpp_cmp && can_zxingcpp(i, &req) {
            match zxingcpp(ctx.config(), symbol) {
                Ok(decoded) => {
                    let expected = zxingcpp_expected(&data_req, &data_req.data);
                    let cmp = zxingcpp_cmp(&decoded, &expected);
                    check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                }
                Err(e) => check!(ctx, false, "i:{i} {e}"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TestRun;

    #[test]
    fn test_suite_passes() {
        let mut run = TestRun::new();
        run.run(&FUNCS, None, &TestCtx::default());
        assert!(run.success(), "{}", run.summary());
    }

    #[test]
    fn test_golden_mismatch_fails() {
        fn flipped(ctx: &mut TestCtx) -> TestResult {
            let req = ENCODE_DATA[0].request();
            let mut symbol = QrEncoder.encode(&req).symbol.unwrap();
            symbol.matrix.set(10, 10, !symbol.matrix.get(10, 10));
            let cmp = modules_cmp(&symbol.matrix, ENCODE_DATA[0].expected);
            check!(ctx, cmp.is_ok(), "modules_cmp: {:?}", cmp);
            Ok(())
        }
        let mut run = TestRun::new();
        run.run(&[TestFunction::new("flipped", flipped)], None, &TestCtx::default());
        assert!(!run.success());
        assert_eq!(run.failed_assertions, 1);
    }
}
