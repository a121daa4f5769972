//! Linear symbols through the encoder seam, using a stand-in Code 39
//! encoder and stand-in oracle tools written as shell scripts

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zedcheck::encoder::UNSET;
use zedcheck::oracle::{bwipp, bwipp_cmp, can_bwipp, can_zxingcpp, zxingcpp, zxingcpp_cmp, zxingcpp_expected};
use zedcheck::runner::TestResult;
use zedcheck::{check, check_eq};
use zedcheck::{
    DebugFlags, EncodeRequest, Encoded, Encoder, HarnessConfig, InputMode, ModuleMatrix, ReturnCode, Symbol,
    Symbology, TestCtx, TestFunction, TestRun,
};

const CODE39_CHARS: &[u8; 43] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";

/// Bar and space widths per character, ending with the inter-character gap
#[rustfmt::skip]
const CODE39_WIDTHS: [&str; 43] = [
    "1112212111", "2112111121", "1122111121", "2122111111", "1112211121", "2112211111",
    "1122211111", "1112112121", "2112112111", "1122112111", "2111121121", "1121121121",
    "2121121111", "1111221121", "2111221111", "1121221111", "1111122121", "2111122111",
    "1121122111", "1111222111", "2111111221", "1121111221", "2121111211", "1111211221",
    "2111211211", "1121211211", "1111112221", "2111112211", "1121112211", "1111212211",
    "2211111121", "1221111121", "2221111111", "1211211121", "2211211111", "1221211111",
    "1211112121", "2211112111", "1221112111", "1212121111", "1212111211", "1211121211",
    "1112121211",
];

/// Start and stop character; the stop character has no trailing gap
const CODE39_START: &str = "1211212111";

/// Code 39 with an optional mod 43 check character (`option_2` 1)
struct Code39Encoder;

impl Code39Encoder {
    fn row(&self, req: &EncodeRequest) -> Option<Vec<bool>> {
        let posns = req
            .data
            .iter()
            .map(|b| CODE39_CHARS.iter().position(|c| c == b))
            .collect::<Option<Vec<usize>>>()?;
        let mut widths = CODE39_START.to_string();
        for &p in &posns {
            widths.push_str(CODE39_WIDTHS[p]);
        }
        if req.option_2 == 1 {
            widths.push_str(CODE39_WIDTHS[posns.iter().sum::<usize>() % 43]);
        }
        widths.push_str(&CODE39_START[..9]);

        let row = widths
            .bytes()
            .enumerate()
            .flat_map(|(i, w)| std::iter::repeat(i % 2 == 0).take(usize::from(w - b'0')))
            .collect();
        Some(row)
    }
}

impl Encoder for Code39Encoder {
    fn supports(&self, symbology: Symbology) -> bool {
        symbology == Symbology::Code39
    }

    fn encode(&self, req: &EncodeRequest) -> Encoded {
        if !self.supports(req.symbology) {
            return Encoded::error(ReturnCode::ErrorInvalidOption, "Symbology not supported");
        }
        let Some(row) = self.row(req) else {
            return Encoded::error(ReturnCode::ErrorInvalidData, "Invalid character in data");
        };
        let width = row.len();
        match ModuleMatrix::from_modules(1, width, row) {
            Some(matrix) => Encoded::ok(Symbol::new(Symbology::Code39, matrix)),
            None => Encoded::error(ReturnCode::ErrorEncodingProblem, "Bad row"),
        }
    }
}

struct Item {
    data: &'static [u8],
    option_2: i32,
    ret: ReturnCode,
    expected_width: usize,
}

#[rustfmt::skip]
static DATA: [Item; 3] = [
    /*  0*/ Item { data: b"CODE39", option_2: 1, ret: ReturnCode::Ok, expected_width: 116 },
    /*  1*/ Item { data: b"A1", option_2: UNSET, ret: ReturnCode::Ok, expected_width: 51 },
    /*  2*/ Item { data: b"a", option_2: UNSET, ret: ReturnCode::ErrorInvalidData, expected_width: 0 },
];

fn request(item: &Item) -> EncodeRequest {
    EncodeRequest::new(Symbology::Code39, InputMode::DATA, item.data).options(UNSET, item.option_2, UNSET)
}

fn test_code39(ctx: &mut TestCtx) -> TestResult {
    let do_bwipp = ctx.do_bwipp();
    let do_zxingcpp = ctx.do_zxingcpp();
    check!(ctx, do_bwipp && do_zxingcpp, "stand-in tools not picked up");

    for (i, item) in DATA.iter().enumerate() {
        if ctx.skip(i) {
            continue;
        }
        let req = request(item);
        let encoded = Code39Encoder.encode(&req);
        check_eq!(ctx, encoded.ret, item.ret, "i:{i} ret ({})", encoded.errtxt);
        let Some(symbol) = encoded.symbol.as_ref() else {
            continue;
        };
        check_eq!(ctx, (symbol.rows(), symbol.width()), (1, item.expected_width), "i:{i} size");

        if can_bwipp(i, &req) {
            match bwipp(ctx.config(), &req, &req.data) {
                Ok(dump) => {
                    let cmp = bwipp_cmp(symbol, &dump);
                    check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                }
                Err(e) => check!(ctx, false, "i:{i} {e}"),
            }
        }
        if can_zxingcpp(i, &req) {
            match zxingcpp(ctx.config(), symbol) {
                Ok(decoded) => {
                    let cmp = zxingcpp_cmp(&decoded, &zxingcpp_expected(&req, &req.data));
                    check!(ctx, cmp.is_ok(), "i:{i} {}", cmp.err().map(|e| e.to_string()).unwrap_or_default());
                }
                Err(e) => check!(ctx, false, "i:{i} {e}"),
            }
        }
    }
    Ok(())
}

const FUNCS: [TestFunction; 1] = [TestFunction::new("test_code39", test_code39).with_index().with_debug()];

/// Write an executable shell script into `dir`
fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Stand-in Ghostscript and ZXing-C++ decoder. Ghostscript prints the rows
/// stored under `rows/<data>`, the decoder the text stored under
/// `text/<width>`. Both log their arguments, one call per line.
struct Tools {
    dir: TempDir,
    config: HarnessConfig,
}

impl Tools {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("rows")).unwrap();
        fs::create_dir(root.join("text")).unwrap();
        let driver = root.join("bwipp_dump.ps");
        fs::write(&driver, "").unwrap();

        let gs = script(
            root,
            "gs",
            &format!(
                "[ \"$1\" = -v ] && exit 0\n\
                 for a; do case \"$a\" in -sd=*) d=\"${{a#-sd=}}\";; esac; done\n\
                 echo \"$*\" >> {gs_args}\n\
                 cat \"{rows}/$d\"",
                gs_args = root.join("gs_args").display(),
                rows = root.join("rows").display(),
            ),
        );
        let decoder = script(
            root,
            "zxingcppdecoder",
            &format!(
                "[ \"$1\" = -h ] && exit 0\n\
                 prev=; for a; do [ \"$prev\" = -width ] && w=\"$a\"; prev=\"$a\"; done\n\
                 echo \"$*\" >> {zx_args}\n\
                 cat \"{text}/$w\"",
                zx_args = root.join("zx_args").display(),
                text = root.join("text").display(),
            ),
        );
        let config = HarnessConfig::new()
            .debug(DebugFlags::BWIPP | DebugFlags::ZXINGCPP)
            .gs_path(gs)
            .bwipp_dump_path(driver)
            .zxingcpp_path(decoder);
        Self { dir, config }
    }

    /// BWIPP answers with `row` repeated for the bar height.
    fn bwipp_rows(&self, data: &[u8], row: &str) {
        let path = self.dir.path().join("rows").join(&*String::from_utf8_lossy(data));
        fs::write(path, format!("{row}\n").repeat(3)).unwrap();
    }

    fn decoder_text(&self, width: usize, text: &[u8]) {
        let mut out = text.to_vec();
        out.push(b'\n');
        fs::write(self.dir.path().join("text").join(width.to_string()), out).unwrap();
    }

    fn log(&self, name: &str) -> Vec<String> {
        fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn run(&self) -> TestRun {
        let mut run = TestRun::new();
        run.run(&FUNCS, None, &TestCtx::new(self.config.clone()));
        run
    }
}

fn row_text(item: &Item) -> String {
    Code39Encoder.encode(&request(item)).symbol.unwrap().matrix.to_string().trim_end().to_string()
}

#[test]
fn test_code39_row() {
    // Start, "A", stop
    let symbol = Code39Encoder
        .encode(&EncodeRequest::new(Symbology::Code39, InputMode::DATA, &b"A"[..]))
        .symbol
        .unwrap();
    assert_eq!(
        symbol.matrix.to_string().trim_end(),
        "10010110110101101010010110100101101101"
    );
}

#[test]
fn test_code39_through_oracles() {
    let tools = Tools::new();
    for item in DATA.iter().filter(|item| item.ret == ReturnCode::Ok) {
        tools.bwipp_rows(item.data, &row_text(item));
        tools.decoder_text(item.expected_width, item.data);
    }

    let run = tools.run();
    assert!(run.success(), "{}", run.summary());

    // Check character requested only where the encoder adds one
    let gs_args = tools.log("gs_args");
    assert_eq!(gs_args.len(), 2, "{gs_args:?}");
    assert!(gs_args[0].contains("-sb=code39 -sd=CODE39 -so=includecheck "), "{}", gs_args[0]);
    assert!(gs_args[1].contains("-sb=code39 -sd=A1 -so= "), "{}", gs_args[1]);

    // One row of bars goes to the decoder
    let zx_args = tools.log("zx_args");
    assert_eq!(zx_args.len(), 2, "{zx_args:?}");
    for (args, item) in zx_args.iter().zip(&DATA) {
        let bits = args.split(' ').skip_while(|a| *a != "-bits").nth(1).unwrap();
        assert_eq!(bits, row_text(item));
        assert!(args.starts_with(&format!("-textonly -symbology Code39 -width {}", item.expected_width)), "{args}");
    }
}

#[test]
fn test_code39_bwipp_disagrees() {
    let tools = Tools::new();
    for item in DATA.iter().filter(|item| item.ret == ReturnCode::Ok) {
        tools.bwipp_rows(item.data, &row_text(item));
        tools.decoder_text(item.expected_width, item.data);
    }
    // No check character in BWIPP's answer
    tools.bwipp_rows(DATA[0].data, &row_text(&Item { option_2: UNSET, ..DATA[0] }));

    let run = tools.run();
    assert!(!run.success());
    assert_eq!(run.failed_assertions, 1);
}
