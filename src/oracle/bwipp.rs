//! BWIPP (Barcode Writer in Pure PostScript) cross-check
//!
//! BWIPP runs under Ghostscript through a small driver, `bwipp_dump.ps`,
//! which takes the encoder name, data and options from `-s` defines and
//! prints the resulting modules as lines of `0`/`1`:
//!
//! ```text
//! gs -dNOPAUSE -dBATCH -dNODISPLAY -q -sb=qrcode -sd=... -so=... bwipp_dump.ps
//! ```
//!
//! Data longer than [`DATA_CHUNK`] bytes is split across `-sd2`, `-sd3` and
//! `-sd4`, which the driver concatenates.

use super::{can_spawn, Mismatch};
use crate::config::HarnessConfig;
use crate::encoder::EncodeRequest;
use crate::modules::{modules_dump, ModuleMatrix};
use crate::symbol::{Symbol, Symbology};
use crate::{Error, Result};
use log::{debug, info};
use std::process::Command;

const TOOL: &str = "bwipp";

/// Largest data define passed to Ghostscript
pub const DATA_CHUNK: usize = 2043;
const DATA_DEFINES: [&str; 4] = ["-sd=", "-sd2=", "-sd3=", "-sd4="];

/// Ghostscript runs and the driver script exists.
pub fn have_ghostscript(config: &HarnessConfig) -> bool {
    if !config.bwipp_dump().is_file() {
        info!("BWIPP driver {} not found", config.bwipp_dump().display());
        return false;
    }
    let ok = can_spawn(config.gs(), "-v");
    if !ok {
        info!("Ghostscript {} not available", config.gs().display());
    }
    ok
}

/// Whether case `index` can be checked against BWIPP at all.
pub fn can_bwipp(index: usize, req: &EncodeRequest) -> bool {
    let reason = match req.symbology {
        s if s.bwipp_name().is_none() => "no BWIPP encoder",
        // BWIPP needs the Mailmark type, which requests do not carry
        Symbology::Mailmark4s => "Mailmark type not expressible",
        Symbology::MicroQr if req.has_eci() => "Micro QR has no ECI",
        _ => return true,
    };
    info!("i:{index} {} not BWIPP compatible ({reason})", req.symbology);
    false
}

/// Data as a BWIPP string. Bytes outside printable ASCII, and `^` itself,
/// become `^NNN` escapes; the flag says whether the `parse` option is needed.
pub fn bwipp_data(data: &[u8]) -> (String, bool) {
    let mut out = String::with_capacity(data.len());
    let mut parse = false;
    for &b in data {
        if (0x20..0x7F).contains(&b) && b != b'^' {
            out.push(b as char);
        } else {
            out.push_str(&format!("^{b:03}"));
            parse = true;
        }
    }
    (out, parse)
}

/// BWIPP options for a request, space separated.
pub fn bwipp_opts(req: &EncodeRequest, parse: bool) -> String {
    let mut opts = Vec::new();
    match req.symbology {
        Symbology::QrCode | Symbology::MicroQr => {
            let level = match req.option_1 {
                1 => Some("L"),
                2 => Some("M"),
                3 => Some("Q"),
                4 => Some("H"),
                _ => None,
            };
            if let Some(level) = level {
                opts.push(format!("eclevel={level}"));
            }
            let micro = req.symbology == Symbology::MicroQr;
            let max = if micro { 4 } else { 40 };
            if (1..=max).contains(&req.option_2) {
                opts.push(if micro {
                    format!("version=M{}", req.option_2)
                } else {
                    format!("version={}", req.option_2)
                });
            }
        }
        Symbology::Code39 | Symbology::Codabar if req.option_2 == 1 => {
            opts.push("includecheck".to_string());
        }
        Symbology::Code93 => opts.push("includecheck".to_string()),
        _ => {}
    }
    if req.has_eci() {
        opts.push("parsefnc".to_string());
    }
    if parse {
        opts.push("parse".to_string());
    }
    opts.join(" ")
}

/// Run BWIPP for `req` with `data` (already converted to the request's ECI
/// character set) and return its module rows, one per line.
pub fn bwipp(config: &HarnessConfig, req: &EncodeRequest, data: &[u8]) -> Result<String> {
    let name = req
        .symbology
        .bwipp_name()
        .ok_or(Error::ToolUnavailable { tool: TOOL })?;
    let (mut encoded, parse) = bwipp_data(data);
    if req.has_eci() {
        encoded.insert_str(0, &format!("^ECI{:06}", req.eci));
    }
    if encoded.len() > DATA_CHUNK * DATA_DEFINES.len() {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: format!("data too long ({} bytes)", encoded.len()),
        });
    }

    let mut cmd = Command::new(config.gs());
    cmd.args(["-dNOPAUSE", "-dBATCH", "-dNODISPLAY", "-q"])
        .arg(format!("-sb={name}"));
    // ASCII only, so byte chunks are char boundaries
    for (define, chunk) in DATA_DEFINES.iter().zip(encoded.as_bytes().chunks(DATA_CHUNK)) {
        cmd.arg(format!("{define}{}", String::from_utf8_lossy(chunk)));
    }
    cmd.arg(format!("-so={}", bwipp_opts(req, parse)))
        .arg(config.bwipp_dump());
    debug!("{cmd:?}");

    let output = cmd.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        return Err(Error::Subprocess {
            tool: TOOL,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    if let Some(line) = stdout.lines().find(|l| l.contains("Error") || l.contains("ERROR")) {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: line.trim().to_string(),
        });
    }

    let rows = module_rows(&stdout);
    if rows.is_empty() {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: "no module rows in output".to_string(),
        });
    }
    let dump = rows.join("\n");
    ModuleMatrix::parse(&dump).map_err(|e| Error::Protocol {
        tool: TOOL,
        reason: e.to_string(),
    })?;
    Ok(dump)
}

/// Lines made up only of `0`/`1`; anything else the driver printed is noise.
fn module_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && l.bytes().all(|b| b == b'0' || b == b'1'))
        .collect()
}

/// Rows of `matrix` as text, with runs of identical rows collapsed when
/// `collapse` is set. Linear symbols are dumped once per unit of bar height,
/// so only the distinct rows are comparable.
fn normalized_rows(matrix: &ModuleMatrix, collapse: bool) -> Vec<String> {
    let mut rows: Vec<String> = matrix
        .to_string()
        .lines()
        .map(str::to_string)
        .collect();
    if collapse {
        rows.dedup();
    }
    rows
}

/// Compare BWIPP's module rows with `symbol`.
pub fn bwipp_cmp(symbol: &Symbol, bwipp_dump: &str) -> std::result::Result<(), Mismatch> {
    let linear = symbol.symbology.is_linear();
    let theirs = ModuleMatrix::parse(&module_rows(bwipp_dump).join("\n"))
        .map_err(|e| Mismatch::new(TOOL, format!("unreadable dump: {e}"), "", bwipp_dump))?;

    let ours = normalized_rows(&symbol.matrix, linear);
    let expected = normalized_rows(&theirs, linear);
    if ours == expected {
        return Ok(());
    }

    let ours_matrix = ModuleMatrix::parse(&ours.join("\n")).unwrap_or_default();
    let expected_matrix = ModuleMatrix::parse(&expected.join("\n")).unwrap_or_default();
    let reason = ours_matrix
        .first_divergence(&expected_matrix)
        .map_or_else(|| "modules differ".to_string(), |m| m.to_string());
    Err(Mismatch::new(
        TOOL,
        reason,
        modules_dump(&ours_matrix),
        modules_dump(&expected_matrix),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::UNSET;
    use crate::symbol::InputMode;
    use std::path::PathBuf;

    #[test]
    fn test_bwipp_data() {
        assert_eq!(bwipp_data(b"AB 12"), ("AB 12".to_string(), false));
        assert_eq!(bwipp_data(b"A^B"), ("A^094B".to_string(), true));
        assert_eq!(bwipp_data(b"\xB0\xA1\n"), ("^176^161^010".to_string(), true));
    }

    #[test]
    fn test_bwipp_opts() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"1"[..]).options(2, 5, UNSET);
        assert_eq!(bwipp_opts(&req, false), "eclevel=M version=5");

        let req = EncodeRequest::new(Symbology::MicroQr, InputMode::DATA, &b"1"[..]).options(UNSET, 3, UNSET);
        assert_eq!(bwipp_opts(&req, true), "version=M3 parse");

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, &b"1"[..]).eci(30);
        assert_eq!(bwipp_opts(&req, true), "parsefnc parse");

        let req = EncodeRequest::new(Symbology::Code93, InputMode::DATA, &b"1"[..]);
        assert_eq!(bwipp_opts(&req, false), "includecheck");

        // Out of range levels are left to BWIPP's default
        for option_1 in [i32::MIN, 0, 5, i32::MAX] {
            let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"1"[..]).options(option_1, UNSET, UNSET);
            assert_eq!(bwipp_opts(&req, false), "");
        }
    }

    #[test]
    fn test_can_bwipp() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"1"[..]);
        assert!(can_bwipp(0, &req));
        let req = EncodeRequest::new(Symbology::MicroQr, InputMode::DATA, &b"1"[..]).eci(26);
        assert!(!can_bwipp(1, &req));
        let req = EncodeRequest::new(Symbology::Mailmark4s, InputMode::DATA, &b"1"[..]);
        assert!(!can_bwipp(2, &req));
    }

    #[test]
    fn test_bwipp_cmp_matrix() {
        let matrix = ModuleMatrix::parse("110\n011\n101").unwrap();
        let symbol = Symbol::new(Symbology::QrCode, matrix);
        assert_eq!(bwipp_cmp(&symbol, "GS noise\n110\n011\n101\n"), Ok(()));

        let err = bwipp_cmp(&symbol, "110\n001\n101\n").unwrap_err();
        assert_eq!(err.reason, "module (1, 1) 1 != 0");
        assert_eq!(err.actual, "110011101");
        assert_eq!(err.expected, "110001101");
    }

    #[test]
    fn test_bwipp_cmp_linear_collapses_height() {
        let matrix = ModuleMatrix::parse("1011001").unwrap();
        let symbol = Symbol::new(Symbology::Code128, matrix);
        assert_eq!(bwipp_cmp(&symbol, "1011001\n1011001\n1011001\n"), Ok(()));
        assert!(bwipp_cmp(&symbol, "1011011\n").is_err());
    }

    #[test]
    fn test_have_ghostscript_missing_driver() {
        let config = HarnessConfig::new().bwipp_dump_path(PathBuf::from("/nonexistent/bwipp_dump.ps"));
        assert!(!have_ghostscript(&config));
    }
}
