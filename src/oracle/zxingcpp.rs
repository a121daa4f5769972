//! ZXing-C++ round trip
//!
//! The module dump is handed to `zxingcppdecoder`, which decodes it as if it
//! had been scanned and prints the text:
//!
//! ```text
//! zxingcppdecoder -textonly -symbology QRCode -width 21 -bits 1111111001...
//! ```

use super::{can_spawn, Mismatch};
use crate::config::HarnessConfig;
use crate::encoder::{EncodeRequest, ECI_BINARY, ECI_KSX1001};
use crate::modules::modules_dump;
use crate::symbol::{InputMode, Symbol};
use crate::{Error, Result};
use encoding_rs::EUC_KR;
use log::{debug, info};
use std::process::Command;

const TOOL: &str = "zxing-cpp";

pub fn have_zxingcpp_decoder(config: &HarnessConfig) -> bool {
    let ok = can_spawn(config.zxingcpp(), "-h");
    if !ok {
        info!("ZXing-C++ decoder {} not available", config.zxingcpp().display());
    }
    ok
}

/// Whether case `index` can be round-tripped through ZXing-C++.
pub fn can_zxingcpp(index: usize, req: &EncodeRequest) -> bool {
    let reason = if req.symbology.zxingcpp_name().is_none() {
        "no ZXing-C++ decoder"
    } else if req.eci == ECI_BINARY {
        "binary ECI is not text"
    } else {
        return true;
    };
    info!("i:{index} {} not ZXing-C++ compatible ({reason})", req.symbology);
    false
}

/// Decode `symbol` and return the decoder's output.
pub fn zxingcpp(config: &HarnessConfig, symbol: &Symbol) -> Result<Vec<u8>> {
    let name = symbol
        .symbology
        .zxingcpp_name()
        .ok_or(Error::ToolUnavailable { tool: TOOL })?;
    let bits: String = if symbol.symbology.is_linear() {
        // One row of bars is enough for a linear decoder
        symbol
            .matrix
            .row(0)
            .iter()
            .map(|&m| if m { '1' } else { '0' })
            .collect()
    } else {
        modules_dump(&symbol.matrix)
    };

    let mut cmd = Command::new(config.zxingcpp());
    cmd.args(["-textonly", "-symbology", name, "-width"])
        .arg(symbol.width().to_string())
        .arg("-bits")
        .arg(&bits);
    debug!("{cmd:?}");

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(Error::Subprocess {
            tool: TOOL,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    if output.stdout.is_empty() {
        return Err(Error::Protocol {
            tool: TOOL,
            reason: "no output".to_string(),
        });
    }
    Ok(output.stdout)
}

/// Text the decoder should print for `data` encoded under `req`, as UTF-8.
pub fn zxingcpp_expected(req: &EncodeRequest, data: &[u8]) -> Vec<u8> {
    if req.input_mode.contains(InputMode::UNICODE) {
        return data.to_vec();
    }
    if req.eci == ECI_KSX1001 {
        let (text, _had_errors) = EUC_KR.decode_without_bom_handling(data);
        return text.into_owned().into_bytes();
    }
    if req.has_eci() {
        return data.to_vec();
    }
    // Default character set is Latin-1
    data.iter().map(|&b| b as char).collect::<String>().into_bytes()
}

/// Compare decoder output with the expected text. The decoder terminates
/// its output with a newline, which is dropped.
pub fn zxingcpp_cmp(decoded: &[u8], expected: &[u8]) -> std::result::Result<(), Mismatch> {
    let decoded = decoded.strip_suffix(b"\n").unwrap_or(decoded);
    if decoded == expected {
        return Ok(());
    }
    let reason = match decoded.iter().zip(expected).position(|(a, b)| a != b) {
        Some(pos) => format!("content differs at byte {pos}"),
        None => format!("length {} != {}", decoded.len(), expected.len()),
    };
    Err(Mismatch::bytes(TOOL, reason, decoded, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbology;

    #[test]
    fn test_zxingcpp_cmp() {
        assert_eq!(zxingcpp_cmp(b"12345\n", b"12345"), Ok(()));
        assert_eq!(zxingcpp_cmp(b"12345", b"12345"), Ok(()));
        // Only one newline is dropped
        assert!(zxingcpp_cmp(b"12345\n\n", b"12345").is_err());

        let err = zxingcpp_cmp(b"12A45\n", b"12345").unwrap_err();
        assert_eq!(err.reason, "content differs at byte 2");
        let err = zxingcpp_cmp(b"123\n", b"12345").unwrap_err();
        assert_eq!(err.reason, "length 3 != 5");
    }

    #[test]
    fn test_expected_text() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b""[..]);
        assert_eq!(zxingcpp_expected(&req, b"A\xE9"), "Aé".as_bytes());

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b""[..]).eci(ECI_KSX1001);
        assert_eq!(zxingcpp_expected(&req, b"\xB0\xA1"), "가".as_bytes());

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, &b""[..]).eci(ECI_KSX1001);
        assert_eq!(zxingcpp_expected(&req, "가".as_bytes()), "가".as_bytes());
    }

    #[test]
    fn test_can_zxingcpp() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, &b"1"[..]);
        assert!(can_zxingcpp(0, &req));
        assert!(!can_zxingcpp(1, &req.clone().eci(ECI_BINARY)));
        let req = EncodeRequest::new(Symbology::CodeOne, InputMode::DATA, &b"1"[..]);
        assert!(!can_zxingcpp(2, &req));
    }
}
