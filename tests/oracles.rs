//! Integration tests for the external oracles, using stand-in tools written
//! as shell scripts

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zedcheck::encoder::{ECI_KSX1001, UNSET};
use zedcheck::oracle::{bwipp, bwipp_cmp, zxingcpp, zxingcpp_cmp, zxingcpp_expected};
use zedcheck::{EncodeRequest, Encoder, Error, HarnessConfig, InputMode, QrEncoder, Symbology};

/// Write an executable shell script into `dir`
fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn qr_request(data: &[u8]) -> EncodeRequest {
    EncodeRequest::new(Symbology::QrCode, InputMode::DATA, data).options(2, 1, UNSET)
}

#[test]
fn test_bwipp_fake_ghostscript_agrees() {
    let dir = TempDir::new().unwrap();
    let req = qr_request(b"01234567");
    let symbol = QrEncoder.encode(&req).symbol.unwrap();

    // Echo our own matrix back, surrounded by Ghostscript chatter
    let rows = symbol.matrix.to_string();
    let gs = script(
        dir.path(),
        "gs",
        &format!("echo 'GPL Ghostscript'\ncat <<'EOF'\n{rows}EOF"),
    );
    let config = HarnessConfig::new().gs_path(gs);

    let dump = bwipp(&config, &req, &req.data).unwrap();
    assert_eq!(dump.lines().count(), 21);
    assert_eq!(bwipp_cmp(&symbol, &dump), Ok(()));
}

#[test]
fn test_bwipp_arguments() {
    let dir = TempDir::new().unwrap();
    let args = dir.path().join("args");
    let gs = script(
        dir.path(),
        "gs",
        &format!("printf '%s\\n' \"$@\" > {}\necho 101", args.display()),
    );
    let config = HarnessConfig::new().gs_path(gs);

    let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, &b"\xB0\xA1"[..])
        .eci(ECI_KSX1001)
        .options(3, UNSET, UNSET);
    bwipp(&config, &req, &req.data).unwrap();

    let args = fs::read_to_string(args).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(&args[..4], ["-dNOPAUSE", "-dBATCH", "-dNODISPLAY", "-q"]);
    assert_eq!(args[4], "-sb=qrcode");
    assert_eq!(args[5], "-sd=^ECI000030^176^161");
    assert_eq!(args[6], "-so=eclevel=Q parsefnc parse");
    assert!(args[7].ends_with("bwipp_dump.ps"));
}

#[test]
fn test_bwipp_long_data_is_chunked() {
    let dir = TempDir::new().unwrap();
    let args = dir.path().join("args");
    let gs = script(
        dir.path(),
        "gs",
        &format!("printf '%s\\n' \"$@\" > {}\necho 1", args.display()),
    );
    let config = HarnessConfig::new().gs_path(gs);

    let data = vec![b'A'; 5000];
    let req = EncodeRequest::new(Symbology::QrCode, InputMode::DATA, data.clone());
    bwipp(&config, &req, &data).unwrap();

    let args = fs::read_to_string(args).unwrap();
    let defines: Vec<&str> = args.lines().filter(|a| a.starts_with("-sd")).collect();
    assert_eq!(defines.len(), 3);
    assert_eq!(defines[0].len(), "-sd=".len() + 2043);
    assert_eq!(defines[1].len(), "-sd2=".len() + 2043);
    assert_eq!(defines[2].len(), "-sd3=".len() + 5000 - 2 * 2043);
}

#[test]
fn test_bwipp_errors() {
    let dir = TempDir::new().unwrap();
    let req = qr_request(b"1");

    let gs = script(dir.path(), "gs-fail", "echo oops >&2\nexit 3");
    let err = bwipp(&HarnessConfig::new().gs_path(gs), &req, b"1").unwrap_err();
    assert!(matches!(err, Error::Subprocess { tool: "bwipp", ref stderr, .. } if stderr == "oops"), "{err}");

    let gs = script(dir.path(), "gs-error", "echo 'Error: /rangecheck in --bwipp--'");
    let err = bwipp(&HarnessConfig::new().gs_path(gs), &req, b"1").unwrap_err();
    assert!(matches!(err, Error::Protocol { tool: "bwipp", .. }), "{err}");

    let gs = script(dir.path(), "gs-ragged", "echo 101\necho 10");
    let err = bwipp(&HarnessConfig::new().gs_path(gs), &req, b"1").unwrap_err();
    assert!(matches!(err, Error::Protocol { tool: "bwipp", .. }), "{err}");

    let gs = script(dir.path(), "gs-empty", "true");
    let err = bwipp(&HarnessConfig::new().gs_path(gs), &req, b"1").unwrap_err();
    assert!(matches!(err, Error::Protocol { tool: "bwipp", .. }), "{err}");

    let config = HarnessConfig::new().gs_path("/nonexistent/zedcheck-gs");
    assert!(matches!(bwipp(&config, &req, b"1"), Err(Error::Io(_))));
}

#[test]
fn test_zxingcpp_fake_decoder() {
    let dir = TempDir::new().unwrap();
    let args = dir.path().join("args");
    let decoder = script(
        dir.path(),
        "zxingcppdecoder",
        &format!("printf '%s\\n' \"$@\" > {}\nprintf '가\\n'", args.display()),
    );
    let config = HarnessConfig::new().zxingcpp_path(decoder);

    let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "가".as_bytes()).eci(ECI_KSX1001);
    let symbol = QrEncoder.encode(&req).symbol.unwrap();
    let decoded = zxingcpp(&config, &symbol).unwrap();
    assert_eq!(zxingcpp_cmp(&decoded, &zxingcpp_expected(&req, &req.data)), Ok(()));

    let args = fs::read_to_string(args).unwrap();
    let args: Vec<&str> = args.lines().collect();
    assert_eq!(&args[..5], ["-textonly", "-symbology", "QRCode", "-width", "21"]);
    assert_eq!(args[5], "-bits");
    assert_eq!(args[6].len(), 21 * 21);
}

#[test]
fn test_zxingcpp_no_output() {
    let dir = TempDir::new().unwrap();
    let decoder = script(dir.path(), "zxingcppdecoder", "true");
    let config = HarnessConfig::new().zxingcpp_path(decoder);
    let symbol = QrEncoder.encode(&qr_request(b"1")).symbol.unwrap();
    assert!(matches!(
        zxingcpp(&config, &symbol),
        Err(Error::Protocol { tool: "zxing-cpp", .. })
    ));
}
