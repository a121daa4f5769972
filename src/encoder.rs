//! Encoder seam
//!
//! The harness never builds symbols itself. It hands an [`EncodeRequest`] to
//! an [`Encoder`] and judges whatever comes back. [`QrEncoder`] is the one
//! adapter shipped with the crate, producing QR Code and Micro QR symbols
//! through the `qrcode` crate.

use crate::escape::unescape;
use crate::ksx1001::utf8_to_euc_kr;
use crate::modules::ModuleMatrix;
use crate::symbol::{InputMode, ReturnCode, Symbol, Symbology};
use log::debug;
use qrcode::bits::Bits;
use qrcode::optimize::{Parser, Segment};
use qrcode::types::{Mode, QrError};
use qrcode::{Color, EcLevel, QrCode, Version};

/// Value of a numeric option that was not set.
pub const UNSET: i32 = -1;

/// ECI designator for UTF-8
pub const ECI_UTF8: i32 = 26;
/// ECI designator for KS X 1001 (EUC-KR)
pub const ECI_KSX1001: i32 = 30;
/// ECI designator for 8-bit binary
pub const ECI_BINARY: i32 = 899;

/// Everything an encoder needs to produce one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeRequest {
    pub symbology: Symbology,
    pub input_mode: InputMode,
    pub eci: i32,
    pub option_1: i32,
    pub option_2: i32,
    pub option_3: i32,
    pub output_options: i32,
    pub data: Vec<u8>,
}

impl EncodeRequest {
    /// Request with every option unset.
    pub fn new(symbology: Symbology, input_mode: InputMode, data: impl Into<Vec<u8>>) -> Self {
        Self {
            symbology,
            input_mode,
            eci: UNSET,
            option_1: UNSET,
            option_2: UNSET,
            option_3: UNSET,
            output_options: UNSET,
            data: data.into(),
        }
    }

    pub fn eci(mut self, eci: i32) -> Self {
        self.eci = eci;
        self
    }

    pub fn options(mut self, option_1: i32, option_2: i32, option_3: i32) -> Self {
        self.option_1 = option_1;
        self.option_2 = option_2;
        self.option_3 = option_3;
        self
    }

    pub fn output_options(mut self, output_options: i32) -> Self {
        self.output_options = output_options;
        self
    }

    /// `true` when an ECI other than the default was requested.
    pub fn has_eci(&self) -> bool {
        self.eci > 0
    }
}

/// Outcome of one encode call. `symbol` is present unless `ret` is an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoded {
    pub ret: ReturnCode,
    pub symbol: Option<Symbol>,
    pub errtxt: String,
}

impl Encoded {
    pub fn error(ret: ReturnCode, errtxt: impl Into<String>) -> Self {
        Self {
            ret,
            symbol: None,
            errtxt: errtxt.into(),
        }
    }

    pub fn ok(symbol: Symbol) -> Self {
        Self {
            ret: ReturnCode::Ok,
            symbol: Some(symbol),
            errtxt: String::new(),
        }
    }

    fn warn(mut self, ret: ReturnCode, errtxt: impl Into<String>) -> Self {
        self.ret = ret;
        self.errtxt = errtxt.into();
        self
    }
}

/// A symbol producer under test.
pub trait Encoder {
    /// Symbologies this encoder accepts.
    fn supports(&self, symbology: Symbology) -> bool;

    fn encode(&self, req: &EncodeRequest) -> Encoded;
}

/// QR Code and Micro QR encoder.
///
/// - `option_1`: error correction level, 1 (L) to 4 (H); default L
/// - `option_2`: version, 1-40 for QR Code and 1-4 (M1-M4) for Micro QR;
///   default is the smallest version that fits
///
/// Out of range values for either option are ignored.
///
/// ECI 26 (UTF-8), 30 (KS X 1001) and 899 (binary) are supported for QR Code.
/// In Unicode mode without an ECI, input outside Latin-1 is encoded as UTF-8
/// under ECI 26 with a [`ReturnCode::WarnUsesEci`] warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder;

impl QrEncoder {
    pub fn new() -> Self {
        Self
    }
}

/// Payload ready to be packed into bits, with the ECI to announce.
struct Payload {
    bytes: Vec<u8>,
    eci: Option<u32>,
    warning: Option<(ReturnCode, String)>,
}

fn ec_level(option_1: i32, micro: bool) -> Result<EcLevel, Encoded> {
    let level = match option_1 {
        1 => EcLevel::L,
        2 => EcLevel::M,
        3 => EcLevel::Q,
        4 => EcLevel::H,
        // Unset or out of range
        _ => {
            if option_1 > 4 {
                debug!("error correction level {option_1} out of range, ignoring");
            }
            EcLevel::L
        }
    };
    if micro && level == EcLevel::H {
        return Err(Encoded::error(
            ReturnCode::ErrorInvalidOption,
            "Error correction level H not available in Micro QR",
        ));
    }
    Ok(level)
}

/// Versions to try, smallest first. An out of range version is ignored.
fn versions(option_2: i32, micro: bool) -> Vec<Version> {
    let max: i16 = if micro { 4 } else { 40 };
    match option_2 {
        v if (1..=i32::from(max)).contains(&v) => vec![if micro {
            Version::Micro(v as i16)
        } else {
            Version::Normal(v as i16)
        }],
        v => {
            if v > i32::from(max) {
                debug!("version {v} out of range (1 to {max}), ignoring");
            }
            if micro {
                (1..=max).map(Version::Micro).collect()
            } else {
                (1..=max).map(Version::Normal).collect()
            }
        }
    }
}

fn invalid_utf8() -> Encoded {
    Encoded::error(ReturnCode::ErrorInvalidData, "Invalid UTF-8 in input")
}

impl QrEncoder {
    fn payload(&self, req: &EncodeRequest, data: Vec<u8>) -> Result<Payload, Encoded> {
        let micro = req.symbology == Symbology::MicroQr;
        let unicode = req.input_mode.contains(InputMode::UNICODE);

        if req.has_eci() {
            if micro {
                return Err(Encoded::error(
                    ReturnCode::ErrorInvalidOption,
                    "Micro QR does not support ECI",
                ));
            }
            let bytes = match req.eci {
                ECI_KSX1001 if unicode => {
                    let text = std::str::from_utf8(&data).map_err(|_| invalid_utf8())?;
                    utf8_to_euc_kr(text).map_err(|e| {
                        Encoded::error(
                            ReturnCode::ErrorInvalidData,
                            format!(
                                "Invalid character at position {} in input (ECI {ECI_KSX1001}) for U+{:04X}",
                                e.position, e.ch as u32
                            ),
                        )
                    })?
                }
                ECI_UTF8 if unicode => {
                    std::str::from_utf8(&data).map_err(|_| invalid_utf8())?;
                    data
                }
                ECI_KSX1001 | ECI_UTF8 | ECI_BINARY => data,
                eci => {
                    return Err(Encoded::error(
                        ReturnCode::ErrorInvalidOption,
                        format!("ECI '{eci}' not supported"),
                    ))
                }
            };
            return Ok(Payload {
                bytes,
                eci: Some(req.eci as u32),
                warning: None,
            });
        }

        if !unicode {
            return Ok(Payload {
                bytes: data,
                eci: None,
                warning: None,
            });
        }

        let text = std::str::from_utf8(&data).map_err(|_| invalid_utf8())?;
        if text.chars().all(|c| (c as u32) < 0x100) {
            return Ok(Payload {
                bytes: text.chars().map(|c| c as u8).collect(),
                eci: None,
                warning: None,
            });
        }
        if micro {
            return Err(Encoded::error(
                ReturnCode::ErrorInvalidData,
                "Invalid character in input (Latin-1 only without ECI)",
            ));
        }
        Ok(Payload {
            bytes: data,
            eci: Some(ECI_UTF8 as u32),
            warning: Some((
                ReturnCode::WarnUsesEci,
                format!("Encoded data includes ECI {ECI_UTF8}"),
            )),
        })
    }
}

/// Optimal segments for `data` without Kanji mode. Byte pairs in the Shift
/// JIS range are Latin-1 or EUC-KR here, so they go out as bytes.
fn segments(data: &[u8], version: Version) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for mut segment in Parser::new(data).optimize(version) {
        if segment.mode == Mode::Kanji {
            segment.mode = Mode::Byte;
        }
        match segments.last_mut() {
            Some(last) if last.mode == Mode::Byte && segment.mode == Mode::Byte => last.end = segment.end,
            _ => segments.push(segment),
        }
    }
    segments
}

fn build(version: Version, payload: &Payload, level: EcLevel) -> Result<QrCode, QrError> {
    let mut bits = Bits::new(version);
    if let Some(eci) = payload.eci {
        bits.push_eci_designator(eci)?;
    }
    bits.push_segments(&payload.bytes, segments(&payload.bytes, version).into_iter())?;
    bits.push_terminator(level)?;
    QrCode::with_bits(bits, level)
}

/// `None` unless there are exactly `width * width` colors.
fn to_matrix(width: usize, colors: Vec<Color>) -> Option<ModuleMatrix> {
    let modules = colors.into_iter().map(|c| c == Color::Dark).collect();
    ModuleMatrix::from_modules(width, width, modules)
}

fn map_error(err: QrError, fixed_version: bool) -> Encoded {
    match err {
        QrError::DataTooLong => Encoded::error(
            ReturnCode::ErrorTooLong,
            if fixed_version {
                "Input too long for selected version"
            } else {
                "Input too long, requires too many codewords"
            },
        ),
        QrError::InvalidVersion => Encoded::error(
            ReturnCode::ErrorInvalidOption,
            "Version not available at this error correction level",
        ),
        QrError::UnsupportedCharacterSet | QrError::InvalidCharacter => Encoded::error(
            ReturnCode::ErrorInvalidData,
            "Input contains characters not encodable in this version",
        ),
        QrError::InvalidEciDesignator => {
            Encoded::error(ReturnCode::ErrorInvalidOption, "Invalid ECI designator")
        }
    }
}

impl Encoder for QrEncoder {
    fn supports(&self, symbology: Symbology) -> bool {
        matches!(symbology, Symbology::QrCode | Symbology::MicroQr)
    }

    fn encode(&self, req: &EncodeRequest) -> Encoded {
        if !self.supports(req.symbology) {
            return Encoded::error(
                ReturnCode::ErrorInvalidOption,
                format!("Symbology {} not supported", req.symbology),
            );
        }
        let micro = req.symbology == Symbology::MicroQr;

        let data = if req.input_mode.contains(InputMode::ESCAPE) {
            match unescape(&req.data) {
                Ok(data) => data,
                Err(e) => return Encoded::error(ReturnCode::ErrorInvalidData, e.to_string()),
            }
        } else {
            req.data.clone()
        };
        if data.is_empty() {
            return Encoded::error(ReturnCode::ErrorInvalidData, "No input data");
        }

        let level = match ec_level(req.option_1, micro) {
            Ok(level) => level,
            Err(e) => return e,
        };
        let candidates = versions(req.option_2, micro);
        let payload = match self.payload(req, data) {
            Ok(p) => p,
            Err(e) => return e,
        };

        let fixed_version = candidates.len() == 1;
        let mut last_err = QrError::DataTooLong;
        for version in candidates {
            match build(version, &payload, level) {
                Ok(code) => {
                    debug!(
                        "{}: {:?} {:?}, {} bytes, width {}",
                        req.symbology,
                        version,
                        level,
                        payload.bytes.len(),
                        code.width()
                    );
                    let Some(matrix) = to_matrix(code.width(), code.to_colors()) else {
                        return Encoded::error(
                            ReturnCode::ErrorEncodingProblem,
                            format!("Module count does not match width {}", code.width()),
                        );
                    };
                    let encoded = Encoded::ok(Symbol::new(req.symbology, matrix));
                    return match payload.warning {
                        Some((ret, text)) => encoded.warn(ret, text),
                        None => encoded,
                    };
                }
                // A larger version may still fit, or allow the mode the data needs
                Err(e @ (QrError::DataTooLong | QrError::UnsupportedCharacterSet | QrError::InvalidVersion)) => {
                    last_err = e;
                }
                Err(e) => return map_error(e, fixed_version),
            }
        }
        map_error(last_err, fixed_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qr(data: &[u8]) -> EncodeRequest {
        EncodeRequest::new(Symbology::QrCode, InputMode::DATA, data)
    }

    #[test]
    fn test_auto_version() {
        let encoded = QrEncoder.encode(&qr(b"01234567"));
        assert_eq!(encoded.ret, ReturnCode::Ok);
        let symbol = encoded.symbol.unwrap();
        assert_eq!((symbol.rows(), symbol.width()), (21, 21));
        // Finder pattern corners
        assert!(symbol.module_is_set(0, 0));
        assert!(symbol.module_is_set(0, 20));
        assert!(symbol.module_is_set(20, 0));
        assert!(!symbol.module_is_set(7, 7));
    }

    #[test]
    fn test_fixed_version() {
        let encoded = QrEncoder.encode(&qr(b"A").options(UNSET, 5, UNSET));
        assert_eq!(encoded.symbol.unwrap().width(), 37);

        // Out of range is ignored
        let encoded = QrEncoder.encode(&qr(b"A").options(UNSET, 41, UNSET));
        assert_eq!(encoded.ret, ReturnCode::Ok);
        assert_eq!(encoded.symbol.unwrap().width(), 21);
    }

    #[test]
    fn test_too_long() {
        let encoded = QrEncoder.encode(&qr(&[b'1'; 42]).options(1, 1, UNSET));
        assert_eq!(encoded.ret, ReturnCode::ErrorTooLong);
        assert!(encoded.symbol.is_none());

        let encoded = QrEncoder.encode(&qr(&[0xAA; 3000]));
        assert_eq!(encoded.ret, ReturnCode::ErrorTooLong);
    }

    #[test]
    fn test_versions() {
        assert_eq!(versions(5, false), [Version::Normal(5)]);
        assert_eq!(versions(4, true), [Version::Micro(4)]);
        assert_eq!(versions(UNSET, true).len(), 4);
        assert_eq!(versions(41, false).len(), 40);
        assert_eq!(versions(i32::MIN, false).first(), Some(&Version::Normal(1)));
    }

    fn byte_mode_matrix(eci: Option<u32>, bytes: &[u8]) -> ModuleMatrix {
        let mut bits = Bits::new(Version::Normal(1));
        if let Some(eci) = eci {
            bits.push_eci_designator(eci).unwrap();
        }
        bits.push_byte_data(bytes).unwrap();
        bits.push_terminator(EcLevel::L).unwrap();
        let code = QrCode::with_bits(bits, EcLevel::L).unwrap();
        to_matrix(code.width(), code.to_colors()).unwrap()
    }

    #[test]
    fn test_shift_jis_range_stays_byte_mode() {
        assert_eq!(
            segments(&[0xE0, 0xE1], Version::Normal(1)),
            [Segment { mode: Mode::Byte, begin: 0, end: 2 }]
        );
        assert!(segments(b"\x93\x5F\xE1\xA1", Version::Normal(1))
            .iter()
            .all(|s| s.mode != Mode::Kanji));

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "àá".as_bytes());
        let symbol = QrEncoder.encode(&req).symbol.unwrap();
        assert_eq!(symbol.matrix, byte_mode_matrix(None, &[0xE0, 0xE1]));

        // EUC-KR 0xE1A1
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "聖".as_bytes()).eci(ECI_KSX1001);
        let symbol = QrEncoder.encode(&req).symbol.unwrap();
        assert_eq!(symbol.matrix, byte_mode_matrix(Some(30), &[0xE1, 0xA1]));
    }

    #[test]
    fn test_to_matrix() {
        let matrix = to_matrix(2, vec![Color::Dark, Color::Light, Color::Light, Color::Dark]).unwrap();
        assert!(matrix.get(0, 0));
        assert!(!matrix.get(0, 1));
        assert!(matrix.get(1, 1));
        assert!(to_matrix(2, vec![Color::Dark; 3]).is_none());
    }

    #[test]
    fn test_micro() {
        let req = EncodeRequest::new(Symbology::MicroQr, InputMode::DATA, &b"01234567"[..]);
        let symbol = QrEncoder.encode(&req).symbol.unwrap();
        assert_eq!(symbol.width(), 13);

        let encoded = QrEncoder.encode(&req.clone().options(4, UNSET, UNSET));
        assert_eq!(encoded.ret, ReturnCode::ErrorInvalidOption);

        let encoded = QrEncoder.encode(&req.eci(ECI_KSX1001));
        assert_eq!(encoded.ret, ReturnCode::ErrorInvalidOption);
    }

    #[test]
    fn test_eci_ksx1001() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "가".as_bytes())
            .eci(ECI_KSX1001);
        let encoded = QrEncoder.encode(&req);
        assert_eq!(encoded.ret, ReturnCode::Ok);

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "가갂".as_bytes())
            .eci(ECI_KSX1001);
        let encoded = QrEncoder.encode(&req);
        assert_eq!(encoded.ret, ReturnCode::ErrorInvalidData);
        assert!(encoded.errtxt.contains("position 2"), "{}", encoded.errtxt);
    }

    #[test]
    fn test_unicode_without_eci() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "é".as_bytes());
        assert_eq!(QrEncoder.encode(&req).ret, ReturnCode::Ok);

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, "가".as_bytes());
        let encoded = QrEncoder.encode(&req);
        assert_eq!(encoded.ret, ReturnCode::WarnUsesEci);
        assert!(encoded.symbol.is_some());

        let req = EncodeRequest::new(Symbology::QrCode, InputMode::UNICODE, &b"\xFF"[..]);
        assert_eq!(QrEncoder.encode(&req).ret, ReturnCode::ErrorInvalidData);
    }

    #[test]
    fn test_escape_and_options() {
        let req = EncodeRequest::new(Symbology::QrCode, InputMode::ESCAPE, &b"A\\q"[..]);
        assert_eq!(QrEncoder.encode(&req).ret, ReturnCode::ErrorInvalidData);

        let encoded = QrEncoder.encode(&qr(b"A").options(9, UNSET, UNSET));
        assert_eq!(encoded.ret, ReturnCode::Ok);
        assert!(encoded.symbol.is_some());

        let encoded = QrEncoder.encode(&EncodeRequest::new(Symbology::Code39, InputMode::DATA, &b"A"[..]));
        assert_eq!(encoded.ret, ReturnCode::ErrorInvalidOption);

        assert_eq!(QrEncoder.encode(&qr(b"")).ret, ReturnCode::ErrorInvalidData);
    }
}
