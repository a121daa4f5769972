//! Symbol model shared by encoders and oracles
//!
//! Symbology identifiers and return codes keep the numbering used by the
//! encoder library the fixtures were written against, so fixture tables and
//! generated output stay comparable with its own test suite.

use crate::modules::ModuleMatrix;
use bitflags::bitflags;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbology {
    Code39 = 8,
    Codabar = 18,
    Code128 = 20,
    Code93 = 25,
    QrCode = 58,
    MicroQr = 97,
    Mailmark4s = 121,
    CodeOne = 141,
}

impl Symbology {
    pub const ALL: [Self; 8] = [
        Self::Code39,
        Self::Codabar,
        Self::Code128,
        Self::Code93,
        Self::QrCode,
        Self::MicroQr,
        Self::Mailmark4s,
        Self::CodeOne,
    ];

    /// Identifier as it appears in fixture tables, e.g. `BARCODE_QRCODE`.
    pub fn barcode_name(self) -> &'static str {
        match self {
            Self::Code39 => "BARCODE_CODE39",
            Self::Codabar => "BARCODE_CODABAR",
            Self::Code128 => "BARCODE_CODE128",
            Self::Code93 => "BARCODE_CODE93",
            Self::QrCode => "BARCODE_QRCODE",
            Self::MicroQr => "BARCODE_MICROQR",
            Self::Mailmark4s => "BARCODE_MAILMARK_4S",
            Self::CodeOne => "BARCODE_CODEONE",
        }
    }

    /// BWIPP encoder name, `None` if BWIPP has no equivalent.
    pub fn bwipp_name(self) -> Option<&'static str> {
        match self {
            Self::Code39 => Some("code39"),
            Self::Codabar => Some("rationalizedCodabar"),
            Self::Code128 => Some("code128"),
            Self::Code93 => Some("code93"),
            Self::QrCode => Some("qrcode"),
            Self::MicroQr => Some("microqrcode"),
            Self::Mailmark4s => Some("mailmark"),
            Self::CodeOne => Some("codeone"),
        }
    }

    /// ZXing-C++ format name, `None` if ZXing-C++ cannot decode it.
    pub fn zxingcpp_name(self) -> Option<&'static str> {
        match self {
            Self::Code39 => Some("Code39"),
            Self::Codabar => Some("Codabar"),
            Self::Code128 => Some("Code128"),
            Self::Code93 => Some("Code93"),
            Self::QrCode => Some("QRCode"),
            Self::MicroQr => Some("MicroQRCode"),
            Self::Mailmark4s | Self::CodeOne => None,
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(
            self,
            Self::Code39 | Self::Codabar | Self::Code128 | Self::Code93
        )
    }
}

impl Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Code39 => "Code 39",
                Self::Codabar => "Codabar",
                Self::Code128 => "Code 128",
                Self::Code93 => "Code 93",
                Self::QrCode => "QR Code",
                Self::MicroQr => "Micro QR",
                Self::Mailmark4s => "Royal Mail 4-State Mailmark",
                Self::CodeOne => "Code One",
            }
        )
    }
}

impl From<Symbology> for i32 {
    fn from(value: Symbology) -> Self {
        value as i32
    }
}

impl TryFrom<i32> for Symbology {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|&s| s as i32 == value)
            .ok_or(value)
    }
}

/// Encoder status. Warnings still produce a usable symbol; anything at or
/// above [`ReturnCode::ERROR_THRESHOLD`] does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ReturnCode {
    #[default]
    Ok = 0,
    WarnHrtTruncated = 1,
    WarnInvalidOption = 2,
    WarnUsesEci = 3,
    WarnNonCompliant = 4,
    ErrorTooLong = 5,
    ErrorInvalidData = 6,
    ErrorInvalidCheck = 7,
    ErrorInvalidOption = 8,
    ErrorEncodingProblem = 9,
    ErrorFileAccess = 10,
    ErrorMemory = 11,
    ErrorFileWrite = 12,
}

impl ReturnCode {
    pub const ERROR_THRESHOLD: i32 = 5;

    pub fn is_error(self) -> bool {
        self as i32 >= Self::ERROR_THRESHOLD
    }

    pub fn is_warning(self) -> bool {
        self != Self::Ok && !self.is_error()
    }

    /// Fixture identifier, e.g. `ZINT_ERROR_TOO_LONG`; `0` for success.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ok => "0",
            Self::WarnHrtTruncated => "ZINT_WARN_HRT_TRUNCATED",
            Self::WarnInvalidOption => "ZINT_WARN_INVALID_OPTION",
            Self::WarnUsesEci => "ZINT_WARN_USES_ECI",
            Self::WarnNonCompliant => "ZINT_WARN_NONCOMPLIANT",
            Self::ErrorTooLong => "ZINT_ERROR_TOO_LONG",
            Self::ErrorInvalidData => "ZINT_ERROR_INVALID_DATA",
            Self::ErrorInvalidCheck => "ZINT_ERROR_INVALID_CHECK",
            Self::ErrorInvalidOption => "ZINT_ERROR_INVALID_OPTION",
            Self::ErrorEncodingProblem => "ZINT_ERROR_ENCODING_PROBLEM",
            Self::ErrorFileAccess => "ZINT_ERROR_FILE_ACCESS",
            Self::ErrorMemory => "ZINT_ERROR_MEMORY",
            Self::ErrorFileWrite => "ZINT_ERROR_FILE_WRITE",
        }
    }
}

bitflags! {
    /// Input interpretation. No flags set means raw data (binary) mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputMode: u32 {
        /// Input is UTF-8 and may be converted to the ECI's character set
        const UNICODE = 0x01;
        /// Backslash escape sequences are decoded before encoding
        const ESCAPE = 0x08;
    }
}

impl InputMode {
    pub const DATA: Self = Self::empty();

    /// Fixture spelling, e.g. `UNICODE_MODE | ESCAPE_MODE`.
    pub fn name(self) -> String {
        let mut name = String::from(if self.contains(Self::UNICODE) {
            "UNICODE_MODE"
        } else {
            "DATA_MODE"
        });
        if self.contains(Self::ESCAPE) {
            name.push_str(" | ESCAPE_MODE");
        }
        name
    }
}

/// An encoded barcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub symbology: Symbology,
    pub matrix: ModuleMatrix,
    /// Human readable text, empty for symbologies that print none
    pub text: String,
}

impl Symbol {
    pub fn new(symbology: Symbology, matrix: ModuleMatrix) -> Self {
        Self {
            symbology,
            matrix,
            text: String::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn module_is_set(&self, row: usize, column: usize) -> bool {
        self.matrix.get(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_code_tiers() {
        assert!(!ReturnCode::Ok.is_error());
        assert!(!ReturnCode::Ok.is_warning());
        assert!(ReturnCode::WarnNonCompliant.is_warning());
        assert!(ReturnCode::ErrorTooLong.is_error());
        assert!(!ReturnCode::ErrorTooLong.is_warning());
        assert_eq!(ReturnCode::ErrorInvalidData.name(), "ZINT_ERROR_INVALID_DATA");
    }

    #[test]
    fn test_symbology_ids() {
        assert_eq!(i32::from(Symbology::QrCode), 58);
        assert_eq!(Symbology::try_from(97), Ok(Symbology::MicroQr));
        assert_eq!(Symbology::try_from(9999), Err(9999));
        assert_eq!(Symbology::Mailmark4s.zxingcpp_name(), None);
    }

    #[test]
    fn test_input_mode_name() {
        assert_eq!(InputMode::DATA.name(), "DATA_MODE");
        assert_eq!(
            (InputMode::UNICODE | InputMode::ESCAPE).name(),
            "UNICODE_MODE | ESCAPE_MODE"
        );
    }
}
