//! External oracles
//!
//! Golden fixtures only catch regressions against what was once believed
//! correct. The oracles here check a symbol against independent
//! implementations:
//!
//! - [`bwipp`]: re-encode the same input with BWIPP under Ghostscript and
//!   compare module dumps
//! - [`zxingcpp`]: decode our module dump with ZXing-C++ and compare the text
//!   with the input
//! - [`rqrr`]: render QR Code symbols to an image, decode them in process and
//!   read back their segment headers
//!
//! Tool failures come back as [`Error`](crate::Error); a symbol that an oracle
//! disagrees with comes back as a [`Mismatch`].

use crate::escape::escape;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

pub mod bwipp;
pub mod rqrr;
pub mod zxingcpp;

pub use self::bwipp::{bwipp, bwipp_cmp, can_bwipp, have_ghostscript};
pub use self::rqrr::{can_rqrr, rqrr_cmp, rqrr_expected, rqrr_expected_eci, rqrr_roundtrip, rqrr_segments_cmp};
pub use self::zxingcpp::{can_zxingcpp, have_zxingcpp_decoder, zxingcpp, zxingcpp_cmp, zxingcpp_expected};

/// An oracle disagreed with the symbol under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub oracle: &'static str,
    pub reason: String,
    pub actual: String,
    pub expected: String,
}

impl Mismatch {
    pub(crate) fn new(
        oracle: &'static str,
        reason: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            reason: reason.into(),
            actual: actual.into(),
            expected: expected.into(),
        }
    }

    /// Byte contents shown as escaped literals.
    pub(crate) fn bytes(oracle: &'static str, reason: impl Into<String>, actual: &[u8], expected: &[u8]) -> Self {
        Self::new(oracle, reason, escape(actual), escape(expected))
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}\n  actual: {}\nexpected: {}",
            self.oracle, self.reason, self.actual, self.expected
        )
    }
}

impl std::error::Error for Mismatch {}

/// Whether `program` can be spawned at all. The exit status is ignored since
/// some tools exit non-zero when asked for usage.
pub(crate) fn can_spawn(program: &Path, arg: &str) -> bool {
    Command::new(program)
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let m = Mismatch::bytes("zxing-cpp", "content differs", b"AB\n", b"AC");
        assert_eq!(m.to_string(), "zxing-cpp: content differs\n  actual: AB\\n\nexpected: AC");
    }

    #[test]
    fn test_can_spawn_missing() {
        assert!(!can_spawn(Path::new("/nonexistent/zedcheck-no-such-tool"), "-v"));
    }
}
