//! Harness configuration
//!
//! [`HarnessConfig`] is a small builder holding the debug mask, generate mode
//! and the locations of the external tools. Tool locations default to
//! whatever is on `PATH` and can be overridden from the environment:
//!
//! | Variable              | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `ZEDCHECK_GS`         | Ghostscript executable                    |
//! | `ZEDCHECK_BWIPP_DUMP` | `bwipp_dump.ps` driver script             |
//! | `ZEDCHECK_ZXINGCPP`   | `zxingcppdecoder` executable              |
//! | `ZEDCHECK_DEBUG`      | default debug mask (decimal or `0x` hex)  |
//!
//! # Example
//!
//! ```
//! use zedcheck::config::{DebugFlags, HarnessConfig};
//!
//! let config = HarnessConfig::new()
//!     .debug(DebugFlags::BWIPP | DebugFlags::ZXINGCPP)
//!     .generate(false);
//! assert!(config.wants_bwipp());
//! ```

use crate::{Error, Result};
use bitflags::bitflags;
use log::warn;
use std::env;
use std::path::{Path, PathBuf};

bitflags! {
    /// Debug bitmask given with `-d`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        /// Print symbols and intermediate values
        const PRINT = 1;
        /// Extra internal checks
        const TEST = 2;
        /// Print test data as it is processed
        const TEST_PRINT = 16;
        /// Suppress skip notices
        const LESS_NOISY = 32;
        /// Keep temporary files handed to external tools
        const KEEP_OUTFILE = 64;
        /// Cross-check against BWIPP
        const BWIPP = 128;
        /// Time encodes instead of checking them
        const PERFORMANCE = 256;
        /// Cross-check against ZXing-C++
        const ZXINGCPP = 512;
    }
}

impl DebugFlags {
    /// Parse a mask in decimal or `0x` hex. Unknown bits are kept so masks
    /// can be passed through unchanged.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => s.parse(),
        }
        .map_err(|_| Error::InvalidDebugMask(s.to_string()))?;
        Ok(Self::from_bits_retain(value))
    }
}

const DEFAULT_GS: &str = "gs";
const DEFAULT_BWIPP_DUMP: &str = "tools/bwipp_dump.ps";
const DEFAULT_ZXINGCPP: &str = "zxingcppdecoder";

/// Configuration shared by every test function of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub(crate) gs: PathBuf,
    pub(crate) bwipp_dump: PathBuf,
    pub(crate) zxingcpp: PathBuf,
    pub(crate) debug: DebugFlags,
    pub(crate) generate: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessConfig {
    /// Defaults: tools looked up on `PATH`, no debug flags, generate off.
    pub fn new() -> Self {
        Self {
            gs: PathBuf::from(DEFAULT_GS),
            bwipp_dump: PathBuf::from(DEFAULT_BWIPP_DUMP),
            zxingcpp: PathBuf::from(DEFAULT_ZXINGCPP),
            debug: DebugFlags::empty(),
            generate: false,
        }
    }

    /// Defaults overridden by the `ZEDCHECK_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(gs) = env::var_os("ZEDCHECK_GS") {
            config.gs = gs.into();
        }
        if let Some(dump) = env::var_os("ZEDCHECK_BWIPP_DUMP") {
            config.bwipp_dump = dump.into();
        }
        if let Some(zxing) = env::var_os("ZEDCHECK_ZXINGCPP") {
            config.zxingcpp = zxing.into();
        }
        if let Ok(mask) = env::var("ZEDCHECK_DEBUG") {
            match DebugFlags::parse(&mask) {
                Ok(flags) => config.debug = flags,
                Err(_) => warn!("ignoring invalid ZEDCHECK_DEBUG '{mask}'"),
            }
        }
        config
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn debug(mut self, debug: DebugFlags) -> Self {
        self.debug = debug;
        self
    }

    /// Print fixtures instead of checking them
    pub fn generate(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    pub fn gs_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gs = path.into();
        self
    }

    pub fn bwipp_dump_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bwipp_dump = path.into();
        self
    }

    pub fn zxingcpp_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.zxingcpp = path.into();
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn debug_flags(&self) -> DebugFlags {
        self.debug
    }

    pub fn is_generate(&self) -> bool {
        self.generate
    }

    pub fn gs(&self) -> &Path {
        &self.gs
    }

    pub fn bwipp_dump(&self) -> &Path {
        &self.bwipp_dump
    }

    pub fn zxingcpp(&self) -> &Path {
        &self.zxingcpp
    }

    pub fn wants_bwipp(&self) -> bool {
        self.debug.contains(DebugFlags::BWIPP)
    }

    pub fn wants_zxingcpp(&self) -> bool {
        self.debug.contains(DebugFlags::ZXINGCPP)
    }

    pub fn keep_outfile(&self) -> bool {
        self.debug.contains(DebugFlags::KEEP_OUTFILE)
    }

    pub fn less_noisy(&self) -> bool {
        self.debug.contains(DebugFlags::LESS_NOISY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debug() {
        assert_eq!(DebugFlags::parse("0").unwrap(), DebugFlags::empty());
        assert_eq!(DebugFlags::parse("128").unwrap(), DebugFlags::BWIPP);
        assert_eq!(
            DebugFlags::parse("0x280").unwrap(),
            DebugFlags::BWIPP | DebugFlags::ZXINGCPP
        );
        assert_eq!(DebugFlags::parse("4").unwrap().bits(), 4);
        assert!(DebugFlags::parse("").is_err());
        let err = DebugFlags::parse("x12").unwrap_err();
        assert!(matches!(err, Error::InvalidDebugMask(ref s) if s == "x12"), "{err}");
        assert_eq!(err.to_string(), "invalid debug mask 'x12'");
    }

    #[test]
    fn test_builder() {
        let config = HarnessConfig::new()
            .debug(DebugFlags::KEEP_OUTFILE | DebugFlags::LESS_NOISY)
            .generate(true)
            .gs_path("/opt/gs/bin/gs")
            .zxingcpp_path("/usr/local/bin/zxingcppdecoder");
        assert!(config.is_generate());
        assert!(config.keep_outfile());
        assert!(config.less_noisy());
        assert!(!config.wants_bwipp());
        assert_eq!(config.gs(), Path::new("/opt/gs/bin/gs"));
        assert_eq!(config.bwipp_dump(), Path::new(DEFAULT_BWIPP_DUMP));
    }
}
