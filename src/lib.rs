//! Conformance testing toolkit for barcode encoders
//!
//! The pieces a barcode encoder test suite is built from:
//!
//! - [`ksx1001`]: Unicode to KS X 1001 mapping, with a table-scan reference
//!   implementation to check the production mapper against
//! - [`modules`]: module matrices and comparison against fixture text
//! - [`oracle`]: cross-checks against BWIPP, ZXing-C++ and `rqrr`
//! - [`runner`]: table-driven test functions with index selection,
//!   exclusions, generate mode and debug flags
//! - [`encoder`]: a QR Code and Micro QR encoder under test
//! - [`suites`]: the test functions run by the `zedcheck` binary

pub mod config;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod ksx1001;
pub mod modules;
pub mod oracle;
pub mod runner;
pub mod suites;
pub mod symbol;

// Re-export main types
pub use config::{DebugFlags, HarnessConfig};
pub use encoder::{EncodeRequest, Encoded, Encoder, QrEncoder};
pub use error::{Error, Result};
pub use ksx1001::{u_ksx1001_int, u_ksx1001_int2, KsxCode};
pub use modules::{modules_cmp, ModuleMatrix, ModulesMismatch};
pub use runner::{TestCtx, TestFunction, TestRun};
pub use symbol::{InputMode, ReturnCode, Symbol, Symbology};

#[cfg(test)]
mod proptest_ksx1001;
