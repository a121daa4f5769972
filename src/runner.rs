//! Table-driven test runner
//!
//! A test binary is a list of [`TestFunction`]s. Each function gets a
//! [`TestCtx`], walks its data table, and records assertions through the
//! [`check!`](crate::check), [`check_eq!`](crate::check_eq) and
//! [`check_ne!`](crate::check_ne) macros. A failed assertion prints its
//! message and returns [`Abort`] from the function; the runner counts it and
//! moves on to the next function.
//!
//! ```
//! use zedcheck::runner::{TestCtx, TestFunction, TestResult, TestRun};
//! use zedcheck::{check, check_eq};
//!
//! fn test_sum(ctx: &mut TestCtx) -> TestResult {
//!     for (i, (a, b, sum)) in [(1, 2, 3), (2, 2, 4)].into_iter().enumerate() {
//!         if ctx.skip(i) {
//!             continue;
//!         }
//!         check_eq!(ctx, a + b, sum, "i:{i} sum");
//!     }
//!     check!(ctx, ctx.assertions() == 2, "assertion count");
//!     Ok(())
//! }
//!
//! let funcs = [TestFunction::new("test_sum", test_sum).with_index()];
//! let mut run = TestRun::new();
//! run.run(&funcs, None, &TestCtx::default());
//! assert!(run.success());
//! ```

use crate::config::{DebugFlags, HarnessConfig};
use crate::oracle::{have_ghostscript, have_zxingcpp_decoder};
use crate::{Error, Result};
use log::{debug, warn};
use std::fmt;

/// A test function stopped at a failed assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abort;

pub type TestResult = std::result::Result<(), Abort>;

pub type TestFn = fn(&mut TestCtx) -> TestResult;

/// A named test function and the command line features it honours.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction {
    pub name: &'static str,
    pub func: TestFn,
    pub has_index: bool,
    pub has_generate: bool,
    pub has_debug: bool,
}

impl TestFunction {
    pub const fn new(name: &'static str, func: TestFn) -> Self {
        Self {
            name,
            func,
            has_index: false,
            has_generate: false,
            has_debug: false,
        }
    }

    pub const fn with_index(mut self) -> Self {
        self.has_index = true;
        self
    }

    pub const fn with_generate(mut self) -> Self {
        self.has_generate = true;
        self
    }

    pub const fn with_debug(mut self) -> Self {
        self.has_debug = true;
        self
    }
}

/// Set of data table indices, parsed from `N` and `N-M` items separated by
/// commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSelection {
    ranges: Vec<(usize, usize)>,
}

impl IndexSelection {
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidSelector(s.to_string());
        let mut ranges = Vec::new();
        for item in s.split(',').map(str::trim) {
            let (start, end) = match item.split_once('-') {
                Some((start, end)) => (start.trim(), end.trim()),
                None => (item, item),
            };
            let start: usize = start.parse().map_err(|_| invalid())?;
            let end: usize = end.parse().map_err(|_| invalid())?;
            if start > end {
                return Err(invalid());
            }
            ranges.push((start, end));
        }
        Ok(Self { ranges })
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.ranges.iter().any(|&(start, end)| (start..=end).contains(&index))
    }
}

impl fmt::Display for IndexSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(start, end)) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if start == end {
                write!(f, "{start}")?;
            } else {
                write!(f, "{start}-{end}")?;
            }
        }
        Ok(())
    }
}

/// Per-function test context.
#[derive(Debug, Clone, Default)]
pub struct TestCtx {
    func_name: &'static str,
    config: HarnessConfig,
    index: IndexSelection,
    exclude: IndexSelection,
    assertions: usize,
    failed: usize,
    skipped: Option<String>,
    have_gs: Option<bool>,
    have_zxingcpp: Option<bool>,
}

impl TestCtx {
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Only run data table entries in `index`.
    pub fn with_index(mut self, index: IndexSelection) -> Self {
        self.index = index;
        self
    }

    /// Never run data table entries in `exclude`.
    pub fn with_exclude(mut self, exclude: IndexSelection) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn func_name(&self) -> &'static str {
        self.func_name
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn generate(&self) -> bool {
        self.config.is_generate()
    }

    pub fn debug(&self) -> DebugFlags {
        self.config.debug_flags()
    }

    pub fn assertions(&self) -> usize {
        self.assertions
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Whether data table entry `i` should be skipped.
    pub fn skip(&self, i: usize) -> bool {
        (!self.index.is_empty() && !self.index.contains(i)) || self.exclude.contains(i)
    }

    /// Record one assertion. On failure the message is printed and the test
    /// function is aborted.
    pub fn assert_that(&mut self, ok: bool, msg: impl FnOnce() -> String) -> TestResult {
        self.assertions += 1;
        if ok {
            return Ok(());
        }
        self.failed += 1;
        println!("{}", msg());
        Err(Abort)
    }

    /// Mark the whole function as skipped, e.g. when an external tool it
    /// needs is missing.
    pub fn skip_test(&mut self, reason: impl Into<String>) -> TestResult {
        self.skipped = Some(reason.into());
        Ok(())
    }

    /// Cross-check against BWIPP: asked for with `-d` and Ghostscript present.
    pub fn do_bwipp(&mut self) -> bool {
        if !self.config.wants_bwipp() {
            return false;
        }
        let config = &self.config;
        *self.have_gs.get_or_insert_with(|| have_ghostscript(config))
    }

    /// Cross-check against ZXing-C++: asked for with `-d` and decoder present.
    pub fn do_zxingcpp(&mut self) -> bool {
        if !self.config.wants_zxingcpp() {
            return false;
        }
        let config = &self.config;
        *self.have_zxingcpp.get_or_insert_with(|| have_zxingcpp_decoder(config))
    }

    fn start(&mut self, func_name: &'static str) {
        self.func_name = func_name;
        self.assertions = 0;
        self.failed = 0;
        self.skipped = None;
    }
}

/// Assert a condition inside a test function.
///
/// `check!(ctx, cond, "format", args...)` counts the assertion and, if `cond`
/// is false, prints the message and returns from the enclosing function.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr, $($arg:tt)+) => {
        $ctx.assert_that($cond, || format!($($arg)+))?
    };
}

/// Assert two values are equal, printing both on failure.
#[macro_export]
macro_rules! check_eq {
    ($ctx:expr, $actual:expr, $expected:expr, $($arg:tt)+) => {
        match (&$actual, &$expected) {
            (actual, expected) => {
                $ctx.assert_that(*actual == *expected, || {
                    format!("{} ({:?} != {:?})", format!($($arg)+), actual, expected)
                })?
            }
        }
    };
}

/// Assert two values differ.
#[macro_export]
macro_rules! check_ne {
    ($ctx:expr, $actual:expr, $unexpected:expr, $($arg:tt)+) => {
        match (&$actual, &$unexpected) {
            (actual, unexpected) => {
                $ctx.assert_that(*actual != *unexpected, || {
                    format!("{} ({:?} == {:?})", format!($($arg)+), actual, unexpected)
                })?
            }
        }
    };
}

/// Totals across every function of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRun {
    pub tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    pub assertions: usize,
    pub failed_assertions: usize,
}

impl TestRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `funcs`, or only the one named `only`, each with a fresh copy of
    /// `template`. Returns how many functions ran.
    pub fn run(&mut self, funcs: &[TestFunction], only: Option<&str>, template: &TestCtx) -> usize {
        let mut ran = 0;
        for func in funcs.iter().filter(|f| only.map_or(true, |name| name == f.name)) {
            let mut ctx = template.clone();
            self.run_one(func, &mut ctx);
            ran += 1;
        }
        ran
    }

    /// Run one function and print its start and result lines.
    pub fn run_one(&mut self, func: &TestFunction, ctx: &mut TestCtx) {
        if !func.has_index && !(ctx.index.is_empty() && ctx.exclude.is_empty()) {
            warn!("{}: index selection ignored", func.name);
        }
        if !func.has_generate && ctx.generate() {
            warn!("{}: generate mode not supported", func.name);
        }
        if !func.has_debug && !ctx.debug().is_empty() {
            debug!("{}: debug flags unused", func.name);
        }

        self.tests += 1;
        let n = self.tests;
        ctx.start(func.name);
        println!("_____{n}: {}...", func.name);

        let result = (func.func)(ctx);
        self.assertions += ctx.assertions;
        self.failed_assertions += ctx.failed;

        match (result, &ctx.skipped) {
            (Err(Abort), _) => {
                self.failed_tests += 1;
                println!(
                    ".....{n}: {}: FAILED. ({} assertions failed.)",
                    func.name, ctx.failed
                );
            }
            // An assertion that failed without aborting still fails the test
            (Ok(()), _) if ctx.failed > 0 => {
                self.failed_tests += 1;
                println!(
                    ".....{n}: {}: FAILED. ({} assertions failed.)",
                    func.name, ctx.failed
                );
            }
            (Ok(()), Some(reason)) => {
                self.skipped_tests += 1;
                if !ctx.config.less_noisy() {
                    println!(".....{n}: {}: SKIPPED. ({reason})", func.name);
                }
            }
            (Ok(()), None) => {
                println!(
                    ".....{n}: {}: PASSED. ({} assertions passed.)",
                    func.name, ctx.assertions
                );
            }
        }
    }

    pub fn success(&self) -> bool {
        self.failed_tests == 0
    }

    /// Final summary line.
    pub fn summary(&self) -> String {
        if self.failed_tests == 0 {
            format!("Total {} tests, all passed.", self.tests)
        } else {
            format!("Total {} tests, {} fails.", self.tests, self.failed_tests)
        }
    }

    pub fn report(&self) {
        debug!(
            "{} assertions, {} failed, {} tests skipped",
            self.assertions, self.failed_assertions, self.skipped_tests
        );
        println!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(ctx: &mut TestCtx) -> TestResult {
        check!(ctx, 1 + 1 == 2, "arithmetic");
        check_eq!(ctx, "a", "a", "strings");
        check_ne!(ctx, 1, 2, "numbers");
        Ok(())
    }

    fn fails_early(ctx: &mut TestCtx) -> TestResult {
        check_eq!(ctx, 1, 2, "first");
        // Never reached
        check!(ctx, false, "second");
        Ok(())
    }

    fn skips(ctx: &mut TestCtx) -> TestResult {
        ctx.skip_test("tool missing")
    }

    fn counts_selected(ctx: &mut TestCtx) -> TestResult {
        for i in 0..10 {
            if ctx.skip(i) {
                continue;
            }
            check!(ctx, true, "i:{i}");
        }
        Ok(())
    }

    #[test]
    fn test_index_selection() {
        let sel = IndexSelection::parse("1,3-5, 9").unwrap();
        assert!(sel.contains(1));
        assert!(!sel.contains(2));
        assert!(sel.contains(4));
        assert!(sel.contains(9));
        assert_eq!(sel.to_string(), "1,3-5,9");

        assert!(IndexSelection::parse("").is_err());
        assert!(IndexSelection::parse("5-3").is_err());
        assert!(IndexSelection::parse("a").is_err());
        assert!(IndexSelection::parse("1,").is_err());
    }

    #[test]
    fn test_skip() {
        let ctx = TestCtx::default();
        assert!(!ctx.skip(7));

        let ctx = TestCtx::default()
            .with_index(IndexSelection::parse("2-4").unwrap())
            .with_exclude(IndexSelection::parse("3").unwrap());
        assert!(ctx.skip(1));
        assert!(!ctx.skip(2));
        assert!(ctx.skip(3));
        assert!(!ctx.skip(4));
    }

    #[test]
    fn test_abort_is_local() {
        let funcs = [
            TestFunction::new("fails_early", fails_early),
            TestFunction::new("passes", passes),
        ];
        let mut run = TestRun::new();
        assert_eq!(run.run(&funcs, None, &TestCtx::default()), 2);
        assert_eq!(run.tests, 2);
        assert_eq!(run.failed_tests, 1);
        assert_eq!(run.assertions, 4);
        assert_eq!(run.failed_assertions, 1);
        assert!(!run.success());
        assert_eq!(run.summary(), "Total 2 tests, 1 fails.");
    }

    #[test]
    fn test_run_only_and_skipped() {
        let funcs = [
            TestFunction::new("passes", passes),
            TestFunction::new("skips", skips),
        ];
        let mut run = TestRun::new();
        assert_eq!(run.run(&funcs, Some("skips"), &TestCtx::default()), 1);
        assert_eq!(run.skipped_tests, 1);
        assert!(run.success());
        assert_eq!(run.summary(), "Total 1 tests, all passed.");

        assert_eq!(run.run(&funcs, Some("missing"), &TestCtx::default()), 0);
    }

    #[test]
    fn test_index_applies_per_function() {
        let funcs = [TestFunction::new("counts_selected", counts_selected).with_index()];
        let template = TestCtx::default().with_index(IndexSelection::parse("0-2,8").unwrap());
        let mut run = TestRun::new();
        run.run(&funcs, None, &template);
        assert_eq!(run.assertions, 4);
    }

    #[test]
    fn test_oracles_off_by_default() {
        let mut ctx = TestCtx::default();
        assert!(!ctx.do_bwipp());
        assert!(!ctx.do_zxingcpp());
    }
}
