//! Command-line test runner
//!
//! Runs the built-in suites, optionally restricted to one function and a
//! subset of its data table:
//!
//! ```text
//! zedcheck -f test_encode -i 0-3 -d 128
//! zedcheck -f test_input -g > table.txt
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::process;
use zedcheck::config::{DebugFlags, HarnessConfig};
use zedcheck::runner::{IndexSelection, TestCtx, TestRun};
use zedcheck::suites;

/// Run table-driven barcode encoder tests
#[derive(Parser)]
#[command(name = "zedcheck")]
#[command(version)]
#[command(about = "Run table-driven barcode encoder tests", long_about = None)]
struct Args {
    /// Only run the named test function
    #[arg(short = 'f', value_name = "FUNCTION")]
    func: Option<String>,

    /// Only run these data table indices, e.g. `3` or `1,4-7`
    #[arg(short = 'i', value_name = "INDICES", value_parser = IndexSelection::parse)]
    index: Option<IndexSelection>,

    /// Skip these data table indices
    #[arg(short = 'x', value_name = "INDICES", value_parser = IndexSelection::parse)]
    exclude: Option<IndexSelection>,

    /// Print data tables from current results instead of checking them
    #[arg(short = 'g')]
    generate: bool,

    /// Debug mask: 1 print, 16 test print, 32 less noisy, 64 keep files,
    /// 128 BWIPP, 256 performance, 512 ZXing-C++
    #[arg(short = 'd', value_name = "FLAG", value_parser = DebugFlags::parse)]
    debug: Option<DebugFlags>,

    /// List test functions and exit
    #[arg(long)]
    list: bool,
}

fn init_logging(debug: DebugFlags) {
    let level = if debug.contains(DebugFlags::PRINT) {
        LevelFilter::Debug
    } else if debug.contains(DebugFlags::TEST_PRINT) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<bool> {
    let funcs = suites::all();
    if args.list {
        for func in &funcs {
            println!("{}", func.name);
        }
        return Ok(true);
    }

    let mut config = HarnessConfig::from_env().generate(args.generate);
    if let Some(debug) = args.debug {
        config = config.debug(debug);
    }
    init_logging(config.debug_flags());

    let mut template = TestCtx::new(config);
    if let Some(index) = args.index {
        template = template.with_index(index);
    }
    if let Some(exclude) = args.exclude {
        template = template.with_exclude(exclude);
    }

    let mut test_run = TestRun::new();
    let ran = test_run.run(&funcs, args.func.as_deref(), &template);
    if let Some(name) = args.func.as_deref() {
        if ran == 0 {
            bail!("unknown test function '{name}' (try --list)");
        }
    }
    test_run.report();
    Ok(test_run.success())
}

fn main() {
    let args = Args::parse();
    match run(args).context("zedcheck") {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}
