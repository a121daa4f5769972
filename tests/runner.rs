//! Integration tests for the `zedcheck` command-line runner

use std::process::{Command, Output};

fn zedcheck(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zedcheck"))
        .args(args)
        .env_remove("ZEDCHECK_DEBUG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run zedcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list() {
    let output = zedcheck(&["--list"]);
    assert!(output.status.success());
    let names: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        names,
        [
            "test_u_ksx1001_int",
            "test_special_cases",
            "test_utf8_to_euc_kr",
            "test_input",
            "test_encode"
        ]
    );
}

#[test]
fn test_single_function_passes() {
    let output = zedcheck(&["-f", "test_special_cases"]);
    assert!(output.status.success(), "{}", stdout(&output));
    let out = stdout(&output);
    assert!(out.contains("_____1: test_special_cases..."), "{out}");
    assert!(out.contains(".....1: test_special_cases: PASSED."), "{out}");
    assert!(out.ends_with("Total 1 tests, all passed.\n"), "{out}");
}

#[test]
fn test_index_and_exclude() {
    let all = stdout(&zedcheck(&["-f", "test_input"]));
    let some = stdout(&zedcheck(&["-f", "test_input", "-i", "0-9", "-x", "4"]));
    assert!(some.contains("PASSED"), "{some}");

    // Fewer assertions when fewer rows run
    let count = |s: &str| -> usize {
        s.lines()
            .find_map(|l| l.split("PASSED. (").nth(1))
            .and_then(|rest| rest.split(' ').next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    };
    assert!(count(&some) > 0);
    assert!(count(&some) < count(&all));
}

#[test]
fn test_generate_prints_table() {
    let output = zedcheck(&["-f", "test_utf8_to_euc_kr", "-g", "-i", "4"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(
        out.contains("/*  4*/ Utf8Item { data: \"한국어\", err_position: 0, expected: b\"\\xC7\\xD1\\xB1\\xB9\\xBE\\xEE\" },"),
        "{out}"
    );
}

#[test]
fn test_unknown_function() {
    let output = zedcheck(&["-f", "test_nothing"]);
    assert_eq!(output.status.code(), Some(2));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("unknown test function 'test_nothing'"), "{err}");
}

#[test]
fn test_bad_selector_rejected() {
    let output = zedcheck(&["-i", "3-1"]);
    assert!(!output.status.success());
    let output = zedcheck(&["-d", "bwipp"]);
    assert!(!output.status.success());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("invalid debug mask 'bwipp'"), "{err}");
}
