//! Runs the built binary and checks that stdout carries only the game
//! transcript while diagnostics go to stderr.

use std::process::{Command, Stdio};

const HEADER: &str = "  0   1   2   3   4   5   6";

fn run(args: &[&str]) -> (String, String) {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_console_connect_four"))
        .arg("--config")
        .arg(&missing)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap();
    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn log_lines_stay_off_stdout() {
    let (stdout, stderr) = run(&[
        "--difficulty",
        "easy",
        "--seed",
        "1",
        "--computer-first",
        "--log-level",
        "debug",
    ]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], HEADER);
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Player Yellow's turn. Hmmm...I'll play: ")));
    assert!(!stdout.contains("not found"));
    assert!(!stdout.contains("INFO"));
    assert!(!stdout.contains("DEBUG"));

    assert!(stderr.contains("not found, using defaults"));
}

#[test]
fn missing_config_is_quiet_at_default_level() {
    let (stdout, stderr) = run(&["--difficulty", "easy", "--seed", "1"]);

    assert_eq!(stdout.lines().nth(1), Some(HEADER));
    assert!(!stderr.contains("not found"));
}
