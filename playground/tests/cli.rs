//! Runs the playground binary to check how argument errors end the process.

use std::process::{Command, Output};

fn playground(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_playground"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_valid_invocation() {
    let output = playground(&["run", "-n", "demo", "--count", "3", "-v", "--scale", "0.5", "out"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name=demo count=3 offset=0 scale=0.5 verbose=true"));
    assert!(stdout.contains("positional=run"));
    assert!(stdout.contains("positional=out"));
}

#[test]
fn test_missing_required_flag_exits_with_error() {
    let output = playground(&["run"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: flag <name> is required"), "{stderr}");
}

#[test]
fn test_flag_without_value_exits_with_error() {
    let output = playground(&["--name", "demo", "--count"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("flag <count> is provided but has no value"), "{stderr}");
}

#[test]
fn test_bad_number_exits_with_error() {
    let output = playground(&["--name", "demo", "-c", "lots"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[lots]"), "{stderr}");
    assert!(stderr.contains("<count>"), "{stderr}");
}
