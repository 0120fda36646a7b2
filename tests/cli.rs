//! End-to-end tests for the `currency-dfa` binary.
//!
//! Each run happens in a fresh temporary directory, since the binary writes
//! its diagram files into the working directory.

use currency_dfa::generator::is_well_formed;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &TempDir, path: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_currency-dfa"));
    command
        .current_dir(dir.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY");
    if let Some(path) = path {
        command.env("PATH", path);
    }
    command.output().unwrap()
}

fn dot_available() -> bool {
    Command::new("dot")
        .arg("-V")
        .output()
        .is_ok_and(|out| out.status.success())
}

#[test]
fn missing_graphviz_fails_without_printing_samples() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(&dir, Some(""));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to render"), "{stderr}");
    assert!(!dir.path().join("currency_dfa.png").exists());
}

#[test]
fn renders_diagram_and_prints_five_amounts() {
    if !dot_available() {
        eprintln!("skipping: graphviz `dot` is not installed");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let output = run_in(&dir, None);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "{stdout}");
    assert!(lines.iter().all(|line| is_well_formed(line)), "{stdout}");

    assert!(dir.path().join("currency_dfa").exists());
    assert!(dir.path().join("currency_dfa.png").exists());
}
