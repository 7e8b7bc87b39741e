//! End-to-end tests driving the `lsh` binary through piped standard streams.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn lsh_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lsh"));
    cmd.env_remove("LSH_LOG");
    cmd
}

fn run_script(script: &str) -> Output {
    let mut child = lsh_cmd()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn lsh");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(script.as_bytes())
        .expect("Failed to write script");

    child.wait_with_output().expect("Failed to wait for lsh")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_eof_exits_successfully() {
    let output = run_script("");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "> ");
}

#[test]
fn test_exit_builtin_stops_reading() {
    let output = run_script("exit extra args\necho unreachable\n");
    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("unreachable"));
}

#[test]
fn test_runs_external_programs() {
    let output = run_script("echo hello   world\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "> hello world\n> ");
}

#[test]
fn test_unknown_program_reports_and_shell_survives() {
    let output = run_script("nonexistent-binary-xyz\necho still here\n");
    assert!(output.status.success());
    assert!(stderr_of(&output).starts_with("lsh: "), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("still here"));
}

#[test]
fn test_cd_affects_later_commands() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = std::fs::canonicalize(dir.path()).unwrap();
    let output = run_script(&format!("cd {}\npwd\n", canonical.display()));
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(&format!("{}\n", canonical.display())));
}

#[test]
fn test_cd_errors_are_reported() {
    let output = run_script("cd\ncd /nonexistent-path-lsh-e2e\n");
    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("lsh: expected argument to \"cd\""));
    assert!(stderr.contains("lsh: /nonexistent-path-lsh-e2e: "));
}

#[test]
fn test_help_lists_builtins() {
    let output = run_script("help\n");
    let stdout = stdout_of(&output);
    for name in ["cd", "help", "exit"] {
        assert!(stdout.contains(&format!("  {name}\n")));
    }
}

#[test]
fn test_very_long_line() {
    let word = "x".repeat(10_000);
    let output = run_script(&format!("echo {word}\n"));
    assert!(output.status.success());
    assert!(stdout_of(&output).contains(&format!("{word}\n")));
}

#[test]
fn test_custom_prompt() {
    let output = lsh_cmd()
        .args(["--prompt", "$ "])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute lsh");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "$ ");
}

#[test]
fn test_help_flag_exits_with_failure() {
    let output = lsh_cmd()
        .arg("--help")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute lsh");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("--connect"));
}

#[test]
fn test_invalid_option_exits_with_failure() {
    let output = lsh_cmd()
        .arg("--bogus")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute lsh");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--bogus"));
}

#[test]
fn test_unreachable_server_exits_with_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let output = lsh_cmd()
        .args(["-c", &format!("127.0.0.1:{port}"), "--send-timeout", "1"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute lsh");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Cannot connect to the server"));
}
