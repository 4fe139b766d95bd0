//! Shell execution wrapper for command-kind specs.
//!
//! A command spec's value is handed verbatim to the configured shell as a
//! single argument (`/bin/sh -c <value>` by default), with stdout and stderr
//! both captured. The wait is the standard blocking wait on the child; there
//! is deliberately no timeout, so a hung command hangs the invocation until
//! the host environment kills it.

use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How command-kind specs are handed to the operating system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Shell binary that interprets the command string.
    pub shell: String,
    /// Flag that makes the shell read the command from its arguments.
    pub shell_arg: String,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
            shell_arg: "-c".to_string(),
        }
    }
}

/// Exit status and captured output of one shell invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Process exit code; 0 means success. -1 if the child was killed by a
    /// signal and produced no code.
    pub exit_code: i32,
    /// Combined stdout and stderr, newline-joined with no trailing newline.
    pub output: String,
}

impl ExecutionResult {
    /// Whether the command exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Run a command string through the configured shell and capture its output.
///
/// Blocks until the child exits. Output is accumulated from both capture
/// buffers, stdout first, and normalized to newline-joined lines so the
/// resolved value carries no trailing newline.
pub fn run_shell(config: &ExecConfig, command: &str) -> std::io::Result<ExecutionResult> {
    debug!(shell = %config.shell, command, "spawning shell command");

    let captured = Command::new(&config.shell)
        .arg(&config.shell_arg)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let exit_code = captured.status.code().unwrap_or(-1);

    let mut combined = String::from_utf8_lossy(&captured.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&captured.stderr));

    Ok(ExecutionResult {
        exit_code,
        output: join_lines(&combined),
    })
}

/// Newline-join the lines of `text`, dropping any trailing newline.
fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}
