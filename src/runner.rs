use std::process::{Command, Stdio};

/// The result of one external command invocation.
///
/// Carries the three values every step of the pipeline cares about:
/// the exit code, captured standard output, and captured standard error.
/// Output is decoded as UTF-8 lossily; git hashes and log lines are ASCII
/// in practice, so nothing meaningful is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code of the child process. `-1` if the process was terminated
    /// by a signal and no code is available.
    pub code: i32,
    /// Captured standard output, undecorated.
    pub stdout: String,
    /// Captured standard error, undecorated.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns `true` if the command exited with status `0`.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Abstraction over running a shell command string.
///
/// The orchestrator only talks to git through this trait, so tests can
/// substitute an implementation that returns scripted results instead of
/// mutating a real repository.
pub trait CommandRunner {
    /// Run `command` in a shell, block until it exits, and return the
    /// exit code plus captured stdout/stderr.
    ///
    /// # Returns
    ///
    /// * `Ok(CommandOutput)` once the child has exited, regardless of its
    ///   exit code — a non-zero exit is not an `Err` at this layer.
    /// * `Err(String)` only if the process could not be spawned at all.
    fn run(&mut self, command: &str) -> Result<CommandOutput, String>;
}

/// Default [`CommandRunner`] that executes commands via `sh -c`.
///
/// Each call spawns a fresh shell, waits for it to finish, and captures
/// both output streams. There is no timeout: a hanging command hangs the
/// caller until the child exits.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<CommandOutput, String> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let out_res = cmd.output();
        match out_res {
            Ok(out) => Ok(CommandOutput {
                code: out.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&out.stdout).to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            }),
            Err(e) => Err(format!("{}", e)),
        }
    }
}
