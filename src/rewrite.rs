//! The three-step rewrite pipeline: enumerate commits, rewrite history,
//! verify and report.
//!
//! The pipeline is strictly linear and fail-fast: each step runs only if the
//! previous one exited zero. All external effects go through the injected
//! [`CommandRunner`], and all human-readable progress goes through the
//! injected writer, so the whole flow is testable with scripted results.

use crate::git::{
    Identity, count_commits, filter_branch_command, list_commits_command, verify_log_command,
};
use crate::runner::CommandRunner;

use console::style;
use std::io::Write;

/// The literal follow-up instructions printed after a successful rewrite.
pub const NEXT_STEPS: [&str; 3] = [
    "1. Review the changes above",
    "2. Run: git push --force origin main",
    "3. Clean up: rm -rf .git/refs/original/",
];

/// Writes one line to the report, converting I/O errors to the crate's
/// string error shape.
fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), String> {
    match writeln!(out, "{}", line) {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("{}", e)),
    }
}

/// Runs the full rewrite pipeline against `runner`, reporting progress to `out`.
///
/// Steps, each gated on the previous step's exit code:
///
/// 1. Enumerate every commit reachable from every ref and report the count.
///    The count is informational only.
/// 2. Rewrite history with `git filter-branch --env-filter`, forcing all four
///    author/committer variables to `identity` across all refs.
/// 3. Print the five most recent commits' author identity as a spot check,
///    followed by the operator's next manual steps.
///
/// An empty repository is not special-cased: the count reports zero and the
/// rewrite still runs.
///
/// # Errors
///
/// Returns `Err(String)` carrying the external tool's captured stderr if the
/// enumeration or rewrite command exits non-zero, or the spawn error if a
/// command could not be started. No step after a failed one is attempted.
pub fn run<R, W>(runner: &mut R, out: &mut W, identity: &Identity) -> Result<(), String>
where
    R: CommandRunner,
    W: Write,
{
    // Step 1: enumerate commits across all refs.
    emit(out, "Getting all commits...")?;
    let listed = runner.run(&list_commits_command())?;
    if !listed.success() {
        return Err(format!("Error getting commits: {}", listed.stderr));
    }

    let count = count_commits(&listed.stdout);
    emit(out, &format!("Found {} commits to rewrite", count))?;

    // Step 2: rewrite author and committer on every commit.
    emit(out, "")?;
    emit(out, "Rewriting commit history...")?;
    let rewritten = runner.run(&filter_branch_command(identity))?;
    if !rewritten.success() {
        return Err(format!("Error: {}", rewritten.stderr));
    }

    emit(
        out,
        &style("✅ Successfully rewrote all commits!")
            .green()
            .bold()
            .to_string(),
    )?;

    // Step 3: spot-check the most recent authors. The log is advisory; its
    // exit code does not affect the outcome.
    emit(out, "")?;
    emit(out, "Verifying changes...")?;
    let verified = runner.run(&verify_log_command())?;
    emit(out, &verified.stdout)?;

    emit(out, "")?;
    emit(out, "Next steps:")?;
    for step in NEXT_STEPS {
        emit(out, step)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{NEXT_STEPS, run};
    use crate::git::{
        Identity, filter_branch_command, list_commits_command, verify_log_command,
    };
    use crate::runner::{CommandOutput, CommandRunner};
    use std::collections::VecDeque;

    /// Runner that replays scripted results and records every command issued.
    struct ScriptedRunner {
        responses: VecDeque<Result<CommandOutput, String>>,
        commands: Vec<String>,
    }

    impl ScriptedRunner {
        fn new(responses: Vec<Result<CommandOutput, String>>) -> Self {
            ScriptedRunner {
                responses: responses.into(),
                commands: Vec::new(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &str) -> Result<CommandOutput, String> {
            self.commands.push(command.to_string());
            self.responses
                .pop_front()
                .expect("pipeline issued more commands than scripted")
        }
    }

    fn ok(stdout: &str) -> Result<CommandOutput, String> {
        Ok(CommandOutput {
            code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    fn fail(code: i32, stderr: &str) -> Result<CommandOutput, String> {
        Ok(CommandOutput {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    fn identity() -> Identity {
        Identity::new("Ravi Shankar", "ravishankar82923@gmail.com")
    }

    #[test]
    fn success_path_issues_three_commands_in_order() {
        let verify = "Ravi Shankar <ravishankar82923@gmail.com>\n".repeat(3);
        let mut runner = ScriptedRunner::new(vec![
            ok("aaa\nbbb\nccc\n"),
            ok(""),
            ok(&verify),
        ]);
        let mut out = Vec::new();

        let res = run(&mut runner, &mut out, &identity());
        assert!(res.is_ok());

        assert_eq!(runner.commands.len(), 3);
        assert_eq!(runner.commands[0], list_commits_command());
        assert_eq!(runner.commands[1], filter_branch_command(&identity()));
        assert_eq!(runner.commands[2], verify_log_command());
    }

    #[test]
    fn success_report_has_count_indicator_log_and_instructions_in_order() {
        let verify = "Ravi Shankar <ravishankar82923@gmail.com>\n".repeat(3);
        let mut runner = ScriptedRunner::new(vec![
            ok("aaa\nbbb\nccc\n"),
            ok(""),
            ok(&verify),
        ]);
        let mut out = Vec::new();

        run(&mut runner, &mut out, &identity()).expect("pipeline failed");
        let report = String::from_utf8(out).expect("report not UTF-8");

        assert!(report.contains("Found 3 commits to rewrite"));
        assert!(report.contains("Successfully rewrote all commits!"));

        let log_pos = report
            .find("Ravi Shankar <ravishankar82923@gmail.com>")
            .expect("verification log missing");
        let mut last = log_pos;
        for step in NEXT_STEPS {
            let pos = report.find(step).expect("instruction missing");
            assert!(pos > last, "instructions out of order");
            last = pos;
        }
    }

    #[test]
    fn enumeration_failure_stops_before_rewrite() {
        let mut runner = ScriptedRunner::new(vec![fail(128, "fatal: not a git repository")]);
        let mut out = Vec::new();

        let res = run(&mut runner, &mut out, &identity());
        let err = res.expect_err("expected enumeration failure");
        assert!(err.contains("fatal: not a git repository"));
        assert_eq!(runner.commands.len(), 1);
    }

    #[test]
    fn rewrite_failure_stops_before_verification() {
        let mut runner = ScriptedRunner::new(vec![
            ok("aaa\n"),
            fail(1, "Cannot rewrite branches: dirty worktree"),
        ]);
        let mut out = Vec::new();

        let res = run(&mut runner, &mut out, &identity());
        let err = res.expect_err("expected rewrite failure");
        assert!(err.contains("Cannot rewrite branches: dirty worktree"));
        assert_eq!(runner.commands.len(), 2);

        let report = String::from_utf8(out).expect("report not UTF-8");
        assert!(!report.contains("Verifying changes..."));
        assert!(!report.contains("Next steps:"));
    }

    #[test]
    fn spawn_error_is_propagated() {
        let mut runner = ScriptedRunner::new(vec![Err(String::from("No such file or directory"))]);
        let mut out = Vec::new();

        let res = run(&mut runner, &mut out, &identity());
        assert_eq!(res.unwrap_err(), "No such file or directory");
    }

    #[test]
    fn empty_repository_reports_zero_and_still_rewrites() {
        let mut runner = ScriptedRunner::new(vec![ok(""), ok(""), ok("")]);
        let mut out = Vec::new();

        run(&mut runner, &mut out, &identity()).expect("pipeline failed");
        let report = String::from_utf8(out).expect("report not UTF-8");

        assert_eq!(runner.commands.len(), 3);
        assert!(report.contains("Found 0 commits to rewrite"));
        assert!(report.contains("Successfully rewrote all commits!"));
        assert!(report.contains("Next steps:"));
    }
}
