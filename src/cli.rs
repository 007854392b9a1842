use crate::{
    banner::print_banner,
    git::Identity,
    prompt, rewrite,
    runner::{CommandRunner, ShellRunner},
};

use console::style;
use std::{env, path::PathBuf};

/// The fixed replacement identity, compiled into the binary.
const NEW_NAME: &str = "Ravi Shankar";
const NEW_EMAIL: &str = "ravishankar82923@gmail.com";

/// Returns `true` if any of `flags` appears in `args`.
pub(crate) fn has_flag(args: &[String], flags: &[&str]) -> bool {
    args.iter().any(|a| flags.contains(&a.as_str()))
}

/// Resolves the repository root via `git rev-parse --show-toplevel`.
fn repo_root<R: CommandRunner>(runner: &mut R) -> Result<PathBuf, String> {
    let out = runner.run("git rev-parse --show-toplevel")?;
    if out.success() {
        Ok(PathBuf::from(out.stdout.trim()))
    } else {
        Err(out.stderr.trim().to_string())
    }
}

/// Verifies git is available and returns the repository root.
fn verify_environment<R: CommandRunner>(runner: &mut R) -> Result<PathBuf, ()> {
    match which::which("git") {
        Ok(_) => {}
        Err(_) => {
            eprintln!("{}", style("Error: `git` not found in PATH.").red().bold());
            return Err(());
        }
    }

    match repo_root(runner) {
        Ok(p) => Ok(p),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: not inside a git repo ({})", e))
                    .red()
                    .bold()
            );
            Err(())
        }
    }
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
git-author-reset {}

Rewrite the author and committer of every commit to a fixed identity.

USAGE:
    git-author-reset [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information
    -y, --yes        Skip the confirmation prompt

DESCRIPTION:
    This tool rewrites every commit reachable from any ref so that both the
    author and the committer become {} <{}>, using
    `git filter-branch --env-filter` across all refs. After a successful
    rewrite it shows the five most recent authors and prints the remaining
    manual steps (review, force-push, remove refs/original/).",
        env!("CARGO_PKG_VERSION"),
        NEW_NAME,
        NEW_EMAIL,
    );
}

/// Main CLI entry point for `git-author-reset`.
///
/// This function:
/// 1. Parses CLI flags (`--help`, `--version`, `--yes`).
/// 2. Verifies that `git` is installed and that the current directory is a
///    git repository.
/// 3. Displays an informational banner with the target identity.
/// 4. Asks for confirmation (unless `--yes` was given).
/// 5. Runs the rewrite pipeline and surfaces its outcome.
///
/// Returns `Ok(exit_code)` on success, or `Err(())` on error.
///
/// # Exit Codes
///
/// * `0` – Successful execution (including cancellation at the prompt).
/// * Non-zero – Enumeration or rewrite failure, or a broken environment.
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().collect();

    if has_flag(&args, &["--help", "-h"]) {
        print_help();
        return Ok(0);
    }

    if has_flag(&args, &["--version", "-V"]) {
        println!("git-author-reset {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let skip_confirm = has_flag(&args, &["--yes", "-y"]);

    let mut runner = ShellRunner;
    let root = verify_environment(&mut runner)?;

    let repo_name = root
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("current repository")
        .to_string();

    let identity = Identity::new(NEW_NAME, NEW_EMAIL);

    print_banner(&identity, &repo_name);

    if !skip_confirm {
        let mut prompter = prompt::DialoguerConfirmPrompter;
        match prompt::confirm_rewrite(&mut prompter) {
            Ok(true) => {}
            Ok(false) => {
                println!(
                    "{}",
                    style("Canceled by user. No changes made.").yellow().bold()
                );
                return Ok(0);
            }
            Err(e) => {
                eprintln!("{}", style(format!("Prompt error: {}", e)).red().bold());
                return Err(());
            }
        }
    }

    let mut stdout = std::io::stdout();
    match rewrite::run(&mut runner, &mut stdout, &identity) {
        Ok(_) => Ok(0),
        Err(e) => {
            eprintln!("{}", style(format!("❌ {}", e)).red().bold());
            Err(())
        }
    }
}
