//! Construction of the git command lines issued by the rewrite pipeline.
//!
//! Nothing in this module touches a repository; it only builds the command
//! strings (and parses the enumeration output) so the orchestrator can hand
//! them to a [`crate::runner::CommandRunner`].

/// The replacement author/committer identity.
///
/// A single (display name, email) pair applied uniformly to every commit's
/// author and committer fields. Fixed at process start; the fields are not
/// validated — a malformed email is written into history as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: &str, email: &str) -> Self {
        Identity {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Formats the identity the way git logs it: `Name <email>`.
    pub fn display(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// Builds the command that lists the hash of every commit reachable from
/// every ref, one per line.
pub fn list_commits_command() -> String {
    String::from("git log --format='%H' --all")
}

/// Builds the `--env-filter` script that overwrites all four identity
/// environment variables for every commit git replays.
///
/// The script unconditionally exports `GIT_AUTHOR_NAME`, `GIT_AUTHOR_EMAIL`,
/// `GIT_COMMITTER_NAME`, and `GIT_COMMITTER_EMAIL` to the fixed identity, so
/// author and committer end up identical on every rewritten commit.
///
/// # Examples
///
/// ```
/// use git_author_reset::git::{Identity, env_filter_script};
///
/// let id = Identity::new("Jane Doe", "jane@example.com");
/// let script = env_filter_script(&id);
/// assert!(script.contains("export GIT_AUTHOR_NAME=\"Jane Doe\""));
/// assert!(script.contains("export GIT_COMMITTER_EMAIL=\"jane@example.com\""));
/// ```
pub fn env_filter_script(identity: &Identity) -> String {
    format!(
        "\nexport GIT_AUTHOR_NAME=\"{name}\"\n\
         export GIT_AUTHOR_EMAIL=\"{email}\"\n\
         export GIT_COMMITTER_NAME=\"{name}\"\n\
         export GIT_COMMITTER_EMAIL=\"{email}\"\n",
        name = identity.name,
        email = identity.email,
    )
}

/// Builds the full history-rewrite command.
///
/// The command:
/// - sets `FILTER_BRANCH_SQUELCH_WARNING=1` to suppress filter-branch's
///   interactive safety warning,
/// - passes `--force` so a leftover `refs/original/` backup from a prior run
///   does not abort the rewrite,
/// - supplies the env-filter script from [`env_filter_script`],
/// - scopes the rewrite to `--all` refs.
///
/// filter-branch leaves the original commits reachable under
/// `refs/original/` until the operator removes them.
pub fn filter_branch_command(identity: &Identity) -> String {
    format!(
        "FILTER_BRANCH_SQUELCH_WARNING=1 git filter-branch --force --env-filter '{}' -- --all",
        env_filter_script(identity)
    )
}

/// Builds the read-only verification command: the five most recent commits'
/// author identity in `Name <email>` form.
pub fn verify_log_command() -> String {
    String::from("git log --format=\"%an <%ae>\" -5")
}

/// Counts the commit hashes in the enumeration output.
///
/// Splits on newlines and discards blank or whitespace-only lines; the hashes
/// themselves are opaque and never inspected.
///
/// # Examples
///
/// ```
/// use git_author_reset::git::count_commits;
///
/// assert_eq!(count_commits("abc\ndef\n"), 2);
/// assert_eq!(count_commits(""), 0);
/// ```
pub fn count_commits(output: &str) -> usize {
    output.lines().filter(|l| !l.trim().is_empty()).count()
}
