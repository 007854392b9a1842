//! # git-author-reset
//!
//! A CLI tool that rewrites the author and committer of every commit in a
//! Git repository to a fixed identity.
//!
//! This crate provides functionality to:
//! - Enumerate every commit reachable from any ref
//! - Rewrite author/committer identity via `git filter-branch --env-filter`
//! - Show the five most recent authors as a post-rewrite spot check
//! - Print the operator's remaining manual steps
//!
//! ## Usage
//!
//! ```bash
//! # Run inside the repository to rewrite; confirms before touching history
//! git-author-reset
//!
//! # Skip the confirmation prompt
//! git-author-reset --yes
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`runner`] - Shell command execution behind a swappable trait
//! - [`git`] - Git command construction and output parsing
//! - [`rewrite`] - The three-step rewrite pipeline
//! - [`prompt`] - Confirmation prompt abstraction
//! - [`banner`] - Decorative CLI banner

pub mod banner;
pub mod cli;
pub mod git;
pub mod prompt;
pub mod rewrite;
pub mod runner;
