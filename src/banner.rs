use crate::git::Identity;
use console::{measure_text_width, style};

/// Prints a boxed, colorized banner describing the rewrite about to run.
///
/// The box is sized to the widest **visible** line, using
/// [`console::measure_text_width`] so ANSI color codes inside styled lines do
/// not skew the padding. Borders are styled separately from content.
///
/// # Parameters
///
/// * `identity` – The fixed identity every commit will be rewritten to.
/// * `repo_name` – Name of the repository being rewritten, shown for context.
pub fn print_banner(identity: &Identity, repo_name: &str) {
    let lines = banner_lines(identity, repo_name);

    let inner = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0);

    let border = "═".repeat(inner + 2);

    println!();
    println!("{}", style(format!("╔{}╗", border)).blue().bold());
    for line in lines {
        let pad = inner - measure_text_width(&line);
        println!(
            "{} {}{} {}",
            style("║").blue().bold(),
            line,
            " ".repeat(pad),
            style("║").blue().bold()
        );
    }
    println!("{}", style(format!("╚{}╝", border)).blue().bold());
    println!();
}

/// Constructs the banner lines, in display order: title, repository,
/// mechanism notes, identity summary, steps.
///
/// Some lines carry ANSI styling; measure visible width with
/// [`console::measure_text_width`] rather than `str::len()`.
fn banner_lines(identity: &Identity, repo_name: &str) -> Vec<String> {
    let mut lines = vec![
        String::from("Reset commit authors across all refs"),
        String::new(),
        format!("Repository: {}", repo_name),
        String::new(),
    ];

    lines.push(
        style("Every commit will be rewritten with `git filter-branch`.")
            .cyan()
            .bold()
            .to_string(),
    );
    lines.push(
        style("(Originals stay under refs/original/ until you remove them.)")
            .cyan()
            .to_string(),
    );

    lines.push(String::new());
    lines.push(format!(
        "Author and committer will be set to: {}",
        identity.display()
    ));
    lines.push(String::from("This tool will automatically:"));
    lines.push(String::from(
        "  1) Rewrite every commit reachable from any ref",
    ));
    lines.push(String::from(
        "  2) Show the five most recent authors as a spot check",
    ));

    lines
}
