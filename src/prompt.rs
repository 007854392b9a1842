use dialoguer::{Confirm, theme::ColorfulTheme};

/// Abstraction over a boolean (yes/no) confirmation prompt.
///
/// The rewrite is destructive, so the CLI confirms once before running.
/// This trait lets tests inject a scripted answer instead of a terminal.
pub trait ConfirmPrompter {
    /// Prompt the user for a yes/no confirmation.
    ///
    /// # Parameters
    /// - `prompt`: The confirmation message.
    /// - `default`: The default answer if the user presses Enter.
    ///
    /// # Returns
    /// `Ok(true)` if confirmed, `Ok(false)` if declined, or `Err(String)` on
    /// input failure.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String>;
}

/// Default implementation of `ConfirmPrompter` using `dialoguer::Confirm`
/// with the `ColorfulTheme`.
pub struct DialoguerConfirmPrompter;

impl ConfirmPrompter for DialoguerConfirmPrompter {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, String> {
        let theme = ColorfulTheme::default();
        let confirm = Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default);
        match confirm.interact() {
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// Ask the user to confirm the history rewrite, defaulting to yes.
pub fn confirm_rewrite<P: ConfirmPrompter>(prompter: &mut P) -> Result<bool, String> {
    let prompt = "Rewrite every commit now? (filter-branch will run over all refs)";
    prompter.confirm(prompt, true)
}
