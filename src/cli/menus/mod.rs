pub mod ledger_menu;
pub mod main_menu;

use dialoguer::{theme::ColorfulTheme, Select};

/// Shows a single-choice menu. `None` means the user pressed Esc or `q`.
pub(crate) fn select(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, dialoguer::Error> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
}
