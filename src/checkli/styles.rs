use console::Style;
use once_cell::sync::Lazy;

pub struct ShellStyles {
    pub prompt: Style,
    pub status: Style,
    pub help: Style,
}

pub static SHELL_STYLES: Lazy<ShellStyles> = Lazy::new(|| ShellStyles {
    prompt: Style::new().cyan().bold(),
    status: Style::new().dim().italic(),
    help: Style::new().dim(),
});
