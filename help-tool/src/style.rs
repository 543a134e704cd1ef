use help_types::{Decorate, Style};

/// Terminal styling backed by `console`.
///
/// Whether escapes are emitted follows `console::colors_enabled()`, which
/// looks at the terminal and `NO_COLOR`/`CLICOLOR`/`CLICOLOR_FORCE`, unless
/// overridden with `--color`.
#[derive(Debug, Clone)]
pub struct ConsoleDecorator {
    header: console::Style,
    command: console::Style,
    dim: console::Style,
    banner: console::Style,
}

impl ConsoleDecorator {
    pub fn new() -> Self {
        Self {
            header: console::Style::new().cyan().bold(),
            command: console::Style::new().yellow(),
            dim: console::Style::new().dim(),
            banner: console::Style::new().bold().underlined(),
        }
    }

    fn style_for(&self, style: Style) -> &console::Style {
        match style {
            Style::Header => &self.header,
            Style::Command => &self.command,
            Style::Dim => &self.dim,
            Style::Banner => &self.banner,
        }
    }
}

impl Default for ConsoleDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorate for ConsoleDecorator {
    fn decorate(&self, text: &str, style: Style) -> String {
        self.style_for(style).apply_to(text).to_string()
    }
}
