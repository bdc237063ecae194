//! Terminal styling for pickers and status messages
//!
//! A [`Theme`] is built once per invocation from the `[picker]` config section
//! and the `NO_COLOR` convention, then passed to whatever draws.

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};
use wt_core::config::PickerConfig;

/// Styles used by the picker and command output
#[derive(Debug, Clone)]
pub struct Theme {
    enabled: bool,
    /// Picker title
    pub header: Style,
    /// Query text
    pub prompt: Style,
    /// Placeholder shown while the query is empty
    pub placeholder: Style,
    /// Cursor marker and focused label
    pub cursor: Style,
    /// Matched characters in a label
    pub highlight: Style,
    /// Secondary label column
    pub detail: Style,
    /// Main worktree label
    pub primary: Style,
    /// Entries that cannot be selected
    pub disabled: Style,
    /// Key help and hints
    pub footer: Style,
    /// Completed operations
    pub success: Style,
    /// Warnings and refusals
    pub warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            header: Style::new().blue().bold(),
            prompt: Style::new().magenta(),
            placeholder: Style::new().dimmed(),
            cursor: Style::new().cyan().bold(),
            highlight: Style::new().yellow().bold(),
            detail: Style::new().dimmed(),
            primary: Style::new().italic(),
            disabled: Style::new().bright_black().dimmed(),
            footer: Style::new().dimmed(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
        }
    }
}

impl Theme {
    /// A theme that emits no escape sequences
    pub fn plain() -> Self {
        Self {
            enabled: false,
            header: Style::new(),
            prompt: Style::new(),
            placeholder: Style::new(),
            cursor: Style::new(),
            highlight: Style::new(),
            detail: Style::new(),
            primary: Style::new(),
            disabled: Style::new(),
            footer: Style::new(),
            success: Style::new(),
            warning: Style::new(),
        }
    }

    /// Pick colored or plain from config, `NO_COLOR`, and whether stderr is a terminal
    pub fn from_config(config: &PickerConfig) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if config.color && !no_color && std::io::stderr().is_terminal() {
            Self::default()
        } else {
            Self::plain()
        }
    }

    /// Apply `style` to `text`, or return it unchanged for the plain theme
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}
