//! Interactive fuzzy picker
//!
//! Drives a [`SelectionModel`] from terminal key events and redraws the frame
//! after every event. All drawing goes to stderr.

mod keys;
mod render;
mod terminal;

use std::io::IsTerminal;

use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event as TermEvent};
use tracing::debug;
use wt_core::{Entry, SelectionModel};

use crate::theme::Theme;

pub use keys::map_key;
pub use render::{View, render_lines};
use terminal::TerminalGuard;

/// Lines of a frame that are not entry rows
const CHROME_LINES: usize = 5;

/// Show a picker over `entries` and return the chosen value, or `None` when
/// the user cancels.
pub fn pick<T>(
    header: &str,
    entries: Vec<Entry<T>>,
    theme: &Theme,
    show_details: bool,
) -> Result<Option<T>> {
    if !std::io::stderr().is_terminal() || !std::io::stdin().is_terminal() {
        bail!("interactive selection needs a terminal; pass a name argument instead");
    }

    let mut model = SelectionModel::new(entries);
    {
        let mut term = TerminalGuard::enter().context("failed to set up terminal")?;
        while model.is_active() {
            let view = View {
                header,
                show_details,
                max_rows: term.height()?.saturating_sub(CHROME_LINES),
            };
            term.draw(&render_lines(&model, &view, theme))?;

            if let TermEvent::Key(key) = event::read()? {
                if let Some(ev) = map_key(key, model.query()) {
                    model = model.transition(ev);
                }
            }
        }
    }

    debug!(header, status = ?model.status(), "picker closed");
    Ok(model.into_selection())
}
