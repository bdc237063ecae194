//! Picker frame layout
//!
//! Produces the frame as a list of already-styled lines so that layout can be
//! tested without a terminal.

use std::ops::Range;

use owo_colors::Style;
use wt_core::SelectionModel;
use wt_core::picker::Row;

use crate::theme::Theme;

pub const PLACEHOLDER: &str = "Type to filter...";
pub const NO_MATCHES: &str = "No matches";
pub const FOOTER: &str = "↑/↓ navigate • enter select • esc cancel";

const CURSOR_MARKER: &str = "> ";
const ROW_INDENT: &str = "  ";

/// Static parts of a picker frame
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub header: &'a str,
    /// Show the secondary label column
    pub show_details: bool,
    /// Most entry rows drawn at once
    pub max_rows: usize,
}

/// Lines of one frame, top to bottom
pub fn render_lines<T>(model: &SelectionModel<T>, view: &View<'_>, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(theme.paint(theme.header, view.header));

    let query_line = if model.query().is_empty() {
        theme.paint(theme.placeholder, PLACEHOLDER)
    } else {
        theme.paint(theme.prompt, model.query())
    };
    lines.push(format!("{}{}", ROW_INDENT, query_line));
    lines.push(String::new());

    let rows: Vec<Row<'_, T>> = model.rows().collect();
    if rows.is_empty() {
        lines.push(format!("{}{}", ROW_INDENT, theme.paint(theme.footer, NO_MATCHES)));
    } else {
        let width = rows.iter().map(label_width).max().unwrap_or(0);
        let window = visible_window(model.cursor().unwrap_or(0), rows.len(), view.max_rows);
        for row in &rows[window] {
            lines.push(render_row(row, width, view.show_details, theme));
        }
    }

    lines.push(String::new());
    lines.push(theme.paint(theme.footer, FOOTER));
    lines
}

/// Rows to draw so the cursor stays in view
pub fn visible_window(cursor: usize, len: usize, max_rows: usize) -> Range<usize> {
    let max_rows = max_rows.max(1);
    if len <= max_rows {
        return 0..len;
    }
    let start = (cursor + 1).saturating_sub(max_rows);
    start..start + max_rows
}

fn disabled_marker<T>(row: &Row<'_, T>) -> Option<String> {
    if !row.is_disabled() {
        return None;
    }
    row.entry.disabled_reason().map(|reason| format!("[{}]", reason))
}

fn label_width<T>(row: &Row<'_, T>) -> usize {
    let marker = disabled_marker(row).map_or(0, |m| m.chars().count() + 1);
    row.label().chars().count() + marker
}

fn render_row<T>(row: &Row<'_, T>, width: usize, show_details: bool, theme: &Theme) -> String {
    let mut line = String::new();
    if row.focused && !row.is_disabled() {
        line.push_str(&theme.paint(theme.cursor, CURSOR_MARKER));
    } else {
        line.push_str(ROW_INDENT);
    }

    line.push_str(&render_label(row, theme));
    if let Some(marker) = disabled_marker(row) {
        line.push(' ');
        line.push_str(&theme.paint(theme.disabled, &marker));
    }

    if let Some(detail) = row.detail().filter(|_| show_details) {
        let padding = width.saturating_sub(label_width(row));
        line.push_str(&" ".repeat(padding + 2));
        line.push_str(&theme.paint(theme.detail, detail));
    }

    line
}

/// Label with matched characters highlighted, grouped into runs
fn render_label<T>(row: &Row<'_, T>, theme: &Theme) -> String {
    let base: Option<Style> = if row.is_disabled() {
        Some(theme.disabled)
    } else if row.focused {
        Some(theme.cursor)
    } else if row.is_primary() {
        Some(theme.primary)
    } else {
        None
    };

    let mut runs: Vec<(bool, String)> = Vec::new();
    for (i, c) in row.label().chars().enumerate() {
        let lit = !row.is_disabled() && row.positions.contains(&i);
        match runs.last_mut() {
            Some((run_lit, text)) if *run_lit == lit => text.push(c),
            _ => runs.push((lit, c.to_string())),
        }
    }

    runs.into_iter()
        .map(|(lit, text)| match (lit, base) {
            (true, _) => theme.paint(theme.highlight, &text),
            (false, Some(style)) => theme.paint(style, &text),
            (false, None) => text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wt_core::{Entry, Event};

    fn view(header: &str) -> View<'_> {
        View {
            header,
            show_details: true,
            max_rows: 10,
        }
    }

    fn worktree_model() -> SelectionModel<&'static str> {
        SelectionModel::new(vec![
            Entry::new("main", "/src/repo").with_detail("repo").primary(true),
            Entry::new("feature-a", "/src/repo-worktrees/feature-a")
                .with_detail("repo-worktrees/feature-a"),
        ])
    }

    #[test]
    fn test_initial_frame() {
        let lines = render_lines(&worktree_model(), &view("Select worktree"), &Theme::plain());
        assert_eq!(
            lines,
            vec![
                "Select worktree",
                "  Type to filter...",
                "",
                "> main       repo",
                "  feature-a  repo-worktrees/feature-a",
                "",
                FOOTER,
            ]
        );
    }

    #[test]
    fn test_details_hidden() {
        let mut v = view("Select worktree");
        v.show_details = false;
        let lines = render_lines(&worktree_model(), &v, &Theme::plain());
        assert_eq!(lines[3], "> main");
        assert_eq!(lines[4], "  feature-a");
    }

    #[test]
    fn test_query_and_cursor_follow_filter() {
        let model = worktree_model().transition(Event::TextChanged("fea".to_string()));
        let lines = render_lines(&model, &view("Select worktree"), &Theme::plain());
        assert_eq!(lines[1], "  fea");
        assert_eq!(lines[3], "> feature-a  repo-worktrees/feature-a");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_no_matches() {
        let model = worktree_model().transition(Event::TextChanged("zzz".to_string()));
        let lines = render_lines(&model, &view("Select worktree"), &Theme::plain());
        assert_eq!(lines[3], "  No matches");
        assert_eq!(lines.last().map(String::as_str), Some(FOOTER));
    }

    #[test]
    fn test_disabled_rows_show_reason_without_cursor() {
        let model = SelectionModel::new(vec![
            Entry::new("main", "main").disabled(Some("worktree")),
            Entry::new("feature-a", "feature-a"),
        ]);
        let lines = render_lines(&model, &view("Branches"), &Theme::plain());
        assert_eq!(lines[3], "  main [worktree]");
        assert_eq!(lines[4], "> feature-a");
    }

    #[test]
    fn test_highlight_styles_matched_chars() {
        let model = SelectionModel::new(vec![Entry::new("feature-auth", ())])
            .transition(Event::TextChanged("fau".to_string()));
        let theme = Theme::default();
        let lines = render_lines(&model, &view("Branches"), &theme);

        let highlighted_f = theme.paint(theme.highlight, "f");
        assert!(lines[3].contains(&highlighted_f));
        assert!(lines[3].contains('\x1b'));
    }

    #[test]
    fn test_query_uses_prompt_style() {
        let model = worktree_model().transition(Event::TextChanged("fea".to_string()));
        let theme = Theme::default();
        let lines = render_lines(&model, &view("Select worktree"), &theme);
        assert_eq!(lines[1], format!("  {}", theme.paint(theme.prompt, "fea")));
    }

    #[test]
    fn test_disabled_row_not_highlighted() {
        let model = SelectionModel::new(vec![Entry::new("main", ()).disabled(None)])
            .transition(Event::TextChanged("ma".to_string()));
        let theme = Theme::default();
        let lines = render_lines(&model, &view("Branches"), &theme);
        assert!(!lines[3].contains(&theme.paint(theme.highlight, "ma")));
        assert!(lines[3].contains(&theme.paint(theme.disabled, "main")));
    }

    #[test]
    fn test_visible_window() {
        assert_eq!(visible_window(0, 3, 10), 0..3);
        assert_eq!(visible_window(0, 20, 5), 0..5);
        assert_eq!(visible_window(4, 20, 5), 0..5);
        assert_eq!(visible_window(5, 20, 5), 1..6);
        assert_eq!(visible_window(19, 20, 5), 15..20);
        assert_eq!(visible_window(0, 3, 0), 0..1);
    }

    #[test]
    fn test_long_list_scrolls_with_cursor() {
        let entries: Vec<Entry<usize>> =
            (0..8).map(|i| Entry::new(format!("branch-{}", i), i)).collect();
        let mut model = SelectionModel::new(entries);
        for _ in 0..5 {
            model = model.transition(Event::MoveDown);
        }
        let v = View {
            header: "Branches",
            show_details: false,
            max_rows: 3,
        };
        let lines = render_lines(&model, &v, &Theme::plain());
        assert_eq!(lines[3], "  branch-3");
        assert_eq!(lines[5], "> branch-5");
    }
}
