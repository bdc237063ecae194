//! Selection state machine shared by every picker
//!
//! A [`SelectionModel`] owns the candidate list for one picker session, the
//! current query, the filtered and ranked view of the candidates, and the
//! cursor into that view. Input arrives as [`Event`]s and is applied with
//! [`SelectionModel::transition`], which consumes the model and returns the
//! next one. The host owns the terminal and the key-read loop; this module
//! never blocks and never fails.
//!
//! Pickers whose entries are all selectable behave as a plain list: the cursor
//! moves one row at a time and is clamped at both ends. When some entries are
//! [`Selectability::Disabled`](super::Selectability::Disabled) the same code
//! skips over them, and the cursor never rests on a disabled row while a
//! selectable one is visible.

use crate::fuzzy::{self, Match};

use super::entry::Entry;

/// A discrete input to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The query text now reads this
    TextChanged(String),
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// Lifecycle of a picker session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    /// Terminal: the index into the filtered view that was confirmed
    Selected(usize),
    /// Terminal: the user backed out
    Cancelled,
}

/// One row of the live view: an entry index paired with its match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    /// Index into the model's full entry list
    pub index: usize,
    pub matched: Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// State of one picker session
#[derive(Debug, Clone)]
pub struct SelectionModel<T> {
    entries: Vec<Entry<T>>,
    filtered: Vec<FilteredEntry>,
    cursor: Option<usize>,
    query: String,
    status: Status,
}

impl<T> SelectionModel<T> {
    /// Start a session over `entries`, shown in the given order.
    ///
    /// The cursor starts on the first selectable entry, or on the first entry
    /// when none are selectable.
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        let filtered = unfiltered(&entries);
        let cursor = if entries.is_empty() {
            None
        } else {
            Some(entries.iter().position(Entry::is_selectable).unwrap_or(0))
        };

        Self {
            entries,
            filtered,
            cursor,
            query: String::new(),
            status: Status::Active,
        }
    }

    /// Apply one event. Events after a terminal state are ignored.
    pub fn transition(self, event: Event) -> Self {
        if self.status != Status::Active {
            return self;
        }

        match event {
            Event::TextChanged(query) => self.refilter(query),
            Event::MoveUp => self.move_cursor(Direction::Up),
            Event::MoveDown => self.move_cursor(Direction::Down),
            Event::Confirm => self.confirm(),
            Event::Cancel => Self {
                status: Status::Cancelled,
                ..self
            },
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Cursor position in the filtered view; `None` when the view is empty
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn filtered(&self) -> &[FilteredEntry] {
        &self.filtered
    }

    /// The entry under the cursor
    pub fn current(&self) -> Option<&Entry<T>> {
        self.cursor.and_then(|c| self.entry_at(c))
    }

    /// Read-only projection for renderers
    pub fn rows(&self) -> impl Iterator<Item = Row<'_, T>> {
        let highlight = !self.query.is_empty();
        self.filtered.iter().enumerate().map(move |(i, fe)| Row {
            entry: &self.entries[fe.index],
            positions: if highlight {
                fe.matched.positions.as_slice()
            } else {
                &[]
            },
            focused: self.cursor == Some(i),
        })
    }

    /// The confirmed entry, if the session ended in `Selected`
    pub fn selected(&self) -> Option<&Entry<T>> {
        match self.status {
            Status::Selected(i) => self.entry_at(i),
            _ => None,
        }
    }

    /// Consume the session and hand back the confirmed entry's value
    pub fn into_selection(mut self) -> Option<T> {
        let Status::Selected(i) = self.status else {
            return None;
        };
        let index = self.filtered.get(i)?.index;
        Some(self.entries.swap_remove(index).value)
    }

    fn entry_at(&self, filtered_index: usize) -> Option<&Entry<T>> {
        self.filtered
            .get(filtered_index)
            .map(|fe| &self.entries[fe.index])
    }

    fn selectable_at(&self, filtered_index: usize) -> bool {
        self.entry_at(filtered_index)
            .is_some_and(Entry::is_selectable)
    }

    fn refilter(mut self, query: String) -> Self {
        if query.is_empty() {
            self.filtered = unfiltered(&self.entries);
        } else {
            let mut filtered: Vec<FilteredEntry> = self
                .entries
                .iter()
                .enumerate()
                .filter_map(|(index, entry)| {
                    let matched = fuzzy::score(&entry.label, &query);
                    if matched.matched {
                        Some(FilteredEntry { index, matched })
                    } else {
                        None
                    }
                })
                .collect();
            // Stable: equal scores keep enumeration order
            filtered.sort_by(|a, b| b.matched.score.cmp(&a.matched.score));
            self.filtered = filtered;
        }
        self.query = query;

        self.cursor = match self.filtered.len() {
            0 => None,
            len => Some(self.cursor.unwrap_or(0).min(len - 1)),
        };

        if let Some(cursor) = self.cursor {
            if !self.selectable_at(cursor) {
                self.cursor = self
                    .walk(cursor, Direction::Down)
                    .or_else(|| self.walk(cursor, Direction::Up))
                    .or(Some(cursor));
            }
        }
        self
    }

    fn move_cursor(mut self, direction: Direction) -> Self {
        if let Some(next) = self.cursor.and_then(|c| self.walk(c, direction)) {
            self.cursor = Some(next);
        }
        self
    }

    /// Nearest selectable row strictly past `from`, without wrapping
    fn walk(&self, from: usize, direction: Direction) -> Option<usize> {
        let mut i = from;
        loop {
            i = match direction {
                Direction::Up => i.checked_sub(1)?,
                Direction::Down => Some(i + 1).filter(|&n| n < self.filtered.len())?,
            };
            if self.selectable_at(i) {
                return Some(i);
            }
        }
    }

    fn confirm(mut self) -> Self {
        if let Some(cursor) = self.cursor {
            if self.selectable_at(cursor) {
                self.status = Status::Selected(cursor);
            }
        }
        self
    }
}

/// Free-function form of [`SelectionModel::transition`]
pub fn transition<T>(model: SelectionModel<T>, event: Event) -> SelectionModel<T> {
    model.transition(event)
}

fn unfiltered<T>(entries: &[Entry<T>]) -> Vec<FilteredEntry> {
    (0..entries.len())
        .map(|index| FilteredEntry {
            index,
            matched: Match::trivial(),
        })
        .collect()
}

/// A visible row as handed to renderers
#[derive(Debug)]
pub struct Row<'a, T> {
    pub entry: &'a Entry<T>,
    /// Characters to highlight; empty when the query is empty
    pub positions: &'a [usize],
    /// Whether the cursor is on this row
    pub focused: bool,
}

impl<'a, T> Row<'a, T> {
    pub fn label(&self) -> &'a str {
        &self.entry.label
    }

    pub fn detail(&self) -> Option<&str> {
        self.entry.detail.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        !self.entry.is_selectable()
    }

    pub fn is_primary(&self) -> bool {
        self.entry.primary
    }
}
