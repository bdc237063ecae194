//! Picker candidates

/// Whether a candidate can be confirmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selectability {
    #[default]
    Selectable,
    /// Shown and filterable, but never receives the cursor or a confirm.
    /// `reason` is a short marker for renderers, e.g. `"worktree"`.
    Disabled { reason: Option<String> },
}

/// A candidate offered by a picker session
///
/// `label` is the text fuzzy-matched against; `value` is what the caller gets
/// back when the entry is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub label: String,
    /// Secondary label, typically a path
    pub detail: Option<String>,
    pub selectability: Selectability,
    /// Rendered with a distinct style (e.g. the main worktree)
    pub primary: bool,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            detail: None,
            selectability: Selectability::Selectable,
            primary: false,
            value,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn disabled(mut self, reason: Option<&str>) -> Self {
        self.selectability = Selectability::Disabled {
            reason: reason.map(str::to_string),
        };
        self
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self.selectability, Selectability::Selectable)
    }

    pub fn disabled_reason(&self) -> Option<&str> {
        match &self.selectability {
            Selectability::Selectable => None,
            Selectability::Disabled { reason } => reason.as_deref(),
        }
    }
}
