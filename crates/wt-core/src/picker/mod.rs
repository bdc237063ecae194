//! Interactive picker core: candidates and the selection state machine

mod entry;
mod model;

pub use entry::{Entry, Selectability};
pub use model::{Event, FilteredEntry, Row, SelectionModel, Status, transition};
