//! Domain records for the todo collection.
//!
//! # Design
//! `Todo::default()` doubles as the empty sentinel: the store returns it
//! whenever an operation has no record to hand back (unknown id, delete,
//! update-to-empty). Ids are allocated from a counter starting at 1, so a
//! live record never has id 0.

use serde::{Deserialize, Serialize};

/// Identifier of a todo within the store.
pub type TodoId = u64;

/// A single todo item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    /// Set only while an inline edit control is open for this record.
    #[serde(skip)]
    pub editing: bool,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
            editing: false,
        }
    }

    /// Candidate carrying only an id, for Edit and Delete.
    pub fn with_id(id: TodoId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// True for the zero-valued sentinel record.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The five operations accepted by `TodoStore::mutate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Toggle,
    Edit,
    Update,
    Delete,
}
