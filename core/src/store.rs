//! Ordered in-memory todo collection and its mutation protocol.
//!
//! # Design
//! All writes funnel through `TodoStore::mutate`, which applies one `Action`
//! to a candidate record and returns the resulting record or the empty
//! sentinel. Insertion is always at the tail and removal keeps the relative
//! order of the remaining records. The store owns the id counter so that
//! resetting the collection also restarts numbering.

use crate::types::{Action, Todo, TodoId};

/// An ordered collection of todos plus the counter that allocates their ids.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    last_id: TodoId,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier. The first id is 1.
    pub fn next_id(&mut self) -> TodoId {
        self.last_id += 1;
        self.last_id
    }

    /// Drop every record and restart id allocation.
    pub fn reset(&mut self) {
        self.todos.clear();
        self.last_id = 0;
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Look up a record by id, distinguishing a miss from an empty record.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    // Vec::remove shifts the tail, keeping relative order.
    fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Apply `action` using the fields of `candidate` it needs.
    ///
    /// - `Create` appends `candidate` as-is; its id must already be assigned.
    /// - `Toggle` copies `candidate.done` onto the stored record.
    /// - `Edit` returns the stored record unchanged.
    /// - `Update` trims `candidate.title`; a non-empty title replaces the
    ///   stored one and clears `editing`, an empty one removes the record.
    /// - `Delete` removes the record.
    ///
    /// Unknown ids are a silent no-op returning `Todo::default()`.
    pub fn mutate(&mut self, action: Action, candidate: Todo) -> Todo {
        match action {
            Action::Create => {
                self.todos.push(candidate.clone());
                candidate
            }
            Action::Toggle => match self.get_mut(candidate.id) {
                Some(todo) => {
                    todo.done = candidate.done;
                    todo.clone()
                }
                None => Todo::default(),
            },
            Action::Edit => self.get(candidate.id).cloned().unwrap_or_default(),
            Action::Update => {
                let title = candidate.title.trim();
                if title.is_empty() {
                    self.remove(candidate.id);
                    return Todo::default();
                }
                match self.get_mut(candidate.id) {
                    Some(todo) => {
                        todo.title = title.to_string();
                        todo.editing = false;
                        todo.clone()
                    }
                    None => Todo::default(),
                }
            }
            Action::Delete => {
                self.remove(candidate.id);
                Todo::default()
            }
        }
    }

    /// Create a todo from raw user input.
    ///
    /// Returns `None` without allocating an id when the trimmed title is
    /// empty.
    pub fn add(&mut self, title: &str) -> Option<Todo> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.next_id();
        Some(self.mutate(Action::Create, Todo::new(id, title)))
    }

    /// Set every record's `done` flag. Returns how many records changed.
    pub fn set_all_done(&mut self, done: bool) -> usize {
        let targets: Vec<TodoId> = self
            .todos
            .iter()
            .filter(|t| t.done != done)
            .map(|t| t.id)
            .collect();
        for id in &targets {
            self.mutate(
                Action::Toggle,
                Todo {
                    done,
                    ..Todo::with_id(*id)
                },
            );
        }
        targets.len()
    }

    /// Delete every completed record. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let targets: Vec<TodoId> = self.todos.iter().filter(|t| t.done).map(|t| t.id).collect();
        for id in &targets {
            self.mutate(Action::Delete, Todo::with_id(*id));
        }
        targets.len()
    }

    pub fn count_incomplete(&self) -> usize {
        self.todos.iter().filter(|t| !t.done).count()
    }

    /// True when there is at least one record and none is incomplete.
    pub fn is_all_done(&self) -> bool {
        !self.todos.is_empty() && self.count_incomplete() == 0
    }

    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> TodoStore {
        let mut store = TodoStore::new();
        for title in titles {
            store.add(title);
        }
        store
    }

    fn ids(store: &TodoStore) -> Vec<TodoId> {
        store.todos().iter().map(|t| t.id).collect()
    }

    #[test]
    fn create_appends_and_returns_candidate() {
        let mut store = TodoStore::new();
        let todo = store.mutate(Action::Create, Todo::new(1, "buy milk"));
        assert_eq!(todo, Todo::new(1, "buy milk"));
        assert_eq!(store.todos(), &[Todo::new(1, "buy milk")]);
        assert_eq!(store.count_incomplete(), 1);
    }

    #[test]
    fn add_trims_and_assigns_sequential_ids() {
        let mut store = TodoStore::new();
        let first = store.add("  buy milk ").unwrap();
        let second = store.add("walk dog").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "buy milk");
        assert_eq!(second.id, 2);
    }

    #[test]
    fn add_rejects_blank_title_without_consuming_an_id() {
        let mut store = TodoStore::new();
        assert!(store.add("   ").is_none());
        assert!(store.is_empty());
        assert_eq!(store.add("x").unwrap().id, 1);
    }

    #[test]
    fn toggle_sets_done_and_leaves_editing() {
        let mut store = store_with(&["a"]);
        store.todos[0].editing = true;
        let todo = store.mutate(
            Action::Toggle,
            Todo {
                done: true,
                ..Todo::with_id(1)
            },
        );
        assert!(todo.done);
        assert!(todo.editing);
        assert!(store.get(1).unwrap().done);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = store_with(&["a"]);
        let todo = store.mutate(
            Action::Toggle,
            Todo {
                done: true,
                ..Todo::with_id(42)
            },
        );
        assert!(todo.is_empty());
        assert!(!store.get(1).unwrap().done);
    }

    #[test]
    fn edit_returns_current_record_unchanged() {
        let mut store = store_with(&["a", "b"]);
        let todo = store.mutate(Action::Edit, Todo::with_id(2));
        assert_eq!(todo, Todo::new(2, "b"));
        assert!(!store.get(2).unwrap().editing);
        assert!(store.mutate(Action::Edit, Todo::with_id(9)).is_empty());
    }

    #[test]
    fn update_trims_title_and_clears_editing() {
        let mut store = store_with(&["a"]);
        store.todos[0].editing = true;
        let todo = store.mutate(
            Action::Update,
            Todo {
                title: "  renamed  ".to_string(),
                ..Todo::with_id(1)
            },
        );
        assert_eq!(todo.title, "renamed");
        assert!(!todo.editing);
        assert_eq!(store.get(1).unwrap().title, "renamed");
    }

    #[test]
    fn update_to_empty_title_removes_record() {
        let mut store = store_with(&["x"]);
        let todo = store.mutate(Action::Update, Todo::with_id(1));
        assert!(todo.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn update_unknown_id_leaves_collection_alone() {
        let mut store = store_with(&["x"]);
        let todo = store.mutate(Action::Update, Todo::with_id(5));
        assert!(todo.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_preserves_order_of_the_rest() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let todo = store.mutate(Action::Delete, Todo::with_id(2));
        assert!(todo.is_empty());
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn delete_unknown_id_returns_sentinel() {
        let mut store = store_with(&["a"]);
        assert!(store.mutate(Action::Delete, Todo::with_id(999)).is_empty());
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn all_done_requires_a_non_empty_collection() {
        let mut store = TodoStore::new();
        assert!(!store.is_all_done());
        store.add("a");
        store.add("b");
        store.mutate(Action::Toggle, Todo { done: true, ..Todo::with_id(1) });
        assert!(!store.is_all_done());
        store.mutate(Action::Toggle, Todo { done: true, ..Todo::with_id(2) });
        assert!(store.is_all_done());
        assert!(store.has_completed());
    }

    #[test]
    fn set_all_done_counts_changed_records() {
        let mut store = store_with(&["a", "b", "c"]);
        store.mutate(Action::Toggle, Todo { done: true, ..Todo::with_id(2) });
        assert_eq!(store.set_all_done(true), 2);
        assert!(store.is_all_done());
        assert_eq!(store.set_all_done(false), 3);
        assert_eq!(store.count_incomplete(), 3);
    }

    #[test]
    fn clear_completed_removes_only_done_records() {
        let mut store = store_with(&["a", "b", "c"]);
        store.mutate(Action::Toggle, Todo { done: true, ..Todo::with_id(1) });
        store.mutate(Action::Toggle, Todo { done: true, ..Todo::with_id(3) });
        assert_eq!(store.clear_completed(), 2);
        assert_eq!(ids(&store), vec![2]);
        assert!(!store.has_completed());
    }

    #[test]
    fn reset_restarts_numbering() {
        let mut store = store_with(&["a", "b"]);
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.add("c").unwrap().id, 1);
    }
}
