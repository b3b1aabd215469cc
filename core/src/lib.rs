//! Todo collection core for the TodoMVC fragment server.
//!
//! # Overview
//! `TodoStore` holds an ordered list of todos and exposes a single mutation
//! entry point, `TodoStore::mutate`, over the closed `Action` set. Derived
//! queries (incomplete count, all-done, has-completed) drive the rendering
//! layer, and `Filters` tracks which of the three list views is selected.
//!
//! # Design
//! - No I/O and no locking: the server owns a store and serializes access.
//! - Lookup misses are silent and yield the empty sentinel `Todo::default()`;
//!   `TodoStore::get` is available when a caller needs to tell them apart.
//! - `params` turns raw form strings into ids and flags so the HTTP layer
//!   stays thin.

pub mod error;
pub mod filter;
pub mod params;
pub mod store;
pub mod types;

pub use error::TodoError;
pub use filter::{Filter, FilterKind, Filters};
pub use params::{parse_flag, parse_id};
pub use store::TodoStore;
pub use types::{Action, Todo, TodoId};
