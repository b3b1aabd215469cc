//! TodoMVC server that answers with HTML fragments.
//!
//! # Overview
//! Each route reads its form values, applies at most one store operation and
//! renders the page region that changed. The client swaps fragments in place
//! and refetches dependent regions when a response raises `todos-changed` or
//! `filter-changed`.
//!
//! # Design
//! - `AppState` owns the todo store and the filter selection; handlers reach
//!   them only through axum state, never globals.
//! - Both live behind tokio `RwLock`s, so concurrent requests are serialized
//!   per resource. Handlers needing both take the store lock first.
//! - A request to `/` without a `sessionId` cookie starts a fresh session and
//!   empties the store.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod session;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{Filters, TodoStore};

pub use config::Config;
pub use error::ServerError;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<RwLock<TodoStore>>,
    pub filters: Arc<RwLock<Filters>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Router over a fresh, empty state.
pub fn app() -> Router {
    router(AppState::new())
}

pub fn router(state: AppState) -> Router {
    use handlers::*;

    Router::new()
        .route("/", get(page))
        .route("/add-todo", post(add_todo))
        .route("/toggle-todo", post(toggle_todo))
        .route("/edit-todo", get(edit_todo))
        .route("/update-todo", post(update_todo))
        .route("/remove-todo", post(remove_todo))
        .route("/todo-item", get(todo_item))
        .route("/todo-list", get(todo_list))
        .route("/todo-json", get(todo_json))
        .route("/update-counts", get(update_counts))
        .route("/toggle-all", get(toggle_all_state).post(toggle_all))
        .route("/completed", get(completed))
        .route("/clear-completed", post(clear_completed))
        .route("/footer", get(footer))
        .route("/toggle-footer", get(footer))
        .route("/toggle-main", get(toggle_main))
        .route("/set-hash", get(set_hash).post(set_hash))
        .route("/learn.json", get(learn))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
