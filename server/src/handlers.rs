//! Route handlers. Each returns the fragment for the region it affects.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use todo_core::{parse_flag, parse_id, Action, Todo};
use tracing::{debug, info};

use crate::{
    error::ServerError,
    render::{self, FILTER_CHANGED, TODOS_CHANGED},
    session, AppState,
};

const HX_TRIGGER: &str = "HX-Trigger";

/// Raw form values. Absent fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub id: String,
    pub title: String,
    pub done: String,
    pub name: String,
}

type Fragment = ([(&'static str, &'static str); 1], Html<String>);

/// A fragment that also tells the client the collection changed.
fn changed(body: String) -> Fragment {
    ([(HX_TRIGGER, TODOS_CHANGED)], Html(body))
}

pub async fn page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut store = state.store.write().await;
    let cookie = match session::session_id(&headers) {
        Some(_) => None,
        None => {
            store.reset();
            info!("new session, todo store reset");
            Some(session::new_session_cookie())
        }
    };
    let filters = state.filters.read().await;
    let body = Html(render::page(&store, &filters));
    match cookie {
        Some(cookie) => ([(SET_COOKIE, cookie)], body).into_response(),
        None => body.into_response(),
    }
}

pub async fn add_todo(State(state): State<AppState>, Form(form): Form<FormValues>) -> Response {
    let mut store = state.store.write().await;
    let Some(todo) = store.add(&form.title) else {
        debug!("ignored todo with empty title");
        return Html(String::new()).into_response();
    };
    debug!(id = todo.id, "todo created");
    let filter = state.filters.read().await.selected();
    changed(render::todo_item(&todo, filter)).into_response()
}

/// `done` is the state the client currently shows; the stored flag becomes
/// its negation.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Form(form): Form<FormValues>,
) -> Result<Fragment, ServerError> {
    let id = parse_id(&form.id)?;
    let done = !parse_flag(&form.done)?;
    let mut store = state.store.write().await;
    let todo = store.mutate(Action::Toggle, Todo { done, ..Todo::with_id(id) });
    debug!(id, done, found = !todo.is_empty(), "todo toggled");
    let filter = state.filters.read().await.selected();
    Ok(changed(render::todo_item(&todo, filter)))
}

pub async fn edit_todo(
    State(state): State<AppState>,
    Form(form): Form<FormValues>,
) -> Result<Html<String>, ServerError> {
    let id = parse_id(&form.id)?;
    let mut todo = state.store.write().await.mutate(Action::Edit, Todo::with_id(id));
    // Only the rendered copy is marked; the store keeps its record as-is.
    todo.editing = !todo.is_empty();
    Ok(Html(render::edit_todo(&todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Form(form): Form<FormValues>,
) -> Result<Fragment, ServerError> {
    let id = parse_id(&form.id)?;
    let mut store = state.store.write().await;
    let todo = store.mutate(
        Action::Update,
        Todo {
            title: form.title,
            ..Todo::with_id(id)
        },
    );
    if todo.is_empty() {
        debug!(id, "todo removed by empty update");
        return Ok(changed(String::new()));
    }
    debug!(id, "todo updated");
    let filter = state.filters.read().await.selected();
    Ok(changed(render::todo_item(&todo, filter)))
}

pub async fn remove_todo(
    State(state): State<AppState>,
    Form(form): Form<FormValues>,
) -> Result<Fragment, ServerError> {
    let id = parse_id(&form.id)?;
    state.store.write().await.mutate(Action::Delete, Todo::with_id(id));
    debug!(id, "todo removed");
    Ok(changed(String::new()))
}

pub async fn todo_item(
    State(state): State<AppState>,
    Form(form): Form<FormValues>,
) -> Result<Html<String>, ServerError> {
    let id = parse_id(&form.id)?;
    let todo = state.store.write().await.mutate(Action::Edit, Todo::with_id(id));
    let filter = state.filters.read().await.selected();
    Ok(Html(render::todo_item(&todo, filter)))
}

pub async fn todo_list(State(state): State<AppState>) -> Html<String> {
    let store = state.store.read().await;
    let filter = state.filters.read().await.selected();
    Html(render::todo_list(store.todos(), filter))
}

pub async fn todo_json(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.read().await.todos().to_vec())
}

pub async fn update_counts(State(state): State<AppState>) -> Html<String> {
    Html(render::counts(state.store.read().await.count_incomplete()))
}

pub async fn toggle_all_state(State(state): State<AppState>) -> Html<String> {
    Html(state.store.read().await.is_all_done().to_string())
}

/// Mark everything done, or everything active when all are already done.
pub async fn toggle_all(State(state): State<AppState>) -> Fragment {
    let mut store = state.store.write().await;
    let done = !store.is_all_done();
    let changed_count = store.set_all_done(done);
    debug!(done, changed = changed_count, "toggled all todos");
    let filter = state.filters.read().await.selected();
    changed(render::todo_list(store.todos(), filter))
}

pub async fn completed(State(state): State<AppState>) -> Html<String> {
    Html(render::clear_completed(state.store.read().await.has_completed()))
}

pub async fn clear_completed(State(state): State<AppState>) -> Fragment {
    let mut store = state.store.write().await;
    let removed = store.clear_completed();
    debug!(removed, "cleared completed todos");
    let filter = state.filters.read().await.selected();
    changed(render::todo_list(store.todos(), filter))
}

pub async fn footer(State(state): State<AppState>) -> Html<String> {
    let store = state.store.read().await;
    let filters = state.filters.read().await;
    Html(render::footer(&store, &filters))
}

pub async fn toggle_main(State(state): State<AppState>) -> Html<String> {
    Html(render::toggle_main(&*state.store.read().await))
}

pub async fn set_hash(State(state): State<AppState>, Form(form): Form<FormValues>) -> Fragment {
    let selected = state.filters.write().await.select(&form.name);
    debug!(filter = selected.name(), "filter selected");
    ([(HX_TRIGGER, FILTER_CHANGED)], Html(String::new()))
}

pub async fn learn() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}
