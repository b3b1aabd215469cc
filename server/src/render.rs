//! HTML fragments for the TodoMVC page.
//!
//! # Design
//! Every function returns one self-contained region of the page. Fragments
//! that depend on collection-wide state (footer, toggle-all, list) carry
//! `hx-trigger` listeners for the `todos-changed` and `filter-changed`
//! events so the client refetches them after a mutation. All user text goes
//! through `escape`.

use todo_core::{FilterKind, Filters, Todo, TodoStore};

/// Client event raised after any mutation of the collection.
pub const TODOS_CHANGED: &str = "todos-changed";
/// Client event raised after the selected filter changes.
pub const FILTER_CHANGED: &str = "filter-changed";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const HYPERSCRIPT_SRC: &str = "https://unpkg.com/hyperscript.org@0.9.12";
const TODOMVC_CSS: &str = "https://unpkg.com/todomvc-app-css@2.4.3/index.css";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn attr_if(cond: bool, attr: &str) -> &str {
    if cond {
        attr
    } else {
        ""
    }
}

/// The whole document, used for the initial load.
pub fn page(store: &TodoStore, filters: &Filters) -> String {
    format!(
        r##"<!doctype html>
<html lang="en" data-framework="htmx">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>htmx • TodoMVC</title>
<link rel="stylesheet" href="{TODOMVC_CSS}">
<script src="{HTMX_SRC}"></script>
<script src="{HYPERSCRIPT_SRC}"></script>
</head>
<body>
<section class="todoapp">
<header class="header">
<h1>todos</h1>
<input id="new-todo" class="new-todo" name="title" placeholder="What needs to be done?" autofocus autocomplete="off" hx-post="/add-todo" hx-trigger="keyup[key=='Enter']" hx-target="#todo-list" hx-swap="beforeend" _="on htmx:afterRequest set my value to ''">
</header>
<section class="main">
{toggle}
{list}
</section>
{footer}
</section>
<footer class="info">
<p>Double-click to edit a todo</p>
<p>Part of <a href="http://todomvc.com">TodoMVC</a></p>
</footer>
</body>
</html>
"##,
        toggle = toggle_main(store),
        list = todo_list(store.todos(), filters.selected()),
        footer = footer(store, filters),
    )
}

/// The toggle-all checkbox, checked when every todo is done.
pub fn toggle_main(store: &TodoStore) -> String {
    format!(
        r##"<div id="toggle-main" hx-get="/toggle-main" hx-trigger="{TODOS_CHANGED} from:body" hx-swap="outerHTML"{hidden}><input id="toggle-all" class="toggle-all" type="checkbox"{checked} hx-post="/toggle-all" hx-target="#todo-list" hx-swap="outerHTML"><label for="toggle-all">Mark all as complete</label></div>"##,
        hidden = attr_if(store.is_empty(), " hidden"),
        checked = attr_if(store.is_all_done(), " checked"),
    )
}

pub fn todo_list(todos: &[Todo], filter: FilterKind) -> String {
    let items: String = todos.iter().map(|todo| todo_item(todo, filter)).collect();
    format!(
        r#"<ul id="todo-list" class="todo-list" hx-get="/todo-list" hx-trigger="{FILTER_CHANGED} from:body" hx-swap="outerHTML">{items}</ul>"#
    )
}

/// One list entry. The sentinel renders as nothing; entries outside the
/// selected filter are rendered hidden.
pub fn todo_item(todo: &Todo, filter: FilterKind) -> String {
    if todo.is_empty() {
        return String::new();
    }
    let id = todo.id;
    let title = escape(&todo.title);
    let mut classes = Vec::new();
    if todo.done {
        classes.push("completed");
    }
    if todo.editing {
        classes.push("editing");
    }
    format!(
        r#"<li id="todo-{id}" class="{class}"{hidden}><div class="view"><input class="toggle" type="checkbox"{checked} hx-post="/toggle-todo" hx-vals='{{"id": "{id}", "done": "{done}"}}' hx-target="closest li" hx-swap="outerHTML"><label hx-get="/edit-todo?id={id}" hx-trigger="dblclick" hx-target="next .edit" hx-swap="outerHTML" _="on dblclick add .editing to closest li">{title}</label><button class="destroy" hx-post="/remove-todo" hx-vals='{{"id": "{id}"}}' hx-target="closest li" hx-swap="outerHTML"></button></div><input class="edit" name="title" value="{title}"></li>"#,
        class = classes.join(" "),
        hidden = attr_if(!filter.matches(todo), " hidden"),
        checked = attr_if(todo.done, " checked"),
        done = todo.done,
    )
}

/// The inline edit control, prefilled with the stored title.
pub fn edit_todo(todo: &Todo) -> String {
    if todo.is_empty() {
        return String::new();
    }
    format!(
        r#"<input class="edit" name="title" value="{title}" autofocus hx-post="/update-todo" hx-vals='{{"id": "{id}"}}' hx-trigger="keyup[key=='Enter'], blur once" hx-target="closest li" hx-swap="outerHTML" _="on keyup[key is 'Escape'] remove .editing from closest li">"#,
        id = todo.id,
        title = escape(&todo.title),
    )
}

pub fn counts(incomplete: usize) -> String {
    let plural = if incomplete == 1 { "" } else { "s" };
    format!("<strong>{incomplete}</strong> item{plural} left")
}

/// The clear-completed button, or nothing when no todo is done.
pub fn clear_completed(has_completed: bool) -> String {
    if !has_completed {
        return String::new();
    }
    r##"<button class="clear-completed" hx-post="/clear-completed" hx-target="#todo-list" hx-swap="outerHTML">Clear completed</button>"##
        .to_string()
}

pub fn footer(store: &TodoStore, filters: &Filters) -> String {
    let links: String = filters
        .entries()
        .iter()
        .map(|filter| {
            format!(
                r#"<li><a href="{url}"{selected} hx-get="/set-hash?name={name}" hx-swap="none">{name}</a></li>"#,
                url = filter.url(),
                name = filter.name(),
                selected = attr_if(filter.selected, r#" class="selected""#),
            )
        })
        .collect();
    format!(
        r#"<footer id="footer" class="footer" hx-get="/footer" hx-trigger="{TODOS_CHANGED} from:body, {FILTER_CHANGED} from:body" hx-swap="outerHTML"{hidden}><span class="todo-count">{counts}</span><ul class="filters">{links}</ul>{clear}</footer>"#,
        hidden = attr_if(store.is_empty(), " hidden"),
        counts = counts(store.count_incomplete()),
        clear = clear_completed(store.has_completed()),
    )
}
