//! The three list views and which one is selected.

use crate::types::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterKind {
    pub const ALL: [FilterKind; 3] = [FilterKind::All, FilterKind::Active, FilterKind::Completed];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::All => "All",
            FilterKind::Active => "Active",
            FilterKind::Completed => "Completed",
        }
    }

    /// Fragment the client router shows for this view.
    pub fn url(self) -> &'static str {
        match self {
            FilterKind::All => "#/",
            FilterKind::Active => "#/active",
            FilterKind::Completed => "#/completed",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Active => !todo.done,
            FilterKind::Completed => todo.done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub kind: FilterKind,
    pub selected: bool,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn url(&self) -> &'static str {
        self.kind.url()
    }
}

/// Ordered filter entries with exactly one selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    entries: [Filter; 3],
}

impl Default for Filters {
    fn default() -> Self {
        let mut filters = Self {
            entries: FilterKind::ALL.map(|kind| Filter { kind, selected: false }),
        };
        filters.select_kind(FilterKind::All);
        filters
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Filter] {
        &self.entries
    }

    /// Select the filter called `name`, falling back to `All` when the name is
    /// empty or unknown. Returns the kind that ended up selected.
    pub fn select(&mut self, name: &str) -> FilterKind {
        let kind = FilterKind::from_name(name).unwrap_or_default();
        self.select_kind(kind);
        kind
    }

    pub fn select_kind(&mut self, kind: FilterKind) {
        for entry in &mut self.entries {
            entry.selected = entry.kind == kind;
        }
    }

    pub fn selected(&self) -> FilterKind {
        self.entries
            .iter()
            .find(|entry| entry.selected)
            .map(|entry| entry.kind)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(filters: &Filters) -> usize {
        filters.entries().iter().filter(|f| f.selected).count()
    }

    #[test]
    fn starts_with_all_selected() {
        let filters = Filters::new();
        assert_eq!(filters.selected(), FilterKind::All);
        assert_eq!(selected_count(&filters), 1);
    }

    #[test]
    fn select_marks_exactly_one_entry() {
        let mut filters = Filters::new();
        assert_eq!(filters.select("Active"), FilterKind::Active);
        assert_eq!(selected_count(&filters), 1);
        assert!(filters.entries()[1].selected);
    }

    #[test]
    fn select_ignores_case() {
        let mut filters = Filters::new();
        assert_eq!(filters.select("completed"), FilterKind::Completed);
    }

    #[test]
    fn unknown_or_empty_name_falls_back_to_all() {
        let mut filters = Filters::new();
        filters.select("Active");
        assert_eq!(filters.select("bogus"), FilterKind::All);
        filters.select("Completed");
        assert_eq!(filters.select(""), FilterKind::All);
        assert_eq!(selected_count(&filters), 1);
    }

    #[test]
    fn selected_defaults_to_all_when_nothing_marked() {
        let filters = Filters {
            entries: FilterKind::ALL.map(|kind| Filter { kind, selected: false }),
        };
        assert_eq!(filters.selected(), FilterKind::All);
    }

    #[test]
    fn kinds_match_by_done_flag() {
        let mut todo = Todo::new(1, "a");
        assert!(FilterKind::Active.matches(&todo));
        assert!(!FilterKind::Completed.matches(&todo));
        todo.done = true;
        assert!(FilterKind::Completed.matches(&todo));
        assert!(FilterKind::All.matches(&todo));
    }

    #[test]
    fn urls_follow_filter_order() {
        let urls: Vec<_> = Filters::new().entries().iter().map(|f| f.url()).collect();
        assert_eq!(urls, vec!["#/", "#/active", "#/completed"]);
    }
}
