//! TodoMVC data model and its pure update helpers.
//!
//! Every helper consumes a [`Todos`] and returns the next one; nothing is
//! mutated behind an owner's back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Active,
    Completed,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::All, ViewMode::Active, ViewMode::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::All => "all",
            ViewMode::Active => "active",
            ViewMode::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::All => "All",
            ViewMode::Active => "Active",
            ViewMode::Completed => "Completed",
        }
    }

    pub fn shows(self, todo: &Todo) -> bool {
        match self {
            ViewMode::All => true,
            ViewMode::Active => !todo.completed,
            ViewMode::Completed => todo.completed,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}' (expected all, active or completed)")]
pub struct ParseViewModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseViewModeError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub rename_in_progress: bool,
}

impl Todo {
    /// A fresh, active item with a random id.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: description.into(),
            completed: false,
            rename_in_progress: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Todos {
    pub view_mode: ViewMode,
    pub toggle_all_checked: bool,
    pub new_todo: String,
    pub items: Vec<Todo>,
}

/// Fields to overwrite on one or more items; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub rename_in_progress: Option<bool>,
}

impl TodoUpdate {
    fn apply(&self, mut todo: Todo) -> Todo {
        if let Some(description) = &self.description {
            todo.description = description.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(rename_in_progress) = self.rename_in_progress {
            todo.rename_in_progress = rename_in_progress;
        }
        todo
    }
}

impl Todos {
    pub fn visible_items(&self, view_mode: ViewMode) -> impl Iterator<Item = &Todo> {
        self.items.iter().filter(move |todo| view_mode.shows(todo))
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|todo| !todo.completed).count()
    }

    pub fn with_item_added(mut self, todo: Todo) -> Self {
        self.items.push(todo);
        self
    }

    pub fn with_item_updated(mut self, id: &str, update: &TodoUpdate) -> Self {
        self.items = self
            .items
            .into_iter()
            .map(|todo| {
                if todo.id == id {
                    update.apply(todo)
                } else {
                    todo
                }
            })
            .collect();
        self
    }

    pub fn with_all_items_updated(mut self, update: &TodoUpdate) -> Self {
        self.items = self
            .items
            .into_iter()
            .map(|todo| update.apply(todo))
            .collect();
        self
    }

    pub fn with_item_removed(mut self, id: &str) -> Self {
        self.items.retain(|todo| todo.id != id);
        self
    }

    pub fn without_completed(mut self) -> Self {
        self.items.retain(|todo| !todo.completed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            description: format!("item {id}"),
            completed,
            rename_in_progress: false,
        }
    }

    fn todos() -> Todos {
        Todos {
            items: vec![todo("a", false), todo("b", true), todo("c", false)],
            ..Todos::default()
        }
    }

    #[test]
    fn visible_items_follow_view_mode() {
        let todos = todos();
        let ids = |mode| {
            todos
                .visible_items(mode)
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(ViewMode::All), vec!["a", "b", "c"]);
        assert_eq!(ids(ViewMode::Active), vec!["a", "c"]);
        assert_eq!(ids(ViewMode::Completed), vec!["b"]);
    }

    #[test]
    fn update_touches_only_the_matching_item() {
        let update = TodoUpdate {
            completed: Some(true),
            ..TodoUpdate::default()
        };
        let next = todos().with_item_updated("a", &update);
        assert!(next.items[0].completed);
        assert_eq!(next.items[2], todo("c", false));
        assert_eq!(next.remaining(), 1);
    }

    #[test]
    fn update_all_and_clear_completed() {
        let update = TodoUpdate {
            completed: Some(true),
            ..TodoUpdate::default()
        };
        let next = todos().with_all_items_updated(&update);
        assert_eq!(next.remaining(), 0);
        assert!(next.without_completed().items.is_empty());
    }

    #[test]
    fn removal_keeps_order() {
        let next = todos().with_item_removed("b");
        let ids: Vec<_> = next.items.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!("Active".parse::<ViewMode>(), Ok(ViewMode::Active));
        assert_eq!("completed".parse::<ViewMode>(), Ok(ViewMode::Completed));
        assert!("done".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Completed.to_string(), "completed");
    }

    #[test]
    fn new_items_get_distinct_ids() {
        assert_ne!(Todo::new("x").id, Todo::new("x").id);
    }
}
