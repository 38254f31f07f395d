//! TodoMVC as a pure-stateful component.
//!
//! The list, its rows and its footer are separate view functions that all
//! receive the list's [`Scope`](crate::binding::Scope); none of them declares
//! props for the transitions it triggers.

mod footer;
mod item;
mod list;
mod model;

pub use footer::{change_view_mode, clear_completed};
pub use item::{remove_item, rename_key, set_completed, start_rename};
pub use list::{
    edit_new_todo, effective_view_mode, toggle_all, TodoList, TodoListEmitted, TodoListInput,
    TodoListOutputs,
};
pub use model::{ParseViewModeError, Todo, TodoUpdate, Todos, ViewMode};
