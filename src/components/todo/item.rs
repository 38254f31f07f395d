use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};

use crate::binding::{Scope, Transition};
use crate::components::todo::list::TodoList;
use crate::components::todo::model::{Todo, TodoUpdate};
use crate::host::{Button, Checkbox, Element, Press, TextInput, Toggle};
use crate::ui::theme::{DANGER, MUTED};

pub(super) fn view(scope: &Scope<TodoList>, todo: &Todo) -> Element {
    if todo.rename_in_progress {
        let id = todo.id.clone();
        return Element::Row(vec![
            Element::text("  ✎"),
            TextInput::new(todo.description.clone())
                .key(format!("rename:{}", todo.id))
                .autofocus(true)
                .on_key(scope.bind(move |key: &KeyEvent, scope: &Scope<TodoList>| {
                    rename_key(&id, key, scope)
                }))
                .into(),
        ]);
    }

    let label_style = if todo.completed {
        Style::default()
            .fg(MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let toggle_id = todo.id.clone();
    let edit_id = todo.id.clone();
    let remove_id = todo.id.clone();
    Element::Row(vec![
        Checkbox::new(todo.description.clone(), todo.completed)
            .key(format!("toggle:{}", todo.id))
            .style(label_style)
            .on_toggle(scope.bind(move |event: &Toggle, scope: &Scope<TodoList>| {
                set_completed(&toggle_id, event.checked, scope)
            }))
            .into(),
        Button::new("edit")
            .key(format!("edit:{}", todo.id))
            .style(Style::default().fg(MUTED))
            .on_press(scope.bind(move |_: &Press, scope: &Scope<TodoList>| {
                start_rename(&edit_id, scope)
            }))
            .into(),
        Button::new("✕")
            .key(format!("remove:{}", todo.id))
            .style(Style::default().fg(DANGER))
            .on_press(scope.bind(move |_: &Press, scope: &Scope<TodoList>| {
                remove_item(&remove_id, scope)
            }))
            .into(),
    ])
}

fn update(id: &str, update: TodoUpdate, scope: &Scope<TodoList>) -> Transition<TodoList> {
    Transition::to(scope.state().clone().with_item_updated(id, &update))
}

pub fn set_completed(id: &str, completed: bool, scope: &Scope<TodoList>) -> Transition<TodoList> {
    update(
        id,
        TodoUpdate {
            completed: Some(completed),
            ..TodoUpdate::default()
        },
        scope,
    )
}

pub fn start_rename(id: &str, scope: &Scope<TodoList>) -> Transition<TodoList> {
    update(
        id,
        TodoUpdate {
            rename_in_progress: Some(true),
            ..TodoUpdate::default()
        },
        scope,
    )
}

pub fn remove_item(id: &str, scope: &Scope<TodoList>) -> Transition<TodoList> {
    Transition::to(scope.state().clone().with_item_removed(id))
}

/// Editing a description in place. Enter or Esc ends the rename.
pub fn rename_key(id: &str, key: &KeyEvent, scope: &Scope<TodoList>) -> Transition<TodoList> {
    let Some(todo) = scope.state().items.iter().find(|todo| todo.id == id) else {
        return Transition::none();
    };

    let change = match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut description = todo.description.clone();
            description.push(ch);
            TodoUpdate {
                description: Some(description),
                ..TodoUpdate::default()
            }
        }
        KeyCode::Backspace => {
            let mut description = todo.description.clone();
            description.pop();
            TodoUpdate {
                description: Some(description),
                ..TodoUpdate::default()
            }
        }
        KeyCode::Enter | KeyCode::Esc => TodoUpdate {
            rename_in_progress: Some(false),
            ..TodoUpdate::default()
        },
        _ => return Transition::none(),
    };

    update(id, change, scope)
}
