use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::binding::{PureComponent, Scope, StateSpec, Transition};
use crate::components::todo::model::{Todo, TodoUpdate, Todos, ViewMode};
use crate::components::todo::{footer, item};
use crate::host::{Checkbox, Element, TextInput, Toggle};
use crate::ui::theme::{ACCENT, MUTED};

pub struct TodoList;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListInput {
    /// Owner-controlled filter. Overrides the filter kept in the state.
    pub view_mode: Option<ViewMode>,
}

crate::output_channels! {
    pub struct TodoListOutputs => TodoListEmitted {
        on_view_mode_change: ViewMode,
    }
}

impl StateSpec for TodoList {
    type State = Todos;
    type Input = TodoListInput;
    type Outputs = TodoListOutputs;
}

impl PureComponent for TodoList {
    fn initial_state() -> Todos {
        Todos::default()
    }

    fn view(scope: &Scope<Self>) -> Element {
        let todos = scope.state();
        let view_mode = effective_view_mode(scope);

        let mut header = vec![Element::text(Line::from(Span::styled(
            "todos",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))];
        let mut new_todo = vec![];
        if !todos.items.is_empty() {
            new_todo.push(
                Checkbox::new("", todos.toggle_all_checked)
                    .key("toggle-all")
                    .on_toggle(scope.bind(toggle_all))
                    .into(),
            );
        }
        new_todo.push(
            TextInput::new(todos.new_todo.clone())
                .key("new-todo")
                .placeholder("What needs to be done?")
                .on_key(scope.bind(edit_new_todo))
                .into(),
        );
        header.push(Element::Row(new_todo));

        let mut body = vec![Element::Column(header)];
        if !todos.items.is_empty() {
            body.push(Element::Column(
                todos
                    .visible_items(view_mode)
                    .map(|todo| item::view(scope, todo))
                    .collect(),
            ));
            body.push(footer::view(scope, todos, view_mode));
        }
        body.push(Element::text(Span::styled(
            "Press Enter on \"edit\" to rename a todo",
            Style::default().fg(MUTED),
        )));

        Element::Column(body)
    }
}

/// The filter in effect: the owner's override if given, else the state's own.
pub fn effective_view_mode(scope: &Scope<TodoList>) -> ViewMode {
    scope
        .input()
        .view_mode
        .unwrap_or(scope.state().view_mode)
}

/// Typing into the new-todo field. Enter appends a trimmed, non-empty item.
pub fn edit_new_todo(key: &KeyEvent, scope: &Scope<TodoList>) -> Transition<TodoList> {
    let todos = scope.state().clone();
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut new_todo = todos.new_todo.clone();
            new_todo.push(ch);
            Transition::to(Todos { new_todo, ..todos })
        }
        KeyCode::Backspace => {
            let mut new_todo = todos.new_todo.clone();
            new_todo.pop();
            Transition::to(Todos { new_todo, ..todos })
        }
        KeyCode::Enter => {
            let description = todos.new_todo.trim().to_string();
            if description.is_empty() {
                return Transition::none();
            }
            let next = Todos {
                new_todo: String::new(),
                ..todos
            };
            Transition::to(next.with_item_added(Todo::new(description)))
        }
        _ => Transition::none(),
    }
}

/// Marks every item with the checkbox's new value.
pub fn toggle_all(event: &Toggle, scope: &Scope<TodoList>) -> Transition<TodoList> {
    let next = Todos {
        toggle_all_checked: event.checked,
        ..scope.state().clone()
    };
    Transition::to(next.with_all_items_updated(&TodoUpdate {
        completed: Some(event.checked),
        ..TodoUpdate::default()
    }))
}
