use ratatui::style::{Modifier, Style};

use crate::binding::{Scope, Transition};
use crate::components::todo::list::{TodoList, TodoListEmitted};
use crate::components::todo::model::{Todos, ViewMode};
use crate::host::{Button, Element, Press};
use crate::ui::theme::{ACCENT, MUTED};

pub(super) fn view(scope: &Scope<TodoList>, todos: &Todos, view_mode: ViewMode) -> Element {
    let remaining = todos.remaining();
    let noun = if remaining == 1 { "item" } else { "items" };

    let mut row = vec![Element::text(format!("{remaining} {noun} left"))];
    for mode in ViewMode::ALL {
        let style = if mode == view_mode {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        row.push(
            Button::new(mode.label())
                .key(format!("filter:{mode}"))
                .style(style)
                .on_press(scope.bind(move |_: &Press, scope: &Scope<TodoList>| {
                    change_view_mode(mode, scope)
                }))
                .into(),
        );
    }
    row.push(
        Button::new("Clear completed")
            .key("clear-completed")
            .style(Style::default().fg(MUTED))
            .on_press(scope.bind(|_: &Press, scope: &Scope<TodoList>| clear_completed(scope)))
            .into(),
    );

    Element::Row(row)
}

/// Switches the filter and tells the owner about it.
pub fn change_view_mode(view_mode: ViewMode, scope: &Scope<TodoList>) -> Transition<TodoList> {
    Transition::to(Todos {
        view_mode,
        ..scope.state().clone()
    })
    .emit(TodoListEmitted {
        on_view_mode_change: Some(view_mode),
    })
}

pub fn clear_completed(scope: &Scope<TodoList>) -> Transition<TodoList> {
    Transition::to(scope.state().clone().without_completed())
}
