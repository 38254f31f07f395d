//! Counter: a single button showing a number that grows on every press.

use ratatui::style::Style;

use crate::binding::{PureComponent, Scope, StateSpec, Transition};
use crate::host::{Button, Element, Press};
use crate::ui::theme::ACCENT;

pub struct Counter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterInput {
    /// Step added per press; 1 when not given.
    pub increment_by: Option<i64>,
}

crate::output_channels! {
    pub struct CounterOutputs => CounterEmitted {
        on_counter_change: i64,
    }
}

impl StateSpec for Counter {
    type State = i64;
    type Input = CounterInput;
    type Outputs = CounterOutputs;
}

impl PureComponent for Counter {
    fn initial_state() -> i64 {
        1
    }

    fn view(scope: &Scope<Self>) -> Element {
        Button::new(format!("+ {}", scope.state()))
            .key("counter")
            .style(Style::default().fg(ACCENT))
            .on_press(scope.bind(increment))
            .into()
    }
}

/// Adds the configured step and reports the new value. Saturates at the `i64` bounds.
pub fn increment(_event: &Press, scope: &Scope<Counter>) -> Transition<Counter> {
    let next = scope
        .state()
        .saturating_add(scope.input().increment_by.unwrap_or(1));
    Transition::to(next).emit(CounterEmitted {
        on_counter_change: Some(next),
    })
}
