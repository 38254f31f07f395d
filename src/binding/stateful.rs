//! Self-owned state for pure components.

use std::any::type_name;
use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::component::{render, PureComponent};
use crate::binding::contract::{Callback, Props, StateSlot};
use crate::host::{Element, Invalidator};

/// A mounted pure component that keeps its own state.
///
/// The cell starts [`StateSlot::Unset`] so the component applies its own
/// initial value, is replaced wholesale on every transition, and is dropped
/// together with this value.
pub struct Stateful<C: PureComponent> {
    cell: Rc<RefCell<StateSlot<C::State>>>,
    redraw: Invalidator,
}

impl<C: PureComponent> Stateful<C> {
    pub fn mount(redraw: Invalidator) -> Self {
        tracing::debug!(component = type_name::<C>(), "mounted self-owned component");
        Self {
            cell: Rc::new(RefCell::new(StateSlot::Unset)),
            redraw,
        }
    }

    /// Renders with `input` and no output listeners.
    pub fn render(&self, input: C::Input) -> Element {
        self.render_with(input, C::Outputs::default())
    }

    /// Renders with `input`, passing the caller's output callbacks through.
    pub fn render_with(&self, input: C::Input, outputs: C::Outputs) -> Element {
        let cell = Rc::clone(&self.cell);
        let redraw = self.redraw.clone();
        let on_state_change = Callback::new(move |next: C::State| {
            *cell.borrow_mut() = StateSlot::Held(next);
            redraw.invalidate();
        });

        render::<C>(Props {
            input,
            state: self.state(),
            on_state_change: Some(on_state_change),
            outputs,
        })
    }

    /// Snapshot of the owned cell.
    pub fn state(&self) -> StateSlot<C::State> {
        self.cell.borrow().clone()
    }
}

impl<C: PureComponent> Drop for Stateful<C> {
    fn drop(&mut self) {
        tracing::debug!(component = type_name::<C>(), "unmounted self-owned component");
    }
}
