//! Shared test utilities: call recorders, a minimal explicit owner, key helpers.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use oxymora::binding::{render, Callback, PureComponent, Props};
use oxymora::components::todo::{Todo, Todos};
use oxymora::host::Element;

/// Records every value it is called with, in order.
pub struct Recorder<T> {
    calls: Rc<RefCell<Vec<T>>>,
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: Rc::clone(&self.calls),
        }
    }
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A plain closure, e.g. for `Props::on_state_change`.
    pub fn sink(&self) -> impl Fn(T) + 'static {
        let calls = Rc::clone(&self.calls);
        move |value| calls.borrow_mut().push(value)
    }

    /// An output channel callback.
    pub fn callback(&self) -> Callback<T> {
        Callback::new(self.sink())
    }

    pub fn calls(&self) -> Vec<T> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

/// An owner that keeps `C`'s state in a cell and feeds it back on every render.
pub struct Owner<C: PureComponent> {
    state: Rc<RefCell<C::State>>,
}

impl<C: PureComponent> Owner<C> {
    pub fn new(initial: C::State) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
        }
    }

    pub fn render(&self, input: C::Input, outputs: C::Outputs) -> Element {
        let state = Rc::clone(&self.state);
        render::<C>(
            Props::new(input)
                .state(self.state())
                .on_state_change(move |next| *state.borrow_mut() = next)
                .outputs(outputs),
        )
    }

    pub fn state(&self) -> C::State {
        self.state.borrow().clone()
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn todo(id: &str, description: &str, completed: bool) -> Todo {
    Todo {
        id: id.to_string(),
        description: description.to_string(),
        completed,
        rename_in_progress: false,
    }
}

pub fn todos(items: Vec<Todo>) -> Todos {
    Todos {
        items,
        ..Todos::default()
    }
}

pub fn ids(todos: &Todos) -> Vec<String> {
    todos.items.iter().map(|todo| todo.id.clone()).collect()
}

/// The tree painted without focus, one string per line.
pub fn painted(tree: &Element) -> Vec<String> {
    tree.lines(None, Default::default())
        .iter()
        .map(|line| line.to_string())
        .collect()
}
