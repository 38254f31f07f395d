//! Conventional event handlers invoked by the host on user input.

use std::fmt;
use std::rc::Rc;

/// A button activation (Enter or Space while the button is focused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Press;

/// A checkbox flip. `checked` is the value the checkbox moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub checked: bool,
}

/// Shared, cloneable event handler.
///
/// Handlers are rebuilt on every render, so cloning one only bumps a
/// reference count.
pub struct Handler<E>(Rc<dyn Fn(&E)>);

impl<E> Handler<E> {
    pub fn new(handler: impl Fn(&E) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &E) {
        (self.0)(event)
    }
}

impl<E> Clone for Handler<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> fmt::Debug for Handler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}
