//! Minimal retained view layer the binding protocol renders into.
//!
//! Components return an [`Element`] tree every render. The tree carries the
//! handlers produced by [`crate::binding::Scope::bind`]; the terminal runtime
//! walks it to route keys to the focused element and to paint ratatui lines.

mod element;
mod handler;
mod invalidate;

pub use element::{Button, Checkbox, Element, TextInput};
pub use handler::{Handler, Press, Toggle};
pub use invalidate::Invalidator;
