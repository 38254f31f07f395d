//! Pure-stateful component protocol.
//!
//! ```text
//!  owner ──Props{input, state, on_state_change, outputs}──→ pure component
//!    ↑                                                          │ Scope
//!    │                                                          ↓
//!    └──── on_state_change / output callbacks ◄── dispatch ◄── handler
//! ```
//!
//! - [`StateSpec`]: compile-time shape (state, inputs, output channels)
//! - [`Scope`]: per-render binding context passed explicitly to descendants
//! - [`Scope::bind`]: turns `(event, scope) -> Transition` into a host handler
//! - [`Stateful`]: owns the state when no external owner exists

mod component;
mod contract;
mod scope;
mod stateful;

pub use component::{render, PureComponent};
pub use contract::{
    Callback, Emitted, NoOutputs, OutputChannels, Props, StateSlot, StateSpec, Transition,
};
pub use scope::Scope;
pub use stateful::Stateful;
