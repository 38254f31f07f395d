//! Pure components built on the binding protocol.

pub mod counter;
pub mod todo;
