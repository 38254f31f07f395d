//! Terminal front end: hosts the demo owners and paints their view trees.

mod app;
mod demos;
mod events;
mod footer;
mod header;
mod input;
mod layout;
mod render;
mod runtime;
mod terminal_guard;
pub mod theme;

pub use app::App;
pub use demos::{view_mode_from_hash, view_mode_from_route, Demo};
pub use input::{classify_key, InputAction};
pub use runtime::run;
