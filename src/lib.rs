//! Pure-stateful components: components that never own their state, plus an
//! adapter that lets them own it anyway, hosted in a small terminal UI.

pub mod binding;
pub mod cli;
pub mod components;
pub mod config;
pub mod host;
pub mod logging;
pub mod store;
pub mod ui;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
