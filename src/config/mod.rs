mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, CounterConfig, DemoKind, LoggingConfig, StorageConfig, UiConfig};
