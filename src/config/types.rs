use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub counter: CounterConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Which demo is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Self-owned counter with an output listener.
    #[default]
    Counter,
    /// Self-owned todo list, no props at all.
    Direct,
    /// Self-owned todo list whose filter follows an owner-held `#hash`.
    Hashbang,
    /// Externally owned, persisted todo list with a `/full/<mode>` route.
    FullRouting,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Counter,
        DemoKind::Direct,
        DemoKind::Hashbang,
        DemoKind::FullRouting,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Counter => "Counter",
            DemoKind::Direct => "Direct",
            DemoKind::Hashbang => "Hashbang",
            DemoKind::FullRouting => "Full Routing",
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    pub tick_rate_ms: u64,
    /// Demo shown at startup (default: counter).
    pub start_demo: DemoKind,
}

/// Counter demo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Step per press (default: 2). Must not be zero.
    pub increment_by: i64,
}

/// Where the full-routing demo keeps its todo list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file; `<data_dir>/oxymora/todos.json` when unset.
    pub todo_file: Option<PathBuf>,
}

/// Log output settings. The TUI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "info").
    pub level: String,
    /// Log file; `<cache_dir>/oxymora/oxymora.log` when unset.
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            start_demo: DemoKind::Counter,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { increment_by: 2 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
