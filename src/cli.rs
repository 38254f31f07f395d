//! Command-line flags. Every flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DemoKind};

#[derive(Debug, Parser)]
#[command(name = "oxymora", version, about = "Pure-stateful component demos in the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Demo shown at startup.
    #[arg(long, value_enum)]
    pub demo: Option<DemoKind>,

    /// Counter step per press.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub increment_by: Option<i64>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "oxymora=trace").
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(demo) = self.demo {
            config.ui.start_demo = demo;
        }
        if let Some(increment_by) = self.increment_by {
            config.counter.increment_by = increment_by;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
