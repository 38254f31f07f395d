use anyhow::Context;
use clap::Parser;

use oxymora::cli::Cli;
use oxymora::config::Config;
use oxymora::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    let log_path = init_tracing(&config.logging).context("initializing logging")?;
    tracing::info!(
        config = %config_path.display(),
        log = %log_path.display(),
        demo = config.ui.start_demo.title(),
        "oxymora starting"
    );

    oxymora::ui::run(config).context("terminal UI failed")?;
    tracing::info!("oxymora exited");
    Ok(())
}
