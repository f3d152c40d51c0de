use anyhow::Context;
use clap::Parser;
use cv_analyzer::api::AnalyzerClient;
use cv_analyzer::config::{Config, ConfigOverrides};
use cv_analyzer::logging::init_tracing;
use cv_analyzer::ui;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "cv-analyzer", version)]
#[command(about = "Score a CV against a job description using the analysis service")]
struct Cli {
    /// Path to config file (default: ~/.config/cv-analyzer/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the analysis service
    #[arg(long)]
    base_url: Option<String>,

    /// Log filter, e.g. "debug" or "cv_analyzer=trace"
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?
    .with_overrides(ConfigOverrides::from_env(cli.base_url, cli.log_level))
    .context("invalid configuration")?;

    let log_path = init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(
        log = %log_path.display(),
        base_url = %config.server.base_url,
        "Starting cv-analyzer"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("cv-analyzer-net")
        .build()
        .context("failed to start async runtime")?;

    let client = AnalyzerClient::new(&config).context("failed to build HTTP client")?;
    let result = ui::runtime::run(&config, client, runtime.handle().clone());

    // Requests still in flight are abandoned, not awaited.
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("cv-analyzer exited");

    result.context("terminal UI failed")
}
