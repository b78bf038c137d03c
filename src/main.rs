use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ghpulse::analysis::{self, Outcome};
use ghpulse::app;
use ghpulse::github::{GithubClient, RepoId};
use ghpulse::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "ghpulse", version, about = "Weekly issue metrics for a GitHub repository")]
struct Cli {
    /// Repository to analyze on startup (owner/name)
    repo: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the analysis as JSON instead of starting the TUI
    #[arg(long, requires = "repo")]
    json: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = setup_logging(&config, cli.debug)?;

    info!("ghpulse starting");

    let client = GithubClient::new(&config.github.api_url, config.github.timeout())?;

    if cli.json {
        let repo = cli.repo.as_deref().unwrap_or_default();
        return print_json(&config, &client, repo).await;
    }

    app::event_loop::run(config, client, cli.repo).await
}

async fn print_json(config: &AppConfig, client: &GithubClient, repo: &str) -> Result<()> {
    let repo = RepoId::parse(repo)?;
    let today = Utc::now().date_naive();

    match analysis::run_analysis(client, &repo, &config.analysis, today, |_, _| {}).await? {
        Outcome::Ready(analysis) => {
            let json = serde_json::to_string_pretty(&analysis)
                .context("Failed to serialize analysis")?;
            println!("{json}");
            Ok(())
        }
        Outcome::Empty(repo) => {
            eprintln!("No issues found for {}", repo);
            Ok(())
        }
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "ghpulse.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter("ghpulse=debug")
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
