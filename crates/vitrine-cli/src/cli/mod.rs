//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use vitrine_core::{config, flow, logging};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version = "0.1")]
#[command(about = "Storefront onboarding demo (sign-up → profile setup → store)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Entry route (e.g. /signup, /profile-setup, /store). Unknown routes
    /// land on the not-found screen; the root redirects to sign-up.
    #[arg(default_value = "/", value_name = "ROUTE")]
    route: String,

    /// Override the simulated latency from config (ms)
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the flow routes in order
    Routes,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(latency_ms) = cli.latency_ms {
        config.latency_ms = latency_ms;
    }

    let Some(command) = cli.command else {
        // default to the onboarding TUI
        let _log_guard = logging::init(config.log_filter.as_deref()).context("init logging")?;
        tracing::info!(route = %cli.route, latency_ms = config.latency_ms, "starting onboarding");
        let route = flow::resolve(&cli.route);
        return crate::modes::run_onboarding(&config, route).await;
    };

    match command {
        Commands::Routes => commands::routes::list(),
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
