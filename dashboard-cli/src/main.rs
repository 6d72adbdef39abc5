//! Dashboard extension inspector
//!
//! Loads a `dashboard.toml`, composes the plugins it lists exactly as the
//! admin dashboard does at startup, and reports the result:
//!
//!   dashboard-cli --config dashboard.toml inspect
//!   dashboard-cli --config dashboard.toml fields --model order --base id
//!   dashboard-cli models

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_extensions::{CustomFieldModel, DashboardApp, DashboardConfig};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "dashboard-cli")]
#[command(about = "Compose and inspect admin dashboard plugins")]
struct Args {
    /// Path to the dashboard config file
    #[arg(short, long, default_value = "dashboard.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the merged extension tables as JSON
    Inspect,

    /// Print the field selection for a model, expanded with linked entities
    Fields {
        /// Model to resolve, e.g. "order" or "product-tag"
        #[arg(short, long)]
        model: CustomFieldModel,

        /// Base comma-separated field selection
        #[arg(short, long, default_value = "")]
        base: String,
    },

    /// List the custom field models plugins can key on
    Models,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Models => {
            for model in CustomFieldModel::ALL {
                println!("{model}");
            }
        }
        Command::Inspect => {
            let app = bootstrap(&args.config)?;
            let report = serde_json::json!({
                "plugins": app.plugins(),
                "extensions": app.extensions(),
            });
            let rendered = serde_json::to_string_pretty(&report)
                .context("failed to render composed extensions")?;
            println!("{rendered}");
        }
        Command::Fields { model, base } => {
            let app = bootstrap(&args.config)?;
            println!("{}", app.link_fields(model, &base));
        }
    }

    Ok(())
}

fn bootstrap(config_path: &Path) -> Result<DashboardApp> {
    debug!("Loading dashboard config from {:?}", config_path);
    let config = DashboardConfig::load_from(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    config
        .bootstrap()
        .context("failed to compose dashboard plugins")
}
