//! Inspect and check a connkit wallet connector configuration.
//!
//! # Usage
//!
//! ```bash
//! # List enabled providers from connkit.toml
//! cargo run -p connkit-cli
//!
//! # Custom config, JSON output, and an RPC check on chain 1
//! connkit --config /path/to/connkit.toml --json --probe --chain 1
//!
//! # Configure logging level
//! RUST_LOG=debug connkit
//! ```
//!
//! # Environment Variables
//!
//! - `CONNKIT_CONFIG` — Path to TOML configuration file (default: `connkit.toml`)
//! - `RUST_LOG` — Log level filter (default: `info`)

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use connkit::ConnectionRegistry;
use connkit::detect::{LogNavigator, StaticDetector};
use connkit_cli::activation::activate_network;
use connkit_cli::config::CliConfig;
use connkit_cli::factory::HeadlessFactory;
use connkit_cli::report::Report;
use tracing_subscriber::EnvFilter;

/// Inspect and check a wallet connector configuration.
#[derive(Debug, Parser)]
#[command(name = "connkit", version, about)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, env = "CONNKIT_CONFIG", default_value = "connkit.toml")]
    config: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Activate the network connector against its RPC endpoint.
    #[arg(long)]
    probe: bool,

    /// Chain to activate instead of the configured default.
    #[arg(long, requires = "probe")]
    chain: Option<u64>,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        tracing::error!("connkit failed: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::load_from(&args.config)?;
    tracing::info!(
        path = %args.config.display(),
        app = %config.connection.app_name,
        chains = config.connection.rpc_urls.len(),
        allowed = ?config.connection.allowed_providers,
        "Loaded configuration"
    );

    let registry = ConnectionRegistry::new(
        config.connection,
        Arc::new(HeadlessFactory),
        Arc::new(StaticDetector(config.injected)),
        Arc::new(LogNavigator),
    );

    let providers = registry.all_providers();
    if providers.is_empty() {
        tracing::warn!("No providers enabled — check allowed_providers");
    }

    if args.probe {
        match activate_network(&registry, &providers, args.chain).await {
            Ok(Some(chain_id)) => tracing::info!(chain_id, "Network connector active"),
            Ok(None) => {}
            Err(e) => tracing::warn!("Network activation failed: {e}"),
        }
    }

    let report = Report::new(&registry, &providers);
    let out = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_string()
    };
    writeln!(std::io::stdout().lock(), "{out}")?;
    Ok(())
}
