mod commands;
mod output;

use std::path::{Path, PathBuf};

use anyhow::Result;
use bam_lib::{ApiKeys, BamClient, KeyStore};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Overrides the API base URL, e.g. to point at a local mock server.
const BASE_URL_ENV_VAR: &str = "BAM_BASE_URL";

#[derive(Parser)]
#[command(name = "bam")]
#[command(about = "Query exchange rates, treasury curves and auction results from Bank Al-Maghrib")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to the subscription key file (defaults to $BAM_CONFIG or ./bam.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Foreign banknote exchange rates of the day
    Banknotes(commands::rates::RatesArgs),
    /// Bank transfer exchange rates of the day
    Transfers(commands::rates::RatesArgs),
    /// Treasury bill reference curve
    Curve(commands::curve::CurveArgs),
    /// Monetary policy operation results
    PolicyOps(commands::auctions::PolicyOpsArgs),
    /// Treasury bill issuance results
    Issuances(commands::auctions::SettlementArgs),
    /// Treasury bill exchange operation results
    Exchanges(commands::auctions::SettlementArgs),
    /// Treasury bill buyback operation results
    Buybacks(commands::auctions::SettlementArgs),
    /// List instrument names and acronyms accepted by policy-ops
    Instruments,
    /// List API endpoints and the service key each one uses
    Endpoints,
    /// Manage subscription keys
    #[command(subcommand)]
    Keys(commands::keys::KeysCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bam=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);
    let config_path = cli.config.clone().unwrap_or_else(KeyStore::default_path);

    match &cli.command {
        Commands::Keys(cmd) => {
            let mut store = KeyStore::open(&config_path)?;
            commands::keys::run(cmd, &mut store, &format)?
        }
        Commands::Instruments => commands::reference::run_instruments(&format)?,
        Commands::Endpoints => {
            commands::reference::run_endpoints(&build_client(ApiKeys::default())?, &format)?
        }
        Commands::Banknotes(args) => {
            commands::rates::run_banknotes(args, &connect(&config_path)?, &format).await?
        }
        Commands::Transfers(args) => {
            commands::rates::run_transfers(args, &connect(&config_path)?, &format).await?
        }
        Commands::Curve(args) => commands::curve::run(args, &connect(&config_path)?, &format).await?,
        Commands::PolicyOps(args) => {
            commands::auctions::run_policy_ops(args, &connect(&config_path)?, &format).await?
        }
        Commands::Issuances(args) => {
            commands::auctions::run_issuances(args, &connect(&config_path)?, &format).await?
        }
        Commands::Exchanges(args) => {
            commands::auctions::run_exchanges(args, &connect(&config_path)?, &format).await?
        }
        Commands::Buybacks(args) => {
            commands::auctions::run_buybacks(args, &connect(&config_path)?, &format).await?
        }
    }

    Ok(())
}

/// Loads the key file and builds a client with its keys.
fn connect(config_path: &Path) -> Result<BamClient> {
    let store = KeyStore::open(config_path)?;
    build_client(store.keys().clone())
}

fn build_client(keys: ApiKeys) -> Result<BamClient> {
    let client = match std::env::var(BASE_URL_ENV_VAR) {
        Ok(base_url) if !base_url.is_empty() => BamClient::with_base_url(&base_url, keys)?,
        _ => BamClient::new(keys)?,
    };
    Ok(client)
}
