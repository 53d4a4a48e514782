//! Wallet Credit Score - rule-based credit scoring for lending-protocol wallets

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

// Use the library crate
use wallet_credit_score::cli::commands;
use wallet_credit_score::config::Config;

/// Wallet Credit Score - score lending-protocol wallets from their transaction history
#[derive(Parser)]
#[command(name = "credit-score")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "credit.toml")]
    config: String,

    /// Path to input JSON file containing transactions
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score all wallets and write the score table
    Score {
        /// Path to output CSV file for scores
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to output CSV file for wallet features
        #[arg(long)]
        features: Option<PathBuf>,

        /// Skip writing the feature table
        #[arg(long)]
        no_features: bool,
    },

    /// Explain which rules produced a wallet's score
    Explain {
        /// Wallet address
        wallet: String,
    },

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.logging.json);

    if let Some(input) = cli.input {
        config.input.path = input;
    }

    // Execute command
    let result = match cli.command {
        Commands::Score {
            output,
            features,
            no_features,
        } => {
            if let Some(output) = output {
                config.output.scores_path = output;
            }
            if let Some(features) = features {
                config.output.features_path = features;
            }
            if no_features {
                config.output.write_features = false;
            }
            config.validate().and_then(|_| commands::score(&config))
        }
        Commands::Explain { wallet } => commands::explain(&config, &wallet),
        Commands::Config => commands::show_config(&config),
    };

    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing, honouring RUST_LOG on top of the crate default
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wallet_credit_score=info,credit_score=info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    }
}
