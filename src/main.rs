//! DEX Method Counts CLI
//!
//! Reports how many referenced methods fall under each Java package of an
//! Android application.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use dex_method_counts::commands::{
    display_prefixes, display_version, execute_count, validate_args, CountArgs,
};

/// DEX per-package method counts
#[derive(Parser, Debug)]
#[command(name = "dex-method-counts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Count methods per package from method-reference listings
    Count {
        /// Listings, one per dex file (`-` reads stdin)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Write the text report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the tree as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// TOML config file
        #[arg(short, long, env = "DEX_METHOD_COUNTS_CONFIG")]
        config: Option<PathBuf>,

        /// Additional well-known package prefix (repeatable)
        #[arg(long = "prefix")]
        prefixes: Vec<String>,

        /// Do not use the built-in prefix set
        #[arg(long)]
        no_default_prefixes: bool,
    },

    /// List the built-in well-known package prefixes
    Prefixes,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; reports go to stdout, logs to stderr
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Count {
            inputs,
            output,
            json,
            config,
            prefixes,
            no_default_prefixes,
        } => {
            let args = CountArgs {
                inputs,
                output,
                output_json: json,
                config,
                extra_prefixes: prefixes,
                use_default_prefixes: !no_default_prefixes,
            };

            // Validate args first
            validate_args(&args)?;

            execute_count(args)?;
        }

        Commands::Prefixes => {
            display_prefixes();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
