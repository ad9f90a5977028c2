use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod init;
mod output;

use config::{Config, OutputFormat};
use init::init_config;
use muni::{MunicipalityIndex, init_dataset};
use output::{render_initials, render_municipalities};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "muni", version)]
#[command(
    about = "Look up Japanese municipalities by the initials of their romanized names",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset JSON to use instead of the embedded one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format (overrides muni.toml)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the initials of every prefecture
    Prefectures,
    /// List municipality initials under a prefecture initial
    Initials {
        /// Prefecture initial (only the first character is used, any case)
        prefecture: String,
    },
    /// Find municipalities by prefecture initial and municipality initial
    Find {
        /// Prefecture initial (only the first character is used, any case)
        prefecture: String,
        /// Municipality initial (only the first character is used, any case)
        municipality: String,
    },
    /// Initialize a new muni.toml configuration file
    Init {
        /// Overwrite existing muni.toml if present
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "muni=debug" } else { "muni=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut config = Config::load();

    // CLI flags override config file
    if let Some(data) = cli.data {
        config.data_file = Some(data);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_color {
        config.color = false;
    }
    if !config.color {
        colored::control::set_override(false);
    }

    let format = config.format;
    let result = match cli.command {
        Commands::Prefectures => with_index(&config, |index| {
            render_initials(&index.prefecture_initials(), format)
        }),
        Commands::Initials { prefecture } => with_index(&config, |index| {
            render_initials(&index.municipality_initials(&prefecture), format)
        }),
        Commands::Find {
            prefecture,
            municipality,
        } => with_index(&config, |index| {
            render_municipalities(
                &index.municipalities_by_initial(&prefecture, &municipality),
                format,
            )
        }),
        Commands::Init { force } => init_config(force),
    };

    if let Err(e) = result {
        eprintln!("\n{} {}", "❌".red(), e.red());
        std::process::exit(1);
    }
}

/// Load the configured dataset, fail fast if it is malformed, and print what `query` renders
fn with_index<F>(config: &Config, query: F) -> Result<(), String>
where
    F: FnOnce(&MunicipalityIndex) -> Result<String, String>,
{
    let rendered = match &config.data_file {
        Some(path) => {
            let index = MunicipalityIndex::from_path(path).map_err(|e| e.to_string())?;
            query(&index)?
        }
        None => query(init_dataset().map_err(|e| e.to_string())?)?,
    };

    println!("{}", rendered);
    Ok(())
}
