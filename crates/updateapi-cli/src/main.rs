//! updateapi - keeps the admin and mobile clients in lockstep with the
//! server's realtime message contract.
//!
//! Commands:
//! - `updateapi generate` - scan declarations and rewrite every binding artifact
//! - `updateapi check` - scan and report diagnostics without writing anything

use clap::{Parser, Subcommand};
use updateapi_cli::{config::Config, pipeline};

#[derive(Parser)]
#[command(name = "updateapi")]
#[command(author, version, about = "Schema-driven realtime API binding generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every generated client binding artifact
    Generate {
        /// Path to updateapi.toml (default: ./updateapi.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Scan declarations and report diagnostics, writing nothing
    Check {
        /// Path to updateapi.toml (default: ./updateapi.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { manifest } => {
            let config = Config::load(manifest.as_deref())?;
            pipeline::generate(&config)?;
        }
        Commands::Check { manifest, json } => {
            let config = Config::load(manifest.as_deref())?;
            pipeline::check(&config, json)?;
        }
    }

    Ok(())
}
