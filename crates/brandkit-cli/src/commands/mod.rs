//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use brandkit_core::{Engine, EngineConfig};

pub mod catalog;
pub mod generate;
pub mod serve;

/// Brandkit - turn a brand description into a design system
#[derive(Parser)]
#[command(name = "brandkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "BRANDKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Generate a design kit for one brand
    Generate(generate::GenerateArgs),

    /// List sector archetypes and fonts
    Catalog,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let engine = Arc::new(build_engine(self.config.as_deref())?);

        match self.command {
            Commands::Serve(args) => serve::execute(args, engine).await,
            Commands::Generate(args) => generate::execute(args, &engine),
            Commands::Catalog => catalog::execute(&engine),
        }
    }
}

/// Load the engine config (defaults when no file is given) and build the engine once.
fn build_engine(config_path: Option<&std::path::Path>) -> Result<Engine> {
    let config = match config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Engine::new(config).context("Invalid engine configuration")
}
