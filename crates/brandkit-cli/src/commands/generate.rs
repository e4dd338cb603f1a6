//! Design kit generation command.

use anyhow::{Context, Result};
use brandkit_core::{BrandInput, BrandkitError, Engine};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::output;

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Read the brand from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["name", "mission", "values", "audience", "sector"])]
    pub input: Option<PathBuf>,

    /// Brand name
    #[arg(long)]
    pub name: Option<String>,

    /// Brand mission
    #[arg(long)]
    pub mission: Option<String>,

    /// Brand values, comma separated
    #[arg(long)]
    pub values: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Business sector
    #[arg(long)]
    pub sector: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write tokens.css, tokens.json, figma-tokens.json and design-system.md here
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl GenerateArgs {
    fn brand_input(&self) -> Result<BrandInput> {
        if let Some(path) = &self.input {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            return serde_json::from_str(&raw)
                .with_context(|| format!("Invalid brand JSON in {}", path.display()));
        }

        Ok(BrandInput::new(
            self.name.clone().unwrap_or_default(),
            self.mission.clone().unwrap_or_default(),
            self.values.clone().unwrap_or_default(),
            self.audience.clone().unwrap_or_default(),
            self.sector.clone().unwrap_or_default(),
        ))
    }
}

pub fn execute(args: GenerateArgs, engine: &Engine) -> Result<()> {
    let input = args.brand_input()?;

    let kit = match engine.generate(&input) {
        Ok(kit) => kit,
        Err(BrandkitError::Validation { fields }) => {
            anyhow::bail!(
                "Missing brand fields: {}. Pass them as --{} or use --input <file.json>.",
                fields.join(", "),
                fields.join(", --")
            );
        }
        Err(e) => return Err(e.into()),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&kit)?),
        OutputFormat::Text => output::print_kit(&input, &kit),
    }

    if let Some(dir) = &args.out {
        tracing::debug!(out = %dir.display(), "Writing kit artifacts");
        let written = brandkit_codegen::write_kit(&kit, &input, dir)?;
        for path in written {
            eprintln!("{} Generated: {}", "✓".green().bold(), path);
        }
    }

    Ok(())
}
