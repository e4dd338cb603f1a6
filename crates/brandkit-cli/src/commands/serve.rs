//! Web server command.

use anyhow::Result;
use brandkit_core::Engine;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "BRANDKIT_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BRANDKIT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also append logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "brandkit-serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, engine: Arc<Engine>) -> Result<()> {
    println!();
    println!("  {} {}", "Brandkit".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/api/v1/generate",
        "Generate".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/api/v1/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    brandkit_web::run_server(engine, &args.host, args.port).await?;

    Ok(())
}
