//! PlatForge wiki publisher - embeds architecture diagrams in Confluence.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error (HTTP or I/O failure)
//! - 2: Missing credentials or diagram files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod client;
mod config;
mod page;

use client::ConfluenceClient;
use config::Credentials;

pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const MISSING_INPUT: u8 = 2;
}

#[derive(Debug, Parser)]
#[command(name = "platforge-wiki", version, about = "Publish architecture diagrams to Confluence")]
struct Args {
    /// Env file carrying Confluence credentials.
    #[arg(long, default_value = "confluence.env")]
    config: PathBuf,

    /// Target Confluence page id.
    #[arg(long, default_value = "12156958")]
    page_id: String,

    /// System architecture diagram.
    #[arg(long, default_value = "docs/architecture/generated/system-architecture.png")]
    system_png: PathBuf,

    /// Generation request sequence diagram.
    #[arg(long, default_value = "docs/architecture/generated/request-sequence.png")]
    sequence_png: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let args = Args::parse();

    let file_env = match config::load_env_file(&args.config) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(ExitCodes::GENERAL_ERROR);
        }
    };
    let Some(credentials) = Credentials::resolve(&file_env) else {
        eprintln!("Missing Confluence credentials in env/config.");
        return ExitCode::from(ExitCodes::MISSING_INPUT);
    };
    if !args.system_png.exists() || !args.sequence_png.exists() {
        eprintln!("Diagram PNG file(s) missing.");
        return ExitCode::from(ExitCodes::MISSING_INPUT);
    }

    match run(&args, credentials).await {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}

async fn run(args: &Args, credentials: Credentials) -> anyhow::Result<()> {
    let client = ConfluenceClient::new(credentials);

    client.upload_attachment(&args.page_id, &args.system_png).await?;
    client.upload_attachment(&args.page_id, &args.sequence_png).await?;

    let current = client.fetch_page(&args.page_id).await?;
    let block = page::build_diagram_block(
        file_name(&args.system_png)?,
        file_name(&args.sequence_png)?,
        Utc::now(),
    );
    let storage = page::upsert_diagram_block(&current.body.storage.value, &block);
    client.update_page(&args.page_id, &current, &storage).await?;

    info!(
        "Updated page {} with embedded architecture diagrams",
        args.page_id
    );
    Ok(())
}

fn file_name(path: &Path) -> anyhow::Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid diagram path {}", path.display()))
}
