//! GENEX batch loader - ingest FASTA and expression TSV files
//!
//! Per-row `Gene not found` diagnostics go to stdout and do not affect
//! the exit code; unreadable files and malformed numeric fields abort
//! the load with exit code 1.

use anyhow::Context;
use clap::Parser;
use genex_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use genex_server::{config::Config, db, ingest};
use std::path::PathBuf;
use std::process;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "genex-load",
    about = "Load gene sequences and expression data into the GENEX store",
    version
)]
struct Cli {
    /// Path to the FASTA sequence file
    #[arg(long, value_name = "PATH")]
    fasta: PathBuf,

    /// Path to the tab-separated expression file
    #[arg(long, value_name = "PATH")]
    tsv: PathBuf,

    /// Database URL (overrides DATABASE_URL and the default)
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    /// Verbose logging to the console
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("genex-load".to_string())
            .build()
    } else {
        // Normal mode: keep the console to warnings so the per-row
        // diagnostics stay readable
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("genex-load".to_string())
            .build()
    };

    // Environment variables take precedence
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // The loader should still work without logging
    let _ = init_logging(&log_config);

    if let Err(e) = run(&cli).await {
        error!(error = %e, "Load failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(ref url) = cli.database_url {
        config.database.url = url.clone();
    }

    let pool = db::connect_pool(&config.database)
        .await
        .context("Failed to open database")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let store = db::GeneStore::new(pool);
    let summary = ingest::load_files(&store, &cli.fasta, &cli.tsv)
        .await
        .with_context(|| {
            format!(
                "Failed to load {} / {}",
                cli.fasta.display(),
                cli.tsv.display()
            )
        })?;

    tracing::info!(
        sequences_inserted = summary.sequences_inserted,
        sequences_existing = summary.sequences_existing,
        expressions_inserted = summary.expressions_inserted,
        rows_skipped = summary.rows_skipped,
        "Load finished"
    );

    println!("Data import complete.");

    Ok(())
}
