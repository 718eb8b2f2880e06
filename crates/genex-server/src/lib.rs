//! GENEX Server Library
//!
//! HTTP server and batch loader for a gene sequence + expression store.
//!
//! # Overview
//!
//! - **Read API**: FASTA export, heatmap matrix, and TSV export, each
//!   filtered by a comma-separated gene-name list (at most 10 entries)
//! - **Loader**: the `genex-load` binary ingests a FASTA file and a
//!   tab-separated expression file into the store
//! - **Database**: SQLite via SQLx, schema managed by migrations
//! - **Configuration**: environment-based, see [`config::Config`]
//!
//! # Architecture
//!
//! Features are organized as vertical slices under [`features`], each
//! with its own query handlers and routes. All persistence goes through
//! the [`db::GeneStore`] repository; handlers never issue ad-hoc SQL.
//! Requests are stateless: no state is retained between requests beyond
//! the store itself.
//!
//! # Example
//!
//! ```no_run
//! use genex_server::{config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::connect_pool(&config.database).await?;
//!     sqlx::migrate!("../../migrations").run(&pool).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod ingest;
pub mod middleware;

// Re-export commonly used types
pub use error::AppError;
