//! Flat-file ingestion for the gene store
//!
//! Two source formats feed the store:
//!
//! - FASTA: `>` marker lines naming a gene, followed by sequence lines
//!   that are concatenated into one body ([`fasta`])
//! - expression TSV: a header line, then rows of
//!   `gene_name \t sample1 .. sample6` with empty fields meaning absent
//!   ([`expression`])
//!
//! [`loader`] drives both parsers and writes through the repository.

pub mod expression;
pub mod fasta;
pub mod loader;

pub use loader::{load_files, LoadSummary};
