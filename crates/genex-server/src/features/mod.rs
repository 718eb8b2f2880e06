//! Feature modules implementing the GENEX read API
//!
//! Each feature is a vertical slice with its own query handlers and
//! routes:
//!
//! - **sequences**: FASTA export of stored gene sequences
//! - **expression**: heatmap matrix and TSV export of expression rows
//!
//! All slices share the gene-list input contract in [`shared`]: a
//! comma-separated `genes` query parameter, trimmed, empties discarded,
//! at most [`shared::gene_list::MAX_GENES`] entries.

pub mod expression;
pub mod sequences;
pub mod shared;

use axum::Router;

use crate::db::GeneStore;

/// Creates the API router with all feature routes mounted
///
/// - `/sequences` - FASTA export
/// - `/expression` - heatmap matrix and TSV export
pub fn router(store: GeneStore) -> Router<()> {
    Router::new()
        .nest("/sequences", sequences::sequences_routes().with_state(store.clone()))
        .nest("/expression", expression::expression_routes().with_state(store))
}
