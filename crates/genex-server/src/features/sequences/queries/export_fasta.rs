//! FASTA export query
//!
//! Fetches sequences matching the requested gene names and renders them
//! as concatenated `>{gene}\n{sequence}\n` blocks. Genes with no stored
//! sequence are silently omitted; an empty gene list (or no matches)
//! renders an empty body, not an error.

use serde::{Deserialize, Serialize};

use crate::db::{DbError, GeneStore, SequenceRecord};
use crate::features::shared::{validate_gene_list, GeneListError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFastaQuery {
    pub genes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportFastaError {
    #[error(transparent)]
    InvalidGeneList(#[from] GeneListError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl ExportFastaQuery {
    pub fn validate(&self) -> Result<(), GeneListError> {
        // An empty list is allowed here; only the size cap applies
        validate_gene_list(&self.genes, false)
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &GeneStore,
    query: ExportFastaQuery,
) -> Result<String, ExportFastaError> {
    query.validate()?;

    let records = store.query_sequences_by_gene_names(&query.genes).await?;
    Ok(render_fasta(&records))
}

/// Render sequence records as FASTA text
pub fn render_fasta(records: &[SequenceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push('>');
        out.push_str(&record.gene_name);
        out.push('\n');
        out.push_str(&record.sequence);
        out.push('\n');
    }
    out
}
