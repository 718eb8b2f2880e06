//! TSV export query
//!
//! Renders the expression rows matching the requested genes as
//! tab-separated text: a header naming the identifier column and the six
//! sample columns, then one row per record with absent values as empty
//! fields. The route serves the body as a downloadable attachment with a
//! fixed file name. Matching uses the same joined gene-name lookup as
//! the heatmap; zero matches render a header-only body.

use serde::{Deserialize, Serialize};

use crate::db::{DbError, ExpressionRecord, GeneStore, SAMPLE_COLUMNS};
use crate::features::shared::{validate_gene_list, GeneListError};

/// Fixed attachment file name.
pub const TSV_FILE_NAME: &str = "gene_expression.tsv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTsvQuery {
    pub genes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportTsvError {
    #[error(transparent)]
    InvalidGeneList(#[from] GeneListError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

impl ExportTsvQuery {
    pub fn validate(&self) -> Result<(), GeneListError> {
        validate_gene_list(&self.genes, true)
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(store: &GeneStore, query: ExportTsvQuery) -> Result<String, ExportTsvError> {
    query.validate()?;

    let rows = store.query_expressions_by_gene_names(&query.genes).await?;
    Ok(render_tsv(&rows))
}

/// Render expression records as TSV text with a header row
pub fn render_tsv(rows: &[ExpressionRecord]) -> String {
    let mut out = String::from("gene_name");
    for column in SAMPLE_COLUMNS {
        out.push('\t');
        out.push_str(column);
    }
    out.push('\n');

    for row in rows {
        out.push_str(&row.gene_name);
        for sample in row.samples() {
            out.push('\t');
            if let Some(value) = sample {
                out.push_str(&value.to_string());
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    #[test]
    fn empty_list_is_rejected() {
        let query = ExportTsvQuery { genes: vec![] };
        assert_eq!(query.validate(), Err(GeneListError::Empty));
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn absent_values_render_as_empty_fields(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);
        store.upsert_sequence("Z", "MKV").await.unwrap();
        store
            .insert_expression("Z", [Some(1), Some(2), None, Some(4), Some(5), Some(6)])
            .await
            .unwrap();

        let query = ExportTsvQuery {
            genes: vec!["Z".to_string()],
        };
        let body = handle(&store, query).await.unwrap();

        let mut lines = body.lines();
        assert_eq!(
            lines.next().unwrap(),
            "gene_name\tsample1\tsample2\tsample3\tsample4\tsample5\tsample6"
        );
        assert_eq!(lines.next().unwrap(), "Z\t1\t2\t\t4\t5\t6");
        assert!(lines.next().is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn zero_matches_render_header_only(pool: SqlitePool) -> sqlx::Result<()> {
        let store = GeneStore::new(pool);
        let query = ExportTsvQuery {
            genes: vec!["GHOST".to_string()],
        };
        let body = handle(&store, query).await.unwrap();
        assert_eq!(body.lines().count(), 1);
        Ok(())
    }
}
