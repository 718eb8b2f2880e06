//! Heatmap matrix query
//!
//! Builds a rectangular matrix from the expression rows matching the
//! requested genes: one matrix row per expression record, six fixed
//! sample columns, `null` for absent values. Rows are ordered by the
//! gene's position in the request list, stable within a gene. The
//! response carries the row labels, the fixed column labels, and a
//! display hint for the consuming plot library.

use serde::{Deserialize, Serialize};

use crate::db::{DbError, ExpressionRecord, GeneStore, SAMPLE_COLUMNS};
use crate::features::shared::{validate_gene_list, GeneListError};

/// Display hint passed through to the plotting frontend.
pub const COLOR_SCALE: &str = "Viridis";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapQuery {
    pub genes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error(transparent)]
    InvalidGeneList(#[from] GeneListError),

    #[error("No expression data found for the given genes")]
    NoData,

    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Heatmap payload in the shape the frontend plot expects
#[derive(Debug, Serialize)]
pub struct HeatmapData {
    pub z: Vec<Vec<Option<i64>>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub colorscale: String,
}

/// Response envelope
#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub data: HeatmapData,
}

impl HeatmapQuery {
    pub fn validate(&self) -> Result<(), GeneListError> {
        validate_gene_list(&self.genes, true)
    }
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &GeneStore,
    query: HeatmapQuery,
) -> Result<HeatmapResponse, HeatmapError> {
    query.validate()?;

    let mut rows = store.query_expressions_by_gene_names(&query.genes).await?;
    if rows.is_empty() {
        return Err(HeatmapError::NoData);
    }

    order_by_request(&mut rows, &query.genes);

    Ok(HeatmapResponse {
        data: HeatmapData {
            z: rows.iter().map(|row| row.samples().to_vec()).collect(),
            x: SAMPLE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            y: rows.into_iter().map(|row| row.gene_name).collect(),
            kind: "heatmap".to_string(),
            colorscale: COLOR_SCALE.to_string(),
        },
    })
}

/// Order matrix rows by the gene's position in the request list; the
/// sort is stable, so rows of one gene keep their insertion order.
fn order_by_request(rows: &mut [ExpressionRecord], genes: &[String]) {
    rows.sort_by_key(|row| {
        genes
            .iter()
            .position(|gene| gene == &row.gene_name)
            .unwrap_or(usize::MAX)
    });
}
