use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;

use super::queries::export_fasta::{self, ExportFastaError, ExportFastaQuery};
use crate::db::GeneStore;
use crate::error::AppError;
use crate::features::shared::parse_gene_list;

#[derive(Debug, Deserialize)]
pub struct GenesParam {
    #[serde(default)]
    pub genes: String,
}

pub fn sequences_routes() -> Router<GeneStore> {
    Router::new().route("/fasta", get(export_fasta_handler))
}

#[tracing::instrument(skip(store))]
async fn export_fasta_handler(
    State(store): State<GeneStore>,
    Query(params): Query<GenesParam>,
) -> Result<Response, AppError> {
    let query = ExportFastaQuery {
        genes: parse_gene_list(&params.genes),
    };
    let body = export_fasta::handle(&store, query).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

impl From<ExportFastaError> for AppError {
    fn from(err: ExportFastaError) -> Self {
        match err {
            ExportFastaError::InvalidGeneList(e) => AppError::BadRequest(e.to_string()),
            ExportFastaError::Database(e) => e.into(),
        }
    }
}
