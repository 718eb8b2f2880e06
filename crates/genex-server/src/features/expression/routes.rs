use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::queries::export_tsv::{self, ExportTsvError, ExportTsvQuery, TSV_FILE_NAME};
use super::queries::heatmap::{self, HeatmapError, HeatmapQuery};
use crate::api::response::ErrorResponse;
use crate::db::GeneStore;
use crate::features::shared::parse_gene_list;

#[derive(Debug, Deserialize)]
pub struct GenesParam {
    #[serde(default)]
    pub genes: String,
}

pub fn expression_routes() -> Router<GeneStore> {
    Router::new()
        .route("/heatmap", get(heatmap_handler))
        .route("/tsv", get(export_tsv_handler))
}

#[tracing::instrument(skip(store))]
async fn heatmap_handler(
    State(store): State<GeneStore>,
    Query(params): Query<GenesParam>,
) -> Result<Response, ExpressionApiError> {
    let query = HeatmapQuery {
        genes: parse_gene_list(&params.genes),
    };
    let response = heatmap::handle(&store, query).await?;

    tracing::info!(rows = response.data.y.len(), "Heatmap matrix built");

    Ok((StatusCode::OK, Json(response)).into_response())
}

#[tracing::instrument(skip(store))]
async fn export_tsv_handler(
    State(store): State<GeneStore>,
    Query(params): Query<GenesParam>,
) -> Result<Response, ExpressionApiError> {
    let query = ExportTsvQuery {
        genes: parse_gene_list(&params.genes),
    };
    let body = export_tsv::handle(&store, query).await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/tab-separated-values".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{TSV_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

#[derive(Debug)]
enum ExpressionApiError {
    Heatmap(HeatmapError),
    Tsv(ExportTsvError),
}

impl From<HeatmapError> for ExpressionApiError {
    fn from(err: HeatmapError) -> Self {
        Self::Heatmap(err)
    }
}

impl From<ExportTsvError> for ExpressionApiError {
    fn from(err: ExportTsvError) -> Self {
        Self::Tsv(err)
    }
}

impl IntoResponse for ExpressionApiError {
    fn into_response(self) -> Response {
        match self {
            ExpressionApiError::Heatmap(HeatmapError::InvalidGeneList(err))
            | ExpressionApiError::Tsv(ExportTsvError::InvalidGeneList(err)) => {
                let error = ErrorResponse::new("BAD_REQUEST", err.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            ExpressionApiError::Heatmap(HeatmapError::NoData) => {
                let error = ErrorResponse::new(
                    "NO_EXPRESSION_DATA",
                    "No expression data found for the given genes",
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            ExpressionApiError::Heatmap(HeatmapError::Database(ref err))
            | ExpressionApiError::Tsv(ExportTsvError::Database(ref err)) => {
                tracing::error!("Database error during expression export: {}", err);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}
