//! Integration tests for the read endpoints
//!
//! Drives the feature router directly with `tower::ServiceExt::oneshot`
//! against a migrated in-memory database, verifying status codes,
//! headers, and response bodies.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt; // for `oneshot`

use genex_server::db::GeneStore;
use genex_server::features;

async fn setup_app(pool: SqlitePool) -> (GeneStore, Router) {
    let store = GeneStore::new(pool);
    let app = features::router(store.clone());
    (store, app)
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, headers, body)
}

#[sqlx::test(migrations = "../../migrations")]
async fn fasta_export_renders_matched_blocks(pool: SqlitePool) -> sqlx::Result<()> {
    let (store, app) = setup_app(pool).await;
    store.upsert_sequence("X", "MKV").await.unwrap();

    let (status, headers, body) = get(app, "/sequences/fasta?genes=X,MISSING").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body, b">X\nMKV\n");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn fasta_export_of_empty_list_is_empty_ok(pool: SqlitePool) -> sqlx::Result<()> {
    let (_, app) = setup_app(pool).await;

    let (status, _, body) = get(app, "/sequences/fasta").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn fasta_export_rejects_eleven_genes(pool: SqlitePool) -> sqlx::Result<()> {
    let (_, app) = setup_app(pool).await;

    let genes: Vec<String> = (0..11).map(|i| format!("G{i}")).collect();
    let uri = format!("/sequences/fasta?genes={}", genes.join(","));
    let (status, _, _) = get(app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn heatmap_rejects_empty_gene_list(pool: SqlitePool) -> sqlx::Result<()> {
    let (_, app) = setup_app(pool).await;

    let (status, _, body) = get(app, "/expression/heatmap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn heatmap_without_matching_rows_is_404(pool: SqlitePool) -> sqlx::Result<()> {
    let (store, app) = setup_app(pool).await;
    // Sequence exists but has no expression rows
    store.upsert_sequence("Y", "MKV").await.unwrap();

    let (status, _, body) = get(app, "/expression/heatmap?genes=Y").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "NO_EXPRESSION_DATA");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn heatmap_matrix_has_fixed_columns_and_nulls(pool: SqlitePool) -> sqlx::Result<()> {
    let (store, app) = setup_app(pool).await;
    store.upsert_sequence("A", "MK").await.unwrap();
    store
        .insert_expression("A", [Some(1), Some(2), None, Some(4), Some(5), Some(6)])
        .await
        .unwrap();

    let (status, _, body) = get(app, "/expression/heatmap?genes=A").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let data = &json["data"];
    assert_eq!(data["type"], "heatmap");
    assert_eq!(data["colorscale"], "Viridis");
    assert_eq!(data["y"], serde_json::json!(["A"]));
    assert_eq!(
        data["x"],
        serde_json::json!(["sample1", "sample2", "sample3", "sample4", "sample5", "sample6"])
    );
    assert_eq!(
        data["z"],
        serde_json::json!([[1, 2, Value::Null, 4, 5, 6]])
    );
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn tsv_export_sets_attachment_disposition(pool: SqlitePool) -> sqlx::Result<()> {
    let (store, app) = setup_app(pool).await;
    store.upsert_sequence("Z", "MKV").await.unwrap();
    store
        .insert_expression("Z", [Some(1), Some(2), None, Some(4), Some(5), Some(6)])
        .await
        .unwrap();

    let (status, headers, body) = get(app, "/expression/tsv?genes=Z").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/tab-separated-values"
    );
    assert_eq!(
        headers.get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"gene_expression.tsv\""
    );

    let text = String::from_utf8(body).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "gene_name\tsample1\tsample2\tsample3\tsample4\tsample5\tsample6"
    );
    assert_eq!(lines.next().unwrap(), "Z\t1\t2\t\t4\t5\t6");
    Ok(())
}

#[sqlx::test(migrations = "../../migrations")]
async fn tsv_export_rejects_empty_gene_list(pool: SqlitePool) -> sqlx::Result<()> {
    let (_, app) = setup_app(pool).await;

    let (status, _, _) = get(app, "/expression/tsv?genes=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
