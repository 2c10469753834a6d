//! RemoteSource against a local axum server.

use assert_matches::assert_matches;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use erp_client::config::ClientConfig;
use erp_client::error::ClientError;
use erp_client::source::{build_data_source, load_table, DataSource, RemoteSource};
use erp_core::table::{Column, DataTable, TableView};
use serde_json::{json, Value};

async fn employees(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some("Bearer hr-token") => Ok(Json(json!([
            {"id": 1, "name": "Priya", "department": "QC"},
            {"id": 2, "name": "Marco", "department": null},
        ]))),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn orders() -> Json<Value> {
    Json(json!({"data": [{"id": "SO-2", "total": 90.5}, {"id": "SO-1", "total": 12}]}))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "db down")
}

async fn not_rows() -> Json<Value> {
    Json(json!({"rows": []}))
}

/// Serve the fake API on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let app = Router::new()
        .route("/hr/employees", get(employees))
        .route("/sales/orders", get(orders))
        .route("/broken", get(broken))
        .route("/odd", get(not_rows));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn bare_array_with_bearer_token() {
    let base = spawn_server().await;
    let source = RemoteSource::new(&ClientConfig::remote(base, Some("hr-token".into())));

    let rows = source.fetch_rows("hr/employees").await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Priya");
}

#[tokio::test]
async fn missing_token_surfaces_api_error() {
    let base = spawn_server().await;
    let source = RemoteSource::new(&ClientConfig::remote(base, None));

    let result = source.fetch_rows("hr/employees").await;
    assert_matches!(result, Err(ClientError::Api { status: 401, .. }));
}

#[tokio::test]
async fn data_envelope_is_unwrapped() {
    let base = spawn_server().await;
    let source = build_data_source(&ClientConfig::remote(base, None))
        .await
        .unwrap();

    let rows = source.fetch_rows("/sales/orders").await.unwrap();
    assert_eq!(rows[0]["id"], "SO-2");
}

#[tokio::test]
async fn server_error_carries_status_and_body() {
    let base = spawn_server().await;
    let source = RemoteSource::new(&ClientConfig::remote(base, None));

    let result = source.fetch_rows("broken").await;
    assert_matches!(result, Err(ClientError::Api { status: 500, body }) if body == "db down");
}

#[tokio::test]
async fn object_without_data_is_a_payload_error() {
    let base = spawn_server().await;
    let source = RemoteSource::new(&ClientConfig::remote(base, None));

    assert_matches!(source.fetch_rows("odd").await, Err(ClientError::Payload(_)));
}

#[tokio::test]
async fn load_table_sorts_remote_rows_and_renders_nulls() {
    let base = spawn_server().await;
    let source = RemoteSource::new(&ClientConfig::remote(base, Some("hr-token".into())));

    let mut table = DataTable::new(vec![
        Column::new("name", "Name"),
        Column::new("department", "Department"),
    ]);
    table.handle_header_click("department");
    table.handle_header_click("department");

    let loaded = load_table(&table, &source, "hr/employees").await;
    let TableView::Rows(rendered) = loaded.view else {
        panic!("expected rows");
    };
    // Null department stays last even when descending.
    assert_eq!(rendered.rows[0].cells, vec!["Priya", "QC"]);
    assert_eq!(rendered.rows[1].cells, vec!["Marco", "-"]);
}
