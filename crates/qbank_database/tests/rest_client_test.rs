use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use qbank_database::{DatabaseConfig, DatabaseErrorKind, QuestionStore, RestClient};
use serde_json::{Value, json};
use std::collections::HashMap;

const KEY: &str = "test-anon-key";

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(KEY)
        && headers.get("authorization").and_then(|v| v.to_str().ok())
            == Some(format!("Bearer {}", KEY).as_str())
}

async fn insert(headers: HeaderMap, Json(row): Json<Value>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if headers.get("prefer").and_then(|v| v.to_str().ok()) != Some("return=representation") {
        return (StatusCode::CREATED, "").into_response();
    }
    if row["question_type"] == "SUB" {
        let body = json!({
            "code": "23514",
            "details": null,
            "hint": null,
            "message": "new row for relation \"new_questions\" violates check constraint \"new_questions_question_type_check\""
        });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }
    (StatusCode::CREATED, Json(json!([row]))).into_response()
}

async fn remove(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    match params.get("id").map(String::as_str) {
        Some("eq.probe-1") => StatusCode::NO_CONTENT,
        _ => StatusCode::BAD_REQUEST,
    }
}

async fn execute_sql(headers: HeaderMap, Json(params): Json<Value>) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let sql = params["sql"].as_str().unwrap_or_default();
    if sql.starts_with("ALTER TABLE") {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(json!({ "echo": sql }))).into_response()
    }
}

async fn spawn_postgrest() -> String {
    let app = Router::new()
        .route("/rest/v1/new_questions", post(insert).delete(remove))
        .route("/rest/v1/rpc/execute_sql", post(execute_sql));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> RestClient {
    let url = spawn_postgrest().await;
    RestClient::new(DatabaseConfig::new(url, KEY)).unwrap()
}

#[tokio::test]
async fn insert_returns_representation() {
    let client = client().await;
    let row = json!({ "id": "probe-1", "question_type": "NAT" });

    let rows = client.insert("new_questions", &row).await.unwrap();

    assert_eq!(rows, vec![row]);
}

#[tokio::test]
async fn insert_rejection_carries_postgrest_message() {
    let client = client().await;
    let row = json!({ "id": "probe-1", "question_type": "SUB" });

    let err = client.insert_row("new_questions", &row).await.unwrap_err();

    match err.kind {
        DatabaseErrorKind::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.starts_with("[23514] new row"));
            assert!(message.contains("new_questions_question_type_check"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_filters_with_eq_operator() {
    let client = client().await;

    client.delete_eq("new_questions", "id", "probe-1").await.unwrap();

    let err = client.delete("new_questions", "id", "other").await.unwrap_err();
    assert!(matches!(err.kind, DatabaseErrorKind::Api { status: 400, .. }));
}

#[tokio::test]
async fn execute_sql_goes_through_rpc() {
    let client = client().await;

    let result = client
        .execute_sql("ALTER TABLE new_questions DROP CONSTRAINT IF EXISTS x;")
        .await
        .unwrap();
    assert!(result.is_null());

    let result = client.rpc("execute_sql", &json!({ "sql": "SELECT 1" })).await.unwrap();
    assert_eq!(result, json!({ "echo": "SELECT 1" }));
}

#[tokio::test]
async fn unknown_function_is_an_api_error() {
    let client = client().await;

    let err = client.rpc("missing_fn", &json!({})).await.unwrap_err();

    assert!(matches!(err.kind, DatabaseErrorKind::Api { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let client = RestClient::new(DatabaseConfig::new("http://127.0.0.1:1", KEY)).unwrap();

    let err = client.insert("new_questions", &json!({})).await.unwrap_err();

    assert!(matches!(err.kind, DatabaseErrorKind::Request(_)));
}
