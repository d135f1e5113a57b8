#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use inventory_api::config::ServerConfig;
use inventory_api::flash::{decode_notice, FLASH_COOKIE};
use inventory_api::router::build_app_router;
use inventory_api::state::AppState;
use inventory_core::notice::Notice;
use inventory_core::redirect::encode_query_value;

/// Page size used by every test app.
pub const TEST_PAGE_SIZE: i64 = 10;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        max_page_size: TEST_PAGE_SIZE,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through the same [`build_app_router`] as `main.rs` so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET with a `Cookie` header, as a browser following a redirect would send.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{}={}", encode_query_value(key), encode_query_value(value)))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    post_form(app, uri, &[]).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response.headers()[LOCATION].to_str().unwrap().to_string()
}

/// The `name=value` pair of the flash cookie set by `response`, if any.
pub fn flash_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{FLASH_COOKIE}=")))
        .map(str::to_string)
}

/// The notice carried by the flash cookie set by `response`, if any.
pub fn flash_notice(response: &Response<Body>) -> Option<Notice> {
    flash_cookie(response)
        .and_then(|pair| pair.split_once('=').map(|(_, token)| token.to_string()))
        .and_then(|token| decode_notice(&token))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_warehouse(pool: &PgPool, name: &str, is_operational: bool) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO warehouses (name, is_operational) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(is_operational)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn insert_item(
    pool: &PgPool,
    code: &str,
    name: &str,
    quantity: i32,
    warehouse_id: Option<Uuid>,
) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO items (code, name, quantity, warehouse_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(code)
    .bind(name)
    .bind(quantity)
    .bind(warehouse_id)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

pub async fn item_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

/// `(code, name, quantity, warehouse_id)` of a stored item.
pub async fn item_row(pool: &PgPool, id: Uuid) -> Option<(String, String, i32, Option<Uuid>)> {
    sqlx::query_as("SELECT code, name, quantity, warehouse_id FROM items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

/// Insert `count` items coded `P00`, `P01`, ... with strictly increasing
/// `created_at`, so `P00` is the oldest.
pub async fn insert_aged_items(pool: &PgPool, count: i32) {
    for i in 0..count {
        sqlx::query(
            "INSERT INTO items (code, name, quantity, created_at) \
             VALUES ($1, 'Part', 1, NOW() - make_interval(secs => $2))",
        )
        .bind(format!("P{i:02}"))
        .bind(f64::from(count - i))
        .execute(pool)
        .await
        .unwrap();
    }
}
