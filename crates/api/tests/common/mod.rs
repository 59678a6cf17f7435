//! Shared helpers for the HTTP integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`;
//! no TCP listener is involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use throttle_api::auth::jwt::{generate_access_token, JwtConfig};
use throttle_api::config::ServerConfig;
use throttle_api::router::build_app_router;
use throttle_api::state::AppState;
use throttle_core::roles::{ROLE_ADMIN, ROLE_USER};
use throttle_core::types::DbId;
use throttle_db::models::bike::{Bike, CreateBike};
use throttle_db::models::brand::{Brand, CreateBrand};
use throttle_db::repositories::{BikeRepo, BrandRepo};

pub const TEST_JWT_SECRET: &str = "throttle-integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn admin_token() -> String {
    generate_access_token(1, ROLE_ADMIN, &test_config().jwt).unwrap()
}

pub fn user_token() -> String {
    generate_access_token(2, ROLE_USER, &test_config().jwt).unwrap()
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

/// Send a PATCH, optionally with a Bearer token.
pub async fn patch(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::PATCH).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_brand(pool: &SqlitePool, name: &str) -> Brand {
    BrandRepo::create(
        pool,
        &CreateBrand {
            name: name.to_string(),
            country_of_origin: Some("India".to_string()),
            logo_url: Some(format!("https://img.test/{name}.png")),
        },
    )
    .await
    .unwrap()
}

/// A bike with realistic defaults for the fields a test does not care about.
pub fn new_bike(brand_id: DbId, model: &str, price: f64, cc: i64, bike_type: &str) -> CreateBike {
    CreateBike {
        brand_id,
        model_name: model.to_string(),
        price_on_road: price,
        engine_cc: cc,
        bike_type: bike_type.to_string(),
        image_url: Some(format!("https://img.test/{model}.jpg")),
        mileage: Some(35.0),
        top_speed: Some(120),
        weight: Some(180.0),
        fuel_capacity: Some(13.0),
        gears: Some(5),
        color_options: Some("Red, Black".to_string()),
        ..Default::default()
    }
}

/// Insert a bike created `age_rank` minutes after a fixed base time. A higher
/// rank is created later, so it sorts first under "newest".
pub async fn seed_bike(pool: &SqlitePool, mut input: CreateBike, age_rank: i64) -> Bike {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    input.created_at = Some(base + Duration::minutes(age_rank));
    BikeRepo::create(pool, &input).await.unwrap()
}

/// The ids of a `{ bikes: [...] }` body, in order.
pub fn bike_ids(json: &serde_json::Value) -> Vec<i64> {
    json["bikes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect()
}
