//! HTTP-level integration tests for bike listing and detail endpoints.

mod common;

use axum::http::StatusCode;
use common::{bike_ids, body_json, build_test_app, get, new_bike, seed_bike, seed_brand};
use sqlx::SqlitePool;

/// Seed two brands and five bikes with distinct prices, engines and types.
///
/// Returns the bike ids ordered by creation (oldest first).
async fn seed_catalog(pool: &SqlitePool) -> Vec<i64> {
    let re = seed_brand(pool, "Royal Enfield").await;
    let ktm = seed_brand(pool, "KTM").await;

    let specs = [
        (re.id, "Classic 350", 190_000.0, 349, "Cruiser"),
        (ktm.id, "Duke 390", 310_000.0, 373, "Naked"),
        (re.id, "Himalayan", 285_000.0, 452, "Tourer"),
        (ktm.id, "RC 200", 215_000.0, 199, "Sports"),
        (re.id, "Meteor 350", 205_000.0, 349, "Cruiser"),
    ];

    let mut ids = Vec::new();
    for (rank, (brand_id, model, price, cc, bike_type)) in specs.into_iter().enumerate() {
        let bike = seed_bike(pool, new_bike(brand_id, model, price, cc, bike_type), rank as i64).await;
        ids.push(bike.id);
    }
    ids
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_catalog_lists_nothing(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/bikes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["bikes"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["pages"], 0);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 12);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_is_newest_first_with_brand_columns(pool: SqlitePool) {
    let ids = seed_catalog(&pool).await;

    let json = body_json(get(build_test_app(pool), "/api/bikes").await).await;

    let mut newest_first = ids.clone();
    newest_first.reverse();
    assert_eq!(bike_ids(&json), newest_first);

    let first = &json["bikes"][0];
    assert_eq!(first["model_name"], "Meteor 350");
    assert_eq!(first["brand_name"], "Royal Enfield");
    assert_eq!(first["country_of_origin"], "India");
    assert_eq!(first["type"], "Cruiser");
    assert_eq!(first["is_trending"], 0);
    assert_eq!(first["price_label"], "₹2.05L");
    assert!(
        first.get("logo_url").is_none(),
        "listing rows do not carry the brand logo"
    );
    assert_eq!(json["pagination"]["total"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn pagination_metadata_matches_row_counts(pool: SqlitePool) {
    seed_catalog(&pool).await;

    for limit in 1..=6_i64 {
        let expected_pages = (5 + limit - 1) / limit;
        for page in 1..=expected_pages + 1 {
            let app = build_test_app(pool.clone());
            let json = body_json(get(app, &format!("/api/bikes?page={page}&limit={limit}")).await).await;

            assert_eq!(json["pagination"]["total"], 5);
            assert_eq!(json["pagination"]["pages"], expected_pages);
            let rows = json["bikes"].as_array().unwrap().len() as i64;
            assert!(rows <= limit, "page {page} returned {rows} rows for limit {limit}");

            let expected_rows = (5 - (page - 1) * limit).clamp(0, limit);
            assert_eq!(rows, expected_rows, "page {page}, limit {limit}");
        }
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_page_and_limit_fall_back_to_defaults(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let json = body_json(get(build_test_app(pool), "/api/bikes?page=abc&limit=xyz").await).await;
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 12);
    assert_eq!(json["bikes"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn last_page_is_short_but_pages_stay_consistent(pool: SqlitePool) {
    let ids = seed_catalog(&pool).await;

    let json = body_json(get(build_test_app(pool), "/api/bikes?page=3&limit=2").await).await;
    assert_eq!(bike_ids(&json), vec![ids[0]]);
    assert_eq!(json["pagination"]["pages"], 3);
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_by_price_range(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let json = body_json(
        get(build_test_app(pool), "/api/bikes?minPrice=200000&maxPrice=290000").await,
    )
    .await;

    let models: Vec<&str> = json["bikes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["model_name"].as_str().unwrap())
        .collect();
    assert_eq!(models, vec!["Meteor 350", "RC 200", "Himalayan"]);
    assert_eq!(json["pagination"]["total"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_by_engine_range_brand_and_type(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/bikes?minCC=300&maxCC=400").await).await;
    assert_eq!(json["pagination"]["total"], 3);

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/bikes?brand=Royal%20Enfield&type=Cruiser").await).await;
    assert_eq!(json["pagination"]["total"], 2);
    for bike in json["bikes"].as_array().unwrap() {
        assert_eq!(bike["brand_name"], "Royal Enfield");
        assert_eq!(bike["type"], "Cruiser");
    }

    let app = build_test_app(pool);
    let json = body_json(get(app, "/api/bikes?brand=KTM&maxCC=250").await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["bikes"][0]["model_name"], "RC 200");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_brand_returns_empty_page(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let response = get(build_test_app(pool), "/api/bikes?brand=Ducati").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["bikes"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["pages"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_numeric_filters_are_ignored(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let json = body_json(
        get(
            build_test_app(pool),
            "/api/bikes?minPrice=cheap&maxPrice=&minCC=big&maxCC=NaN",
        )
        .await,
    )
    .await;
    assert_eq!(json["pagination"]["total"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn quoted_filter_values_are_bound_not_interpolated(pool: SqlitePool) {
    seed_catalog(&pool).await;

    // brand = x' OR '1'='1
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/bikes?brand=x%27%20OR%20%271%27%3D%271").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total"], 0);

    // type = '; DROP TABLE bikes; --
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/bikes?type=%27%3B%20DROP%20TABLE%20bikes%3B%20--").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool), "/api/bikes").await).await;
    assert_eq!(json["pagination"]["total"], 5, "catalog must be intact");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeated_query_keys_use_first_value(pool: SqlitePool) {
    let ids = seed_catalog(&pool).await;

    let response = get(
        build_test_app(pool.clone()),
        "/api/bikes?page=1&page=2&limit=2&limit=50",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 2);
    assert_eq!(bike_ids(&json), vec![ids[4], ids[3]]);

    let json = body_json(
        get(build_test_app(pool), "/api/bikes?brand=KTM&brand=Royal%20Enfield").await,
    )
    .await;
    assert_eq!(json["pagination"]["total"], 2);
    for bike in json["bikes"].as_array().unwrap() {
        assert_eq!(bike["brand_name"], "KTM");
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn price_sort_spans_pages(pool: SqlitePool) {
    seed_catalog(&pool).await;

    let mut prices = Vec::new();
    for page in 1..=3 {
        let app = build_test_app(pool.clone());
        let json = body_json(
            get(app, &format!("/api/bikes?sort=price-low&limit=2&page={page}")).await,
        )
        .await;
        for bike in json["bikes"].as_array().unwrap() {
            prices.push(bike["price_on_road"].as_f64().unwrap());
        }
    }

    assert_eq!(
        prices,
        vec![190_000.0, 205_000.0, 215_000.0, 285_000.0, 310_000.0]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn speed_sort_puts_unknown_speeds_last(pool: SqlitePool) {
    let brand = seed_brand(&pool, "Bajaj").await;

    let mut slow = new_bike(brand.id, "Platina", 70_000.0, 102, "Commuter");
    slow.top_speed = Some(90);
    let mut fast = new_bike(brand.id, "Dominar 400", 230_000.0, 373, "Tourer");
    fast.top_speed = Some(158);
    let mut unknown = new_bike(brand.id, "Chetak", 120_000.0, 0, "Scooter");
    unknown.top_speed = None;

    let slow = seed_bike(&pool, slow, 0).await;
    let fast = seed_bike(&pool, fast, 1).await;
    let unknown = seed_bike(&pool, unknown, 2).await;

    let json = body_json(get(build_test_app(pool), "/api/bikes?sort=speed").await).await;
    assert_eq!(bike_ids(&json), vec![fast.id, slow.id, unknown.id]);
    assert!(json["bikes"][2]["top_speed"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_sort_key_falls_back_to_newest(pool: SqlitePool) {
    let ids = seed_catalog(&pool).await;

    let json = body_json(get(build_test_app(pool), "/api/bikes?sort=popularity").await).await;
    assert_eq!(bike_ids(&json)[0], *ids.last().unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn newest_sort_orders_mixed_timestamp_formats_by_time(pool: SqlitePool) {
    let brand = seed_brand(&pool, "Kawasaki").await;

    // 2026-01-01T00:00:00.000Z
    let early = seed_bike(&pool, new_bike(brand.id, "Ninja 300", 340_000.0, 296, "Sports"), 0).await;

    // Written by hand in SQLite's CURRENT_TIMESTAMP format, twelve hours later.
    let late_id: i64 = sqlx::query_scalar(
        "INSERT INTO bikes (brand_id, model_name, price_on_road, engine_cc, type, created_at) \
         VALUES (?, 'Z900', 950000, 948, 'Naked', '2026-01-01 12:00:00') \
         RETURNING id",
    )
    .bind(brand.id)
    .fetch_one(&pool)
    .await
    .unwrap();

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/bikes").await).await;
    assert_eq!(bike_ids(&json), vec![late_id, early.id]);

    // The trending list uses the same ordering.
    sqlx::query("UPDATE bikes SET is_trending = 1")
        .execute(&pool)
        .await
        .unwrap();
    let json = body_json(get(build_test_app(pool), "/api/bikes/trending").await).await;
    assert_eq!(bike_ids(&json), vec![late_id, early.id]);
}

// ---------------------------------------------------------------------------
// Single bike
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_bike_returns_detail_with_logo(pool: SqlitePool) {
    let brand = seed_brand(&pool, "Honda").await;
    let bike = seed_bike(
        &pool,
        new_bike(brand.id, "CB350", 150_000.0, 348, "Cruiser"),
        0,
    )
    .await;

    let response = get(build_test_app(pool), &format!("/api/bikes/{}", bike.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let detail = &json["bike"];
    assert_eq!(detail["id"], bike.id);
    assert_eq!(detail["price_on_road"].as_f64(), Some(150_000.0));
    assert_eq!(detail["price_label"], "₹1.50L");
    assert_eq!(detail["brand_name"], "Honda");
    assert_eq!(detail["logo_url"], "https://img.test/Honda.png");
    assert_eq!(detail["color_options"], "Red, Black");
    assert_eq!(detail["engine_cc"], 348);
    assert!(detail["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_bike_with_missing_optional_fields_returns_nulls(pool: SqlitePool) {
    let brand = seed_brand(&pool, "Hero").await;
    let mut input = new_bike(brand.id, "Splendor", 80_000.0, 97, "Commuter");
    input.mileage = None;
    input.color_options = None;
    input.image_url = None;
    let bike = seed_bike(&pool, input, 0).await;

    let json = body_json(get(build_test_app(pool), &format!("/api/bikes/{}", bike.id)).await).await;
    assert!(json["bike"]["mileage"].is_null());
    assert!(json["bike"]["color_options"].is_null());
    assert!(json["bike"]["image_url"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_bike_non_numeric_id_is_bad_request(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/bikes/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_bike_unknown_id_is_not_found(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/bikes/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Bike with id 9999 not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn undecodable_path_segment_is_json_bad_request(pool: SqlitePool) {
    let response = get(build_test_app(pool), "/api/bikes/%FF").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"), "{content_type}");

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}
