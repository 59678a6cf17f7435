//! Handlers for the bike catalog.
//!
//! Read endpoints are public. The trending toggle requires an admin token.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use throttle_core::catalog::{non_empty, parse_id, total_pages};
use throttle_core::compare::Verdicts;
use throttle_core::error::CoreError;
use throttle_core::trending;
use throttle_core::types::DbId;
use throttle_db::repositories::BikeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{LenientQuery, PathParam};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{BikeListParams, CompareParams, RelatedParams};
use crate::response::{
    priced, BikeListResponse, BikePageResponse, BikeResponse, CompareResponse, PaginationMeta,
    PricedBike, TrendingToggleResponse,
};
use crate::state::AppState;

fn bike_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Bike", id })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/bikes
///
/// Filtered, sorted, paginated listing. The total is counted with the same
/// filters in a separate query so `pages` stays right on a short last page.
pub async fn list_bikes(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<BikeListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.filter();
    let sort = params.sort_order();
    let page = params.page_request();

    let total = BikeRepo::count(&state.pool, &filter).await?;
    let bikes = BikeRepo::list(&state.pool, &filter, sort, page).await?;

    tracing::debug!(
        ?filter,
        sort = sort.as_str(),
        page = page.page,
        limit = page.limit,
        total,
        returned = bikes.len(),
        "Listed bikes",
    );

    Ok(Json(BikePageResponse {
        bikes: priced(bikes),
        pagination: PaginationMeta {
            total,
            page: page.page,
            limit: page.limit,
            pages: total_pages(total, page.limit),
        },
    }))
}

/// GET /api/bikes/trending
pub async fn list_trending(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let bikes = BikeRepo::list_trending(&state.pool).await?;

    Ok(Json(BikeListResponse::new(bikes)))
}

/// GET /api/bikes/{id}/related
///
/// Bikes of the same type, excluding the bike itself.
pub async fn list_related(
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
    LenientQuery(params): LenientQuery<RelatedParams>,
) -> AppResult<impl IntoResponse> {
    let bike_id = parse_id(&raw_id)?;
    let bike = BikeRepo::find_by_id(&state.pool, bike_id)
        .await?
        .ok_or_else(|| bike_not_found(bike_id))?;

    let related =
        BikeRepo::list_related(&state.pool, &bike.bike_type, bike.id, params.limit()).await?;

    Ok(Json(BikeListResponse::new(related)))
}

// ---------------------------------------------------------------------------
// Single bike
// ---------------------------------------------------------------------------

/// GET /api/bikes/{id}
pub async fn get_bike(
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let bike_id = parse_id(&raw_id)?;
    let bike = BikeRepo::find_detail_by_id(&state.pool, bike_id)
        .await?
        .ok_or_else(|| bike_not_found(bike_id))?;

    Ok(Json(BikeResponse {
        bike: PricedBike::new(bike),
    }))
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// GET /api/bikes/compare/data?id1=&id2=
///
/// Both bikes are fetched independently. If either is missing the whole
/// request is a 404; partial data is never returned. Passing the same id
/// twice returns that bike on both sides.
pub async fn compare_bikes(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<CompareParams>,
) -> AppResult<impl IntoResponse> {
    let (Some(raw1), Some(raw2)) = (
        non_empty(params.id1.as_deref()),
        non_empty(params.id2.as_deref()),
    ) else {
        return Err(AppError::BadRequest(
            "Two bike IDs required (id1 and id2)".into(),
        ));
    };
    let id1 = parse_id(raw1)?;
    let id2 = parse_id(raw2)?;

    let bike1 = BikeRepo::find_for_compare(&state.pool, id1).await?;
    let bike2 = BikeRepo::find_for_compare(&state.pool, id2).await?;

    let (Some(bike1), Some(bike2)) = (bike1, bike2) else {
        return Err(AppError::NotFound("One or both bikes not found".into()));
    };

    let verdicts = Verdicts::between(
        &bike1.bike.compare_metrics(),
        &bike2.bike.compare_metrics(),
    );

    Ok(Json(CompareResponse {
        bike1: PricedBike::new(bike1),
        bike2: PricedBike::new(bike2),
        verdicts,
    }))
}

// ---------------------------------------------------------------------------
// Trending toggle (admin)
// ---------------------------------------------------------------------------

/// PATCH /api/bikes/{id}/trending
///
/// Flip the trending flag and return the new state.
pub async fn toggle_trending(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    PathParam(raw_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let bike_id = parse_id(&raw_id)?;
    let flag = BikeRepo::toggle_trending(&state.pool, bike_id)
        .await?
        .ok_or_else(|| bike_not_found(bike_id))?;

    let is_trending = trending::is_trending(flag);

    tracing::info!(
        bike_id,
        is_trending,
        user_id = admin.user_id,
        "Bike trending status toggled",
    );

    Ok(Json(TrendingToggleResponse {
        message: "Trending status updated successfully",
        is_trending,
    }))
}
