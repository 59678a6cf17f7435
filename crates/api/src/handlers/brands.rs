//! Handlers for the brand list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use throttle_db::repositories::BrandRepo;

use crate::error::AppResult;
use crate::response::BrandListResponse;
use crate::state::AppState;

/// GET /api/brands
///
/// Every brand, alphabetically, with its bike count. Feeds the brand filter
/// on the listing page.
pub async fn list_brands(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let brands = BrandRepo::list_with_counts(&state.pool).await?;

    Ok(Json(BrandListResponse {
        count: brands.len(),
        brands,
    }))
}
