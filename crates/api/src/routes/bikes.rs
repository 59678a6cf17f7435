//! Route definitions for the bike catalog.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::bikes;
use crate::state::AppState;

/// Bike routes mounted at `/bikes`.
///
/// ```text
/// GET   /               -> list_bikes
/// GET   /trending       -> list_trending
/// GET   /compare/data   -> compare_bikes
/// GET   /{id}           -> get_bike
/// GET   /{id}/related   -> list_related
/// PATCH /{id}/trending  -> toggle_trending
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bikes::list_bikes))
        .route("/trending", get(bikes::list_trending))
        .route("/compare/data", get(bikes::compare_bikes))
        .route("/{id}", get(bikes::get_bike))
        .route("/{id}/related", get(bikes::list_related))
        .route("/{id}/trending", patch(bikes::toggle_trending))
}
