use axum::routing::get;
use axum::Router;

use crate::handlers::brands;
use crate::state::AppState;

/// Brand routes mounted at `/brands`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(brands::list_brands))
}
