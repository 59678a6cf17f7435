pub mod bikes;
pub mod brands;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /bikes                          list with filters, sort, pagination (GET)
/// /bikes/trending                 trending bikes (GET)
/// /bikes/compare/data             compare two bikes (GET, ?id1=&id2=)
/// /bikes/{id}                     bike detail (GET)
/// /bikes/{id}/related             same-type bikes (GET)
/// /bikes/{id}/trending            toggle trending flag (PATCH, admin only)
///
/// /brands                         brands with bike counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/bikes", bikes::router())
        .nest("/brands", brands::router())
}
