//! Brand models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use throttle_core::types::DbId;

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
}

/// A brand with the number of bikes listed under it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BrandSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub brand: Brand,
    pub bike_count: i64,
}

/// DTO for inserting a brand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBrand {
    pub name: String,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
}
