//! Bike models and DTOs.
//!
//! One base row ([`Bike`]) plus three joined shapes, each carrying the brand
//! columns its endpoint exposes:
//!
//! | Shape            | Brand columns                                 |
//! |------------------|-----------------------------------------------|
//! | [`BikeListing`]  | `brand_name`, `country_of_origin`             |
//! | [`BikeDetail`]   | `brand_name`, `country_of_origin`, `logo_url` |
//! | [`ComparedBike`] | `brand_name`                                  |

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use throttle_core::compare::CompareMetrics;
use throttle_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `bikes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bike {
    pub id: DbId,
    pub brand_id: DbId,
    pub model_name: String,
    pub price_on_road: f64,
    pub engine_cc: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub bike_type: String,
    pub image_url: Option<String>,
    /// `0` or `1`; see [`throttle_core::trending`].
    pub is_trending: i64,
    pub created_at: Timestamp,
    pub mileage: Option<f64>,
    pub top_speed: Option<i64>,
    pub weight: Option<f64>,
    pub fuel_capacity: Option<f64>,
    pub gears: Option<i64>,
    /// Comma-separated colour names, e.g. `"Red, Black"`.
    pub color_options: Option<String>,
}

impl Bike {
    /// The attributes used for side-by-side comparison.
    pub fn compare_metrics(&self) -> CompareMetrics {
        CompareMetrics {
            price_on_road: Some(self.price_on_road),
            engine_cc: Some(self.engine_cc as f64),
            mileage: self.mileage,
            top_speed: self.top_speed.map(|v| v as f64),
            weight: self.weight,
            fuel_capacity: self.fuel_capacity,
            gears: self.gears.map(|v| v as f64),
        }
    }
}

/// Bike joined with the brand name and country, as shown in listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BikeListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bike: Bike,
    pub brand_name: String,
    pub country_of_origin: Option<String>,
}

/// Bike joined with every brand column, as shown on the detail page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BikeDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bike: Bike,
    pub brand_name: String,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
}

/// Bike joined with the brand name only, as returned by the compare endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ComparedBike {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub bike: Bike,
    pub brand_name: String,
}

/// Access to the base [`Bike`] inside any joined shape.
pub trait BikeRecord {
    fn bike(&self) -> &Bike;
}

impl BikeRecord for BikeListing {
    fn bike(&self) -> &Bike {
        &self.bike
    }
}

impl BikeRecord for BikeDetail {
    fn bike(&self) -> &Bike {
        &self.bike
    }
}

impl BikeRecord for ComparedBike {
    fn bike(&self) -> &Bike {
        &self.bike
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a bike. Used by seeding tools and tests; the HTTP API
/// never creates bikes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBike {
    pub brand_id: DbId,
    pub model_name: String,
    pub price_on_road: f64,
    pub engine_cc: i64,
    #[serde(rename = "type")]
    pub bike_type: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_trending: bool,
    /// Defaults to the insert time when absent.
    pub created_at: Option<Timestamp>,
    pub mileage: Option<f64>,
    pub top_speed: Option<i64>,
    pub weight: Option<f64>,
    pub fuel_capacity: Option<f64>,
    pub gears: Option<i64>,
    pub color_options: Option<String>,
}
