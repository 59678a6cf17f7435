//! Response bodies for the catalog endpoints.
//!
//! The storefront reads these shapes directly (`{ bikes, pagination }`,
//! `{ bike }`, `{ bike1, bike2 }`), so they are named structs rather than
//! ad-hoc `json!` values.

use serde::Serialize;
use throttle_core::compare::Verdicts;
use throttle_core::pricing::format_lakh;
use throttle_db::models::bike::{BikeDetail, BikeListing, BikeRecord, ComparedBike};
use throttle_db::models::brand::BrandSummary;

/// Any bike shape plus its display price (`price_label`, e.g. `₹1.50L`).
#[derive(Debug, Serialize)]
pub struct PricedBike<T: Serialize> {
    #[serde(flatten)]
    pub bike: T,
    pub price_label: String,
}

impl<T: BikeRecord + Serialize> PricedBike<T> {
    pub fn new(record: T) -> Self {
        let price_label = format_lakh(record.bike().price_on_road);
        Self {
            bike: record,
            price_label,
        }
    }
}

/// Attach price labels to a list of rows.
pub fn priced<T: BikeRecord + Serialize>(records: Vec<T>) -> Vec<PricedBike<T>> {
    records.into_iter().map(PricedBike::new).collect()
}

/// Pagination metadata for `GET /api/bikes`.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

/// `GET /api/bikes`
#[derive(Debug, Serialize)]
pub struct BikePageResponse {
    pub bikes: Vec<PricedBike<BikeListing>>,
    pub pagination: PaginationMeta,
}

/// `GET /api/bikes/trending` and `GET /api/bikes/{id}/related`
#[derive(Debug, Serialize)]
pub struct BikeListResponse {
    pub bikes: Vec<PricedBike<BikeListing>>,
    pub count: usize,
}

impl BikeListResponse {
    pub fn new(bikes: Vec<BikeListing>) -> Self {
        let bikes = priced(bikes);
        Self {
            count: bikes.len(),
            bikes,
        }
    }
}

/// `GET /api/bikes/{id}`
#[derive(Debug, Serialize)]
pub struct BikeResponse {
    pub bike: PricedBike<BikeDetail>,
}

/// `GET /api/bikes/compare/data`
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub bike1: PricedBike<ComparedBike>,
    pub bike2: PricedBike<ComparedBike>,
    pub verdicts: Verdicts,
}

/// `PATCH /api/bikes/{id}/trending`
#[derive(Debug, Serialize)]
pub struct TrendingToggleResponse {
    pub message: &'static str,
    pub is_trending: bool,
}

/// `GET /api/brands`
#[derive(Debug, Serialize)]
pub struct BrandListResponse {
    pub brands: Vec<BrandSummary>,
    pub count: usize,
}
