//! Query-string parameter types for the catalog handlers.
//!
//! Every field is captured as a raw string so a malformed value never turns
//! into an extractor rejection. Interpretation (and silent dropping of junk)
//! happens in `throttle_core::catalog`. Handlers extract these with
//! [`crate::extract::LenientQuery`], so a repeated key keeps its first value.

use serde::Deserialize;
use throttle_core::catalog::{
    clamp_limit, parse_lenient, BikeFilter, PageRequest, SortOrder, DEFAULT_RELATED_LIMIT,
    MAX_RELATED_LIMIT,
};

/// Parameters for `GET /api/bikes`.
#[derive(Debug, Default, Deserialize)]
pub struct BikeListParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "minCC")]
    pub min_cc: Option<String>,
    #[serde(rename = "maxCC")]
    pub max_cc: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub bike_type: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl BikeListParams {
    pub fn filter(&self) -> BikeFilter {
        BikeFilter::from_raw(
            self.min_price.as_deref(),
            self.max_price.as_deref(),
            self.min_cc.as_deref(),
            self.max_cc.as_deref(),
            self.brand.as_deref(),
            self.bike_type.as_deref(),
        )
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_raw(self.sort.as_deref())
    }
}

/// Parameters for `GET /api/bikes/compare/data`.
#[derive(Debug, Default, Deserialize)]
pub struct CompareParams {
    pub id1: Option<String>,
    pub id2: Option<String>,
}

/// Parameters for `GET /api/bikes/{id}/related`.
#[derive(Debug, Default, Deserialize)]
pub struct RelatedParams {
    pub limit: Option<String>,
}

impl RelatedParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(
            parse_lenient(self.limit.as_deref()),
            DEFAULT_RELATED_LIMIT,
            MAX_RELATED_LIMIT,
        )
    }
}
