//! Listing filters, pagination and sort keys for the bike catalog.
//!
//! Query-string values arrive as raw strings. Anything that does not parse
//! is dropped rather than rejected: a malformed `minPrice` behaves exactly
//! like an absent one, and a malformed `page` falls back to the first page.

use std::str::FromStr;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when `page` is missing or unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `limit` is missing or unusable.
pub const DEFAULT_LIMIT: i64 = 12;

/// Upper bound on a single page.
pub const MAX_LIMIT: i64 = 100;

/// Default number of related bikes returned for a detail page.
pub const DEFAULT_RELATED_LIMIT: i64 = 3;

/// Maximum number of related bikes.
pub const MAX_RELATED_LIMIT: i64 = 12;

// ---------------------------------------------------------------------------
// Raw value helpers
// ---------------------------------------------------------------------------

/// Trim a raw query value, treating blank strings as absent.
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a raw query value, returning `None` when it is blank or malformed.
pub fn parse_lenient<T: FromStr>(raw: Option<&str>) -> Option<T> {
    non_empty(raw).and_then(|s| s.parse().ok())
}

/// Parse a float filter. Non-finite values (`NaN`, `inf`) are dropped too.
fn parse_amount(raw: Option<&str>) -> Option<f64> {
    parse_lenient::<f64>(raw).filter(|v| v.is_finite())
}

/// Parse an entity id taken from a path or query string.
///
/// Unlike filters, a malformed id is an error: the caller asked for a
/// specific record and must be told the request itself was wrong.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid bike id: {raw}")))
}

/// Clamp a user-provided limit into `1..=max`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l >= 1 => l.min(max),
        _ => default,
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Optional listing filters. Every populated field narrows the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BikeFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_cc: Option<i64>,
    pub max_cc: Option<i64>,
    /// Exact brand name (`brands.name`).
    pub brand: Option<String>,
    /// Exact bike type (`bikes.type`), e.g. `Cruiser`.
    pub bike_type: Option<String>,
}

impl BikeFilter {
    /// Build a filter from raw query-string values, silently dropping any
    /// value that is blank or does not parse.
    pub fn from_raw(
        min_price: Option<&str>,
        max_price: Option<&str>,
        min_cc: Option<&str>,
        max_cc: Option<&str>,
        brand: Option<&str>,
        bike_type: Option<&str>,
    ) -> Self {
        Self {
            min_price: parse_amount(min_price),
            max_price: parse_amount(max_price),
            min_cc: parse_lenient(min_cc),
            max_cc: parse_lenient(max_cc),
            brand: non_empty(brand).map(str::to_string),
            bike_type: non_empty(bike_type).map(str::to_string),
        }
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A validated page request (`page >= 1`, `1 <= limit <= MAX_LIMIT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Parse `page` / `limit` query values, falling back to the defaults for
    /// anything missing, malformed or below one.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = parse_lenient::<i64>(page)
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = clamp_limit(parse_lenient(limit), DEFAULT_LIMIT, MAX_LIMIT);
        Self { page, limit }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Number of pages needed to show `total` rows, `limit` at a time.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Listing order. The query-string keys match the ones the storefront
/// already sends (`price-low`, `price-high`, `mileage`, `speed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Mileage,
    Speed,
}

impl SortOrder {
    /// Parse a sort key. Unknown or blank keys fall back to [`SortOrder::Newest`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        match non_empty(raw) {
            Some("price-low") => Self::PriceLow,
            Some("price-high") => Self::PriceHigh,
            Some("mileage") => Self::Mileage,
            Some("speed") => Self::Speed,
            _ => Self::Newest,
        }
    }

    /// The query-string key for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Mileage => "mileage",
            Self::Speed => "speed",
        }
    }

    /// `ORDER BY` body against the `bikes` table. Always ends in an id
    /// tiebreak so pages never overlap.
    ///
    /// `created_at` is compared through `julianday()` so rows written as
    /// `YYYY-MM-DD HH:MM:SS` and as ISO-8601 `...T...Z` interleave by time.
    pub fn order_by(&self) -> &'static str {
        match self {
            Self::Newest => "julianday(bikes.created_at) DESC, bikes.id DESC",
            Self::PriceLow => "bikes.price_on_road ASC, bikes.id ASC",
            Self::PriceHigh => "bikes.price_on_road DESC, bikes.id DESC",
            Self::Mileage => "COALESCE(bikes.mileage, 0) DESC, bikes.id DESC",
            Self::Speed => "COALESCE(bikes.top_speed, 0) DESC, bikes.id DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
