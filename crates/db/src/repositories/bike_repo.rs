//! Repository for the `bikes` table.
//!
//! Listing queries are assembled with [`QueryBuilder`] so every caller-supplied
//! value is a bound parameter. The count and page queries share
//! [`push_filters`], which keeps their WHERE clauses identical.

use sqlx::{QueryBuilder, Sqlite};
use throttle_core::catalog::{BikeFilter, PageRequest, SortOrder};
use throttle_core::trending;
use throttle_core::types::DbId;

use crate::models::bike::{Bike, BikeDetail, BikeListing, ComparedBike, CreateBike};
use crate::DbPool;

/// Column list for single-table `bikes` queries.
const COLUMNS: &str = "\
    id, brand_id, model_name, price_on_road, engine_cc, type, image_url, \
    is_trending, created_at, mileage, top_speed, weight, fuel_capacity, \
    gears, color_options";

/// Column list for queries joining `bikes` with `brands`. Aliased so the
/// decoded names never depend on how SQLite labels qualified columns.
const JOINED_COLUMNS: &str = "\
    bikes.id AS id, bikes.brand_id AS brand_id, bikes.model_name AS model_name, \
    bikes.price_on_road AS price_on_road, bikes.engine_cc AS engine_cc, \
    bikes.type AS type, bikes.image_url AS image_url, \
    bikes.is_trending AS is_trending, bikes.created_at AS created_at, \
    bikes.mileage AS mileage, bikes.top_speed AS top_speed, \
    bikes.weight AS weight, bikes.fuel_capacity AS fuel_capacity, \
    bikes.gears AS gears, bikes.color_options AS color_options";

/// Brand columns included in listing rows.
const LISTING_BRAND_COLUMNS: &str =
    "brands.name AS brand_name, brands.country_of_origin AS country_of_origin";

const FROM_JOINED: &str = "FROM bikes JOIN brands ON bikes.brand_id = brands.id";

/// Append one `AND ...` clause per populated filter field.
fn push_filters(qb: &mut QueryBuilder<'_, Sqlite>, filter: &BikeFilter) {
    if let Some(min_price) = filter.min_price {
        qb.push(" AND bikes.price_on_road >= ").push_bind(min_price);
    }
    if let Some(max_price) = filter.max_price {
        qb.push(" AND bikes.price_on_road <= ").push_bind(max_price);
    }
    if let Some(min_cc) = filter.min_cc {
        qb.push(" AND bikes.engine_cc >= ").push_bind(min_cc);
    }
    if let Some(max_cc) = filter.max_cc {
        qb.push(" AND bikes.engine_cc <= ").push_bind(max_cc);
    }
    if let Some(brand) = &filter.brand {
        qb.push(" AND brands.name = ").push_bind(brand.clone());
    }
    if let Some(bike_type) = &filter.bike_type {
        qb.push(" AND bikes.type = ").push_bind(bike_type.clone());
    }
}

/// Provides data access for bikes.
pub struct BikeRepo;

impl BikeRepo {
    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// Count bikes matching `filter`, ignoring pagination.
    pub async fn count(pool: &DbPool, filter: &BikeFilter) -> Result<i64, sqlx::Error> {
        let mut qb =
            QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) {FROM_JOINED} WHERE 1=1"));
        push_filters(&mut qb, filter);
        qb.build_query_scalar::<i64>().fetch_one(pool).await
    }

    /// Fetch one page of bikes matching `filter`, in `sort` order.
    ///
    /// Returns an empty vector when nothing matches or the page is past the end.
    pub async fn list(
        pool: &DbPool,
        filter: &BikeFilter,
        sort: SortOrder,
        page: PageRequest,
    ) -> Result<Vec<BikeListing>, sqlx::Error> {
        let mut qb = QueryBuilder::<Sqlite>::new(format!(
            "SELECT {JOINED_COLUMNS}, {LISTING_BRAND_COLUMNS} {FROM_JOINED} WHERE 1=1"
        ));
        push_filters(&mut qb, filter);
        qb.push(" ORDER BY ").push(sort.order_by());
        qb.push(" LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());

        tracing::debug!(sql = qb.sql(), "Bike listing query");

        qb.build_query_as::<BikeListing>().fetch_all(pool).await
    }

    /// All trending bikes, newest first.
    pub async fn list_trending(pool: &DbPool) -> Result<Vec<BikeListing>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, {LISTING_BRAND_COLUMNS} {FROM_JOINED} \
             WHERE bikes.is_trending = ? \
             ORDER BY {}",
            SortOrder::Newest.order_by()
        );
        sqlx::query_as::<_, BikeListing>(&query)
            .bind(trending::TRENDING)
            .fetch_all(pool)
            .await
    }

    /// Bikes of the given type other than `exclude_id`, newest first.
    pub async fn list_related(
        pool: &DbPool,
        bike_type: &str,
        exclude_id: DbId,
        limit: i64,
    ) -> Result<Vec<BikeListing>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, {LISTING_BRAND_COLUMNS} {FROM_JOINED} \
             WHERE bikes.type = ? AND bikes.id <> ? \
             ORDER BY {} \
             LIMIT ?",
            SortOrder::Newest.order_by()
        );
        sqlx::query_as::<_, BikeListing>(&query)
            .bind(bike_type)
            .bind(exclude_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Single-row lookups
    // -----------------------------------------------------------------------

    /// Find a bike by id without joining its brand.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Bike>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bikes WHERE id = ?");
        sqlx::query_as::<_, Bike>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bike with every brand column, for the detail page.
    pub async fn find_detail_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<BikeDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, {LISTING_BRAND_COLUMNS}, brands.logo_url AS logo_url \
             {FROM_JOINED} WHERE bikes.id = ?"
        );
        sqlx::query_as::<_, BikeDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bike with its brand name, for side-by-side comparison.
    pub async fn find_for_compare(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ComparedBike>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}, brands.name AS brand_name {FROM_JOINED} WHERE bikes.id = ?"
        );
        sqlx::query_as::<_, ComparedBike>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Flip the trending flag of a bike and return the stored value.
    ///
    /// The read and the write run in one transaction and the new value is
    /// committed before returning. Returns `None` if the bike does not exist;
    /// the transaction is then rolled back on drop without writing anything.
    pub async fn toggle_trending(pool: &DbPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current = sqlx::query_scalar::<_, i64>("SELECT is_trending FROM bikes WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(current) = current else {
            return Ok(None);
        };

        let next = trending::toggled(current);
        sqlx::query("UPDATE bikes SET is_trending = ? WHERE id = ?")
            .bind(next)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(next))
    }

    /// Insert a bike. `created_at` defaults to now when the DTO leaves it out.
    pub async fn create(pool: &DbPool, input: &CreateBike) -> Result<Bike, sqlx::Error> {
        let query = format!(
            "INSERT INTO bikes \
                (brand_id, model_name, price_on_road, engine_cc, type, image_url, \
                 is_trending, created_at, mileage, top_speed, weight, fuel_capacity, \
                 gears, color_options) \
             VALUES (?, ?, ?, ?, ?, ?, ?, \
                 COALESCE(?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now')), \
                 ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let flag = if input.is_trending {
            trending::TRENDING
        } else {
            trending::NOT_TRENDING
        };
        let created_at = input
            .created_at
            .map(|t| t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string());

        sqlx::query_as::<_, Bike>(&query)
            .bind(input.brand_id)
            .bind(&input.model_name)
            .bind(input.price_on_road)
            .bind(input.engine_cc)
            .bind(&input.bike_type)
            .bind(&input.image_url)
            .bind(flag)
            .bind(created_at)
            .bind(input.mileage)
            .bind(input.top_speed)
            .bind(input.weight)
            .bind(input.fuel_capacity)
            .bind(input.gears)
            .bind(&input.color_options)
            .fetch_one(pool)
            .await
    }
}
