//! Repository for the `brands` table.

use crate::models::brand::{Brand, BrandSummary, CreateBrand};
use crate::DbPool;

/// Column list for `brands` queries.
const COLUMNS: &str = "id, name, country_of_origin, logo_url";

/// Provides data access for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// List every brand, alphabetically, with its bike count.
    ///
    /// Brands without bikes are included with a count of zero.
    pub async fn list_with_counts(pool: &DbPool) -> Result<Vec<BrandSummary>, sqlx::Error> {
        sqlx::query_as::<_, BrandSummary>(
            "SELECT brands.id AS id, brands.name AS name, \
                    brands.country_of_origin AS country_of_origin, \
                    brands.logo_url AS logo_url, \
                    COUNT(bikes.id) AS bike_count \
             FROM brands \
             LEFT JOIN bikes ON bikes.brand_id = brands.id \
             GROUP BY brands.id \
             ORDER BY brands.name",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a brand. Fails with a unique violation if the name is taken.
    pub async fn create(pool: &DbPool, input: &CreateBrand) -> Result<Brand, sqlx::Error> {
        let query = format!(
            "INSERT INTO brands (name, country_of_origin, logo_url) \
             VALUES (?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(&input.name)
            .bind(&input.country_of_origin)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }
}
