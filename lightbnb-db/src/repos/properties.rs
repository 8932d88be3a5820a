//! Property repository
//!
//! - search: dynamic filters via [`crate::query::property_search`]
//! - create: single INSERT of every listing column; unknown owner is NotFound

use sqlx::PgPool;
use tracing::{debug, instrument};

use super::report;
use crate::error::{DbError, Result};
use crate::models::{NewProperty, Property, PropertySearch, PropertyView};
use crate::query::property_search;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search properties with their average rating, cheapest first.
    #[instrument(skip(self))]
    pub async fn search(&self, search: &PropertySearch, limit: i64) -> Result<Vec<PropertyView>> {
        let mut builder = property_search(search, limit);
        debug!(sql = builder.sql(), "property search");

        builder
            .build_query_as::<PropertyView>()
            .fetch_all(self.pool)
            .await
            .map_err(|e| report("properties.search", e))
    }

    /// Insert a property, returning the stored row with its new id.
    #[instrument(skip(self, property), fields(owner_id = property.owner_id()))]
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let p = property.fields();

        sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(p.owner_id)
        .bind(&p.title)
        .bind(&p.description)
        .bind(&p.thumbnail_photo_url)
        .bind(&p.cover_photo_url)
        .bind(p.cost_per_night)
        .bind(p.parking_spaces)
        .bind(p.number_of_bathrooms)
        .bind(p.number_of_bedrooms)
        .bind(&p.country)
        .bind(&p.street)
        .bind(&p.city)
        .bind(&p.province)
        .bind(&p.post_code)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            report(
                "properties.create",
                DbError::missing_reference(e, "user", p.owner_id),
            )
        })
    }
}
