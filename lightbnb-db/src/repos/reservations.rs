//! Reservation repository
//!
//! Read-only: a guest's reservations joined with property and review average.

use sqlx::PgPool;
use tracing::instrument;

use super::report;
use crate::error::Result;
use crate::models::ReservationView;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's reservations, earliest start date first.
    ///
    /// Single query: JOIN properties and property_reviews, GROUP BY for the
    /// average rating. Empty when the guest has no reservations.
    #[instrument(skip(self))]
    pub async fn list_for_guest(&self, guest_id: i32, limit: i64) -> Result<Vec<ReservationView>> {
        sqlx::query_as::<_, ReservationView>(
            r#"
            SELECT
                reservations.id,
                properties.title,
                properties.cost_per_night,
                reservations.start_date,
                reservations.end_date,
                avg(property_reviews.rating)::float8 AS average_rating,
                properties.cover_photo_url,
                properties.thumbnail_photo_url,
                properties.parking_spaces,
                properties.number_of_bathrooms,
                properties.number_of_bedrooms
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| report("reservations.list_for_guest", e))
    }
}
