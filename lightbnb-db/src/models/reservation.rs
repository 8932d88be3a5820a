//! Reservation listing rows

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Cents;

/// One reservation joined with its property and the property's average rating
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ReservationView {
    pub id: i32,
    pub title: String,
    pub cost_per_night: Cents,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: Option<f64>,
    pub cover_photo_url: String,
    pub thumbnail_photo_url: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}
