//! Property records and listing input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{non_negative, required_text};
use super::{Cents, ValidationError};

/// Column width for the varchar property columns
const MAX_FIELD_LEN: usize = 255;

/// Property record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Minor currency units
    pub cost_per_night: Cents,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Property with its derived average review rating, for search results
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Raw listing payload, shaped like the `properties` table minus `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPropertyParams {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Minor currency units
    pub cost_per_night: Cents,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
}

/// Validated listing input for `add_property`
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty(NewPropertyParams);

impl NewProperty {
    /// Validate a listing payload.
    ///
    /// Text columns are trimmed and must be non-empty (description may be
    /// absent); cost and counts must be non-negative.
    pub fn new(params: NewPropertyParams) -> Result<Self, ValidationError> {
        let text = |field, value: &str| required_text(field, value, MAX_FIELD_LEN);

        let cost = non_negative("cost_per_night", params.cost_per_night.get())?;

        Ok(Self(NewPropertyParams {
            owner_id: params.owner_id,
            title: text("title", &params.title)?,
            description: params
                .description
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty()),
            thumbnail_photo_url: text("thumbnail_photo_url", &params.thumbnail_photo_url)?,
            cover_photo_url: text("cover_photo_url", &params.cover_photo_url)?,
            cost_per_night: Cents(cost),
            parking_spaces: non_negative("parking_spaces", params.parking_spaces)?,
            number_of_bathrooms: non_negative("number_of_bathrooms", params.number_of_bathrooms)?,
            number_of_bedrooms: non_negative("number_of_bedrooms", params.number_of_bedrooms)?,
            country: text("country", &params.country)?,
            street: text("street", &params.street)?,
            city: text("city", &params.city)?,
            province: text("province", &params.province)?,
            post_code: text("post_code", &params.post_code)?,
        }))
    }

    pub fn fields(&self) -> &NewPropertyParams {
        &self.0
    }

    pub fn owner_id(&self) -> i32 {
        self.0.owner_id
    }

    /// Same listing under a different owner.
    pub fn with_owner(mut self, owner_id: i32) -> Self {
        self.0.owner_id = owner_id;
        self
    }
}

impl TryFrom<NewPropertyParams> for NewProperty {
    type Error = ValidationError;

    fn try_from(params: NewPropertyParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}
