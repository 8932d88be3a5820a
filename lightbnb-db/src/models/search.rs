//! Property search options

use serde::Deserialize;

use super::{Cents, ValidationError};

/// Inclusive nightly price bounds, in minor units.
///
/// Both bounds travel together; there is no half-open range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Cents,
    pub max: Cents,
}

impl PriceRange {
    pub fn new(min: Cents, max: Cents) -> Self {
        Self { min, max }
    }

    /// Build from whole-unit bounds (e.g. dollars), scaling each by 100.
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::{Cents, PriceRange};
    ///
    /// let range = PriceRange::from_major(50, 100).unwrap();
    /// assert_eq!(range.min, Cents(5000));
    /// assert_eq!(range.max, Cents(10000));
    /// ```
    pub fn from_major(min: i32, max: i32) -> Result<Self, ValidationError> {
        Ok(Self {
            min: Cents::from_major(min)?,
            max: Cents::from_major(max)?,
        })
    }

    pub fn contains(&self, cost: Cents) -> bool {
        self.min <= cost && cost <= self.max
    }
}

/// Typed filters for `get_all_properties`. All filters are optional and
/// combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySearch {
    /// Substring of `city` (case-sensitive)
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub price: Option<PriceRange>,
    /// Lower bound on the average review rating
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }
}

/// Loosely-typed search options, as sent by a search form or query string.
///
/// Prices are in whole units. `minumum_rating` is accepted as an alias
/// for `minimum_rating`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertySearchParams {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    #[serde(alias = "minumum_rating")]
    pub minimum_rating: Option<f64>,
}

impl TryFrom<PropertySearchParams> for PropertySearch {
    type Error = ValidationError;

    fn try_from(params: PropertySearchParams) -> Result<Self, Self::Error> {
        let price = match (params.minimum_price_per_night, params.maximum_price_per_night) {
            (Some(min), Some(max)) => Some(PriceRange::from_major(min, max)?),
            (None, None) => None,
            (min, max) => {
                tracing::debug!(?min, ?max, "ignoring price filter without both bounds");
                None
            }
        };

        let city = params
            .city
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());

        if let Some(rating) = params.minimum_rating {
            if !rating.is_finite() {
                return Err(ValidationError::InvalidFormat {
                    field: "minimum_rating",
                    reason: "must be a finite number",
                });
            }
        }

        Ok(Self {
            city,
            owner_id: params.owner_id,
            price,
            minimum_rating: params.minimum_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_scale_price_to_cents() {
        let params = PropertySearchParams {
            minimum_price_per_night: Some(50),
            maximum_price_per_night: Some(100),
            ..Default::default()
        };
        let search = PropertySearch::try_from(params).unwrap();
        assert_eq!(
            search.price,
            Some(PriceRange::new(Cents(5000), Cents(10000)))
        );
    }

    #[test]
    fn lone_price_bound_is_dropped() {
        let params = PropertySearchParams {
            minimum_price_per_night: Some(50),
            ..Default::default()
        };
        let search = PropertySearch::try_from(params).unwrap();
        assert!(search.price.is_none());
        assert_eq!(search, PropertySearch::default());
    }

    #[test]
    fn zero_price_is_a_bound() {
        let params = PropertySearchParams {
            minimum_price_per_night: Some(0),
            maximum_price_per_night: Some(80),
            ..Default::default()
        };
        let search = PropertySearch::try_from(params).unwrap();
        assert_eq!(search.price, Some(PriceRange::new(Cents(0), Cents(8000))));
    }

    #[test]
    fn misspelled_rating_alias() {
        let params: PropertySearchParams =
            serde_json::from_str(r#"{"city": "Vancouver", "minumum_rating": 4}"#).unwrap();
        assert_eq!(params.minimum_rating, Some(4.0));

        let params: PropertySearchParams =
            serde_json::from_str(r#"{"minimum_rating": 3.5}"#).unwrap();
        assert_eq!(params.minimum_rating, Some(3.5));
    }

    #[test]
    fn blank_city_is_ignored() {
        let params = PropertySearchParams {
            city: Some("  ".into()),
            ..Default::default()
        };
        assert!(PropertySearch::try_from(params).unwrap().city.is_none());
    }

    #[test]
    fn range_contains_is_inclusive() {
        let range = PriceRange::from_major(50, 100).unwrap();
        assert!(range.contains(Cents(5000)));
        assert!(range.contains(Cents(10000)));
        assert!(!range.contains(Cents(10001)));
        assert!(!range.contains(Cents(4999)));
    }
}
