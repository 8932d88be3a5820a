//! Money in minor currency units
//!
//! `cost_per_night` is stored in cents. Callers filtering by price speak
//! whole currency units; [`Cents::from_major`] is the one place that
//! converts between the two.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Minor units per major unit
pub const MINOR_PER_MAJOR: i32 = 100;

/// Amount in minor currency units, as persisted in `cost_per_night`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(pub i32);

impl Cents {
    /// Scale a whole-unit amount (e.g. dollars per night) to cents.
    pub fn from_major(major: i32) -> Result<Self, ValidationError> {
        major
            .checked_mul(MINOR_PER_MAJOR)
            .map(Self)
            .ok_or(ValidationError::OutOfRange {
                field: "price per night",
            })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_major_units() {
        assert_eq!(Cents::from_major(50), Ok(Cents(5000)));
        assert_eq!(Cents::from_major(0), Ok(Cents(0)));
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(Cents::from_major(i32::MAX).is_err());
    }
}
