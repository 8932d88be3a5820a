//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric field below zero
    Negative { field: &'static str },

    /// Amount does not fit the stored integer column
    OutOfRange { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::OutOfRange { field } => write!(f, "{} is out of range", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `s` and check it is non-empty and at most `max` characters.
pub(crate) fn required_text(
    field: &'static str,
    s: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}

pub(crate) fn non_negative(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value < 0 {
        Err(ValidationError::Negative { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "title",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "title exceeds maximum length of 255 characters"
        );
    }

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text("name", "  Ada ", 10).unwrap(), "Ada");
        assert_eq!(
            required_text("name", "   ", 10),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            required_text("name", "abcdef", 5),
            Err(ValidationError::TooLong {
                field: "name",
                max: 5
            })
        );
    }

    #[test]
    fn non_negative_rejects_below_zero() {
        assert_eq!(non_negative("parking_spaces", 0), Ok(0));
        assert!(non_negative("parking_spaces", -1).is_err());
    }
}
