//! User records and registration input

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required_text;
use super::ValidationError;

/// Column width for users.name / users.email / users.password
const MAX_FIELD_LEN: usize = 255;

/// Loose email shape: something@something.tld, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Validated registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    password: String,
}

impl NewUser {
    /// Create registration input, validating each field.
    ///
    /// # Rules
    /// - Name non-empty after trimming, max 255 characters
    /// - Email shaped like `local@domain.tld`, max 255 characters
    /// - Password non-empty; stored as given
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", "secret").is_ok());
    /// assert!(NewUser::new("Ada", "not-an-email", "secret").is_err());
    /// ```
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let name = required_text("name", name, MAX_FIELD_LEN)?;
        let email = required_text("email", email, MAX_FIELD_LEN)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }

        if password.is_empty() {
            return Err(ValidationError::Empty { field: "password" });
        }

        if password.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::TooLong {
                field: "password",
                max: MAX_FIELD_LEN,
            });
        }

        Ok(Self {
            name,
            email,
            password: password.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Raw registration payload, as found in fixtures or request bodies
#[derive(Debug, Clone, Deserialize)]
pub struct NewUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<NewUserParams> for NewUser {
    type Error = ValidationError;

    fn try_from(params: NewUserParams) -> Result<Self, Self::Error> {
        Self::new(&params.name, &params.email, &params.password)
    }
}
