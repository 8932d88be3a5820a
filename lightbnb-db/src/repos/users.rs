//! User repository
//!
//! - find_by_email / find_by_id: exact match, `Ok(None)` when missing
//! - create: INSERT ... RETURNING, unique email enforced by the table

use sqlx::PgPool;
use tracing::instrument;

use super::report;
use crate::error::{DbError, Result};
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email.
    #[instrument(skip(self, email))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE users.email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| report("users.find_by_email", e))
    }

    /// Get a single user by id.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE users.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| report("users.find_by_id", e))
    }

    /// Insert a user, returning the stored row with its new id.
    ///
    /// A duplicate email comes back as [`DbError::Conflict`].
    #[instrument(skip(self, user), fields(user_id = tracing::field::Empty))]
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(user.name())
        .bind(user.email())
        .bind(user.password())
        .fetch_one(self.pool)
        .await
        .map_err(|e| report("users.create", DbError::conflict_on_unique(e, "user", "email")))?;

        tracing::Span::current().record("user_id", created.id);
        Ok(created)
    }
}
