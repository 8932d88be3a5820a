//! Store handle and the query surface
//!
//! [`Store`] owns the sqlx `PgPool`. It is built explicitly by the process
//! entry point and passed to whoever needs it; there is no global pool.
//! Lifecycle: [`Store::connect`] -> [`Store::acquire`] / queries -> [`Store::close`].

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{
    NewProperty, NewUser, Property, PropertySearch, PropertyView, ReservationView, User,
};
use crate::repos::{PropertyRepo, ReservationRepo, UserRepo};

/// The six operations the route layer calls.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Exact match on email; `Ok(None)` when nobody has it.
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>>;

    /// Exact match on id; `Ok(None)` when missing.
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>>;

    /// Insert a user and return it with its generated id.
    async fn add_user(&self, user: NewUser) -> Result<User>;

    /// A guest's reservations, earliest start first, at most `limit`.
    async fn get_all_reservations(&self, guest_id: i32, limit: i64)
        -> Result<Vec<ReservationView>>;

    /// Properties matching `search`, cheapest first, at most `limit`.
    async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> Result<Vec<PropertyView>>;

    /// Insert a property and return it with its generated id.
    async fn add_property(&self, property: NewProperty) -> Result<Property>;
}

/// Shared handle to the LightBnB database
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    pool: PgPool,
}

impl Store {
    /// Open a pool using `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the first connection fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let options = config.connect_options()?;
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to lightbnb database"
        );
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool (tests, or a caller that manages its own).
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(StoreInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Check out a connection. It returns to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>> {
        Ok(self.inner.pool.acquire().await?)
    }

    /// Stop handing out connections and wait for checked-out ones to come back.
    pub async fn close(&self) {
        self.inner.pool.close().await;
        tracing::info!("lightbnb database pool closed");
    }

    pub fn is_closed(&self) -> bool {
        self.inner.pool.is_closed()
    }

    pub fn users(&self) -> UserRepo<'_> {
        UserRepo::new(self.pool())
    }

    pub fn reservations(&self) -> ReservationRepo<'_> {
        ReservationRepo::new(self.pool())
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(self.pool())
    }
}

#[async_trait]
impl BookingStore for Store {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        self.users().find_by_email(email).await
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        self.users().find_by_id(id).await
    }

    async fn add_user(&self, user: NewUser) -> Result<User> {
        self.users().create(&user).await
    }

    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationView>> {
        self.reservations().list_for_guest(guest_id, limit).await
    }

    async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> Result<Vec<PropertyView>> {
        self.properties().search(search, limit).await
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property> {
        self.properties().create(&property).await
    }
}
