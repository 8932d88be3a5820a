//! lightbnb-db: data access for the LightBnB booking application
//!
//! Exposes the query surface consumed by the route layer:
//! user lookup/creation, reservation listing, property search/creation.
//!
//! # Design Principles
//!
//! - Explicit store handle built from [`StoreConfig`] - no module-level pool
//! - Every value reaches SQL through a bind parameter
//! - Not-found is `Ok(None)` / empty `Vec`, failures are `Err(DbError)`
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod query;
pub mod repos;
pub mod store;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use config::StoreConfig;
pub use error::{DbError, Result};
pub use models::{
    Cents, NewProperty, NewPropertyParams, NewUser, NewUserParams, PriceRange, Property,
    PropertySearch, PropertySearchParams, PropertyView, ReservationView, User, ValidationError,
};
pub use repos::{PropertyRepo, ReservationRepo, UserRepo};
pub use store::{BookingStore, Store};

/// Row cap applied when a caller does not supply a limit.
pub const DEFAULT_LIMIT: i64 = 10;
