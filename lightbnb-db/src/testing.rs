//! In-memory [`BookingStore`] for exercising code built on the store
//!
//! Mirrors what the Postgres store does for the cases tests care about:
//! unique emails, owner foreign keys, the inner review join on search,
//! cheapest-first and earliest-first ordering, and row limits.
//!
//! Enabled for this crate's tests and for dependents via the
//! `test-util` feature.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{DbError, Result};
use crate::models::{
    NewProperty, NewUser, Property, PropertySearch, PropertyView, ReservationView, User,
};
use crate::store::BookingStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: Mutex<Vec<User>>,
    /// Properties with their average rating; `None` means no reviews
    pub properties: Mutex<Vec<PropertyView>>,
    /// Reservations keyed by guest id
    pub reservations: Mutex<Vec<(i32, ReservationView)>>,
    /// Most recent `get_all_properties` arguments
    pub last_search: Mutex<Option<(PropertySearch, i64)>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        lock(&self.users).push(user);
        self
    }

    pub fn with_property(self, property: Property, average_rating: Option<f64>) -> Self {
        lock(&self.properties).push(PropertyView {
            property,
            average_rating,
        });
        self
    }

    pub fn with_reservation(self, guest_id: i32, reservation: ReservationView) -> Self {
        lock(&self.reservations).push((guest_id, reservation));
        self
    }

    /// Stored property rows, in insertion order.
    pub fn property_rows(&self) -> Vec<Property> {
        lock(&self.properties)
            .iter()
            .map(|view| view.property.clone())
            .collect()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        Ok(lock(&self.users).iter().find(|u| u.email == email).cloned())
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        Ok(lock(&self.users).iter().find(|u| u.id == id).cloned())
    }

    async fn add_user(&self, user: NewUser) -> Result<User> {
        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email == user.email()) {
            return Err(DbError::Conflict {
                resource: "user",
                field: "email",
            });
        }

        let stored = User {
            id: users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            password: user.password().to_owned(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationView>> {
        let mut rows: Vec<_> = lock(&self.reservations)
            .iter()
            .filter(|(guest, _)| *guest == guest_id)
            .map(|(_, reservation)| reservation.clone())
            .collect();
        rows.sort_by_key(|r| r.start_date);
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> Result<Vec<PropertyView>> {
        *lock(&self.last_search) = Some((search.clone(), limit));

        let mut rows: Vec<_> = lock(&self.properties)
            .iter()
            .filter(|view| {
                let p = &view.property;
                let Some(rating) = view.average_rating else {
                    return false;
                };
                search.city.as_ref().map_or(true, |c| p.city.contains(c.as_str()))
                    && search.owner_id.map_or(true, |o| p.owner_id == o)
                    && search.price.map_or(true, |r| r.contains(p.cost_per_night))
                    && search.minimum_rating.map_or(true, |m| rating >= m)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|view| view.property.cost_per_night);
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property> {
        let owner_id = property.owner_id();
        if !lock(&self.users).iter().any(|u| u.id == owner_id) {
            return Err(DbError::NotFound {
                resource: "user",
                id: owner_id.to_string(),
            });
        }

        let mut properties = lock(&self.properties);
        let p = property.fields().clone();
        let stored = Property {
            id: properties.iter().map(|v| v.property.id).max().unwrap_or(0) + 1,
            owner_id: p.owner_id,
            title: p.title,
            description: p.description,
            thumbnail_photo_url: p.thumbnail_photo_url,
            cover_photo_url: p.cover_photo_url,
            cost_per_night: p.cost_per_night,
            parking_spaces: p.parking_spaces,
            number_of_bathrooms: p.number_of_bathrooms,
            number_of_bedrooms: p.number_of_bedrooms,
            country: p.country,
            street: p.street,
            city: p.city,
            province: p.province,
            post_code: p.post_code,
        };
        properties.push(PropertyView {
            property: stored.clone(),
            average_rating: None,
        });
        Ok(stored)
    }
}
