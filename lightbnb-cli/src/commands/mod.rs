//! Subcommands that talk to the database
//!
//! Every command is generic over [`BookingStore`] and writes JSON to the
//! given writer, so the route-layer contract can be exercised without a
//! live database.

pub mod properties;
pub mod reservations;
pub mod seed;
pub mod users;

use std::io::Write;

use anyhow::Result;
use lightbnb_db::BookingStore;
use serde::Serialize;

pub use properties::PropertiesArgs;
pub use reservations::ReservationsArgs;
pub use seed::SeedArgs;
pub use users::UserArgs;

/// A command that needs a store handle
#[derive(Debug)]
pub enum StoreCommand {
    User(UserArgs),
    Reservations(ReservationsArgs),
    Properties(PropertiesArgs),
    Seed(SeedArgs),
}

pub async fn run<S, W>(store: &S, command: StoreCommand, out: &mut W) -> Result<()>
where
    S: BookingStore + ?Sized,
    W: Write,
{
    match command {
        StoreCommand::User(args) => users::run_user(store, args, out).await,
        StoreCommand::Reservations(args) => reservations::run_reservations(store, args, out).await,
        StoreCommand::Properties(args) => properties::run_properties(store, args, out).await,
        StoreCommand::Seed(args) => seed::run_seed(store, args, out).await,
    }
}

/// Pretty JSON followed by a newline
pub(crate) fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Sample data for command tests

    use chrono::NaiveDate;
    use lightbnb_db::testing::MemoryStore;
    use lightbnb_db::{Cents, Property, ReservationView, User};

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid date")
    }

    pub fn sample_property(id: i32, owner_id: i32, city: &str, cost: i32) -> Property {
        Property {
            id,
            owner_id,
            title: format!("Property {}", id),
            description: None,
            thumbnail_photo_url: "t.jpg".into(),
            cover_photo_url: "c.jpg".into(),
            cost_per_night: Cents(cost),
            parking_spaces: 1,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
            country: "Canada".into(),
            street: "1 Main St".into(),
            city: city.into(),
            province: "British Columbia".into(),
            post_code: "V5K".into(),
        }
    }

    fn reservation(id: i32, title: &str, cost: i32, start: &str, end: &str) -> ReservationView {
        ReservationView {
            id,
            title: title.into(),
            cost_per_night: Cents(cost),
            start_date: date(start),
            end_date: date(end),
            average_rating: Some(4.0),
            cover_photo_url: "c.jpg".into(),
            thumbnail_photo_url: "t.jpg".into(),
            parking_spaces: 1,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
        }
    }

    /// One user (id 1), two reviewed listings and two reservations for guest 1
    pub fn sample_store() -> MemoryStore {
        MemoryStore::new()
            .with_user(User {
                id: 1,
                name: "Eva Stanley".into(),
                email: "eva@example.com".into(),
                password: "hash".into(),
            })
            .with_property(sample_property(1, 1, "Vancouver", 9300), Some(4.0))
            .with_property(sample_property(2, 1, "North Vancouver", 8500), Some(4.0))
            .with_reservation(1, reservation(1, "Property 1", 9300, "2018-09-11", "2018-09-26"))
            .with_reservation(1, reservation(4, "Property 2", 8500, "2014-10-21", "2014-10-23"))
    }
}
