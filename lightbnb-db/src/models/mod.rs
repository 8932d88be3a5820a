//! Domain models with validation at construction
//!
//! New records are validated when created.
//! Invalid input returns ValidationError, not panic.

pub mod money;
pub mod property;
pub mod reservation;
pub mod search;
pub mod user;
pub mod validation;

pub use money::Cents;
pub use property::{NewProperty, NewPropertyParams, Property, PropertyView};
pub use reservation::ReservationView;
pub use search::{PriceRange, PropertySearch, PropertySearchParams};
pub use user::{NewUser, NewUserParams, User};
pub use validation::ValidationError;
