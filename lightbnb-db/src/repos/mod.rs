//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Every value is bound, never interpolated
//! - Uses JOINs for listings (no N+1)
//! - Relies on DB constraints for uniqueness (no check-then-insert)
//! - Logs store failures, then returns them to the caller

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;

use crate::error::DbError;

/// Log a failed operation and hand the error back for propagation.
pub(crate) fn report(operation: &'static str, err: impl Into<DbError>) -> DbError {
    let err = err.into();
    if err.is_store_failure() {
        tracing::warn!(operation, error = %err, "query failed");
    } else {
        tracing::debug!(operation, error = %err, "query rejected");
    }
    err
}
