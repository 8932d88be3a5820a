//! SQL construction for queries whose shape depends on caller input

pub mod filter;

pub use filter::{property_search, PropertyFilter};
