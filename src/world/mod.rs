//! World module
//!
//! The five locations and the roads between them.

pub mod location;

pub use location::{travel, Location, TravelError};
