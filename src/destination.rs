//! Destination email auto-fill
//!
//! When the destination of a courier changes, look the new value up among
//! branches and then users and fill the destination email from the first hit.

mod resolver;

pub use resolver::{DestinationMatch, apply_destination_change, resolve_destination};
