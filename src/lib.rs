//! courier-desk: terminal back-office for booking couriers.
//!
//! The interesting pieces are the [`autocomplete`] suggestion engine and the
//! [`destination`] resolver that fills the destination email from the branch
//! and user directories.

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod config;
pub mod destination;
pub mod directory;
pub mod error;
pub mod layout;
pub mod notification;
pub mod stats;
pub mod widgets;

#[cfg(test)]
mod test_utils;
