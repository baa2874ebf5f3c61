//! Notification module for courier-desk
//!
//! Transient one-line messages shown in the bottom-right corner.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
