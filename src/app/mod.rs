mod app_events;
mod app_render;
mod app_state;
mod form_field;
mod mouse_click;

// Re-export public types
pub use app_state::App;
pub use form_field::{FieldId, FormField};
