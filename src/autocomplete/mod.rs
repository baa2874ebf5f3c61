//! Searchable selection with inline "add new"
//!
//! [`AutocompleteState`] filters caller-supplied [`SelectOption`]s against the
//! text of a form field and tracks keyboard highlight. It never owns the field
//! text and never fetches data.

mod autocomplete_render;
mod autocomplete_state;
mod filter;
mod option;

pub use autocomplete_render::{
    MAX_VISIBLE_SUGGESTIONS, PopupRow, popup_area, popup_rows, render_popup, row_at,
};
pub use autocomplete_state::{AutocompleteState, Confirmation, PanelContent};
pub use filter::{
    FilterMode, FilterOutcome, MIN_QUERY_CHARS, exact_value_match, filter_options, offers_add_new,
};
pub use option::SelectOption;
