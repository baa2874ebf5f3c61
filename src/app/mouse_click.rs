//! Mouse click handling
//!
//! Clicks pick suggestions, move focus between fields, and close an open
//! suggestion panel when they land anywhere outside it and its field.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use super::form_field::FieldId;
use crate::autocomplete::{self, PopupRow};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Suggestions) => click_suggestions(app, mouse),
        Some(Region::Field(id)) => click_field(app, id),
        None => click_outside(app),
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.layout_regions.suggestions() else {
        return;
    };
    let Some(state) = app.focused_autocomplete_mut() else {
        return;
    };

    let confirmation = match autocomplete::row_at(state, area, mouse.column, mouse.row) {
        Some(PopupRow::Suggestion(idx)) => state.confirm_at(idx),
        Some(PopupRow::AddNew) => state.confirm_add_new(),
        // Border or message row
        Some(PopupRow::Message(_)) | None => return,
    };
    app.apply_confirmation(confirmation);
}

fn click_field(app: &mut App, id: FieldId) {
    if app.focus != id {
        app.focus_field(id);
        return;
    }

    // Clicking the focused field reopens a closed panel
    let text = app.focused_field().text().to_string();
    if let Some(state) = app.focused_autocomplete_mut() {
        if !state.is_visible() {
            state.open_on_focus(&text);
        }
    }
}

fn click_outside(app: &mut App) {
    if let Some(state) = app.focused_autocomplete_mut() {
        state.dismiss();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
