//! Suggestion popup rendering
//!
//! Draws the panel under its field and maps clicks on the panel back to rows.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::{AutocompleteState, PanelContent};
use super::filter::MIN_QUERY_CHARS;
use crate::widgets::popup;

pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MIN_POPUP_WIDTH: u16 = 28;
const MAX_POPUP_WIDTH: u16 = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
// Two borders plus one column of right padding
const POPUP_CHROME_WIDTH: u16 = 3;

/// One line inside the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupRow {
    Message(String),
    /// Index into the filtered suggestions
    Suggestion(usize),
    AddNew,
}

/// First filtered index shown so the highlight stays inside a `window`-row view
pub fn scroll_offset(count: usize, highlighted: Option<usize>, window: usize) -> usize {
    match highlighted {
        Some(idx) if window > 0 && idx >= window => {
            (idx + 1 - window).min(count.saturating_sub(window))
        }
        _ => 0,
    }
}

/// Rows to draw when at most `max_rows` fit inside the border
///
/// The suggestion window shrinks first so the message and "add new" rows
/// stay visible on short terminals.
pub fn popup_rows(state: &AutocompleteState, max_rows: usize) -> Vec<PopupRow> {
    let add_new = state.shows_add_new();
    let reserved = usize::from(add_new);

    let mut rows = match state.content() {
        PanelContent::Hidden => return Vec::new(),
        PanelContent::TypeMore => vec![PopupRow::Message(format!(
            "Type {}+ characters to search",
            MIN_QUERY_CHARS
        ))],
        PanelContent::NoMatches => vec![PopupRow::Message("No matches".to_string())],
        PanelContent::Options => {
            let count = state.suggestion_count();
            let window = MAX_VISIBLE_SUGGESTIONS.min(max_rows.saturating_sub(reserved));
            let start = scroll_offset(count, state.highlighted_index(), window);
            let end = (start + window).min(count);
            (start..end).map(PopupRow::Suggestion).collect()
        }
    };

    if add_new {
        rows.push(PopupRow::AddNew);
    }
    rows.truncate(max_rows);
    rows
}

fn row_text(state: &AutocompleteState, row: &PopupRow) -> String {
    match row {
        PopupRow::Message(text) => format!("  {}", text),
        PopupRow::Suggestion(idx) => {
            let label = state.suggestion(*idx).map(display_label).unwrap_or_default();
            let marker = if state.highlighted_index() == Some(*idx) {
                "► "
            } else {
                "  "
            };
            format!("{}{}", marker, label)
        }
        PopupRow::AddNew => format!("+ Add \"{}\"", state.query()),
    }
}

// Options with an empty label still need something readable
fn display_label(option: &super::SelectOption) -> &str {
    if option.label.is_empty() {
        &option.value
    } else {
        &option.label
    }
}

fn row_style(state: &AutocompleteState, row: &PopupRow) -> Style {
    match row {
        PopupRow::Message(_) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        PopupRow::Suggestion(idx) if state.highlighted_index() == Some(*idx) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        PopupRow::Suggestion(_) => Style::default().fg(Color::White),
        PopupRow::AddNew => Style::default().fg(Color::Green),
    }
}

/// Where the popup for `state` would be drawn, if it is shown at all
pub fn popup_area(state: &AutocompleteState, frame_area: Rect, anchor: Rect) -> Option<Rect> {
    let rows = popup_rows(state, row_budget(frame_area, anchor));
    if rows.is_empty() {
        return None;
    }

    let text_width = rows
        .iter()
        .map(|row| row_text(state, row).width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let width = (text_width + POPUP_CHROME_WIDTH).clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let height = rows.len() as u16 + POPUP_BORDER_HEIGHT;

    Some(popup::popup_below_anchor(frame_area, anchor, width, height))
}

// Rows that fit inside the border on the roomier side of the anchor
fn row_budget(frame_area: Rect, anchor: Rect) -> usize {
    let bottom = anchor.y.saturating_add(anchor.height);
    let space_below = (frame_area.y + frame_area.height).saturating_sub(bottom);
    let space_above = anchor.y.saturating_sub(frame_area.y);
    space_below.max(space_above).saturating_sub(POPUP_BORDER_HEIGHT) as usize
}

fn rows_in(area: Rect) -> usize {
    area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize
}

/// Render the suggestion panel under `anchor`; returns the area drawn
pub fn render_popup(state: &AutocompleteState, frame: &mut Frame, anchor: Rect) -> Option<Rect> {
    let area = popup_area(state, frame.area(), anchor)?;

    let items: Vec<ListItem> = popup_rows(state, rows_in(area))
        .iter()
        .map(|row| {
            ListItem::new(Line::from(Span::styled(
                row_text(state, row),
                row_style(state, row),
            )))
        })
        .collect();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, area);

    Some(area)
}

/// Map a screen position inside the popup to the row under it
pub fn row_at(state: &AutocompleteState, area: Rect, column: u16, row: u16) -> Option<PopupRow> {
    let inner_left = area.x + 1;
    let inner_right = area.x + area.width.saturating_sub(1);
    let inner_top = area.y + 1;
    let inner_bottom = area.y + area.height.saturating_sub(1);
    if column < inner_left || column >= inner_right || row < inner_top || row >= inner_bottom {
        return None;
    }

    popup_rows(state, rows_in(area))
        .into_iter()
        .nth((row - inner_top) as usize)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
