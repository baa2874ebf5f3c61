use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use super::*;
use crate::autocomplete::SelectOption;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_to_string(state: &AutocompleteState, anchor: Rect, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal
        .draw(|f| {
            render_popup(state, f, anchor);
        })
        .unwrap();
    terminal.backend().to_string()
}

fn many_options(n: usize) -> Vec<SelectOption> {
    (0..n)
        .map(|i| SelectOption::new(format!("Branch {i}"), format!("Branch {i} (B{i:02})")))
        .collect()
}

#[test]
fn snapshot_type_more_prompt() {
    let mut state = AutocompleteState::new(many_options(3));
    state.update_query("b");

    let output = render_to_string(&state, Rect::new(0, 0, 40, 3), 40, 6);
    assert_snapshot!(output, @r###"
"                                        "
"                                        "
"                                        "
"┌ Suggestions ──────────────────┐       "
"│  Type 2+ characters to search │       "
"└───────────────────────────────┘       "
"###);
}

#[test]
fn test_hidden_state_draws_nothing() {
    let state = AutocompleteState::new(many_options(3));
    let mut terminal = create_test_terminal(40, 10);
    let mut drawn = Some(Rect::default());
    terminal
        .draw(|f| {
            drawn = render_popup(&state, f, Rect::new(0, 0, 40, 3));
        })
        .unwrap();
    assert!(drawn.is_none());
}

#[test]
fn test_no_matches_and_add_new_rows() {
    let mut state = AutocompleteState::new(many_options(3)).with_add_new();
    state.update_query("Satara");

    let output = render_to_string(&state, Rect::new(0, 0, 40, 3), 40, 10);
    assert!(output.contains("No matches"));
    assert!(output.contains("+ Add \"Satara\""));
}

#[test]
fn test_highlighted_row_has_marker() {
    let mut state = AutocompleteState::new(many_options(3));
    state.open_on_focus("");
    state.select_next();
    state.select_next();

    let output = render_to_string(&state, Rect::new(0, 0, 40, 3), 40, 10);
    assert!(output.contains("► Branch 1 (B01)"));
    assert!(output.contains("  Branch 0 (B00)"));
}

#[test]
fn test_long_list_is_windowed() {
    let mut state = AutocompleteState::new(many_options(20));
    state.open_on_focus("");

    let rows = popup_rows(&state, 20);
    assert_eq!(rows.len(), MAX_VISIBLE_SUGGESTIONS);
    assert_eq!(rows[0], PopupRow::Suggestion(0));
}

#[test]
fn test_window_follows_highlight() {
    let mut state = AutocompleteState::new(many_options(20));
    state.open_on_focus("");
    for _ in 0..12 {
        state.select_next();
    }
    // highlight is at index 11
    let rows = popup_rows(&state, 20);
    assert_eq!(rows.first(), Some(&PopupRow::Suggestion(4)));
    assert_eq!(rows.last(), Some(&PopupRow::Suggestion(11)));
}

#[test]
fn test_scroll_offset_clamped_to_end() {
    assert_eq!(scroll_offset(20, Some(19), 8), 12);
    assert_eq!(scroll_offset(5, Some(4), 8), 0);
    assert_eq!(scroll_offset(5, None, 8), 0);
    assert_eq!(scroll_offset(5, Some(4), 3), 2);
    assert_eq!(scroll_offset(5, Some(4), 0), 0);
}

#[test]
fn test_short_budget_keeps_add_new_and_highlight() {
    let mut state = AutocompleteState::new(many_options(20)).with_add_new();
    state.update_query("Branch");
    for _ in 0..6 {
        state.select_next();
    }

    // highlight at 5, three rows available: two suggestions plus add-new
    let rows = popup_rows(&state, 3);
    assert_eq!(
        rows,
        vec![
            PopupRow::Suggestion(4),
            PopupRow::Suggestion(5),
            PopupRow::AddNew
        ]
    );
}

#[test]
fn test_popup_shrinks_to_fit_cramped_terminal() {
    let mut state = AutocompleteState::new(many_options(20)).with_add_new();
    state.update_query("Branch");
    for _ in 0..10 {
        state.select_next();
    }

    // 12-row frame, anchor in the middle: 5 rows below, 4 above
    let frame = Rect::new(0, 0, 80, 12);
    let anchor = Rect::new(0, 4, 40, 3);
    let area = popup_area(&state, frame, anchor).unwrap();
    assert_eq!(area, Rect::new(0, 7, area.width, 5));

    let output = render_to_string(&state, anchor, 80, 12);
    assert!(output.contains("► Branch 9 (B09)"));
    assert!(output.contains("+ Add \"Branch\""));
    assert_eq!(
        row_at(&state, area, area.x + 2, area.y + 3),
        Some(PopupRow::AddNew)
    );
}

#[test]
fn test_row_at_maps_clicks() {
    let mut state = AutocompleteState::new(many_options(3)).with_add_new();
    state.open_on_focus("Bra");
    let area = popup_area(&state, Rect::new(0, 0, 80, 24), Rect::new(0, 0, 40, 3)).unwrap();

    // Border rows and columns are not rows
    assert_eq!(row_at(&state, area, area.x, area.y + 1), None);
    assert_eq!(row_at(&state, area, area.x + 2, area.y), None);

    assert_eq!(
        row_at(&state, area, area.x + 2, area.y + 1),
        Some(PopupRow::Suggestion(0))
    );
    assert_eq!(
        row_at(&state, area, area.x + 2, area.y + 4),
        Some(PopupRow::AddNew)
    );
}

#[test]
fn test_popup_sits_under_anchor() {
    let mut state = AutocompleteState::new(many_options(3));
    state.open_on_focus("");
    let area = popup_area(&state, Rect::new(0, 0, 80, 24), Rect::new(5, 2, 40, 3)).unwrap();

    assert_eq!(area.x, 5);
    assert_eq!(area.y, 5);
    assert_eq!(area.height, 5);
}
