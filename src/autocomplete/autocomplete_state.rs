use super::filter::{FilterMode, FilterOutcome, filter_options, offers_add_new};
use super::option::SelectOption;

/// What the suggestion panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent {
    Hidden,
    /// Typed query too short to search
    TypeMore,
    /// Query long enough but nothing matched
    NoMatches,
    Options,
}

/// Result of confirming the panel (Enter or a click on a row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Write this value into the field and move focus on
    Selected(String),
    /// Create a new entry from the literal query
    AddNew(String),
    /// Nothing to confirm; state unchanged
    Unchanged,
}

/// Suggestion engine state for one field
///
/// The field text itself belongs to the form. The engine only keeps the last
/// query it was shown so it can filter and decide whether to offer "add new".
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    options: Vec<SelectOption>,
    allow_add_new: bool,
    visible: bool,
    mode: FilterMode,
    query: String,
    outcome: FilterOutcome,
    highlighted: Option<usize>,
}

impl AutocompleteState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_add_new(mut self) -> Self {
        self.allow_add_new = true;
        self
    }

    pub fn allows_add_new(&self) -> bool {
        self.allow_add_new
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.refilter();
    }

    pub fn push_option(&mut self, option: SelectOption) {
        self.options.push(option);
        self.refilter();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open because the field gained focus; lists every option
    pub fn open_on_focus(&mut self, query: &str) {
        self.visible = true;
        self.mode = FilterMode::Focus;
        self.query = query.to_string();
        self.refilter();
    }

    /// The field text changed; re-filter in typed mode
    pub fn update_query(&mut self, query: &str) {
        self.visible = true;
        self.mode = FilterMode::Typed;
        self.query = query.to_string();
        self.refilter();
    }

    /// Close without touching the field (Esc, click outside, focus loss)
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    fn refilter(&mut self) {
        if !self.visible {
            return;
        }

        let outcome = filter_options(&self.query, &self.options, self.mode);
        if outcome != self.outcome {
            self.highlighted = None;
        }
        self.outcome = outcome;
    }

    /// Filtered options in display order; empty while hidden
    pub fn suggestions(&self) -> impl Iterator<Item = &SelectOption> + '_ {
        let indices: &[usize] = if self.visible {
            self.outcome.indices()
        } else {
            &[]
        };
        indices.iter().filter_map(|&idx| self.options.get(idx))
    }

    pub fn suggestion_count(&self) -> usize {
        if self.visible { self.outcome.len() } else { 0 }
    }

    pub fn suggestion(&self, index: usize) -> Option<&SelectOption> {
        self.suggestions().nth(index)
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted(&self) -> Option<&SelectOption> {
        self.highlighted.and_then(|idx| self.suggestion(idx))
    }

    pub fn select_next(&mut self) {
        let count = self.suggestion_count();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(idx) => (idx + 1).min(count - 1),
        });
    }

    pub fn select_previous(&mut self) {
        if self.suggestion_count() == 0 {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |idx| idx.saturating_sub(1)));
    }

    pub fn content(&self) -> PanelContent {
        if !self.visible {
            return PanelContent::Hidden;
        }
        match &self.outcome {
            FilterOutcome::NeedsMoreInput => PanelContent::TypeMore,
            FilterOutcome::Matches(indices) if indices.is_empty() => PanelContent::NoMatches,
            FilterOutcome::Matches(_) => PanelContent::Options,
        }
    }

    /// Whether the "add new" row is shown for the current query
    pub fn shows_add_new(&self) -> bool {
        self.visible && self.allow_add_new && offers_add_new(&self.query, &self.options)
    }

    /// Confirm the highlighted option, or fall back to "add new"
    pub fn confirm(&mut self) -> Confirmation {
        if !self.visible {
            return Confirmation::Unchanged;
        }

        if let Some(value) = self.highlighted().map(|o| o.value.clone()) {
            self.dismiss();
            return Confirmation::Selected(value);
        }

        if self.shows_add_new() {
            let query = self.query.clone();
            self.dismiss();
            return Confirmation::AddNew(query);
        }

        Confirmation::Unchanged
    }

    /// Pointer selection of the row at `index`
    pub fn confirm_at(&mut self, index: usize) -> Confirmation {
        if index >= self.suggestion_count() {
            return Confirmation::Unchanged;
        }
        self.highlighted = Some(index);
        self.confirm()
    }

    /// Pointer activation of the "add new" row
    pub fn confirm_add_new(&mut self) -> Confirmation {
        if !self.shows_add_new() {
            return Confirmation::Unchanged;
        }
        let query = self.query.clone();
        self.dismiss();
        Confirmation::AddNew(query)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
