//! Option filtering
//!
//! Filtering is a pure function of the query, the option list and how the
//! panel was opened. There is no scoring and no reordering.

use super::option::SelectOption;

/// Typed queries shorter than this show a "type more" prompt instead of results
pub const MIN_QUERY_CHARS: usize = 2;

/// How the suggestion panel came to be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Opened by focusing the field; everything is listed
    #[default]
    Focus,
    /// The user is typing; the query filters the list
    Typed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Typed query below [`MIN_QUERY_CHARS`]; nothing is listed
    NeedsMoreInput,
    /// Indices into the option list, in input order (may be empty)
    Matches(Vec<usize>),
}

impl FilterOutcome {
    pub fn indices(&self) -> &[usize] {
        match self {
            FilterOutcome::NeedsMoreInput => &[],
            FilterOutcome::Matches(indices) => indices,
        }
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices().is_empty()
    }
}

impl Default for FilterOutcome {
    fn default() -> Self {
        FilterOutcome::Matches(Vec::new())
    }
}

pub fn filter_options(query: &str, options: &[SelectOption], mode: FilterMode) -> FilterOutcome {
    if mode == FilterMode::Focus {
        return FilterOutcome::Matches((0..options.len()).collect());
    }

    if query.chars().count() < MIN_QUERY_CHARS {
        return FilterOutcome::NeedsMoreInput;
    }

    let needle = query.to_lowercase();
    let indices = options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.contains_lowercase(&needle))
        .map(|(idx, _)| idx)
        .collect();

    FilterOutcome::Matches(indices)
}

/// Index of the first option whose value equals `query`, ignoring case
pub fn exact_value_match(query: &str, options: &[SelectOption]) -> Option<usize> {
    options.iter().position(|o| o.value_eq_ignore_case(query))
}

/// Whether an "add new" entry should be offered for `query`
pub fn offers_add_new(query: &str, options: &[SelectOption]) -> bool {
    !query.is_empty() && exact_value_match(query, options).is_none()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
