/// A selectable candidate
///
/// `value` is what gets written back to the form field, `label` is what the
/// user reads in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Substring match on label or value; `needle` must already be lowercase
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.value.to_lowercase().contains(needle)
    }

    pub fn value_eq_ignore_case(&self, text: &str) -> bool {
        !self.value.is_empty() && self.value.to_lowercase() == text.to_lowercase()
    }
}
