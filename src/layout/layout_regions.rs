use ratatui::layout::Rect;

use crate::app::FieldId;

/// A clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Field(FieldId),
    Suggestions,
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    fields: Vec<(FieldId, Rect)>,
    suggestions: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.suggestions = None;
    }

    pub fn set_field(&mut self, id: FieldId, area: Rect) {
        match self.fields.iter_mut().find(|(field, _)| *field == id) {
            Some(entry) => entry.1 = area,
            None => self.fields.push((id, area)),
        }
    }

    pub fn field(&self, id: FieldId) -> Option<Rect> {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, area)| *area)
    }

    pub fn fields(&self) -> &[(FieldId, Rect)] {
        &self.fields
    }

    pub fn set_suggestions(&mut self, area: Option<Rect>) {
        self.suggestions = area;
    }

    pub fn suggestions(&self) -> Option<Rect> {
        self.suggestions
    }
}
