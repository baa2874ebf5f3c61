use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{Input, TextArea};

use crate::autocomplete::AutocompleteState;

/// Fields of the courier booking form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    TrackingNumber,
    Sender,
    Department,
    Destination,
    DestinationEmail,
    Description,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::TrackingNumber,
        FieldId::Sender,
        FieldId::Department,
        FieldId::Destination,
        FieldId::DestinationEmail,
        FieldId::Description,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FieldId::TrackingNumber => " Tracking No. ",
            FieldId::Sender => " Sender ",
            FieldId::Department => " Department ",
            FieldId::Destination => " Destination ",
            FieldId::DestinationEmail => " Destination Email ",
            FieldId::Description => " Description ",
        }
    }

    /// Position in tab order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> FieldId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> FieldId {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One single-line input, optionally backed by a suggestion engine
pub struct FormField {
    pub id: FieldId,
    pub textarea: TextArea<'static>,
    pub autocomplete: Option<AutocompleteState>,
    /// Text at the last explicit value change, used to spot edits on blur
    committed: String,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        let mut field = Self {
            id,
            textarea,
            autocomplete: None,
            committed: String::new(),
        };
        field.set_focused(false);
        field
    }

    pub fn with_autocomplete(mut self, autocomplete: AutocompleteState) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the whole field text
    pub fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Feed a key to the text input; returns true when the text changed
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        let before = self.text().to_string();
        self.textarea.input(input);

        // Keep the field single-line whatever the key binding inserted
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.textarea = rebuild_single_line(&self.textarea, &joined);
        }

        self.text() != before
    }

    pub fn is_dirty(&self) -> bool {
        self.text() != self.committed
    }

    pub fn commit(&mut self) {
        self.committed = self.text().to_string();
    }

    pub fn suggestions_visible(&self) -> bool {
        self.autocomplete.as_ref().is_some_and(|a| a.is_visible())
    }

    pub fn set_focused(&mut self, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.id.title())
                .border_style(Style::default().fg(border_color)),
        );

        // Only the focused field shows a cursor
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

fn rebuild_single_line(old: &TextArea<'static>, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    if let Some(block) = old.block() {
        textarea.set_block(block.clone());
    }
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(old.cursor_style());
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "form_field_tests.rs"]
mod form_field_tests;
