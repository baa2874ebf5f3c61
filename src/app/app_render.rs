use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use super::form_field::FieldId;
use crate::autocomplete::render_popup;
use crate::notification::render_notification;

const HEADER_HEIGHT: u16 = 3;
const FIELD_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const MAX_FORM_WIDTH: u16 = 72;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
        constraints.extend(FieldId::ALL.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(FOOTER_HEIGHT));
        let rows = Layout::vertical(constraints).split(frame.area());

        self.render_header(frame, rows[0]);

        self.layout_regions.clear();
        for (i, id) in FieldId::ALL.iter().enumerate() {
            let area = form_column(rows[i + 1]);
            frame.render_widget(&self.field(*id).textarea, area);
            self.layout_regions.set_field(*id, area);
        }

        self.render_footer(frame, rows[rows.len() - 1]);

        // Suggestions go on top of the fields below the focused one
        let focus = self.focus;
        let anchor = self.layout_regions.field(focus);
        let popup = match (self.focused_autocomplete(), anchor) {
            (Some(state), Some(anchor)) => render_popup(state, frame, anchor),
            _ => None,
        };
        self.layout_regions.set_suggestions(popup);

        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Book Courier ")
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.stats.to_string(),
            Style::default().fg(Color::White),
        )))
        .block(block);

        frame.render_widget(paragraph, form_column(area));
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(Color::DarkGray);

        let hints = Line::from(vec![
            Span::styled(" Tab", key),
            Span::styled(" next  ", text),
            Span::styled("↑/↓", key),
            Span::styled(" choose  ", text),
            Span::styled("Enter", key),
            Span::styled(" select  ", text),
            Span::styled("Esc", key),
            Span::styled(" close/quit  ", text),
            Span::styled("Ctrl+S", key),
            Span::styled(" book", text),
        ]);
        frame.render_widget(Paragraph::new(hints), area);
    }
}

fn form_column(area: Rect) -> Rect {
    Rect {
        width: area.width.min(MAX_FORM_WIDTH),
        ..area
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
