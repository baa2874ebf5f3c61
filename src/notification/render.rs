use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const NOTIFICATION_HEIGHT: u16 = 3;
const MARGIN: u16 = 1;

/// Render the current notification in the bottom-right corner, expiring it first
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired();
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let width = (notification.message.width() as u16 + 4).min(frame_area.width);
    let height = NOTIFICATION_HEIGHT.min(frame_area.height);
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: frame_area.height.saturating_sub(height + MARGIN),
        width,
        height,
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(format!(" {}", notification.message))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, area);
}
