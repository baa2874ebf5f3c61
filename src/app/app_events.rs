use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::autocomplete::Confirmation;
use super::mouse_click;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl App {
    /// Wait briefly for one terminal event and apply it
    ///
    /// The timeout lets notifications expire while the user is idle.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Only key presses, not releases or repeats reported separately
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.focused_field().suggestions_visible() && self.handle_suggestion_keys(key) {
            return;
        }

        self.handle_field_key(key);
    }

    /// Keys that work regardless of the focused field
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C: Exit without booking
        if key.code == KeyCode::Char('c') && ctrl {
            self.should_quit = true;
            return true;
        }

        // Ctrl+S: Submit the form
        if key.code == KeyCode::Char('s') && ctrl {
            self.submit();
            return true;
        }

        false
    }

    /// Keys consumed by an open suggestion panel
    fn handle_suggestion_keys(&mut self, key: KeyEvent) -> bool {
        let Some(autocomplete) = self.focused_autocomplete_mut() else {
            return false;
        };

        match key.code {
            KeyCode::Down => autocomplete.select_next(),
            KeyCode::Up => autocomplete.select_previous(),
            KeyCode::Esc => autocomplete.dismiss(),
            KeyCode::Enter => match autocomplete.confirm() {
                // Nothing to pick; Enter moves on like it does without a panel
                Confirmation::Unchanged => return false,
                confirmation => self.apply_confirmation(confirmation),
            },
            _ => return false,
        }
        true
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            _ => {
                let focus = self.focus;
                if self.field_mut(focus).input(key) {
                    self.on_focused_text_changed();
                }
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = crate::layout::region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region, mouse);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
