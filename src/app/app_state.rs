use chrono::Utc;

use super::form_field::{FieldId, FormField};
use crate::autocomplete::{AutocompleteState, Confirmation, SelectOption};
use crate::destination::apply_destination_change;
use crate::directory::{
    Courier, CourierStatus, Directory, department_options, destination_options,
};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::stats::CourierStats;

/// Application state
pub struct App {
    pub fields: Vec<FormField>,
    pub focus: FieldId,
    pub directory: Directory,
    pub stats: CourierStats,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    /// Courier booked on submit, printed after the terminal is restored
    pub output: Option<Courier>,
}

impl App {
    pub fn new(directory: Directory) -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|&id| {
                let field = FormField::new(id);
                match id {
                    FieldId::Department => field
                        .with_autocomplete(AutocompleteState::new(department_options(&directory))),
                    FieldId::Destination => field.with_autocomplete(
                        AutocompleteState::new(destination_options(&directory)).with_add_new(),
                    ),
                    _ => field,
                }
            })
            .collect();

        let stats = CourierStats::from_couriers(&directory.couriers);

        let mut app = Self {
            fields,
            focus: FieldId::TrackingNumber,
            directory,
            stats,
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            output: None,
        };
        app.field_mut(FieldId::TrackingNumber).set_focused(true);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id.index()]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[id.index()]
    }

    pub fn focused_field(&self) -> &FormField {
        self.field(self.focus)
    }

    pub fn focused_autocomplete(&self) -> Option<&AutocompleteState> {
        self.focused_field().autocomplete.as_ref()
    }

    pub fn focused_autocomplete_mut(&mut self) -> Option<&mut AutocompleteState> {
        let focus = self.focus;
        self.field_mut(focus).autocomplete.as_mut()
    }

    /// Move focus, closing the old field's panel and opening the new one's
    pub fn focus_field(&mut self, id: FieldId) {
        if id == self.focus {
            return;
        }

        self.leave_focused_field();

        self.focus = id;
        let field = self.field_mut(id);
        field.set_focused(true);
        let text = field.text().to_string();
        if let Some(autocomplete) = field.autocomplete.as_mut() {
            autocomplete.open_on_focus(&text);
        }
    }

    fn leave_focused_field(&mut self) {
        let old = self.focus;
        let field = self.field_mut(old);
        field.set_focused(false);
        if let Some(autocomplete) = field.autocomplete.as_mut() {
            autocomplete.dismiss();
        }

        // Typing a destination by hand and moving on counts as a value change
        if field.is_dirty() {
            field.commit();
            if old == FieldId::Destination {
                self.resolve_destination_email();
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.focus_field(self.focus.previous());
    }

    /// The focused field's text changed through typing
    pub fn on_focused_text_changed(&mut self) {
        let focus = self.focus;
        let field = self.field_mut(focus);
        let text = field.text().to_string();
        if let Some(autocomplete) = field.autocomplete.as_mut() {
            autocomplete.update_query(&text);
        }
    }

    /// Fill the destination email from the branch or user the destination names
    pub fn resolve_destination_email(&mut self) {
        let destination = self.destination_text();
        let mut email = self.field(FieldId::DestinationEmail).text().to_string();

        if apply_destination_change(
            &destination,
            &self.directory.branches,
            &self.directory.users,
            &mut email,
        ) {
            log::debug!("Destination {:?} resolved to {}", destination, email);
            self.field_mut(FieldId::DestinationEmail).set_text(&email);
        }
    }

    /// Destination as it is resolved and booked
    fn destination_text(&self) -> String {
        self.field(FieldId::Destination).text().trim().to_string()
    }

    /// Act on the outcome of confirming the focused field's suggestion panel
    pub fn apply_confirmation(&mut self, confirmation: Confirmation) {
        let focus = self.focus;
        match confirmation {
            Confirmation::Unchanged => {}
            Confirmation::Selected(value) => {
                self.commit_value(focus, &value);
                self.focus_next();
            }
            Confirmation::AddNew(value) => {
                if let Some(autocomplete) = self.field_mut(focus).autocomplete.as_mut() {
                    autocomplete.push_option(SelectOption::new(value.clone(), value.clone()));
                }
                self.notification
                    .show(&format!("Added new {} \"{}\"", noun_for(focus), value));
                self.commit_value(focus, &value);
                self.focus_next();
            }
        }
    }

    fn commit_value(&mut self, id: FieldId, value: &str) {
        let field = self.field_mut(id);
        field.set_text(value);
        field.commit();
        if id == FieldId::Destination {
            self.resolve_destination_email();
        }
    }

    /// Validate the form and book the courier
    pub fn submit(&mut self) {
        // Pending edits in the focused field count
        let focus = self.focus;
        if focus == FieldId::Destination && self.field(focus).is_dirty() {
            self.field_mut(focus).commit();
            self.resolve_destination_email();
        }

        let courier = self.build_courier();
        if courier.tracking_number.trim().is_empty() {
            self.notification.show_error("Tracking number is required");
            self.focus_field(FieldId::TrackingNumber);
            return;
        }
        if courier.destination.trim().is_empty() {
            self.notification.show_error("Destination is required");
            self.focus_field(FieldId::Destination);
            return;
        }

        log::info!("Booked courier {}", courier.tracking_number);
        self.output = Some(courier);
        self.should_quit = true;
    }

    pub fn build_courier(&self) -> Courier {
        let text = |id: FieldId| self.field(id).text().trim().to_string();
        Courier {
            tracking_number: text(FieldId::TrackingNumber),
            sender: text(FieldId::Sender),
            department: text(FieldId::Department),
            destination: self.destination_text(),
            destination_email: text(FieldId::DestinationEmail),
            description: text(FieldId::Description),
            status: CourierStatus::Pending,
            created_at: Some(Utc::now()),
        }
    }
}

fn noun_for(id: FieldId) -> &'static str {
    match id {
        FieldId::Department => "department",
        _ => "destination",
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
