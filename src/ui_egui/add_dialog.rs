//! Modal dialog for adding a birthday.

use chrono::NaiveDate;
use egui::{Color32, Context, RichText};
use egui_extras::DatePickerButton;

use crate::models::birthday::{Birthday, Relation};

/// State for the add-birthday dialog
pub struct AddBirthdayDialogState {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub relation: Relation,
    pub error_message: Option<String>,
}

impl AddBirthdayDialogState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            // Arbitrary sensible default; the picker opens on this date
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            relation: Relation::Friend,
            error_message: None,
        }
    }

    /// Validate the form and build the record.
    pub fn build_birthday(&self) -> Result<Birthday, String> {
        if self.name.trim().is_empty() {
            return Err("Please enter a name".to_string());
        }

        Birthday::new(self.name.clone(), self.date_of_birth, self.relation)
            .map_err(|err| err.to_string())
    }
}

impl Default for AddBirthdayDialogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of rendering the add dialog
pub enum AddDialogResult {
    /// Dialog stays open
    Open,
    /// User closed the dialog without adding
    Cancelled,
    /// A validated record is ready to be stored
    Added(Birthday),
}

/// Render the add-birthday modal dialog.
pub fn render_add_dialog(ctx: &Context, state: &mut AddBirthdayDialogState) -> AddDialogResult {
    let mut result = AddDialogResult::Open;
    let mut open = true;

    egui::Window::new("New Birthday")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.add_space(4.0);
            ui.label(RichText::new("Name").size(12.0).strong());
            let name_edit = egui::TextEdit::singleline(&mut state.name)
                .hint_text("e.g. Sarah Connor")
                .desired_width(f32::INFINITY);
            ui.add(name_edit);

            ui.add_space(8.0);
            ui.label(RichText::new("Date of Birth").size(12.0).strong());
            ui.add(DatePickerButton::new(&mut state.date_of_birth).id_source("dob_picker"));

            ui.add_space(8.0);
            ui.label(RichText::new("Relation").size(12.0).strong());
            ui.horizontal(|ui| {
                for relation in Relation::ALL {
                    ui.selectable_value(&mut state.relation, relation, relation.as_str());
                }
            });

            if let Some(error) = &state.error_message {
                ui.add_space(8.0);
                ui.colored_label(Color32::from_rgb(200, 60, 60), error);
            }

            ui.add_space(12.0);

            let add_clicked = ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(RichText::new("Add to List").strong()),
                )
                .clicked();

            if add_clicked || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                match state.build_birthday() {
                    Ok(birthday) => result = AddDialogResult::Added(birthday),
                    Err(message) => state.error_message = Some(message),
                }
            }
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        return AddDialogResult::Cancelled;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_blocks_submission() {
        let state = AddBirthdayDialogState::new();
        assert!(state.build_birthday().is_err());
    }

    #[test]
    fn test_valid_form_builds_record() {
        let mut state = AddBirthdayDialogState::new();
        state.name = "Sarah Connor".to_string();
        state.date_of_birth = NaiveDate::from_ymd_opt(1985, 5, 12).unwrap();
        state.relation = Relation::Family;

        let birthday = state.build_birthday().unwrap();
        assert_eq!(birthday.name, "Sarah Connor");
        assert_eq!(birthday.relation, Relation::Family);
        assert_eq!(birthday.date_of_birth, state.date_of_birth);
    }

    #[test]
    fn test_future_dates_are_accepted() {
        // Client-side validation only checks required fields
        let mut state = AddBirthdayDialogState::new();
        state.name = "Time Traveler".to_string();
        state.date_of_birth = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        assert!(state.build_birthday().is_ok());
    }
}
