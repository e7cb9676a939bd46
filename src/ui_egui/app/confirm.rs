//! Confirmation dialog for destructive actions.
//!
//! Deleting a birthday is the only destructive action in the app; it always
//! goes through this modal, and there is no undo.

use egui::{Context, RichText};

/// Actions that require explicit confirmation
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    /// Delete a birthday record by id
    DeleteBirthday { birthday_id: String, name: String },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteBirthday { .. } => "Remove Birthday",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteBirthday { name, .. } => {
                format!(
                    "Are you sure you want to remove \"{}\"?\n\nThis action cannot be undone.",
                    name
                )
            }
        }
    }

    pub fn confirm_text(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteBirthday { .. } => "Remove",
        }
    }
}

/// Result of a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
    /// Dialog is still open (or not open at all)
    Pending,
}

/// State for the confirmation dialog
#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request confirmation for an action
    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Take the pending action (consuming it)
    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }

    /// Render the confirmation dialog and return the result
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;
        let mut should_close = false;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(400.0);

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let confirm_button = egui::Button::new(
                            RichText::new(action.confirm_text()).color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(180, 60, 60));

                        if ui.add(confirm_button).clicked() {
                            result = ConfirmResult::Confirmed;
                            should_close = true;
                        }

                        ui.add_space(10.0);

                        if ui.button("Cancel").clicked() {
                            result = ConfirmResult::Cancelled;
                            should_close = true;
                        }
                    });
                });

                ui.add_space(5.0);
            });

        // Escape cancels
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
            should_close = true;
        }

        if should_close && result == ConfirmResult::Cancelled {
            self.pending_action = None;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_opens_dialog() {
        let mut state = ConfirmDialogState::new();
        assert!(!state.is_open());

        state.request(ConfirmAction::DeleteBirthday {
            birthday_id: "1".to_string(),
            name: "Emma Wilson".to_string(),
        });
        assert!(state.is_open());
    }

    #[test]
    fn test_take_action_consumes_pending() {
        let mut state = ConfirmDialogState::new();
        state.request(ConfirmAction::DeleteBirthday {
            birthday_id: "1".to_string(),
            name: "Emma Wilson".to_string(),
        });

        let action = state.take_action().unwrap();
        let ConfirmAction::DeleteBirthday { birthday_id, .. } = action;
        assert_eq!(birthday_id, "1");
        assert!(!state.is_open());
    }

    #[test]
    fn test_message_names_the_person() {
        let action = ConfirmAction::DeleteBirthday {
            birthday_id: "1".to_string(),
            name: "Mom".to_string(),
        };
        assert!(action.message().contains("Mom"));
    }
}
