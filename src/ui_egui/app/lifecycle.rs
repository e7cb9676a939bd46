use std::collections::HashMap;
use std::path::PathBuf;

use super::confirm::ConfirmDialogState;
use super::toast::ToastManager;
use super::CakedayApp;
use crate::services::gifts::GiftSuggester;
use crate::services::store::BirthdayStore;
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

impl CakedayApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let storage_path = Self::resolve_storage_path();
        let store = BirthdayStore::load(&storage_path);
        log::info!(
            "Loaded {} birthdays from {}",
            store.len(),
            store.path().display()
        );

        let suggester = match GiftSuggester::new() {
            Ok(suggester) => Some(suggester),
            Err(err) => {
                log::error!("Gift suggestion client unavailable, static suggestions only: {err:#}");
                None
            }
        };

        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            store,
            suggester,
            add_dialog: None,
            confirm_dialog: ConfirmDialogState::new(),
            toast_manager: ToastManager::new(),
            gift_panels: HashMap::new(),
        }
    }

    /// Store the data file next to the binary in debug builds for easy
    /// inspection, under the platform data directory otherwise.
    fn resolve_storage_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from("birthdays.json")
        }

        #[cfg(not(debug_assertions))]
        {
            ProjectDirs::from("", "", "CakeDay")
                .map(|dirs| dirs.data_dir().join("birthdays.json"))
                .unwrap_or_else(|| PathBuf::from("birthdays.json"))
        }
    }
}
