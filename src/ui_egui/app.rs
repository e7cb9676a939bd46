mod confirm;
mod lifecycle;
mod toast;

use std::collections::HashMap;
use std::sync::mpsc;

use chrono::{Local, NaiveDate};
use egui::{Color32, RichText};

use self::confirm::{ConfirmAction, ConfirmDialogState, ConfirmResult};
use self::toast::ToastManager;
use crate::models::birthday::Relation;
use crate::services::gifts::{static_suggestions, GiftSuggester};
use crate::services::share;
use crate::services::store::BirthdayStore;
use crate::ui_egui::add_dialog::{render_add_dialog, AddBirthdayDialogState, AddDialogResult};
use crate::ui_egui::views::card_list::{self, CardAction, GiftPanel};

const BACKGROUND_FILL: Color32 = Color32::from_rgb(250, 247, 240);
const HEADER_FILL: Color32 = Color32::from_rgb(253, 251, 247);

pub struct CakedayApp {
    /// Owned record collection plus its persisted mirror
    store: BirthdayStore,
    /// None when the HTTP client could not be built; static suggestions only
    suggester: Option<GiftSuggester>,
    add_dialog: Option<AddBirthdayDialogState>,
    confirm_dialog: ConfirmDialogState,
    toast_manager: ToastManager,
    /// Gift panel state per birthday id; absence means collapsed
    gift_panels: HashMap<String, GiftPanelState>,
}

enum GiftPanelState {
    /// Background fetch in flight
    Loading(mpsc::Receiver<Vec<String>>),
    Ready(Vec<String>),
}

/// A card action captured during rendering, handled once the frame's
/// immutable borrows are released.
struct PendingCardAction {
    birthday_id: String,
    name: String,
    relation: Relation,
    age_turning: i32,
    next_occurrence: NaiveDate,
    action: CardAction,
}

impl eframe::App for CakedayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl CakedayApp {
    fn handle_update(&mut self, ctx: &egui::Context) {
        self.poll_gift_fetches(ctx);

        self.render_header(ctx);
        let pending = self.render_card_list(ctx);
        for action in pending {
            self.handle_card_action(ctx, action);
        }

        self.render_add_button(ctx);
        self.render_add_dialog(ctx);
        self.render_confirm_dialog(ctx);
        self.toast_manager.render(ctx);
    }

    /// Move finished background gift fetches into the ready state.
    fn poll_gift_fetches(&mut self, ctx: &egui::Context) {
        let mut any_loading = false;

        for panel in self.gift_panels.values_mut() {
            if let GiftPanelState::Loading(rx) = panel {
                match rx.try_recv() {
                    Ok(ideas) => *panel = GiftPanelState::Ready(ideas),
                    Err(mpsc::TryRecvError::Empty) => any_loading = true,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        // Worker died without sending; should not happen, but
                        // degrade to an empty panel rather than spin forever
                        log::warn!("Gift fetch worker disconnected without a result");
                        *panel = GiftPanelState::Ready(Vec::new());
                    }
                }
            }
        }

        if any_loading {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }

    fn render_header(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(HEADER_FILL)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🎂 CakeDay").size(22.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{} Events", self.store.len()))
                                .size(12.0)
                                .color(Color32::from_rgb(120, 113, 108)),
                        );
                    });
                });
            });
    }

    fn render_card_list(&mut self, ctx: &egui::Context) -> Vec<PendingCardAction> {
        let today = Local::now().date_naive();
        let mut pending = Vec::new();

        let store = &self.store;
        let gift_panels = &self.gift_panels;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(BACKGROUND_FILL)
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                if store.is_empty() {
                    card_list::render_empty_state(ui);
                    return;
                }

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (birthday, info) in card_list::sorted_views(store.birthdays(), today) {
                            let gifts = match gift_panels.get(&birthday.id) {
                                None => GiftPanel::Collapsed,
                                Some(GiftPanelState::Loading(_)) => GiftPanel::Loading,
                                Some(GiftPanelState::Ready(ideas)) => GiftPanel::Ready(ideas),
                            };

                            let action = card_list::render_card(ui, birthday, &info, gifts);
                            if action != CardAction::None {
                                pending.push(PendingCardAction {
                                    birthday_id: birthday.id.clone(),
                                    name: birthday.name.clone(),
                                    relation: birthday.relation,
                                    age_turning: info.age_turning,
                                    next_occurrence: info.next_occurrence,
                                    action,
                                });
                            }
                            ui.add_space(10.0);
                        }
                        // Keep the last card clear of the floating button
                        ui.add_space(56.0);
                    });
            });

        pending
    }

    fn handle_card_action(&mut self, ctx: &egui::Context, pending: PendingCardAction) {
        match pending.action {
            CardAction::None => {}
            CardAction::Delete => {
                self.confirm_dialog.request(ConfirmAction::DeleteBirthday {
                    birthday_id: pending.birthday_id,
                    name: pending.name,
                });
            }
            CardAction::Share => {
                self.share_birthday(ctx, &pending.name, pending.next_occurrence);
            }
            CardAction::ToggleGifts => {
                self.toggle_gift_panel(&pending);
            }
        }
    }

    /// Try the platform share route; fall back to the clipboard. Neither
    /// path surfaces an error to the user.
    fn share_birthday(&mut self, ctx: &egui::Context, name: &str, next_occurrence: NaiveDate) {
        match share::share_via_mailto(name, next_occurrence) {
            Ok(()) => log::debug!("Opened mail client to share {name}'s birthday"),
            Err(err) => {
                log::warn!("Share via mail client failed, copying to clipboard: {err:#}");
                let message = share::share_message(name, next_occurrence);
                ctx.output_mut(|o| o.copied_text = message);
                self.toast_manager.info("Copied to clipboard!");
            }
        }
    }

    fn toggle_gift_panel(&mut self, pending: &PendingCardAction) {
        if self.gift_panels.remove(&pending.birthday_id).is_some() {
            return;
        }

        let panel = match &self.suggester {
            Some(suggester) => {
                let (tx, rx) = mpsc::channel();
                let suggester = suggester.clone();
                let relation = pending.relation;
                let age = pending.age_turning;
                let name = pending.name.clone();
                std::thread::spawn(move || {
                    let _ = tx.send(suggester.suggest(relation, age, &name));
                });
                GiftPanelState::Loading(rx)
            }
            None => GiftPanelState::Ready(static_suggestions(pending.relation, pending.age_turning)),
        };

        self.gift_panels.insert(pending.birthday_id.clone(), panel);
    }

    fn render_add_button(&mut self, ctx: &egui::Context) {
        // No floating button while a modal is up
        if self.add_dialog.is_some() || self.confirm_dialog.is_open() {
            return;
        }

        egui::Area::new(egui::Id::new("add_button"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let button = egui::Button::new(RichText::new("＋").size(24.0).color(Color32::WHITE))
                    .fill(Color32::from_rgb(30, 30, 30))
                    .rounding(24.0)
                    .min_size(egui::vec2(48.0, 48.0));

                if ui.add(button).on_hover_text("Add Birthday").clicked() {
                    self.add_dialog = Some(AddBirthdayDialogState::new());
                }
            });
    }

    fn render_add_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = &mut self.add_dialog else {
            return;
        };

        match render_add_dialog(ctx, state) {
            AddDialogResult::Open => {}
            AddDialogResult::Cancelled => {
                self.add_dialog = None;
            }
            AddDialogResult::Added(birthday) => {
                log::info!("Added birthday for {}", birthday.name);
                self.store.add(birthday);
                self.add_dialog = None;
                self.toast_manager.success("Birthday added");
            }
        }
    }

    fn render_confirm_dialog(&mut self, ctx: &egui::Context) {
        if self.confirm_dialog.render(ctx) == ConfirmResult::Confirmed {
            if let Some(ConfirmAction::DeleteBirthday { birthday_id, name }) =
                self.confirm_dialog.take_action()
            {
                if self.store.remove(&birthday_id) {
                    self.gift_panels.remove(&birthday_id);
                    log::info!("Removed birthday for {name}");
                    self.toast_manager.info(format!("Removed {name}"));
                }
            }
        }
    }
}
