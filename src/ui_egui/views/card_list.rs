//! Birthday card list rendering.
//!
//! Cards are rendered in days-remaining order; each card exposes share,
//! delete and gift-idea actions which bubble back to the app as
//! `CardAction`s.

use egui::{Color32, RichText, Ui};

use crate::models::birthday::Birthday;
use crate::utils::date::{calculate_birthday_info, format_month_day, ordinal_suffix, BirthdayInfo};

use super::palette::{relation_icon, relation_theme, TODAY_ACCENT};

const CARD_ROUNDING: f32 = 12.0;
const CARD_FILL: Color32 = Color32::from_rgb(255, 255, 255);
const CARD_STROKE: Color32 = Color32::from_rgb(231, 229, 228);
const ACCENT_BAR_WIDTH: f32 = 4.0;
const MUTED_TEXT: Color32 = Color32::from_rgb(120, 113, 108);

/// Action from rendering a single card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    None,
    ToggleGifts,
    Share,
    Delete,
}

/// Gift suggestion section of a card
#[derive(Debug, Clone, Copy)]
pub enum GiftPanel<'a> {
    Collapsed,
    Loading,
    Ready(&'a [String]),
}

/// Map every record through the calculator and sort ascending by days
/// remaining. The sort is stable, so ties keep insertion order.
pub fn sorted_views(birthdays: &[Birthday], today: chrono::NaiveDate) -> Vec<(&Birthday, BirthdayInfo)> {
    let mut views: Vec<(&Birthday, BirthdayInfo)> = birthdays
        .iter()
        .map(|b| (b, calculate_birthday_info(b, today)))
        .collect();
    views.sort_by_key(|(_, info)| info.days_remaining);
    views
}

/// Render one birthday card and report which action (if any) was clicked.
pub fn render_card(ui: &mut Ui, birthday: &Birthday, info: &BirthdayInfo, gifts: GiftPanel<'_>) -> CardAction {
    let mut action = CardAction::None;
    let theme = relation_theme(birthday.relation);

    let stroke = if info.is_today {
        egui::Stroke::new(2.0, TODAY_ACCENT)
    } else {
        egui::Stroke::new(1.0, CARD_STROKE)
    };

    let response = egui::Frame::none()
        .fill(CARD_FILL)
        .rounding(CARD_ROUNDING)
        .stroke(stroke)
        .inner_margin(egui::Margin {
            left: 12.0 + ACCENT_BAR_WIDTH,
            right: 12.0,
            top: 10.0,
            bottom: 10.0,
        })
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        badge(
                            ui,
                            &format!("{} {}", relation_icon(birthday.relation), birthday.relation),
                            theme.badge_bg,
                            theme.badge_text,
                        );
                        if info.is_today {
                            badge(
                                ui,
                                "🎉 It's Today!",
                                Color32::from_rgb(254, 249, 195),
                                Color32::from_rgb(133, 100, 4),
                            );
                        }
                    });

                    ui.label(RichText::new(&birthday.name).size(18.0).strong());
                    ui.label(
                        RichText::new(format!("📅 {}", format_month_day(info.next_occurrence)))
                            .size(12.0)
                            .color(MUTED_TEXT),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.vertical(|ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                            if info.is_today {
                                ui.label(RichText::new("NOW").size(22.0).strong().color(TODAY_ACCENT));
                                ui.label(RichText::new("PARTY!").size(10.0).color(MUTED_TEXT));
                            } else {
                                ui.label(
                                    RichText::new(info.days_remaining.to_string())
                                        .size(22.0)
                                        .strong()
                                        .color(theme.badge_text),
                                );
                                ui.label(RichText::new("DAYS LEFT").size(10.0).color(MUTED_TEXT));
                            }
                        });
                    });
                });
            });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Turning {}{}",
                        info.age_turning,
                        ordinal_suffix(info.age_turning)
                    ))
                    .color(MUTED_TEXT),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑").on_hover_text("Remove").clicked() {
                        action = CardAction::Delete;
                    }
                    if ui.button("📤").on_hover_text("Share").clicked() {
                        action = CardAction::Share;
                    }
                    let gift_label = match gifts {
                        GiftPanel::Collapsed => "✨ Gift Ideas",
                        _ => "✨ Hide Ideas",
                    };
                    if ui.button(gift_label).clicked() {
                        action = CardAction::ToggleGifts;
                    }
                });
            });

            match gifts {
                GiftPanel::Collapsed => {}
                GiftPanel::Loading => {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new("Thinking of gift ideas…").color(MUTED_TEXT));
                    });
                }
                GiftPanel::Ready(ideas) => {
                    ui.add_space(6.0);
                    render_gift_grid(ui, ideas);
                }
            }
        });

    // Accent bar on the card's left edge
    let card_rect = response.response.rect;
    let bar_rect = egui::Rect::from_min_max(
        card_rect.min,
        egui::pos2(card_rect.min.x + ACCENT_BAR_WIDTH, card_rect.max.y),
    );
    ui.painter().rect_filled(
        bar_rect,
        egui::Rounding {
            nw: CARD_ROUNDING,
            sw: CARD_ROUNDING,
            ..Default::default()
        },
        if info.is_today { TODAY_ACCENT } else { theme.accent },
    );

    action
}

fn render_gift_grid(ui: &mut Ui, ideas: &[String]) {
    egui::Frame::none()
        .fill(Color32::from_rgb(250, 250, 249))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new("🎁 SUGGESTED GIFTS")
                    .size(10.0)
                    .strong()
                    .color(MUTED_TEXT),
            );
            ui.add_space(4.0);
            egui::Grid::new(ui.id().with("gift_grid"))
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for (i, idea) in ideas.iter().enumerate() {
                        ui.label(idea);
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn badge(ui: &mut Ui, text: &str, bg: Color32, fg: Color32) {
    egui::Frame::none()
        .fill(bg)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).strong().color(fg));
        });
}

/// Render the placeholder shown when no birthdays exist.
pub fn render_empty_state(ui: &mut Ui) {
    ui.add_space(60.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🎉").size(48.0));
        ui.add_space(8.0);
        ui.label(RichText::new("No birthdays yet!").size(16.0).color(MUTED_TEXT));
        ui.label(RichText::new("Tap + to add one.").size(12.0).color(MUTED_TEXT));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::birthday::Relation;
    use chrono::{Datelike, NaiveDate};

    fn birthday_in_days(id: &str, days: i64, today: NaiveDate) -> Birthday {
        Birthday {
            id: id.to_string(),
            name: format!("Person {id}"),
            date_of_birth: (today + chrono::Duration::days(days))
                .with_year(1990)
                .unwrap(),
            relation: Relation::Friend,
        }
    }

    #[test]
    fn test_sorted_views_ascending_by_days_remaining() {
        // Mid-year reference date so day offsets stay inside one year.
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let birthdays = vec![
            birthday_in_days("a", 5, today),
            birthday_in_days("b", 0, today),
            birthday_in_days("c", 30, today),
            birthday_in_days("d", 1, today),
        ];

        let views = sorted_views(&birthdays, today);
        let days: Vec<i64> = views.iter().map(|(_, info)| info.days_remaining).collect();
        assert_eq!(days, vec![0, 1, 5, 30]);
        let ids: Vec<&str> = views.iter().map(|(b, _)| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sorted_views_ties_keep_insertion_order() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let birthdays = vec![
            birthday_in_days("first", 7, today),
            birthday_in_days("second", 7, today),
        ];

        let views = sorted_views(&birthdays, today);
        let ids: Vec<&str> = views.iter().map(|(b, _)| b.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
