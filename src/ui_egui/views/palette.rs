//! Per-relation colors for birthday cards.

use egui::Color32;

use crate::models::birthday::Relation;

/// Colors used when painting a card for a given relation.
#[derive(Debug, Clone, Copy)]
pub struct RelationTheme {
    /// Badge pill background
    pub badge_bg: Color32,
    /// Badge pill text
    pub badge_text: Color32,
    /// Accent bar on the card's left edge
    pub accent: Color32,
}

pub fn relation_theme(relation: Relation) -> RelationTheme {
    match relation {
        Relation::Family => RelationTheme {
            badge_bg: Color32::from_rgb(255, 228, 222),
            badge_text: Color32::from_rgb(150, 60, 40),
            accent: Color32::from_rgb(240, 110, 85),
        },
        Relation::Work => RelationTheme {
            badge_bg: Color32::from_rgb(237, 227, 252),
            badge_text: Color32::from_rgb(90, 50, 150),
            accent: Color32::from_rgb(150, 95, 235),
        },
        Relation::Friend => RelationTheme {
            badge_bg: Color32::from_rgb(210, 245, 240),
            badge_text: Color32::from_rgb(25, 110, 100),
            accent: Color32::from_rgb(35, 170, 150),
        },
    }
}

pub fn relation_icon(relation: Relation) -> &'static str {
    match relation {
        Relation::Family => "🎁",
        Relation::Work => "💼",
        Relation::Friend => "👥",
    }
}

/// Gold highlight for "it's today" cards.
pub const TODAY_ACCENT: Color32 = Color32::from_rgb(250, 200, 50);
