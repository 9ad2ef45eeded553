use crate::domain::content::{
    Accent, FORMULA_MOTTO, FORMULA_TITLE, INFO_CARDS, NO_TRADE_CONDITIONS, NO_TRADE_TITLE,
    PILLARS,
};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_overview(ui: &mut egui::Ui) {
    // --- Formula ---
    DesignSystem::tinted_frame(DesignSystem::INFO)
        .corner_radius(DesignSystem::ROUNDING_LARGE)
        .inner_margin(DesignSystem::SPACING_LARGE as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(FORMULA_TITLE)
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(FORMULA_MOTTO)
                    .size(17.0)
                    .color(DesignSystem::INFO),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            ui.columns(PILLARS.len(), |columns| {
                for (col, pillar) in columns.iter_mut().zip(PILLARS.iter()) {
                    DesignSystem::card_frame().show(col, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(pillar.number.to_string())
                                    .size(30.0)
                                    .strong()
                                    .color(DesignSystem::INFO),
                            );
                            ui.label(egui::RichText::new(pillar.title).size(16.0).strong());
                            ui.label(
                                egui::RichText::new(pillar.tagline)
                                    .size(12.0)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        });
                    });
                }
            });
        });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    // --- Info cards ---
    ui.columns(INFO_CARDS.len(), |columns| {
        for (col, card) in columns.iter_mut().zip(INFO_CARDS.iter()) {
            Card::new()
                .title(card.title)
                .icon(card.icon)
                .accent(DesignSystem::accent(card.accent))
                .min_height(150.0)
                .show(col, |ui| {
                    for item in card.items {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(egui::RichText::new("•").color(DesignSystem::INFO));
                            ui.label(
                                egui::RichText::new(*item).color(DesignSystem::TEXT_SECONDARY),
                            );
                        });
                    }
                });
        }
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    // --- No trade conditions ---
    let danger = DesignSystem::accent(Accent::Red);
    DesignSystem::tinted_frame(danger).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!("✖ {NO_TRADE_TITLE}"))
                .size(18.0)
                .strong()
                .color(danger),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.columns(NO_TRADE_CONDITIONS.len(), |columns| {
            for (col, condition) in columns.iter_mut().zip(NO_TRADE_CONDITIONS.iter()) {
                DesignSystem::card_frame().show(col, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(*condition)
                                .strong()
                                .color(danger),
                        );
                    });
                });
            }
        });
    });
}
