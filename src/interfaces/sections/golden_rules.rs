use crate::domain::content::{GOLDEN_FOOTER, GOLDEN_RULES, GOLDEN_SUBTITLE, GOLDEN_TITLE};
use crate::interfaces::components::banner::render_section_header;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_golden_rules(ui: &mut egui::Ui) {
    render_section_header(
        ui,
        &format!("🏆 {GOLDEN_TITLE}"),
        GOLDEN_SUBTITLE,
        DesignSystem::ACCENT_AMBER,
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    for rule in GOLDEN_RULES.iter() {
        DesignSystem::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(rule.number.to_string())
                        .size(40.0)
                        .strong()
                        .color(DesignSystem::ACCENT_AMBER),
                );
                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(rule.title)
                            .size(20.0)
                            .strong()
                            .color(DesignSystem::ACCENT_AMBER),
                    );
                    ui.label(
                        egui::RichText::new(rule.description)
                            .size(15.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let [heading, body, closing] = GOLDEN_FOOTER;
    DesignSystem::tinted_frame(DesignSystem::INFO).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(heading).size(20.0).strong());
            ui.label(egui::RichText::new(body).size(15.0).color(DesignSystem::INFO));
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new(closing)
                    .italics()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
        });
    });
}
