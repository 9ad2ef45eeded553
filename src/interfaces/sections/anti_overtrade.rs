use crate::domain::content::{
    OVERTRADE_CAUSES, OVERTRADE_SOLUTIONS, OVERTRADE_SUBTITLE, OVERTRADE_TITLE,
};
use crate::interfaces::components::banner::render_section_header;
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_anti_overtrade(ui: &mut egui::Ui) {
    render_section_header(ui, OVERTRADE_TITLE, OVERTRADE_SUBTITLE, DesignSystem::DANGER);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.columns(2, |columns| {
        Card::new()
            .title("Why Traders Overtrade")
            .icon("✖")
            .accent(DesignSystem::DANGER)
            .show(&mut columns[0], |ui| {
                for cause in OVERTRADE_CAUSES {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new("❌").color(DesignSystem::DANGER));
                        ui.label(egui::RichText::new(cause).color(DesignSystem::TEXT_SECONDARY));
                    });
                    ui.add_space(4.0);
                }
            });

        Card::new()
            .title("LFPM Solutions")
            .icon("✔")
            .accent(DesignSystem::SUCCESS)
            .show(&mut columns[1], |ui| {
                for solution in OVERTRADE_SOLUTIONS.iter() {
                    DesignSystem::tinted_frame(DesignSystem::SUCCESS)
                        .stroke(egui::Stroke::NONE)
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}. {}",
                                    solution.number, solution.title
                                ))
                                .strong()
                                .color(DesignSystem::SUCCESS),
                            );
                            ui.label(
                                egui::RichText::new(solution.description)
                                    .size(12.0)
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    });
}
