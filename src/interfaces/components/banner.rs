use crate::domain::content::Callout;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Large section header with title and subtitle
pub fn render_section_header(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: &str,
    color: egui::Color32,
) {
    DesignSystem::tinted_frame(color)
        .corner_radius(DesignSystem::ROUNDING_LARGE)
        .inner_margin(DesignSystem::SPACING_LARGE as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(title)
                    .size(26.0)
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new(subtitle).size(15.0).color(color));
        });
}

pub fn render_callout(ui: &mut egui::Ui, callout: &Callout) {
    let color = DesignSystem::accent(callout.accent);
    DesignSystem::tinted_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(callout.title)
                .size(18.0)
                .strong()
                .color(color),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(callout.message)
                .size(16.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
    });
}

/// Centered outcome banner with a reset button. Returns true when the button was clicked.
pub fn render_status_banner(
    ui: &mut egui::Ui,
    icon: &str,
    title: &str,
    message: Option<&str>,
    button_label: &str,
    color: egui::Color32,
    emphasized: bool,
) -> bool {
    let mut clicked = false;

    DesignSystem::tinted_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(icon).size(40.0).color(color));
            ui.label(egui::RichText::new(title).size(22.0).strong().color(color));
            if let Some(message) = message {
                ui.label(
                    egui::RichText::new(message)
                        .size(14.0)
                        .color(DesignSystem::TEXT_PRIMARY),
                );
            }
            ui.add_space(DesignSystem::SPACING_SMALL);

            let (fill, text_color) = if emphasized {
                (color.linear_multiply(0.6), DesignSystem::BG_WINDOW)
            } else {
                (DesignSystem::BG_CARD_HOVER, DesignSystem::TEXT_PRIMARY)
            };
            let button = egui::Button::new(
                egui::RichText::new(button_label)
                    .strong()
                    .color(text_color),
            )
            .fill(fill)
            .corner_radius(DesignSystem::ROUNDING_SMALL)
            .min_size(egui::vec2(180.0, 36.0));

            clicked = ui.add(button).clicked();
        });
    });

    clicked
}
