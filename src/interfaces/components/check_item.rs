use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

fn check_mark(ui: &mut egui::Ui, checked: bool, size: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let radius = size / 2.0 - 1.0;

    if checked {
        painter.circle_filled(center, radius, DesignSystem::SUCCESS);
        let tick = vec![
            center + egui::vec2(-radius * 0.45, 0.0),
            center + egui::vec2(-radius * 0.1, radius * 0.35),
            center + egui::vec2(radius * 0.5, -radius * 0.35),
        ];
        painter.add(egui::Shape::line(
            tick,
            egui::Stroke::new(2.0, DesignSystem::BG_WINDOW),
        ));
    } else {
        painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(2.0, DesignSystem::TEXT_MUTED),
        );
    }
}

fn item_frame(checked: bool, stroke_width: f32) -> egui::Frame {
    let (fill, stroke) = if checked {
        (
            DesignSystem::SUCCESS.linear_multiply(0.12),
            DesignSystem::SUCCESS,
        )
    } else {
        (DesignSystem::BG_ITEM, DesignSystem::BORDER_ITEM)
    };

    egui::Frame::NONE
        .fill(fill)
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .stroke(egui::Stroke::new(stroke_width, stroke))
        .inner_margin(egui::Margin::same(12))
}

/// Numbered checklist row with a description. Returns true when clicked.
pub fn render_check_item(
    ui: &mut egui::Ui,
    checked: bool,
    number: usize,
    label: &str,
    description: &str,
) -> bool {
    let response = item_frame(checked, 2.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let number_color = if checked {
                    DesignSystem::SUCCESS
                } else {
                    DesignSystem::TEXT_MUTED
                };
                ui.label(
                    egui::RichText::new(number.to_string())
                        .size(28.0)
                        .strong()
                        .color(number_color),
                );
                ui.add_space(DesignSystem::SPACING_SMALL);

                ui.vertical(|ui| {
                    let label_color = if checked {
                        DesignSystem::SUCCESS
                    } else {
                        DesignSystem::TEXT_PRIMARY
                    };
                    ui.label(
                        egui::RichText::new(label)
                            .size(16.0)
                            .strong()
                            .color(label_color),
                    );
                    ui.label(
                        egui::RichText::new(description)
                            .size(12.0)
                            .color(DesignSystem::TEXT_SECONDARY),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    check_mark(ui, checked, 22.0);
                });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    response.clicked()
}

/// Compact single-line checklist row. Returns true when clicked.
pub fn render_small_check_item(ui: &mut egui::Ui, checked: bool, label: &str) -> bool {
    let response = item_frame(checked, 1.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                check_mark(ui, checked, 18.0);
                let color = if checked {
                    DesignSystem::SUCCESS
                } else {
                    DesignSystem::TEXT_SECONDARY
                };
                ui.label(egui::RichText::new(label).size(14.0).color(color));
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    response.clicked()
}
