use crate::application::checklist_manager::ChecklistStateManager;
use crate::application::session::ChecklistSession;
use crate::domain::checklist::{SETUP_FLAG_COUNT, SetupFlag};
use crate::domain::content::{SETUP_CRITICAL_RULE, SETUP_SUBTITLE, SETUP_TITLE};
use crate::interfaces::components::banner::{render_callout, render_status_banner};
use crate::interfaces::components::check_item::render_check_item;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_setup(ui: &mut egui::Ui, session: &mut ChecklistSession) {
    let setup = session.setup();
    let progress = ChecklistStateManager::compute_setup_progress(&setup);
    let is_valid = ChecklistStateManager::is_setup_valid(&setup);
    let bar_color = if is_valid {
        DesignSystem::SUCCESS
    } else {
        DesignSystem::ACCENT_PURPLE
    };

    DesignSystem::tinted_frame(DesignSystem::ACCENT_PURPLE)
        .corner_radius(DesignSystem::ROUNDING_LARGE)
        .inner_margin(DesignSystem::SPACING_LARGE as i8)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Header: title (left) + progress counter (right)
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(SETUP_TITLE).size(26.0).strong());
                    ui.label(
                        egui::RichText::new(SETUP_SUBTITLE)
                            .size(14.0)
                            .color(DesignSystem::ACCENT_PURPLE),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(format!("{progress}/{SETUP_FLAG_COUNT}"))
                                .size(40.0)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new("Complete")
                                .size(12.0)
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                    });
                });
            });

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.add(
                egui::ProgressBar::new(progress as f32 / SETUP_FLAG_COUNT as f32)
                    .fill(bar_color)
                    .desired_height(10.0),
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            // Conditions
            for flag in SetupFlag::ALL {
                if render_check_item(
                    ui,
                    setup.get(flag),
                    flag.number(),
                    flag.label(),
                    flag.description(),
                ) {
                    session.toggle_setup(flag);
                }
                ui.add_space(6.0);
            }

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let reset = if is_valid {
                render_status_banner(
                    ui,
                    "✔",
                    "VALID A+ SETUP",
                    Some("All conditions met. High probability trade confirmed."),
                    "Reset for Next Setup",
                    DesignSystem::SUCCESS,
                    true,
                )
            } else {
                let missing = format!(
                    "Missing {} condition(s). Wait for complete setup.",
                    setup.missing_count()
                );
                render_status_banner(
                    ui,
                    "✖",
                    "INCOMPLETE SETUP",
                    Some(&missing),
                    "Reset Checklist",
                    DesignSystem::DANGER,
                    false,
                )
            };
            if reset {
                session.reset_setup();
            }
        });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    render_callout(ui, &SETUP_CRITICAL_RULE);
}
