use crate::application::checklist_manager::ChecklistStateManager;
use crate::application::session::ChecklistSession;
use crate::domain::checklist::{DAILY_FLAG_COUNT, DailyGroup};
use crate::domain::content::{Accent, DAILY_REMINDER, DAILY_SUBTITLE, DAILY_TITLE};
use crate::interfaces::components::banner::{
    render_callout, render_section_header, render_status_banner,
};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::check_item::render_small_check_item;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

fn group_accent(group: DailyGroup) -> Accent {
    match group {
        DailyGroup::PreMarket => Accent::Blue,
        DailyGroup::DuringSession => Accent::Purple,
        DailyGroup::Entry => Accent::Green,
        DailyGroup::PostMarket => Accent::Orange,
    }
}

pub fn render_daily(ui: &mut egui::Ui, session: &mut ChecklistSession) {
    let daily = session.daily();

    render_section_header(ui, DAILY_TITLE, DAILY_SUBTITLE, DesignSystem::SUCCESS);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    for group in DailyGroup::ALL {
        let (done, total) = daily.group_progress(group);
        Card::new()
            .title(format!("{}  ({done}/{total})", group.title()))
            .accent(DesignSystem::accent(group_accent(group)))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                for flag in group.flags() {
                    if render_small_check_item(ui, daily.get(*flag), flag.label()) {
                        session.toggle_daily(*flag);
                    }
                    ui.add_space(4.0);
                }
            });
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }

    let reset = if ChecklistStateManager::is_daily_routine_complete(&daily) {
        render_status_banner(
            ui,
            "✔",
            "Daily Routine Complete",
            None,
            "Reset for Tomorrow",
            DesignSystem::SUCCESS,
            true,
        )
    } else {
        let progress = format!(
            "Continue with your daily routine ({}/{DAILY_FLAG_COUNT})",
            daily.completed_count()
        );
        render_status_banner(
            ui,
            "⏰",
            "In Progress",
            Some(&progress),
            "Reset Routine",
            DesignSystem::INFO,
            false,
        )
    };
    if reset {
        session.reset_daily();
    }

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    render_callout(ui, &DAILY_REMINDER);
}
