use crate::application::session::ChecklistSession;
use crate::domain::content::{SYSTEM_NAME, SYSTEM_TAGLINE};
use crate::infrastructure::observability::{LogFeed, LogSeverity};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::sections::anti_overtrade::render_anti_overtrade;
use crate::interfaces::sections::daily::render_daily;
use crate::interfaces::sections::golden_rules::render_golden_rules;
use crate::interfaces::sections::overview::render_overview;
use crate::interfaces::sections::setup::render_setup;
use crate::interfaces::ui_components::{Section, render_nav};
use eframe::egui;

/// Desktop window hosting the methodology pages and both checklists
pub struct LfpmApp {
    session: ChecklistSession,
    current: Section,
    log_feed: LogFeed,
    show_logs: bool,
    seen_failures: u64,
}

impl LfpmApp {
    pub fn new(session: ChecklistSession, log_feed: LogFeed) -> Self {
        Self {
            session,
            current: Section::default(),
            log_feed,
            show_logs: false,
            seen_failures: 0,
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(SYSTEM_NAME)
                        .size(24.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(SYSTEM_TAGLINE)
                        .size(13.0)
                        .color(DesignSystem::INFO),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.show_logs { "Hide Logs" } else { "Logs" };
                if ui.button(label).clicked() {
                    self.show_logs = !self.show_logs;
                }
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);
        render_nav(ui, &mut self.current);
        ui.add_space(DesignSystem::SPACING_SMALL);
    }

    fn render_logs(&mut self, ui: &mut egui::Ui) {
        let stats = self.session.autosave_stats();
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("System Logs").strong());
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "{} lines | saved {} | coalesced {} | failed {}",
                    self.log_feed.len(),
                    stats.writes(),
                    stats.coalesced(),
                    stats.failed_writes()
                ))
                .small()
                .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Clear").clicked() {
                    self.log_feed.clear();
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.log_feed.is_empty() {
                    ui.label(
                        egui::RichText::new("No log lines yet")
                            .italics()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
                for line in self.log_feed.lines() {
                    let color = match LogSeverity::of(line) {
                        LogSeverity::Error => DesignSystem::DANGER,
                        LogSeverity::Warn => DesignSystem::WARNING,
                        LogSeverity::Info => DesignSystem::TEXT_SECONDARY,
                        LogSeverity::Debug => DesignSystem::TEXT_MUTED,
                    };
                    ui.label(egui::RichText::new(line).monospace().small().color(color));
                }
            });
    }
}

impl eframe::App for LfpmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        self.log_feed.drain();

        // Surface persistence failures without the user having to look for them
        let failures = self.session.autosave_stats().failed_writes();
        if failures > self.seen_failures {
            self.seen_failures = failures;
            self.show_logs = true;
        }

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            self.render_header(ui);
        });

        if self.show_logs {
            egui::TopBottomPanel::bottom("log_panel")
                .resizable(true)
                .default_height(160.0)
                .min_height(80.0)
                .show(ctx, |ui| {
                    self.render_logs(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.current {
                        Section::Overview => render_overview(ui),
                        Section::Setup => render_setup(ui, &mut self.session),
                        Section::Daily => render_daily(ui, &mut self.session),
                        Section::AntiOvertrade => render_anti_overtrade(ui),
                        Section::GoldenRules => render_golden_rules(ui),
                    });
            });
    }
}
