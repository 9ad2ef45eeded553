use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Top-level page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Setup,
    Daily,
    AntiOvertrade,
    GoldenRules,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Setup,
        Section::Daily,
        Section::AntiOvertrade,
        Section::GoldenRules,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "📖",
            Section::Setup => "🎯",
            Section::Daily => "⏰",
            Section::AntiOvertrade => "⚠",
            Section::GoldenRules => "🏆",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "System Overview",
            Section::Setup => "A+ Setup Check",
            Section::Daily => "Daily Routine",
            Section::AntiOvertrade => "Anti-Overtrade",
            Section::GoldenRules => "Golden Rules",
        }
    }
}

/// Horizontal tab bar. Updates `current` when a tab is clicked.
pub fn render_nav(ui: &mut egui::Ui, current: &mut Section) {
    ui.horizontal(|ui| {
        for section in Section::ALL {
            let is_selected = *current == section;

            let (fill, text_color) = if is_selected {
                (DesignSystem::ACCENT_PRIMARY, DesignSystem::TEXT_PRIMARY)
            } else {
                (egui::Color32::TRANSPARENT, DesignSystem::TEXT_SECONDARY)
            };

            let button = egui::Button::new(
                egui::RichText::new(format!("{} {}", section.icon(), section.label()))
                    .size(14.0)
                    .color(text_color),
            )
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .corner_radius(DesignSystem::ROUNDING_SMALL)
            .min_size(egui::vec2(0.0, 32.0));

            if ui.add(button).clicked() {
                *current = section;
            }
        }
    });
}
