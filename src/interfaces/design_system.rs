use crate::domain::content::Accent;
use eframe::egui;

/// Dark slate/blue design system for the checklist window
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(2, 6, 23); // slate-950
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42); // slate-900
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(18, 27, 48);
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(30, 41, 59); // slate-800
    pub const BG_ITEM: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(37, 99, 235); // blue-600
    pub const ACCENT_PURPLE: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
    pub const ACCENT_AMBER: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
    pub const ACCENT_ORANGE: egui::Color32 = egui::Color32::from_rgb(249, 115, 22);

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(74, 222, 128); // green-400
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(248, 113, 113); // red-400
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(96, 165, 250); // blue-400

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(148, 163, 184); // slate-400
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139); // slate-500

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(51, 65, 85); // slate-700
    pub const BORDER_ITEM: egui::Color32 = egui::Color32::from_rgb(71, 85, 105); // slate-600

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 6.0;
    pub const ROUNDING_MEDIUM: f32 = 10.0;
    pub const ROUNDING_LARGE: f32 = 14.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_WINDOW;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_ITEM;
        visuals.widgets.inactive.bg_fill = Self::BG_ITEM;

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Concrete color for a content accent
    pub fn accent(accent: Accent) -> egui::Color32 {
        match accent {
            Accent::Blue => Self::INFO,
            Accent::Purple => Self::ACCENT_PURPLE,
            Accent::Green => Self::SUCCESS,
            Accent::Orange => Self::ACCENT_ORANGE,
            Accent::Red => Self::DANGER,
            Accent::Amber => Self::ACCENT_AMBER,
        }
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Tinted frame with a colored border, used for banners and callouts
    pub fn tinted_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.12))
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(2.0, color))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
