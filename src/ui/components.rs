//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Ui};

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const ACCENT: Color32 = Color32::from_rgb(100, 150, 230);

    /// Accent for a class event row.
    pub const EVENT_CLASS: Color32 = Color32::from_rgb(80, 140, 230);
    /// Accent for a study session row.
    pub const EVENT_STUDY: Color32 = Color32::from_rgb(160, 110, 230);
    /// Accent for an assignment row.
    pub const EVENT_ASSIGNMENT: Color32 = Color32::from_rgb(230, 170, 60);

    pub const PRIORITY_HIGH: Color32 = Color32::from_rgb(230, 100, 100);
    pub const PRIORITY_MEDIUM: Color32 = Color32::from_rgb(230, 180, 50);
    pub const PRIORITY_LOW: Color32 = Color32::from_rgb(100, 200, 100);
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .outer_margin(Margin::same(5))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(150.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Render a rounded section frame with a strong title.
pub fn section_frame<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(title).strong());
            ui.add_space(10.0);
            add_contents(ui)
        })
        .inner
}

/// Render a centered weak empty-state message.
pub fn empty_state(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(30.0);
        ui.label(RichText::new(message).weak());
        ui.add_space(30.0);
    });
}

/// Render an event/task row: icon badge, title, detail line, priority accent.
pub fn event_row(ui: &mut Ui, icon: &str, icon_color: Color32, accent: Color32, title: RichText, detail: String) {
    egui::Frame::new()
        .fill(ui.style().visuals.faint_bg_color)
        .inner_margin(Margin::same(10))
        .outer_margin(Margin::symmetric(0, 3))
        .corner_radius(CornerRadius::same(6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                // Priority accent bar
                let (bar, _) = ui.allocate_exact_size(egui::vec2(3.0, 36.0), egui::Sense::hover());
                ui.painter().rect_filled(bar, 2.0, accent);

                ui.add_space(4.0);
                ui.label(RichText::new(icon).size(18.0).color(icon_color));
                ui.add_space(6.0);

                ui.vertical(|ui| {
                    ui.label(title);
                    ui.label(RichText::new(detail).small().weak());
                });
            });
        });
}
