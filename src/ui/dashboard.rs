//! Dashboard overview tab.

use chrono::NaiveDate;
use eframe::egui::{self, ProgressBar, RichText, Ui};
use egui_phosphor::regular::{LIGHTBULB, WARNING};

use super::components::{colors, empty_state, section_frame, stat_card};
use crate::models::attendance::AttendanceSummary;
use crate::models::event::{DaySchedule, events_on};

/// Render the overview tab: stat cards, subject breakdown, recommendation,
/// and the schedule for `today`.
pub fn show_overview(
    ui: &mut Ui,
    username: &str,
    critical_subject: &str,
    summary: &AttendanceSummary,
    schedule: &[DaySchedule],
    today: NaiveDate,
) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.add_space(6.0);
        ui.heading(RichText::new(format!("Welcome back, {username}!")).size(22.0).strong());
        ui.label(RichText::new("Here's your attendance and study plan at a glance").weak());
        ui.add_space(12.0);

        let today_count = events_on(schedule, today).len();

        ui.horizontal_wrapped(|ui| {
            stat_card(
                ui,
                "Overall Attendance",
                &format!("{}%", summary.overall_attendance),
                &format!("Target: {}%", summary.target_attendance),
            );
            stat_card(
                ui,
                "Classes Missed",
                &summary.classes_missed.to_string(),
                "This semester",
            );
            stat_card(
                ui,
                "Classes to Attend",
                &summary.classes_to_attend.to_string(),
                "To reach your target",
            );
            stat_card(ui, "Today's Plan", &today_count.to_string(), "Scheduled items");
        });

        ui.add_space(6.0);
        ui.add(
            ProgressBar::new(summary.overall_fraction())
                .text(format!("{}% of {}% target", summary.overall_attendance, summary.target_attendance)),
        );
        ui.add_space(14.0);

        section_frame(ui, "Subject-wise Attendance", |ui| {
            for subject in &summary.subjects {
                ui.horizontal(|ui| {
                    if subject.is_warning() {
                        ui.label(RichText::new(WARNING).color(colors::WARNING));
                    }
                    ui.label(&subject.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}%", subject.attendance)).color(if subject.is_warning() {
                                colors::WARNING
                            } else {
                                colors::SUCCESS
                            }),
                        );
                        ui.add_sized(
                            [160.0, 12.0],
                            ProgressBar::new(f32::from(subject.attendance) / 100.0),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });

        ui.add_space(10.0);
        section_frame(ui, "Recommendation", |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(LIGHTBULB).size(20.0).color(colors::ACCENT));
                ui.label(format!(
                    "Focus on {critical_subject} this week. Attend your next {} classes to stay on track for your {}% target.",
                    summary.classes_to_attend, summary.target_attendance,
                ));
            });
        });

        ui.add_space(10.0);
        section_frame(ui, "Today's Schedule", |ui| {
            let events = events_on(schedule, today);
            if events.is_empty() {
                empty_state(ui, "Nothing scheduled for today");
            } else {
                for event in events {
                    super::calendar_panel::render_event(ui, event);
                }
            }
        });

        ui.add_space(10.0);
    });
}
