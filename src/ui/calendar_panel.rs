//! Calendar tab: date picker plus the event list for the selected day.

use chrono::NaiveDate;
use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{BOOK_OPEN, CHALKBOARD_TEACHER, PENCIL_SIMPLE};

use super::components::{colors, empty_state, event_row, section_frame};
use crate::models::event::{CalendarEvent, DaySchedule, EventPriority, EventType, events_on};

/// Render the calendar tab.
pub fn show_calendar(ui: &mut Ui, selected_date: &mut NaiveDate, schedule: &[DaySchedule], today: NaiveDate) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.heading("Calendar");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Today").clicked() {
                *selected_date = today;
            }
            ui.add(DatePickerButton::new(selected_date).id_salt("calendar_date"));
        });
    });
    ui.add_space(10.0);

    let title = format!("Schedule for {}", selected_date.format("%A, %B %-d"));
    section_frame(ui, &title, |ui| {
        let events = events_on(schedule, *selected_date);
        if events.is_empty() {
            empty_state(ui, "No events scheduled for this day");
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for event in events {
                    render_event(ui, event);
                }
            });
        }
    });
}

/// Render one event row with its type icon and priority accent.
pub fn render_event(ui: &mut Ui, event: &CalendarEvent) {
    let (icon, icon_color) = match event.event_type {
        EventType::Class => (CHALKBOARD_TEACHER, colors::EVENT_CLASS),
        EventType::Study => (BOOK_OPEN, colors::EVENT_STUDY),
        EventType::Assignment => (PENCIL_SIMPLE, colors::EVENT_ASSIGNMENT),
    };
    let accent = match event.priority {
        EventPriority::High => colors::PRIORITY_HIGH,
        EventPriority::Medium => colors::PRIORITY_MEDIUM,
        EventPriority::Low => colors::PRIORITY_LOW,
    };

    let detail = match &event.detail {
        Some(detail) => format!("{} · {}", event.time, detail),
        None => event.time.clone(),
    };
    event_row(ui, icon, icon_color, accent, RichText::new(&event.title), detail);
}
