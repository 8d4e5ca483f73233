//! Main application window.

use std::path::PathBuf;

use chrono::NaiveDate;
use eframe::egui::{self, RichText};
use egui_phosphor::regular::{MOON, SUN};

use super::components::colors;
use super::todo_panel::TodoFeedback;
use crate::config::AppConfig;
use crate::models::attendance::{AttendanceSummary, sample_summary};
use crate::models::event::{DaySchedule, sample_schedule};
use crate::models::todo::{TodoFilter, TodoList};

/// Main window tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Calendar,
    Tasks,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Overview, DashboardTab::Calendar, DashboardTab::Tasks];

    pub fn name(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Calendar => "Calendar",
            DashboardTab::Tasks => "Tasks",
        }
    }
}

/// Main application state.
pub struct StudyBuddyApp {
    config: AppConfig,
    config_path: PathBuf,
    tab: DashboardTab,
    summary: AttendanceSummary,
    schedule: Vec<DaySchedule>,
    /// The demo data is pinned to fixed dates; this is its "today".
    today: NaiveDate,
    selected_date: NaiveDate,
    todos: TodoList,
    todo_input: String,
    todo_filter: TodoFilter,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl StudyBuddyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, config_path: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        if config.ui.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let schedule = sample_schedule();
        let today = schedule.first().map(|day| day.date).unwrap_or_default();

        Self {
            config,
            config_path,
            tab: DashboardTab::Overview,
            summary: sample_summary(),
            schedule,
            today,
            selected_date: today,
            todos: TodoList::with_samples(),
            todo_input: String::new(),
            todo_filter: TodoFilter::All,
            error_message: None,
            success_message: None,
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.config.ui.dark_mode = !self.config.ui.dark_mode;
        if self.config.ui.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        if let Err(e) = self.config.save(&self.config_path) {
            self.error_message = Some(format!("Failed to save config: {e}"));
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(RichText::new("Study Buddy").strong());
                ui.label(RichText::new(format!("Hi, {}", self.config.profile.username)).weak());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.config.ui.dark_mode { SUN } else { MOON };
                    if ui
                        .button(RichText::new(icon).size(16.0))
                        .on_hover_text("Toggle dark mode")
                        .clicked()
                    {
                        self.toggle_dark_mode(ctx);
                    }
                });
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                for tab in DashboardTab::ALL {
                    if ui.selectable_label(self.tab == tab, tab.name()).clicked() {
                        self.tab = tab;
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(2.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Study Buddy · your companion for better attendance").small().weak());
            });
            ui.add_space(2.0);
        });
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(err) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, &err);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if let Some(msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, &msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }
    }
}

impl eframe::App for StudyBuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_header(ctx);
        self.show_footer(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            DashboardTab::Overview => super::dashboard::show_overview(
                ui,
                &self.config.profile.username,
                &self.config.attendance.critical_subject,
                &self.summary,
                &self.schedule,
                self.today,
            ),
            DashboardTab::Calendar => {
                super::calendar_panel::show_calendar(ui, &mut self.selected_date, &self.schedule, self.today);
            }
            DashboardTab::Tasks => {
                let feedback =
                    super::todo_panel::show_tasks(ui, &mut self.todos, &mut self.todo_input, &mut self.todo_filter);
                match feedback {
                    Some(TodoFeedback::Exported(msg)) => self.success_message = Some(msg),
                    Some(TodoFeedback::ExportFailed(msg)) => self.error_message = Some(msg),
                    None => {}
                }
            }
        });

        self.show_dialogs(ctx);
    }
}
