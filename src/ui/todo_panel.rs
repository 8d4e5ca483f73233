//! Tasks tab: add/toggle/filter to-dos and export them to Excel.

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular::{BOOK_OPEN, BOOKMARK_SIMPLE, DOWNLOAD_SIMPLE, PENCIL_SIMPLE};

use super::components::{colors, empty_state, section_frame};
use crate::export::{export_tasks_to_excel, generate_export_filename};
use crate::models::todo::{TodoCategory, TodoFilter, TodoItem, TodoList, TodoPriority};

/// Outcome of a tasks-tab interaction that the app should surface in a dialog.
pub enum TodoFeedback {
    Exported(String),
    ExportFailed(String),
}

/// Render the tasks tab. Returns feedback when an export finished.
pub fn show_tasks(ui: &mut Ui, list: &mut TodoList, input: &mut String, filter: &mut TodoFilter) -> Option<TodoFeedback> {
    let mut feedback = None;

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.heading("Tasks");
        ui.label(RichText::new(format!("{} active", list.active_count())).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("{DOWNLOAD_SIMPLE} Export to Excel")).clicked() {
                feedback = export_tasks(list, *filter);
            }
        });
    });
    ui.add_space(10.0);

    // Blank titles are refused by the list itself
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input)
                .desired_width(ui.available_width() - 70.0)
                .hint_text("Add a new task..."),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Add").clicked() || submitted {
            if list.add(input).is_some() {
                input.clear();
                response.request_focus();
            }
        }
    });
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        for option in TodoFilter::ALL {
            if ui.selectable_label(*filter == option, option.label()).clicked() {
                *filter = option;
            }
        }
    });
    ui.add_space(8.0);

    section_frame(ui, "Task List", |ui| {
        let visible: Vec<String> = list.filtered(*filter).iter().map(|t| t.id.clone()).collect();
        if visible.is_empty() {
            empty_state(ui, filter.empty_message());
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for id in visible {
                let Some(item) = list.items().iter().find(|t| t.id == id) else {
                    continue;
                };
                if render_task(ui, item) {
                    list.toggle(&id);
                }
            }
        });
    });

    feedback
}

/// Render one task row. Returns true when the checkbox was clicked.
fn render_task(ui: &mut Ui, item: &TodoItem) -> bool {
    let mut toggled = false;

    let (icon, icon_color) = match item.category {
        TodoCategory::Assignment => (PENCIL_SIMPLE, colors::EVENT_ASSIGNMENT),
        TodoCategory::Study => (BOOK_OPEN, colors::EVENT_STUDY),
        TodoCategory::Reading => (BOOKMARK_SIMPLE, colors::EVENT_CLASS),
    };
    let accent = match item.priority {
        TodoPriority::High => colors::PRIORITY_HIGH,
        TodoPriority::Medium => colors::PRIORITY_MEDIUM,
        TodoPriority::Low => colors::PRIORITY_LOW,
    };

    egui::Frame::new()
        .fill(ui.style().visuals.faint_bg_color)
        .inner_margin(egui::Margin::same(10))
        .outer_margin(egui::Margin::symmetric(0, 3))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let (bar, _) = ui.allocate_exact_size(egui::vec2(3.0, 32.0), egui::Sense::hover());
                ui.painter().rect_filled(bar, 2.0, accent);
                ui.add_space(4.0);

                let mut completed = item.completed;
                if ui.checkbox(&mut completed, "").clicked() {
                    toggled = true;
                }

                ui.label(RichText::new(icon).size(16.0).color(icon_color));
                ui.add_space(4.0);

                ui.vertical(|ui| {
                    let title = if item.completed {
                        RichText::new(&item.title).strikethrough().weak()
                    } else {
                        RichText::new(&item.title)
                    };
                    ui.label(title);
                    ui.label(RichText::new(format!("Due: {}", item.due_date)).small().weak());
                });
            });
        });

    toggled
}

fn export_tasks(list: &TodoList, filter: TodoFilter) -> Option<TodoFeedback> {
    let suggested = generate_export_filename("tasks");
    let path = rfd::FileDialog::new()
        .add_filter("Excel Workbook", &["xlsx"])
        .set_file_name(suggested.to_string_lossy())
        .save_file()?;

    let tasks = list.filtered(filter);
    match export_tasks_to_excel(&tasks, &path) {
        Ok(()) => {
            tracing::info!("Exported {} tasks to {}", tasks.len(), path.display());
            Some(TodoFeedback::Exported(format!(
                "Exported {} tasks to {}",
                tasks.len(),
                path.display()
            )))
        }
        Err(e) => {
            tracing::error!("Task export failed: {e}");
            Some(TodoFeedback::ExportFailed(format!("Export failed: {e}")))
        }
    }
}
