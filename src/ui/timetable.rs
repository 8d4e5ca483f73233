//! Timetable upload and confirmation flow.
//!
//! Drives the `Idle -> Previewing -> Uploading -> Analyzing -> Confirming`
//! phases over the simulated analysis pipeline, then shows the review dialog
//! where extracted classes can be toggled before confirming.

use std::path::PathBuf;

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{CHECK, FILE_PDF, INFO, UPLOAD_SIMPLE};

use super::components::colors;
use crate::analysis::{AnalysisPipeline, AnalysisProgress, SelectedFile, UploadPhase};
use crate::export::{export_timetable_to_excel, generate_export_filename};
use crate::models::timetable::{ClassItem, ClassSelection};

/// State of the upload step.
#[derive(Default)]
pub struct TimetableUpload {
    phase: UploadPhase,
    file: Option<SelectedFile>,
    pipeline: Option<AnalysisPipeline>,
    classes: Vec<ClassItem>,
    selection: ClassSelection,
    /// Visible rejection notice (the subsystem's only validation).
    notice: Option<String>,
    /// Outcome of the last Excel export, shown in the confirmation dialog.
    export_message: Option<(bool, String)>,
}

impl TimetableUpload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    /// Whether a repaint should be requested while the pipeline runs.
    pub fn is_processing(&self) -> bool {
        self.phase.is_processing()
    }

    /// Accept a drag-dropped file. Only honored while the dropzone is shown;
    /// drops during later phases are ignored.
    pub fn accept_drop(&mut self, path: PathBuf) {
        if self.phase == UploadPhase::Idle {
            self.choose_file(path);
        }
    }

    /// Record a chosen file and move to the preview phase.
    pub fn choose_file(&mut self, path: PathBuf) {
        match SelectedFile::from_path(path) {
            Ok(file) => {
                self.file = Some(file);
                self.phase = UploadPhase::Previewing;
                self.notice = None;
            }
            Err(e) => {
                self.notice = Some(format!("Could not read file: {e}"));
            }
        }
    }

    /// Drop the chosen file and return to the dropzone.
    pub fn replace_file(&mut self) {
        self.file = None;
        self.phase = UploadPhase::Idle;
    }

    /// Begin the simulated upload. Refused with a visible notice when no file
    /// has been chosen.
    pub fn start_upload(&mut self, rt: &tokio::runtime::Runtime) {
        let Some(file) = &self.file else {
            self.notice = Some("Please select a timetable file first".to_string());
            return;
        };

        self.notice = None;
        self.phase = UploadPhase::Uploading;
        self.pipeline = Some(AnalysisPipeline::spawn(rt, &file.name));
    }

    /// Abort the running pipeline and return to the preview.
    pub fn cancel_upload(&mut self) {
        if let Some(pipeline) = self.pipeline.take() {
            pipeline.cancel();
        }
        self.phase = if self.file.is_some() {
            UploadPhase::Previewing
        } else {
            UploadPhase::Idle
        };
    }

    /// Drain pipeline progress messages.
    pub fn poll(&mut self) {
        let Some(pipeline) = &self.pipeline else { return };

        let mut done = false;
        let mut messages = Vec::new();
        while let Some(msg) = pipeline.try_recv() {
            if matches!(msg, AnalysisProgress::Completed(_)) {
                done = true;
            }
            messages.push(msg);
        }
        for msg in messages {
            self.apply_progress(msg);
        }
        if done {
            self.pipeline = None;
        }
    }

    /// Apply one progress message to the phase machine.
    fn apply_progress(&mut self, msg: AnalysisProgress) {
        match msg {
            AnalysisProgress::Uploading => self.phase = UploadPhase::Uploading,
            AnalysisProgress::Analyzing => self.phase = UploadPhase::Analyzing,
            AnalysisProgress::Completed(classes) => {
                // Every extracted record starts selected.
                self.selection = ClassSelection::select_all(&classes);
                self.classes = classes;
                self.phase = UploadPhase::Confirming;
            }
        }
    }

    /// Confirm the review, returning the selected class ids.
    pub fn confirm(&mut self) -> Vec<String> {
        self.selection.selected_ids()
    }

    /// Save the currently selected classes to an Excel file.
    fn export_selected(&mut self) {
        let suggested = generate_export_filename("timetable");
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel Workbook", &["xlsx"])
            .set_file_name(suggested.to_string_lossy())
            .save_file()
        else {
            return;
        };

        match export_timetable_to_excel(&self.classes, &self.selection, &path) {
            Ok(()) => {
                tracing::info!("Exported timetable to {}", path.display());
                self.export_message = Some((true, format!("Saved to {}", path.display())));
            }
            Err(e) => {
                tracing::error!("Timetable export failed: {e}");
                self.export_message = Some((false, format!("Export failed: {e}")));
            }
        }
    }

    /// Render the upload step. Returns the selected class ids once the user
    /// confirms the review dialog.
    pub fn show(&mut self, ui: &mut Ui, rt: &tokio::runtime::Runtime) -> Option<Vec<String>> {
        self.poll();

        let mut confirmed = false;

        match self.phase {
            UploadPhase::Idle => self.show_dropzone(ui),
            UploadPhase::Previewing => self.show_preview(ui, rt),
            UploadPhase::Uploading | UploadPhase::Analyzing => self.show_processing(ui),
            UploadPhase::Confirming => {
                confirmed = self.show_confirmation(ui.ctx());
            }
        }

        if let Some(notice) = &self.notice {
            ui.add_space(8.0);
            ui.colored_label(colors::ERROR, notice);
        }

        confirmed.then(|| self.confirm())
    }

    fn show_dropzone(&mut self, ui: &mut Ui) {
        // Drag-and-drop is an alternative to the picker
        let dropped = ui
            .ctx()
            .input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.accept_drop(path);
            return;
        }
        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        egui::Frame::new()
            .stroke(egui::Stroke::new(
                1.5,
                if hovering {
                    colors::ACCENT
                } else {
                    ui.visuals().weak_text_color()
                },
            ))
            .inner_margin(Margin::same(24))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(UPLOAD_SIMPLE).size(36.0).weak());
                    ui.add_space(6.0);
                    ui.label(RichText::new("Upload your college timetable").strong());
                    ui.label(RichText::new("Drag & drop, or browse for a PDF or image").small().weak());
                    ui.add_space(10.0);

                    if ui.button("Select File").clicked()
                        && let Some(path) = rfd::FileDialog::new()
                            .add_filter("Timetable", &["pdf", "png", "jpg", "jpeg", "gif", "bmp", "webp"])
                            .pick_file()
                    {
                        self.choose_file(path);
                    }
                });
            });
    }

    fn show_preview(&mut self, ui: &mut Ui, rt: &tokio::runtime::Runtime) {
        let Some(file) = &self.file else { return };

        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, ui.visuals().weak_text_color()))
            .inner_margin(Margin::same(10))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                if let Some(bytes) = &file.preview {
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Image::from_bytes(format!("bytes://timetable-preview-{}", file.name), bytes.clone())
                                .max_height(300.0),
                        );
                    });
                } else {
                    // Non-image (or unreadable image): name/size card.
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(FILE_PDF).size(24.0).color(colors::ACCENT));
                        ui.add_space(6.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&file.name).strong());
                            ui.label(RichText::new(file.size_label()).small().weak());
                        });
                    });
                }
            });

        ui.add_space(8.0);

        let file_label = format!("{} ({})", file.name, file.size_label());
        ui.horizontal(|ui| {
            ui.label(RichText::new(file_label).small());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Upload & Analyze").clicked() {
                    self.start_upload(rt);
                }
                if ui.button("Replace").clicked() {
                    self.replace_file();
                }
            });
        });
    }

    fn show_processing(&self, ui: &mut Ui) {
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, colors::ACCENT))
            .inner_margin(Margin::same(24))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.add_space(8.0);
                    match self.phase {
                        UploadPhase::Uploading => {
                            ui.label(RichText::new("Uploading your timetable...").strong());
                            ui.label(RichText::new("This usually takes a few seconds").small().weak());
                        }
                        UploadPhase::Analyzing => {
                            ui.label(RichText::new("Analyzing your timetable...").strong());
                            ui.label(
                                RichText::new("Extracting subjects, timings, and electives")
                                    .small()
                                    .weak(),
                            );
                        }
                        _ => {}
                    }
                });
            });
    }

    /// Render the confirmation dialog. Returns `true` on confirm.
    fn show_confirmation(&mut self, ctx: &egui::Context) -> bool {
        let mut confirmed = false;

        egui::Window::new("Confirm Your Timetable")
            .collapsible(false)
            .resizable(false)
            .default_width(480.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Review the extracted classes and untick any that aren't part of your schedule.");
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(INFO).color(colors::ACCENT));
                    ui.label(
                        RichText::new("Elective courses are marked. Make sure they're correctly identified.").small(),
                    );
                });
                ui.add_space(10.0);

                ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    for class in &self.classes {
                        let mut selected = self.selection.is_selected(&class.id);

                        egui::Frame::new()
                            .fill(ui.style().visuals.faint_bg_color)
                            .inner_margin(Margin::same(8))
                            .outer_margin(Margin::symmetric(0, 3))
                            .corner_radius(CornerRadius::same(6))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    if ui.checkbox(&mut selected, "").changed() {
                                        self.selection.toggle(&class.id);
                                    }
                                    ui.vertical(|ui| {
                                        ui.horizontal(|ui| {
                                            ui.label(RichText::new(&class.subject).strong());
                                            if class.is_elective {
                                                ui.label(
                                                    RichText::new("Elective")
                                                        .small()
                                                        .color(Color32::from_rgb(160, 110, 230)),
                                                );
                                            }
                                        });
                                        ui.label(
                                            RichText::new(format!("{} - {} - {}", class.day, class.time, class.room))
                                                .small()
                                                .weak(),
                                        );
                                    });
                                });
                            });
                    }
                });

                ui.add_space(10.0);

                if let Some((ok, message)) = &self.export_message {
                    let color = if *ok { colors::SUCCESS } else { colors::ERROR };
                    ui.colored_label(color, message);
                    ui.add_space(6.0);
                }

                ui.horizontal(|ui| {
                    if ui.button("Export to Excel").clicked() {
                        self.export_selected();
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(format!("{CHECK} Confirm Timetable")).clicked() {
                            confirmed = true;
                        }
                    });
                });
            });

        confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timetable::sample_timetable;

    #[test]
    fn test_upload_without_file_is_rejected() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let mut upload = TimetableUpload::new();

        upload.start_upload(&rt);

        assert_eq!(upload.phase(), UploadPhase::Idle);
        assert!(upload.notice.is_some());
    }

    #[test]
    fn test_choose_file_moves_to_preview() {
        let dir = std::env::temp_dir();
        let path = dir.join("study_buddy_test_timetable.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let mut upload = TimetableUpload::new();
        upload.choose_file(path.clone());

        assert_eq!(upload.phase(), UploadPhase::Previewing);
        let file = upload.file.as_ref().unwrap();
        assert!(file.preview.is_none());
        assert_eq!(file.size_bytes, 8);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_dropped_file_is_accepted_when_idle() {
        let dir = std::env::temp_dir();
        let path = dir.join("study_buddy_test_drop.png");
        std::fs::write(&path, b"not-a-real-png").unwrap();

        let mut upload = TimetableUpload::new();
        upload.accept_drop(path.clone());

        assert_eq!(upload.phase(), UploadPhase::Previewing);
        assert!(upload.file.is_some());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_drop_ignored_outside_dropzone() {
        let dir = std::env::temp_dir();
        let path = dir.join("study_buddy_test_drop_late.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let mut upload = TimetableUpload::new();
        upload.apply_progress(AnalysisProgress::Uploading);

        upload.accept_drop(path.clone());
        assert_eq!(upload.phase(), UploadPhase::Uploading);
        assert!(upload.file.is_none());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_sets_notice() {
        let mut upload = TimetableUpload::new();
        upload.choose_file(PathBuf::from("/definitely/not/here.png"));

        assert_eq!(upload.phase(), UploadPhase::Idle);
        assert!(upload.notice.is_some());
    }

    #[test]
    fn test_progress_drives_phases() {
        let mut upload = TimetableUpload::new();

        upload.apply_progress(AnalysisProgress::Uploading);
        assert_eq!(upload.phase(), UploadPhase::Uploading);

        upload.apply_progress(AnalysisProgress::Analyzing);
        assert_eq!(upload.phase(), UploadPhase::Analyzing);

        upload.apply_progress(AnalysisProgress::Completed(sample_timetable()));
        assert_eq!(upload.phase(), UploadPhase::Confirming);
        assert_eq!(upload.classes.len(), 8);
        assert!(upload.classes.iter().all(|c| upload.selection.is_selected(&c.id)));
    }

    #[test]
    fn test_confirm_returns_selected_ids() {
        let mut upload = TimetableUpload::new();
        upload.apply_progress(AnalysisProgress::Completed(sample_timetable()));

        upload.selection.toggle("8");
        let ids = upload.confirm();
        assert_eq!(ids.len(), 7);
        assert!(!ids.contains(&"8".to_string()));
    }
}
