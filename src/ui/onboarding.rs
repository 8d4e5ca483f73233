//! First-run onboarding wizard.
//!
//! A forward-only four-step flow: username, timetable upload, attendance
//! goals, study preferences. Completing the last step saves the config and
//! closes the wizard window.

use std::path::PathBuf;

use eframe::egui::{self, RichText};
use egui_phosphor::regular::{CALENDAR_CHECK, CLIPBOARD_TEXT, UPLOAD_SIMPLE, USER_CIRCLE};
use rand::Rng;

use super::components::colors;
use super::timetable::TimetableUpload;
use crate::config::{AppConfig, AttendanceConfig, PreferencesConfig, ProfileConfig, StudyTime, Technique, UiConfig};
use crate::models::attendance::subject_catalog;

const ADJECTIVES: [&str; 8] = [
    "Bright",
    "Clever",
    "Diligent",
    "Eager",
    "Focused",
    "Genius",
    "Hardworking",
    "Inspired",
];
const NOUNS: [&str; 8] = [
    "Student", "Scholar", "Learner", "Thinker", "Mind", "Achiever", "Grad", "Star",
];

/// Generate a suggested username like "FocusedScholar42".
pub fn random_username() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let number = rng.random_range(1..=999);
    format!("{adjective}{noun}{number}")
}

/// Wizard step, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Username,
    Timetable,
    Attendance,
    Preferences,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::Username,
        OnboardingStep::Timetable,
        OnboardingStep::Attendance,
        OnboardingStep::Preferences,
    ];

    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Username => 0,
            OnboardingStep::Timetable => 1,
            OnboardingStep::Attendance => 2,
            OnboardingStep::Preferences => 3,
        }
    }

    /// Tab label.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Username => "Username",
            OnboardingStep::Timetable => "Timetable",
            OnboardingStep::Attendance => "Attendance",
            OnboardingStep::Preferences => "Preferences",
        }
    }

    /// The following step, `None` at the end of the flow.
    pub fn next(&self) -> Option<OnboardingStep> {
        match self {
            OnboardingStep::Username => Some(OnboardingStep::Timetable),
            OnboardingStep::Timetable => Some(OnboardingStep::Attendance),
            OnboardingStep::Attendance => Some(OnboardingStep::Preferences),
            OnboardingStep::Preferences => None,
        }
    }
}

/// Attendance-goals form state.
pub struct AttendanceForm {
    pub current_pct: u8,
    pub target_pct: u8,
    /// (code, display name, percent) per subject.
    pub subjects: Vec<(String, String, u8)>,
    pub critical_subject: String,
}

impl Default for AttendanceForm {
    fn default() -> Self {
        Self {
            current_pct: 75,
            target_pct: 85,
            subjects: subject_catalog()
                .into_iter()
                .map(|(code, name)| (code, name, 75))
                .collect(),
            critical_subject: "CSE101".to_string(),
        }
    }
}

impl AttendanceForm {
    /// Keep the target at or above the current attendance.
    pub fn normalize(&mut self) {
        if self.target_pct < self.current_pct {
            self.target_pct = self.current_pct;
        }
    }
}

/// Study-preferences form state.
pub struct PreferencesForm {
    pub study_time: StudyTime,
    pub session_minutes: u32,
    pub break_minutes: u32,
    pub techniques: Vec<Technique>,
    pub extracurriculars: String,
}

impl Default for PreferencesForm {
    fn default() -> Self {
        Self {
            study_time: StudyTime::Evening,
            session_minutes: 60,
            break_minutes: 25,
            techniques: Vec::new(),
            extracurriculars: String::new(),
        }
    }
}

impl PreferencesForm {
    /// Flip membership of `technique` in the selected set.
    pub fn toggle_technique(&mut self, technique: Technique) {
        if let Some(pos) = self.techniques.iter().position(|t| *t == technique) {
            self.techniques.remove(pos);
        } else {
            self.techniques.push(technique);
        }
    }
}

/// Wizard state.
pub struct OnboardingWizard {
    step: OnboardingStep,
    pub username: String,
    pub upload: TimetableUpload,
    /// Ids of the classes kept in the timetable review.
    pub confirmed_classes: Vec<String>,
    pub attendance: AttendanceForm,
    pub preferences: PreferencesForm,
    pub completed: bool,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Username,
            username: random_username(),
            upload: TimetableUpload::new(),
            confirmed_classes: Vec::new(),
            attendance: AttendanceForm::default(),
            preferences: PreferencesForm::default(),
            completed: false,
        }
    }

    /// Start with a previously saved username instead of a generated one.
    pub fn with_username(username: String) -> Self {
        let mut wizard = Self::new();
        if !username.trim().is_empty() {
            wizard.username = username;
        }
        wizard
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Whether `step` has been reached; unreached steps stay disabled.
    pub fn step_reached(&self, step: OnboardingStep) -> bool {
        step.index() <= self.step.index()
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Submit the username step. A blank username is refused silently.
    pub fn submit_username(&mut self) -> bool {
        if self.step != OnboardingStep::Username || self.username.trim().is_empty() {
            return false;
        }
        self.advance();
        true
    }

    /// Timetable confirmed with the kept class ids; move to attendance goals.
    pub fn complete_timetable(&mut self, class_ids: Vec<String>) {
        if self.step == OnboardingStep::Timetable {
            self.confirmed_classes = class_ids;
            self.advance();
        }
    }

    /// Attendance goals submitted; move to preferences.
    pub fn complete_attendance(&mut self) {
        if self.step == OnboardingStep::Attendance {
            self.attendance.normalize();
            self.advance();
        }
    }

    /// Preferences submitted; the wizard is done.
    pub fn complete_preferences(&mut self) {
        if self.step == OnboardingStep::Preferences {
            self.completed = true;
        }
    }

    /// Build the config the completed wizard persists.
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            profile: ProfileConfig {
                username: self.username.trim().to_string(),
                onboarded: true,
            },
            ui: UiConfig::default(),
            preferences: PreferencesConfig {
                study_time: self.preferences.study_time,
                session_minutes: self.preferences.session_minutes,
                break_minutes: self.preferences.break_minutes,
                techniques: self.preferences.techniques.clone(),
                extracurriculars: self.preferences.extracurriculars.clone(),
            },
            attendance: AttendanceConfig {
                current_pct: self.attendance.current_pct,
                target_pct: self.attendance.target_pct,
                critical_subject: self.attendance.critical_subject.clone(),
            },
        }
    }
}

/// Onboarding wizard application window.
pub struct OnboardingApp {
    pub wizard: OnboardingWizard,
    config_path: PathBuf,
    error_message: Option<String>,
    rt: tokio::runtime::Runtime,
}

impl OnboardingApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        wizard: OnboardingWizard,
        config_path: PathBuf,
        initial_error: Option<String>,
    ) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            wizard,
            config_path,
            error_message: initial_error,
            rt: tokio::runtime::Runtime::new().expect("Failed to create tokio runtime"),
        }
    }
}

impl eframe::App for OnboardingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep animating while the simulated pipeline runs
        if self.wizard.upload.is_processing() {
            ctx.request_repaint();
        }

        // Error dialog (bad config on disk, failed save)
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
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading(RichText::new("Welcome to Study Buddy").size(24.0).strong());
                ui.label(
                    RichText::new("Your study companion for perfect attendance and optimized schedules").weak(),
                );
                ui.add_space(12.0);
            });

            // Step tabs: only the current step is active, unreached steps are
            // disabled, and there is no backward navigation.
            ui.horizontal(|ui| {
                for step in OnboardingStep::ALL {
                    let is_current = step == self.wizard.step();
                    // Reached tabs stay readable; clicks never navigate
                    ui.add_enabled_ui(self.wizard.step_reached(step), |ui| {
                        let _ = ui.selectable_label(is_current, step.title());
                    });
                }
            });
            ui.separator();
            ui.add_space(12.0);

            match self.wizard.step() {
                OnboardingStep::Username => show_username_step(ui, &mut self.wizard),
                OnboardingStep::Timetable => {
                    show_step_header(ui, UPLOAD_SIMPLE, "Upload Your Timetable", "Let's understand your class schedule");
                    if let Some(class_ids) = self.wizard.upload.show(ui, &self.rt) {
                        tracing::info!("Timetable confirmed with {} classes", class_ids.len());
                        self.wizard.complete_timetable(class_ids);
                    }
                }
                OnboardingStep::Attendance => show_attendance_step(ui, &mut self.wizard),
                OnboardingStep::Preferences => show_preferences_step(ui, &mut self.wizard),
            }
        });

        // Handle completion
        if self.wizard.completed {
            let config = self.wizard.to_config();
            match config.save(&self.config_path) {
                Ok(()) => {
                    tracing::info!("Onboarding complete for {}", config.profile.username);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    self.error_message = Some(format!("Failed to save config: {e}"));
                    self.wizard.completed = false;
                }
            }
        }
    }
}

fn show_step_header(ui: &mut egui::Ui, icon: &str, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(icon).size(32.0).color(colors::ACCENT));
        ui.heading(title);
        ui.label(RichText::new(subtitle).weak());
        ui.add_space(14.0);
    });
}

fn show_username_step(ui: &mut egui::Ui, wizard: &mut OnboardingWizard) {
    show_step_header(
        ui,
        USER_CIRCLE,
        "Choose Your Username",
        "This is how you'll be identified in the app",
    );

    ui.vertical_centered(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut wizard.username)
                .desired_width(260.0)
                .hint_text("Enter username")
                .horizontal_align(egui::Align::Center),
        );
        ui.add_space(6.0);
        ui.label(RichText::new("No sign-up required! Just choose a username to start.").small().weak());
        ui.add_space(12.0);

        // A blank username is refused without a message
        if ui.button("Continue >").clicked() {
            wizard.submit_username();
        }
    });
}

fn show_attendance_step(ui: &mut egui::Ui, wizard: &mut OnboardingWizard) {
    show_step_header(
        ui,
        CALENDAR_CHECK,
        "Set Attendance Goals",
        "Tell us about your current and target attendance",
    );

    egui::ScrollArea::vertical().show(ui, |ui| {
        let form = &mut wizard.attendance;

        ui.horizontal(|ui| {
            ui.label("Overall current attendance:");
            if ui
                .add(egui::Slider::new(&mut form.current_pct, 0..=100).suffix("%"))
                .changed()
            {
                form.normalize();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Overall target attendance:");
            ui.add(egui::Slider::new(&mut form.target_pct, form.current_pct..=100).suffix("%"));
        });

        ui.add_space(10.0);
        ui.separator();
        ui.label(RichText::new("Subject-wise attendance").strong());
        ui.add_space(5.0);

        for (_, name, pct) in &mut form.subjects {
            ui.horizontal(|ui| {
                ui.label(name.as_str());
                ui.add(egui::Slider::new(pct, 0..=100).suffix("%"));
            });
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label("Which subject needs the most attendance focus?");
        egui::ComboBox::from_id_salt("critical_subject")
            .width(280.0)
            .selected_text(
                form.subjects
                    .iter()
                    .find(|(code, _, _)| *code == form.critical_subject)
                    .map(|(_, name, _)| name.as_str())
                    .unwrap_or("Select a subject"),
            )
            .show_ui(ui, |ui| {
                let critical = form.critical_subject.clone();
                for (code, name, _) in &form.subjects {
                    if ui.selectable_label(critical == *code, name).clicked() {
                        form.critical_subject = code.clone();
                    }
                }
            });

        ui.add_space(16.0);
        if ui.button("Continue >").clicked() {
            wizard.complete_attendance();
        }
    });
}

fn show_preferences_step(ui: &mut egui::Ui, wizard: &mut OnboardingWizard) {
    show_step_header(
        ui,
        CLIPBOARD_TEXT,
        "Study Preferences",
        "Help us customize your perfect study plan",
    );

    egui::ScrollArea::vertical().show(ui, |ui| {
        let form = &mut wizard.preferences;

        ui.label(RichText::new("When do you prefer to study?").strong());
        ui.horizontal(|ui| {
            for time in StudyTime::ALL {
                ui.radio_value(&mut form.study_time, time, time.label());
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new("How long can you study in one session?").strong());
        egui::ComboBox::from_id_salt("session_minutes")
            .selected_text(session_label(form.session_minutes))
            .show_ui(ui, |ui| {
                for minutes in [30, 45, 60, 90, 120] {
                    ui.selectable_value(&mut form.session_minutes, minutes, session_label(minutes));
                }
            });

        ui.add_space(10.0);
        ui.label(RichText::new("How often do you need breaks?").strong());
        egui::ComboBox::from_id_salt("break_minutes")
            .selected_text(format!("Every {} minutes", form.break_minutes))
            .show_ui(ui, |ui| {
                for minutes in [15, 25, 30, 45, 60] {
                    ui.selectable_value(&mut form.break_minutes, minutes, format!("Every {minutes} minutes"));
                }
            });

        ui.add_space(10.0);
        ui.label(RichText::new("What productivity techniques work for you?").strong());
        for technique in Technique::ALL {
            let mut on = form.techniques.contains(&technique);
            if ui.checkbox(&mut on, technique.label()).changed() {
                form.toggle_technique(technique);
            }
        }

        ui.add_space(10.0);
        ui.label(RichText::new("Extracurricular activities or commitments?").strong());
        ui.add(
            egui::TextEdit::singleline(&mut form.extracurriculars)
                .desired_width(320.0)
                .hint_text("E.g., sports practice MWF 4-6pm, part-time job, etc."),
        );

        ui.add_space(16.0);
        if ui.button("Complete Setup").clicked() {
            wizard.complete_preferences();
        }
    });
}

fn session_label(minutes: u32) -> String {
    match minutes {
        30 => "30 minutes".to_string(),
        45 => "45 minutes".to_string(),
        60 => "1 hour".to_string(),
        90 => "1.5 hours".to_string(),
        120 => "2+ hours".to_string(),
        other => format!("{other} minutes"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_strictly_forward() {
        let mut wizard = OnboardingWizard::new();
        wizard.username = "Sam".to_string();
        assert_eq!(wizard.step(), OnboardingStep::Username);

        assert!(wizard.submit_username());
        assert_eq!(wizard.step(), OnboardingStep::Timetable);

        wizard.complete_timetable(vec!["1".to_string()]);
        assert_eq!(wizard.step(), OnboardingStep::Attendance);

        wizard.complete_attendance();
        assert_eq!(wizard.step(), OnboardingStep::Preferences);

        assert!(!wizard.completed);
        wizard.complete_preferences();
        assert!(wizard.completed);
    }

    #[test]
    fn test_whitespace_username_refused() {
        let mut wizard = OnboardingWizard::new();
        wizard.username = "   ".to_string();

        assert!(!wizard.submit_username());
        assert_eq!(wizard.step(), OnboardingStep::Username);
    }

    #[test]
    fn test_steps_cannot_be_skipped() {
        let mut wizard = OnboardingWizard::new();

        // Completion signals for later steps do nothing early on
        wizard.complete_timetable(vec!["1".to_string()]);
        wizard.complete_attendance();
        wizard.complete_preferences();
        assert_eq!(wizard.step(), OnboardingStep::Username);
        assert!(!wizard.completed);
        assert!(wizard.confirmed_classes.is_empty());

        assert!(!wizard.step_reached(OnboardingStep::Timetable));
        assert!(!wizard.step_reached(OnboardingStep::Preferences));
        assert!(wizard.step_reached(OnboardingStep::Username));
    }

    #[test]
    fn test_completion_carries_username() {
        let mut wizard = OnboardingWizard::new();
        wizard.username = "  FocusedGrad9  ".to_string();
        assert!(wizard.submit_username());
        wizard.complete_timetable(vec!["1".to_string(), "2".to_string()]);
        wizard.complete_attendance();
        wizard.complete_preferences();

        let config = wizard.to_config();
        assert_eq!(config.profile.username, "FocusedGrad9");
        assert!(config.profile.onboarded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_confirmed_classes_are_recorded() {
        let mut wizard = OnboardingWizard::new();
        wizard.username = "Sam".to_string();
        assert!(wizard.submit_username());

        wizard.complete_timetable(vec!["1".to_string(), "3".to_string(), "8".to_string()]);
        assert_eq!(wizard.step(), OnboardingStep::Attendance);
        assert_eq!(wizard.confirmed_classes, vec!["1", "3", "8"]);
    }

    #[test]
    fn test_target_never_below_current() {
        let mut form = AttendanceForm {
            current_pct: 90,
            target_pct: 80,
            ..Default::default()
        };
        form.normalize();
        assert_eq!(form.target_pct, 90);
    }

    #[test]
    fn test_random_username_shape() {
        let name = random_username();
        assert!(!name.trim().is_empty());
        assert!(name.chars().rev().take_while(|c| c.is_ascii_digit()).count() >= 1);
    }

    #[test]
    fn test_technique_toggle_round_trip() {
        let mut form = PreferencesForm::default();
        form.toggle_technique(Technique::Pomodoro);
        assert!(form.techniques.contains(&Technique::Pomodoro));
        form.toggle_technique(Technique::Pomodoro);
        assert!(form.techniques.is_empty());
    }
}
