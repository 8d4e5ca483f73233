//! UI module: the onboarding wizard and the main dashboard window.

pub mod app;
pub mod calendar_panel;
pub mod components;
pub mod dashboard;
pub mod onboarding;
pub mod timetable;
pub mod todo_panel;

pub use app::{DashboardTab, StudyBuddyApp};
pub use onboarding::{OnboardingApp, OnboardingStep, OnboardingWizard};
pub use timetable::TimetableUpload;
