//! Configuration management module.
//!
//! The config file is the app's only persistent state: the chosen username,
//! the onboarding-complete flag, and the study preferences collected by the
//! wizard. It is read once at startup and written on wizard completion and
//! preference changes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: ProfileConfig,
    pub ui: UiConfig,
    pub preferences: PreferencesConfig,
    pub attendance: AttendanceConfig,
}

/// User identity and onboarding state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub username: String,
    pub onboarded: bool,
}

/// UI preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    pub dark_mode: bool,
}

/// Preferred time of day for studying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyTime {
    Morning,
    Afternoon,
    #[default]
    Evening,
    Night,
}

impl StudyTime {
    pub const ALL: [StudyTime; 4] = [
        StudyTime::Morning,
        StudyTime::Afternoon,
        StudyTime::Evening,
        StudyTime::Night,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            StudyTime::Morning => "Morning",
            StudyTime::Afternoon => "Afternoon",
            StudyTime::Evening => "Evening",
            StudyTime::Night => "Late Night",
        }
    }
}

/// Productivity technique flags collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technique {
    Pomodoro,
    Timeblocking,
    Todos,
    Music,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::Pomodoro,
        Technique::Timeblocking,
        Technique::Todos,
        Technique::Music,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Technique::Pomodoro => "Pomodoro Technique",
            Technique::Timeblocking => "Time Blocking",
            Technique::Todos => "To-Do Lists",
            Technique::Music => "Study Music",
        }
    }
}

/// Study preferences collected by the onboarding wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub study_time: StudyTime,
    /// Length of one study session, minutes.
    pub session_minutes: u32,
    /// Break interval, minutes.
    pub break_minutes: u32,
    pub techniques: Vec<Technique>,
    pub extracurriculars: String,
}

/// Attendance goals collected by the onboarding wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Overall current attendance, percent.
    pub current_pct: u8,
    /// Overall target attendance, percent.
    pub target_pct: u8,
    /// Subject code the user wants to focus on.
    pub critical_subject: String,
}

impl AppConfig {
    /// Get config file path (platform config directory).
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "study-buddy")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.onboarded && self.profile.username.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Username cannot be empty after onboarding".to_string(),
            ));
        }
        if self.attendance.current_pct > 100 {
            return Err(ConfigError::Validation(
                "Current attendance cannot exceed 100%".to_string(),
            ));
        }
        if self.attendance.target_pct > 100 {
            return Err(ConfigError::Validation(
                "Target attendance cannot exceed 100%".to_string(),
            ));
        }
        if self.attendance.target_pct < self.attendance.current_pct {
            return Err(ConfigError::Validation(
                "Target attendance cannot be below current attendance".to_string(),
            ));
        }
        if self.preferences.session_minutes < 1 {
            return Err(ConfigError::Validation(
                "Session length must be at least 1 minute".to_string(),
            ));
        }
        if self.preferences.break_minutes < 1 {
            return Err(ConfigError::Validation(
                "Break interval must be at least 1 minute".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for PreferencesConfig {
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

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            current_pct: 75,
            target_pct: 85,
            critical_subject: "CSE101".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_onboarded_requires_username() {
        let mut config = AppConfig::default();
        config.profile.onboarded = true;
        config.profile.username = "   ".to_string();
        assert!(config.validate().is_err());

        config.profile.username = "BrightScholar42".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_percent_bounds() {
        let mut config = AppConfig::default();
        config.attendance.current_pct = 101;
        assert!(config.validate().is_err());

        config.attendance.current_pct = 90;
        config.attendance.target_pct = 80;
        assert!(config.validate().is_err());

        config.attendance.target_pct = 95;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.profile.username = "FocusedLearner7".to_string();
        config.profile.onboarded = true;
        config.ui.dark_mode = true;
        config.preferences.techniques = vec![Technique::Pomodoro, Technique::Music];

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.profile.username, "FocusedLearner7");
        assert!(parsed.profile.onboarded);
        assert!(parsed.ui.dark_mode);
        assert_eq!(parsed.preferences.techniques.len(), 2);
        assert_eq!(parsed.attendance.target_pct, 85);
    }
}
