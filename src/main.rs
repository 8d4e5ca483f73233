//! Study Buddy - student productivity desktop app.

use std::path::{Path, PathBuf};

use clap::Parser;
use eframe::egui;
use study_buddy as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::{OnboardingApp, OnboardingWizard, StudyBuddyApp};

/// Student companion for attendance tracking and study planning.
#[derive(Parser)]
#[command(name = "study-buddy")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

/// Application launch mode.
enum LaunchMode {
    /// Normal operation with a completed onboarding.
    Normal(AppConfig),
    /// Onboarding wizard for first run or invalid config.
    Onboarding(OnboardingWizard, Option<String>),
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Study Buddy starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let launch_mode = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) if config.profile.onboarded => {
            tracing::info!("Config loaded successfully");
            LaunchMode::Normal(config)
        }
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Onboarding not finished, resuming wizard");
            LaunchMode::Onboarding(OnboardingWizard::with_username(config.profile.username), None)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, starting onboarding wizard");
            LaunchMode::Onboarding(OnboardingWizard::new(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            LaunchMode::Onboarding(OnboardingWizard::new(), Some(e.to_string()))
        }
    };

    match launch_mode {
        LaunchMode::Normal(config) => run_main_app(config, config_path),
        LaunchMode::Onboarding(wizard, error) => {
            run_onboarding(wizard, &config_path, error)?;

            // The wizard saves the config before closing its window; pick it
            // up and go straight into the app without a relaunch.
            match AppConfig::try_load(&config_path) {
                ConfigLoadResult::Loaded(config) if config.profile.onboarded => run_main_app(config, config_path),
                _ => {
                    tracing::info!("Onboarding not completed, exiting");
                    Ok(())
                }
            }
        }
    }
}

/// Run the onboarding wizard window.
fn run_onboarding(wizard: OnboardingWizard, config_path: &Path, initial_error: Option<String>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Study Buddy - Welcome")
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([520.0, 460.0])
            .with_resizable(true),
        ..Default::default()
    };

    let config_path = config_path.to_path_buf();
    eframe::run_native(
        "Study Buddy - Welcome",
        options,
        Box::new(move |cc| Ok(Box::new(OnboardingApp::new(cc, wizard, config_path, initial_error)))),
    )
}

/// Run the main application window.
fn run_main_app(config: AppConfig, config_path: PathBuf) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Study Buddy")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Study Buddy",
        options,
        Box::new(move |cc| Ok(Box::new(StudyBuddyApp::new(cc, config, config_path)))),
    )
}
