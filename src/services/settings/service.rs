use crate::models::settings::DayViewSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "day_view.toml";

/// Loads and stores day view settings in a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file inside the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "Ken24T", "DayViewPacker")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings, falling back to defaults if no file exists
    pub fn get(&self) -> Result<DayViewSettings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {:?}, using default day view settings",
                self.path
            );
            return Ok(DayViewSettings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings: DayViewSettings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {:?}: {}", self.path, e))?;

        log::debug!("Loaded day view settings from {:?}", self.path);
        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &DayViewSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {:?}", parent))?;
            }
        }

        let contents =
            toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;

        log::info!("Saved day view settings to {:?}", self.path);
        Ok(())
    }
}
