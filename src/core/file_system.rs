// src/core/file_system.rs
use crate::app_config::AppConfig;
use crate::core::models::{StoredPreferences, UserPreferences};

use log::{debug, info, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PREFS_FILE_NAME: &str = "emergency_fund_info.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not access the preference file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("The preference file is not valid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result of reading the preference file. `Missing` and `Corrupt` both lead
/// back to the interactive setup, but are kept apart so corruption can be
/// reported.
#[derive(Debug)]
pub enum LoadOutcome {
    Missing,
    Corrupt(StoreError),
    Loaded(StoredPreferences),
}

impl LoadOutcome {
    pub fn into_valid(self) -> Option<UserPreferences> {
        match self {
            LoadOutcome::Loaded(stored) => stored.into_preferences(),
            LoadOutcome::Missing | LoadOutcome::Corrupt(_) => None,
        }
    }
}

pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match &config.prefs_file {
            Some(path) => Self::new(path),
            None => Self::new(Self::default_path()),
        }
    }

    /// `emergency_fund_info.json` next to the running executable.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(PREFS_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(PREFS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LoadOutcome {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preference file at {}", self.path.display());
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!("Failed to read preferences from {}: {}", self.path.display(), e);
                return LoadOutcome::Corrupt(e.into());
            }
        };

        match serde_json::from_str::<StoredPreferences>(&json) {
            Ok(stored) => LoadOutcome::Loaded(stored),
            Err(e) => {
                warn!("Failed to parse preferences from {}: {}", self.path.display(), e);
                LoadOutcome::Corrupt(e.into())
            }
        }
    }

    pub fn save(&self, prefs: &UserPreferences) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(prefs)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temp_file = self.path.clone().into_os_string();
        temp_file.push(".temp");
        fs::write(&temp_file, &json)?;
        fs::rename(&temp_file, &self.path)?;

        info!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}
