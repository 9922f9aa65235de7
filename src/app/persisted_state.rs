// SPDX-License-Identifier: MPL-2.0
//! Persisted application state.
//!
//! Unlike `settings.toml` (user preferences), this file remembers incidental
//! state between runs: currently the directory of the last picked invoice,
//! so the file dialog reopens where the user left off.

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.toml";

/// State persisted between application runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppState {
    /// Directory of the most recently picked invoice file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_invoice_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads the state from the default path.
    ///
    /// Returns (state, optional warning key). A missing file is not a
    /// warning; a corrupted one is.
    pub fn load() -> (Self, Option<String>) {
        Self::load_with_override(None)
    }

    /// Loads the state from a custom directory.
    pub fn load_with_override(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        if let Some(path) = state_path_with_override(base_dir) {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(state) => return (state, None),
                    Err(_) => {
                        return (
                            Self::default(),
                            Some("notification-state-load-error".to_string()),
                        );
                    }
                }
            }
        }
        (Self::default(), None)
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let state: Self = toml::from_str(&content)?;
        Ok(state)
    }

    /// Saves the state to the default path.
    ///
    /// Returns a warning key when saving fails; losing this state is
    /// annoying, not fatal.
    pub fn save(&self) -> Option<String> {
        self.save_with_override(None)
    }

    /// Saves the state to a custom directory.
    pub fn save_with_override(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let path = state_path_with_override(base_dir)?;
        match self.save_to_path(&path) {
            Ok(()) => None,
            Err(_) => Some("notification-state-save-error".to_string()),
        }
    }

    fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(Error::from)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Remembers the directory containing `file` for the next file dialog.
    pub fn set_last_invoice_directory_from_file(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_invoice_directory = Some(parent.to_path_buf());
        }
    }

    #[must_use]
    pub fn last_invoice_directory(&self) -> Option<&PathBuf> {
        self.last_invoice_directory.as_ref()
    }
}

fn state_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}
