//! Persisted locale preference storage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

/// File name of the single preference slot in the data directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Durable storage for the last explicitly chosen locale.
///
/// The stored value is a plain locale identifier string; anything
/// unrecognized is ignored at startup in favor of the default locale.
pub trait PreferenceStore {
    /// Read the stored locale identifier, if any.
    fn load(&self) -> Option<String>;

    /// Persist the chosen locale identifier.
    fn save(&self, locale_id: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    locale: Option<String>,
}

/// Preference store backed by a TOML file in the application data directory.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store at the default preference file location.
    pub fn new() -> Self {
        Self {
            path: get_data_dir().join(PREFERENCES_FILE),
        }
    }

    /// Create a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FilePreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match toml::from_str::<Preferences>(&content) {
            Ok(prefs) => prefs.locale,
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring unreadable preference file"
                );
                None
            }
        }
    }

    fn save(&self, locale_id: &str) -> Result<(), PreferenceError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PreferenceError::IoError(e.to_string()))?;
        }

        let prefs = Preferences {
            locale: Some(locale_id.to_string()),
        };
        let content =
            toml::to_string_pretty(&prefs).map_err(|e| PreferenceError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| PreferenceError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// In-memory preference store for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a value, as if previously persisted.
    pub fn with_value(locale_id: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(locale_id.into())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, locale_id: &str) -> Result<(), PreferenceError> {
        match self.value.lock() {
            Ok(mut slot) => {
                *slot = Some(locale_id.to_string());
                Ok(())
            }
            Err(e) => Err(PreferenceError::IoError(e.to_string())),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "whitearmy", "WhiteArmy")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Preference storage errors.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load(), None);

        store.save("ml").expect("Should save preference");
        assert_eq!(store.load(), Some("ml".to_string()));

        store.save("en").expect("Should save preference");
        assert_eq!(store.load(), Some("en".to_string()));
    }

    #[test]
    fn test_memory_store_seeded() {
        let store = MemoryPreferenceStore::with_value("ml");
        assert_eq!(store.load(), Some("ml".to_string()));
    }
}
