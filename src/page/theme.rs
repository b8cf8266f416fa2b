//! Theme selection with cross-session persistence
//!
//! One key-value pair survives across sessions: read once at startup,
//! written on every toggle.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Page color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Trait for the persisted theme slot, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait ThemeStore: Send + Sync {
    /// Read the saved theme, if any was ever written
    fn load(&self) -> Result<Option<Theme>>;

    /// Persist the current theme
    fn save(&self, theme: Theme) -> Result<()>;
}

/// On-disk persisted state (the browser-local-storage analogue)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedState {
    theme: Option<Theme>,
}

/// File-backed theme store under the platform config directory
#[derive(Debug, Clone, Default)]
pub struct FileThemeStore;

impl FileThemeStore {
    fn state_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-engine")
            .map(|dirs| dirs.config_dir().join("state.json"))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        if let Some(path) = Self::state_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let state: PersistedState = serde_json::from_str(&content)?;
                return Ok(state.theme);
            }
        }
        Ok(None)
    }

    fn save(&self, theme: Theme) -> Result<()> {
        if let Some(path) = Self::state_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let state = PersistedState { theme: Some(theme) };
            fs::write(&path, serde_json::to_string_pretty(&state)?)?;
        }
        Ok(())
    }
}

/// Owns the current theme and keeps the store in sync on toggles
pub struct ThemeController {
    current: Theme,
    store: Box<dyn ThemeStore>,
}

impl ThemeController {
    /// Read the persisted theme once; default to light when nothing was
    /// saved or the store is unreadable.
    pub fn init(store: Box<dyn ThemeStore>) -> Self {
        let current = match store.load() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(error = %err, "theme store unreadable, defaulting to light");
                Theme::default()
            }
        };
        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the new choice
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.store.save(self.current) {
            tracing::warn!(error = %err, "failed to persist theme");
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_init_defaults_to_light_when_nothing_saved() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));
        let controller = ThemeController::init(Box::new(store));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_init_reads_saved_dark_theme() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(Some(Theme::Dark)));
        let controller = ThemeController::init(Box::new(store));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_init_survives_unreadable_store() {
        let mut store = MockThemeStore::new();
        store
            .expect_load()
            .returning(|| Err(anyhow::anyhow!("corrupt state file")));
        let controller = ThemeController::init(Box::new(store));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_every_change() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .withf(|theme| *theme == Theme::Dark)
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_save()
            .withf(|theme| *theme == Theme::Light)
            .times(1)
            .returning(|_| Ok(()));

        let mut controller = ThemeController::init(Box::new(store));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
    }

    #[test]
    fn test_toggle_keeps_state_when_save_fails() {
        let mut store = MockThemeStore::new();
        store.expect_load().returning(|| Ok(None));
        store
            .expect_save()
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        let mut controller = ThemeController::init(Box::new(store));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_persisted_state_roundtrip() {
        let state = PersistedState {
            theme: Some(Theme::Dark),
        };
        let json = serde_json::to_string(&state).unwrap();
        let parsed: PersistedState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.theme, Some(Theme::Dark));
    }
}
