//! Persistence adapter for settings, statistics and theme.
//!
//! Loading never fails: an absent, unreadable or malformed record falls
//! back to its default. Writes are best-effort and only touch records that
//! changed since the last load or commit.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, Result, StorageError, SETTINGS_KEY, STATS_KEY, THEME_KEY};
use crate::types::{Stats, Theme, TimerSettings};

/// Records restored at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedState {
    /// Timer settings, defaults if missing or invalid.
    pub settings: TimerSettings,
    /// Lifetime statistics, defaults if missing or malformed.
    pub stats: Stats,
    /// Selected theme, `Lavender` if missing or unknown.
    pub theme: Theme,
}

/// Reads and writes the three persisted records through a [`KeyValueStore`].
pub struct Persistence<S: KeyValueStore> {
    store: S,
    saved_settings: Option<TimerSettings>,
    saved_stats: Option<Stats>,
    saved_theme: Option<Theme>,
}

impl<S: KeyValueStore> Persistence<S> {
    /// Wraps `store`. Nothing is read until [`load`](Self::load).
    pub fn new(store: S) -> Self {
        Self {
            store,
            saved_settings: None,
            saved_stats: None,
            saved_theme: None,
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads all records, substituting defaults for anything unusable.
    pub fn load(&mut self) -> LoadedState {
        let settings = self
            .load_json::<TimerSettings>(SETTINGS_KEY)
            .and_then(|settings| match settings.validate() {
                Ok(()) => Some(settings),
                Err(e) => {
                    tracing::warn!(error = %e, "stored settings out of range, using defaults");
                    None
                }
            })
            .unwrap_or_default();

        let stats = self.load_json::<Stats>(STATS_KEY).unwrap_or_default();
        let theme = self.load_theme().unwrap_or_default();

        self.saved_settings = Some(settings);
        self.saved_stats = Some(stats.clone());
        self.saved_theme = Some(theme);

        tracing::debug!(?settings, theme = theme.id(), "persisted state loaded");
        LoadedState {
            settings,
            stats,
            theme,
        }
    }

    /// Writes every record that differs from what was last loaded or saved.
    ///
    /// Failures are logged and otherwise ignored. Returns the number of
    /// records written.
    pub fn commit(&mut self, settings: &TimerSettings, stats: &Stats, theme: Theme) -> usize {
        let mut written = 0;

        if self.saved_settings.as_ref() != Some(settings)
            && self.save_json(SETTINGS_KEY, settings)
        {
            self.saved_settings = Some(*settings);
            written += 1;
        }

        if self.saved_stats.as_ref() != Some(stats) && self.save_json(STATS_KEY, stats) {
            self.saved_stats = Some(stats.clone());
            written += 1;
        }

        if self.saved_theme != Some(theme) && self.save_raw(THEME_KEY, theme.id()) {
            self.saved_theme = Some(theme);
            written += 1;
        }

        if written > 0 {
            tracing::info!(records = written, "state committed");
        }
        written
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored record, using default");
                None
            }
        }
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed stored record, using default");
                None
            }
        }
    }

    fn load_theme(&self) -> Option<Theme> {
        let raw = self.read(THEME_KEY)?;
        match raw.trim().trim_matches('"').parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "unknown stored theme, using default");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(|source| StorageError::Serialize {
                key: key.to_string(),
                source,
            })
            .and_then(|json| self.store.set(key, &json));
        Self::report(key, result)
    }

    fn save_raw(&self, key: &str, value: &str) -> bool {
        Self::report(key, self.store.set(key, value))
    }

    fn report(key: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to persist record");
                false
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
