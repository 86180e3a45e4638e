//! Local persistence for StudyFlow.
//!
//! Three independently serialised records live in a key-value store:
//! - `studySettings`: timer settings as a JSON object
//! - `studyStats`: statistics as a JSON object
//! - `studyTheme`: the bare theme identifier
//!
//! The session machine never touches storage. The controller calls
//! [`Persistence::commit`] after each user action.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{Result, StorageError};
pub use persistence::{LoadedState, Persistence};
pub use store::{FileStore, MemoryStore};

/// Key of the settings record.
pub const SETTINGS_KEY: &str = "studySettings";
/// Key of the statistics record.
pub const STATS_KEY: &str = "studyStats";
/// Key of the theme record.
pub const THEME_KEY: &str = "studyTheme";

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
