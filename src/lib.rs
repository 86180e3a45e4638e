//! StudyFlow Library
//!
//! This library provides the core functionality for the StudyFlow CLI.
//! It includes:
//! - The session state machine for pomodoro and stopwatch timing
//! - Local persistence of settings, statistics and theme
//! - The application controller tying the two together
//! - CLI command parsing, display utilities and the interactive session

pub mod app;
pub mod cli;
pub mod session;
pub mod storage;
pub mod types;

// Re-export commonly used types for convenience
pub use app::{Action, App};
pub use session::{Clock, MockClock, SessionEvent, SessionMachine, SystemClock, TickSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Persistence, StorageError};
pub use types::{
    SessionSnapshot, SessionState, SettingField, Stats, Theme, TimerMode, TimerSettings,
    TimerType,
};
