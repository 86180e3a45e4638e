//! Core data types for StudyFlow.
//!
//! This module defines the data structures used for:
//! - Timer mode and timer type selection
//! - Timer settings with edit-boundary clamping
//! - Cumulative statistics and streak bookkeeping
//! - Colour themes
//! - The transient session state and its serialisable snapshot

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// TimerMode
// ============================================================================

/// Top-level timer mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Timed focus/break cycle
    #[default]
    Pomodoro,
    /// Free-running count-up timer
    Stopwatch,
}

impl TimerMode {
    /// Returns the string representation of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "pomodoro",
            TimerMode::Stopwatch => "stopwatch",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerType
// ============================================================================

/// Interval type within the Pomodoro cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum TimerType {
    /// Focused work interval
    #[default]
    Focus,
    /// Short break between focus sessions
    ShortBreak,
    /// Long break after a full set of focus sessions
    LongBreak,
}

impl TimerType {
    /// Returns the string representation of the timer type, as accepted on
    /// the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerType::Focus => "focus",
            TimerType::ShortBreak => "short-break",
            TimerType::LongBreak => "long-break",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TimerType::Focus => "Focus",
            TimerType::ShortBreak => "Short Break",
            TimerType::LongBreak => "Long Break",
        }
    }

    /// Returns true for either break type.
    pub fn is_break(&self) -> bool {
        matches!(self, TimerType::ShortBreak | TimerType::LongBreak)
    }
}

impl fmt::Display for TimerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TimerSettings
// ============================================================================

/// A single editable field of [`TimerSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    /// Focus length in minutes
    FocusDuration,
    /// Short break length in minutes
    ShortBreakDuration,
    /// Long break length in minutes
    LongBreakDuration,
    /// Focus sessions before a long break
    SessionsBeforeLong,
}

impl SettingField {
    /// All editable fields, in display order.
    pub const ALL: [SettingField; 4] = [
        SettingField::FocusDuration,
        SettingField::ShortBreakDuration,
        SettingField::LongBreakDuration,
        SettingField::SessionsBeforeLong,
    ];

    /// Inclusive `(min, max)` bounds for the field.
    pub fn bounds(&self) -> (u32, u32) {
        match self {
            SettingField::FocusDuration => (1, 120),
            SettingField::ShortBreakDuration => (1, 30),
            SettingField::LongBreakDuration => (1, 60),
            SettingField::SessionsBeforeLong => (1, 12),
        }
    }

    /// Clamps a value into the field's bounds.
    pub fn clamp(&self, value: u32) -> u32 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SettingField::FocusDuration => "Focus Duration",
            SettingField::ShortBreakDuration => "Short Break",
            SettingField::LongBreakDuration => "Long Break",
            SettingField::SessionsBeforeLong => "Sessions Before Long Break",
        }
    }

    /// Short name used by interactive commands.
    pub fn short_name(&self) -> &'static str {
        match self {
            SettingField::FocusDuration => "focus",
            SettingField::ShortBreakDuration => "short",
            SettingField::LongBreakDuration => "long",
            SettingField::SessionsBeforeLong => "sessions",
        }
    }

    /// Looks up a field by its short name.
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.short_name().eq_ignore_ascii_case(name))
    }
}

/// Durations (minutes) and the long-break threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    /// Focus duration in minutes (1-120)
    pub focus_duration: u32,
    /// Short break duration in minutes (1-30)
    pub short_break_duration: u32,
    /// Long break duration in minutes (1-60)
    pub long_break_duration: u32,
    /// Focus sessions before a long break (1-12)
    pub sessions_before_long: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            sessions_before_long: 4,
        }
    }
}

impl TimerSettings {
    /// Creates a new settings value with the specified focus duration.
    pub fn with_focus_duration(mut self, minutes: u32) -> Self {
        self.focus_duration = minutes;
        self
    }

    /// Creates a new settings value with the specified short break duration.
    pub fn with_short_break_duration(mut self, minutes: u32) -> Self {
        self.short_break_duration = minutes;
        self
    }

    /// Creates a new settings value with the specified long break duration.
    pub fn with_long_break_duration(mut self, minutes: u32) -> Self {
        self.long_break_duration = minutes;
        self
    }

    /// Creates a new settings value with the specified long-break threshold.
    pub fn with_sessions_before_long(mut self, sessions: u32) -> Self {
        self.sessions_before_long = sessions;
        self
    }

    /// Returns the configured duration for a timer type, in seconds.
    pub fn duration_seconds(&self, timer_type: TimerType) -> u32 {
        let minutes = match timer_type {
            TimerType::Focus => self.focus_duration,
            TimerType::ShortBreak => self.short_break_duration,
            TimerType::LongBreak => self.long_break_duration,
        };
        minutes * 60
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::FocusDuration => self.focus_duration,
            SettingField::ShortBreakDuration => self.short_break_duration,
            SettingField::LongBreakDuration => self.long_break_duration,
            SettingField::SessionsBeforeLong => self.sessions_before_long,
        }
    }

    /// Sets a field, clamping the value into its bounds.
    pub fn set_clamped(&mut self, field: SettingField, value: u32) {
        let value = field.clamp(value);
        match field {
            SettingField::FocusDuration => self.focus_duration = value,
            SettingField::ShortBreakDuration => self.short_break_duration = value,
            SettingField::LongBreakDuration => self.long_break_duration = value,
            SettingField::SessionsBeforeLong => self.sessions_before_long = value,
        }
    }

    /// Nudges a field by `delta`, clamped into its bounds.
    pub fn adjust(&mut self, field: SettingField, delta: i32) {
        let current = i64::from(self.get(field));
        let next = (current + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        self.set_clamped(field, next as u32);
    }

    /// Validates that every field is within its bounds.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for field in SettingField::ALL {
            let value = self.get(field);
            let (min, max) = field.bounds();
            if value < min || value > max {
                return Err(SettingsError::OutOfRange {
                    field: field.label(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// Settings validation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

// ============================================================================
// Stats
// ============================================================================

/// Cumulative focus statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Total focused time in seconds
    pub total_focus_time: f64,
    /// Number of completed focus sessions
    pub sessions_completed: u32,
    /// Consecutive calendar days with a completed focus session
    pub current_streak: u32,
    /// Completion instant of the most recent focus session
    pub last_session_date: Option<DateTime<Utc>>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_focus_time: 0.0,
            sessions_completed: 0,
            current_streak: 0,
            last_session_date: None,
        }
    }
}

impl Stats {
    /// Total focused time in whole minutes.
    pub fn total_focus_minutes(&self) -> u64 {
        (self.total_focus_time / 60.0).floor() as u64
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Lavender,
    Ocean,
    Sunset,
    Forest,
    Midnight,
    Cherry,
    Aurora,
    Mint,
}

impl Theme {
    /// Every theme, in picker order.
    pub const ALL: [Theme; 8] = [
        Theme::Lavender,
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Midnight,
        Theme::Cherry,
        Theme::Aurora,
        Theme::Mint,
    ];

    /// Stored identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Theme::Lavender => "lavender",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Midnight => "midnight",
            Theme::Cherry => "cherry",
            Theme::Aurora => "aurora",
            Theme::Mint => "mint",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Lavender => "Lavender",
            Theme::Ocean => "Ocean",
            Theme::Sunset => "Sunset",
            Theme::Forest => "Forest",
            Theme::Midnight => "Midnight",
            Theme::Cherry => "Cherry",
            Theme::Aurora => "Aurora",
            Theme::Mint => "Mint",
        }
    }

    /// ANSI 256-colour index of the accent colour.
    pub fn accent(&self) -> u8 {
        match self {
            Theme::Lavender => 97,
            Theme::Ocean => 33,
            Theme::Sunset => 210,
            Theme::Forest => 29,
            Theme::Midnight => 99,
            Theme::Cherry => 203,
            Theme::Aurora => 56,
            Theme::Mint => 36,
        }
    }

    /// Returns true for dark themes.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Midnight)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown theme id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTheme(wanted.to_string()))
    }
}

// ============================================================================
// SessionState
// ============================================================================

/// Transient timer state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Current mode
    pub mode: TimerMode,
    /// Current interval type (meaningful in pomodoro mode)
    pub timer_type: TimerType,
    /// Whether ticks take effect
    pub is_active: bool,
    /// Countdown value in pomodoro mode
    pub remaining_seconds: u32,
    /// Count-up value in stopwatch mode
    pub elapsed_seconds: u64,
    /// Denominator for progress display
    pub total_seconds: u32,
    /// Focus sessions completed since the last long break
    pub current_session_index: u32,
}

impl SessionState {
    /// Creates the initial state: idle focus in pomodoro mode.
    pub fn new(settings: &TimerSettings) -> Self {
        let total = settings.duration_seconds(TimerType::Focus);
        Self {
            mode: TimerMode::Pomodoro,
            timer_type: TimerType::Focus,
            is_active: false,
            remaining_seconds: total,
            elapsed_seconds: 0,
            total_seconds: total,
            current_session_index: 0,
        }
    }

    /// Fraction of the countdown still remaining (1.0 in stopwatch mode).
    pub fn progress(&self) -> f64 {
        match self.mode {
            TimerMode::Stopwatch => 1.0,
            TimerMode::Pomodoro if self.total_seconds == 0 => 0.0,
            TimerMode::Pomodoro => f64::from(self.remaining_seconds) / f64::from(self.total_seconds),
        }
    }

    /// The seconds value shown to the user for the current mode.
    pub fn display_seconds(&self) -> u64 {
        match self.mode {
            TimerMode::Pomodoro => u64::from(self.remaining_seconds),
            TimerMode::Stopwatch => self.elapsed_seconds,
        }
    }
}

/// Serialisable read-only view of the machine for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub state: SessionState,
    pub progress: f64,
    pub settings: TimerSettings,
    pub stats: Stats,
}

// ============================================================================
// Tests
// ============================================================================
