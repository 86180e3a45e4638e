//! Application controller.
//!
//! [`App`] is the single owner of the session machine and the persistence
//! adapter. The presentation layer turns user input into [`Action`]s and
//! hands them to [`App::dispatch`]; every dispatch and every tick ends with
//! a commit, which writes whatever records changed.

use std::sync::Arc;

use crate::session::{Clock, SessionMachine, SystemClock};
use crate::storage::{KeyValueStore, Persistence};
use crate::types::{SessionSnapshot, SettingField, Theme, TimerMode, TimerSettings, TimerType};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start or pause
    ToggleRun,
    /// Reset the current interval
    Reset,
    /// Select a timer type
    SwitchTimerType(TimerType),
    /// Select a mode
    SwitchMode(TimerMode),
    /// Nudge one setting, clamped to its bounds
    AdjustSetting { field: SettingField, delta: i32 },
    /// Replace all settings (already clamped by the caller)
    SetSettings(TimerSettings),
    /// Select a theme
    SetTheme(Theme),
    /// Clear statistics
    ResetStats,
}

/// Owns the machine, the persistence adapter and the theme.
pub struct App<S: KeyValueStore> {
    machine: SessionMachine,
    persistence: Persistence<S>,
    theme: Theme,
}

impl<S: KeyValueStore> App<S> {
    /// Loads persisted state from `store` and builds the machine.
    pub fn load(store: S) -> Self {
        Self::load_with_clock(store, Arc::new(SystemClock))
    }

    /// Same as [`load`](Self::load) with an injected clock.
    pub fn load_with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        let mut persistence = Persistence::new(store);
        let loaded = persistence.load();
        Self {
            machine: SessionMachine::with_clock(loaded.settings, loaded.stats, clock),
            persistence,
            theme: loaded.theme,
        }
    }

    /// Returns the session machine.
    pub fn machine(&self) -> &SessionMachine {
        &self.machine
    }

    /// Returns the mutable session machine, e.g. to subscribe to events.
    pub fn machine_mut(&mut self) -> &mut SessionMachine {
        &mut self.machine
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the persistence adapter.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Returns a render snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.machine.snapshot()
    }

    /// Applies a user action and commits.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::ToggleRun => self.machine.toggle_run(),
            Action::Reset => self.machine.reset(),
            Action::SwitchTimerType(timer_type) => self.machine.switch_timer_type(timer_type),
            Action::SwitchMode(mode) => self.machine.switch_mode(mode),
            Action::AdjustSetting { field, delta } => {
                let mut settings = *self.machine.settings();
                settings.adjust(field, delta);
                self.machine.update_settings(settings);
            }
            Action::SetSettings(settings) => self.machine.update_settings(settings),
            Action::SetTheme(theme) => self.theme = theme,
            Action::ResetStats => self.machine.reset_stats(),
        }
        self.commit();
    }

    /// Applies one tick from the periodic source and commits.
    pub fn on_tick(&mut self) {
        self.machine.tick();
        self.commit();
    }

    /// Persists whatever changed. Returns the number of records written.
    pub fn commit(&mut self) -> usize {
        self.persistence
            .commit(self.machine.settings(), self.machine.stats(), self.theme)
    }
}

// ============================================================================
// Tests
// ============================================================================
