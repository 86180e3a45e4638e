//! Session state machine for StudyFlow.
//!
//! This module provides the core timer behaviour:
//! - Run/pause toggling and one-second ticks
//! - Cycle steps (Focus → Short Break / Long Break → Focus)
//! - Manual timer type and mode switching, reset
//! - Statistics and calendar-day streak updates on focus completion
//! - Change notifications for persistence and rendering

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;

use super::clock::{Clock, SystemClock};
use crate::types::{SessionSnapshot, SessionState, Stats, TimerMode, TimerSettings, TimerType};

// ============================================================================
// SessionEvent
// ============================================================================

/// Events emitted after each committed mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Timer started or paused
    RunToggled {
        /// New value of `is_active`
        is_active: bool,
    },
    /// One second applied
    Tick {
        /// Remaining (pomodoro) or elapsed (stopwatch) seconds after the tick
        display_seconds: u64,
    },
    /// Focus session completed
    FocusCompleted {
        /// Updated statistics
        stats: Stats,
        /// Break type that follows
        next: TimerType,
    },
    /// Break completed
    BreakCompleted {
        /// Which break ended
        was: TimerType,
    },
    /// Timer type changed manually
    TimerTypeSwitched {
        /// New timer type
        timer_type: TimerType,
    },
    /// Mode changed manually
    ModeSwitched {
        /// New mode
        mode: TimerMode,
    },
    /// Timer reset
    Reset,
    /// Settings replaced
    SettingsChanged(TimerSettings),
    /// Statistics cleared
    StatsReset,
}

// ============================================================================
// Streak
// ============================================================================

/// Computes the streak after a focus completion on `today`.
///
/// Same day as the last session keeps the streak, the following day
/// extends it, anything else starts over at 1.
pub fn next_streak(current: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last {
        Some(last) if last == today => current,
        Some(last) if today.pred_opt() == Some(last) => current.saturating_add(1),
        _ => 1,
    }
}

// ============================================================================
// SessionMachine
// ============================================================================

/// Owns the session state, settings and statistics.
///
/// All mutation goes through the transition methods; the presentation
/// layer reads via [`state`](Self::state), [`settings`](Self::settings),
/// [`stats`](Self::stats) and [`snapshot`](Self::snapshot).
pub struct SessionMachine {
    state: SessionState,
    settings: TimerSettings,
    stats: Stats,
    clock: Arc<dyn Clock>,
    subscribers: Vec<mpsc::UnboundedSender<SessionEvent>>,
}

impl SessionMachine {
    /// Creates a machine in the idle focus state using the system clock.
    pub fn new(settings: TimerSettings, stats: Stats) -> Self {
        Self::with_clock(settings, stats, Arc::new(SystemClock))
    }

    /// Creates a machine with an injected clock.
    pub fn with_clock(settings: TimerSettings, stats: Stats, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: SessionState::new(&settings),
            settings,
            stats,
            clock,
            subscribers: Vec::new(),
        }
    }

    /// Registers a new change subscriber.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<SessionEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Returns the current statistics.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns a serialisable copy of everything the renderer needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            progress: self.state.progress(),
            settings: self.settings,
            stats: self.stats.clone(),
        }
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Starts or pauses the timer.
    pub fn toggle_run(&mut self) {
        self.state.is_active = !self.state.is_active;
        tracing::debug!(is_active = self.state.is_active, "run toggled");
        self.emit(SessionEvent::RunToggled {
            is_active: self.state.is_active,
        });
    }

    /// Applies one elapsed second. No effect while paused.
    pub fn tick(&mut self) {
        if !self.state.is_active {
            return;
        }

        match self.state.mode {
            TimerMode::Pomodoro => {
                if self.state.remaining_seconds <= 1 {
                    self.state.remaining_seconds = 0;
                    self.emit(SessionEvent::Tick { display_seconds: 0 });
                    self.complete_cycle_step();
                } else {
                    self.state.remaining_seconds -= 1;
                    self.emit(SessionEvent::Tick {
                        display_seconds: u64::from(self.state.remaining_seconds),
                    });
                }
            }
            TimerMode::Stopwatch => {
                self.state.elapsed_seconds = self.state.elapsed_seconds.saturating_add(1);
                self.emit(SessionEvent::Tick {
                    display_seconds: self.state.elapsed_seconds,
                });
            }
        }
    }

    /// Applies `seconds` ticks, one at a time.
    pub fn advance(&mut self, seconds: u32) {
        for _ in 0..seconds {
            self.tick();
        }
    }

    /// Finishes the current countdown and moves to the next interval.
    pub fn complete_cycle_step(&mut self) {
        self.state.is_active = false;

        match self.state.timer_type {
            TimerType::Focus => {
                self.record_focus_session();

                self.state.current_session_index =
                    self.state.current_session_index.saturating_add(1);
                let next = if self.state.current_session_index >= self.settings.sessions_before_long
                {
                    TimerType::LongBreak
                } else {
                    TimerType::ShortBreak
                };
                self.load_timer_type(next);
                if next == TimerType::LongBreak {
                    self.state.current_session_index = 0;
                }

                tracing::info!(
                    sessions_completed = self.stats.sessions_completed,
                    streak = self.stats.current_streak,
                    next = next.as_str(),
                    "focus session completed"
                );
                self.emit(SessionEvent::FocusCompleted {
                    stats: self.stats.clone(),
                    next,
                });
            }
            was @ (TimerType::ShortBreak | TimerType::LongBreak) => {
                self.load_timer_type(TimerType::Focus);
                tracing::info!(was = was.as_str(), "break completed");
                self.emit(SessionEvent::BreakCompleted { was });
            }
        }
    }

    /// Manually selects a timer type. Leaves statistics untouched.
    pub fn switch_timer_type(&mut self, timer_type: TimerType) {
        self.load_timer_type(timer_type);
        tracing::debug!(timer_type = timer_type.as_str(), "timer type switched");
        self.emit(SessionEvent::TimerTypeSwitched { timer_type });
    }

    /// Switches between pomodoro and stopwatch mode.
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.state.is_active = false;
        self.state.mode = mode;
        if mode == TimerMode::Pomodoro {
            self.load_timer_type(self.state.timer_type);
        }
        tracing::debug!(mode = mode.as_str(), "mode switched");
        self.emit(SessionEvent::ModeSwitched { mode });
    }

    /// Stops the timer and restores the current interval's starting value.
    pub fn reset(&mut self) {
        self.state.is_active = false;
        match self.state.mode {
            TimerMode::Pomodoro => self.load_timer_type(self.state.timer_type),
            TimerMode::Stopwatch => self.state.elapsed_seconds = 0,
        }
        tracing::debug!(mode = self.state.mode.as_str(), "timer reset");
        self.emit(SessionEvent::Reset);
    }

    /// Replaces the settings. The running countdown is not touched.
    pub fn update_settings(&mut self, settings: TimerSettings) {
        self.settings = settings;
        tracing::debug!(?settings, "settings updated");
        self.emit(SessionEvent::SettingsChanged(settings));
    }

    /// Clears all statistics.
    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
        tracing::info!("statistics reset");
        self.emit(SessionEvent::StatsReset);
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn load_timer_type(&mut self, timer_type: TimerType) {
        let duration = self.settings.duration_seconds(timer_type);
        self.state.timer_type = timer_type;
        self.state.remaining_seconds = duration;
        self.state.total_seconds = duration;
        self.state.is_active = false;
    }

    fn record_focus_session(&mut self) {
        let now = self.clock.now();
        let today = self.clock.local_date(now);
        let last = self
            .stats
            .last_session_date
            .map(|instant| self.clock.local_date(instant));

        self.stats.sessions_completed = self.stats.sessions_completed.saturating_add(1);
        self.stats.total_focus_time +=
            f64::from(self.settings.duration_seconds(TimerType::Focus));
        self.stats.current_streak = next_streak(self.stats.current_streak, last, today);
        self.stats.last_session_date = Some(now);
    }

    /// Returns a mutable reference to the state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::clock::MockClock;
    use chrono::{Duration, TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_machine(settings: TimerSettings) -> (SessionMachine, Arc<MockClock>) {
        let clock = Arc::new(MockClock::new(
            Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        ));
        let machine = SessionMachine::with_clock(settings, Stats::default(), clock.clone());
        (machine, clock)
    }

    fn fast_settings() -> TimerSettings {
        TimerSettings::default()
            .with_focus_duration(1)
            .with_short_break_duration(1)
            .with_long_break_duration(2)
            .with_sessions_before_long(2)
    }

    fn run_to_completion(machine: &mut SessionMachine) {
        if !machine.state().is_active {
            machine.toggle_run();
        }
        let remaining = machine.state().remaining_seconds;
        machine.advance(remaining);
    }

    // ------------------------------------------------------------------------
    // Streak Tests
    // ------------------------------------------------------------------------

    mod streak_tests {
        use super::*;

        #[test]
        fn test_first_session_starts_streak() {
            assert_eq!(next_streak(0, None, day(2024, 3, 5)), 1);
        }

        #[test]
        fn test_same_day_keeps_streak() {
            assert_eq!(next_streak(3, Some(day(2024, 3, 5)), day(2024, 3, 5)), 3);
        }

        #[test]
        fn test_next_day_extends_streak() {
            assert_eq!(next_streak(3, Some(day(2024, 3, 4)), day(2024, 3, 5)), 4);
        }

        #[test]
        fn test_next_day_across_month_boundary() {
            assert_eq!(next_streak(1, Some(day(2024, 2, 29)), day(2024, 3, 1)), 2);
        }

        #[test]
        fn test_gap_resets_streak() {
            assert_eq!(next_streak(7, Some(day(2024, 3, 2)), day(2024, 3, 5)), 1);
        }

        #[test]
        fn test_clock_moved_backwards_resets_streak() {
            assert_eq!(next_streak(7, Some(day(2024, 3, 6)), day(2024, 3, 5)), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Transition Tests
    // ------------------------------------------------------------------------

    mod transition_tests {
        use super::*;

        #[test]
        fn test_new_machine_is_idle_focus() {
            let (machine, _clock) = create_machine(TimerSettings::default());
            let state = machine.state();
            assert_eq!(state.mode, TimerMode::Pomodoro);
            assert_eq!(state.timer_type, TimerType::Focus);
            assert!(!state.is_active);
            assert_eq!(state.remaining_seconds, 25 * 60);
        }

        #[test]
        fn test_toggle_run_flips() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.toggle_run();
            assert!(machine.state().is_active);
            machine.toggle_run();
            assert!(!machine.state().is_active);
        }

        #[test]
        fn test_tick_inactive_is_noop() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            let before = machine.state().clone();
            machine.advance(10);
            assert_eq!(machine.state(), &before);

            machine.switch_mode(TimerMode::Stopwatch);
            machine.tick();
            assert_eq!(machine.state().elapsed_seconds, 0);
        }

        #[test]
        fn test_tick_decrements() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.toggle_run();
            machine.advance(3);
            assert_eq!(machine.state().remaining_seconds, 1500 - 3);
            assert!(machine.state().is_active);
        }

        #[test]
        fn test_completion_on_tick_reaching_zero() {
            let (mut machine, _clock) = create_machine(fast_settings());
            machine.toggle_run();
            machine.advance(59);
            assert_eq!(machine.state().remaining_seconds, 1);
            assert_eq!(machine.state().timer_type, TimerType::Focus);

            machine.tick();
            let state = machine.state();
            assert_eq!(state.timer_type, TimerType::ShortBreak);
            assert!(!state.is_active);
            assert_eq!(state.remaining_seconds, 60);
            assert_eq!(machine.stats().sessions_completed, 1);
        }

        #[test]
        fn test_completion_from_zero_remaining() {
            let (mut machine, _clock) = create_machine(fast_settings());
            machine.toggle_run();
            machine.state_mut().remaining_seconds = 0;
            machine.tick();
            assert_eq!(machine.state().timer_type, TimerType::ShortBreak);
            assert_eq!(machine.stats().sessions_completed, 1);
        }

        #[test]
        fn test_focus_completion_updates_stats() {
            let (mut machine, clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);

            let stats = machine.stats();
            assert_eq!(stats.sessions_completed, 1);
            assert_eq!(stats.total_focus_time, 60.0);
            assert_eq!(stats.current_streak, 1);
            assert_eq!(stats.last_session_date, Some(clock.now()));
            assert_eq!(machine.state().current_session_index, 1);
        }

        #[test]
        fn test_break_completion_returns_to_focus_without_stats() {
            let (mut machine, _clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            let stats_after_focus = machine.stats().clone();

            run_to_completion(&mut machine);
            assert_eq!(machine.state().timer_type, TimerType::Focus);
            assert_eq!(machine.state().remaining_seconds, 60);
            assert_eq!(machine.stats(), &stats_after_focus);
        }

        #[test]
        fn test_long_break_after_threshold() {
            let (mut machine, _clock) = create_machine(fast_settings());

            run_to_completion(&mut machine); // focus 1
            assert_eq!(machine.state().timer_type, TimerType::ShortBreak);
            run_to_completion(&mut machine); // short break
            run_to_completion(&mut machine); // focus 2

            let state = machine.state();
            assert_eq!(state.timer_type, TimerType::LongBreak);
            assert_eq!(state.current_session_index, 0);
            assert_eq!(state.remaining_seconds, 120);
            assert_eq!(state.total_seconds, 120);
        }

        #[test]
        fn test_threshold_of_one_always_long_break() {
            let settings = fast_settings().with_sessions_before_long(1);
            let (mut machine, _clock) = create_machine(settings);
            run_to_completion(&mut machine);
            assert_eq!(machine.state().timer_type, TimerType::LongBreak);
            assert_eq!(machine.state().current_session_index, 0);
        }

        #[test]
        fn test_switch_timer_type_leaves_stats_and_index() {
            let (mut machine, _clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            machine.toggle_run();

            machine.switch_timer_type(TimerType::LongBreak);
            let state = machine.state();
            assert_eq!(state.timer_type, TimerType::LongBreak);
            assert!(!state.is_active);
            assert_eq!(state.remaining_seconds, 120);
            assert_eq!(state.current_session_index, 1);
            assert_eq!(machine.stats().sessions_completed, 1);
        }

        #[test]
        fn test_switch_mode_round_trip_reloads_duration() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.toggle_run();
            machine.advance(100);

            machine.switch_mode(TimerMode::Stopwatch);
            assert!(!machine.state().is_active);
            machine.switch_mode(TimerMode::Pomodoro);
            assert_eq!(machine.state().remaining_seconds, 1500);
            assert_eq!(machine.state().total_seconds, 1500);
        }

        #[test]
        fn test_stopwatch_counts_up_and_keeps_value_across_modes() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.switch_mode(TimerMode::Stopwatch);
            machine.toggle_run();
            machine.advance(5);
            assert_eq!(machine.state().elapsed_seconds, 5);

            machine.switch_mode(TimerMode::Pomodoro);
            machine.switch_mode(TimerMode::Stopwatch);
            assert_eq!(machine.state().elapsed_seconds, 5);
        }

        #[test]
        fn test_reset_pomodoro_reloads_duration() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.toggle_run();
            machine.advance(30);
            machine.reset();
            assert!(!machine.state().is_active);
            assert_eq!(machine.state().remaining_seconds, 1500);
        }

        #[test]
        fn test_reset_after_settings_change_keeps_range() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.update_settings(TimerSettings::default().with_focus_duration(30));
            assert_eq!(machine.state().remaining_seconds, 1500);

            machine.reset();
            assert_eq!(machine.state().remaining_seconds, 1800);
            assert_eq!(machine.state().total_seconds, 1800);
        }

        #[test]
        fn test_reset_stopwatch_zeroes_elapsed() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            machine.switch_mode(TimerMode::Stopwatch);
            machine.toggle_run();
            machine.advance(12);
            machine.reset();
            assert_eq!(machine.state().elapsed_seconds, 0);
            assert!(!machine.state().is_active);
        }

        #[test]
        fn test_completion_saturates_counters() {
            let stats = Stats {
                total_focus_time: 0.0,
                sessions_completed: u32::MAX,
                current_streak: u32::MAX,
                last_session_date: Some(Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()),
            };
            let clock = Arc::new(MockClock::new(
                Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
            ));
            let mut machine = SessionMachine::with_clock(fast_settings(), stats, clock);

            machine.toggle_run();
            machine.advance(60);

            assert_eq!(machine.stats().sessions_completed, u32::MAX);
            assert_eq!(machine.stats().current_streak, u32::MAX);
            assert_eq!(machine.state().timer_type, TimerType::ShortBreak);
        }

        #[test]
        fn test_session_index_saturates() {
            let settings = fast_settings().with_sessions_before_long(12);
            let (mut machine, _clock) = create_machine(settings);
            machine.state_mut().current_session_index = u32::MAX;

            run_to_completion(&mut machine);
            assert_eq!(machine.state().timer_type, TimerType::LongBreak);
            assert_eq!(machine.state().current_session_index, 0);
        }

        #[test]
        fn test_reset_stats() {
            let (mut machine, _clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            machine.reset_stats();
            assert_eq!(machine.stats(), &Stats::default());
        }
    }

    // ------------------------------------------------------------------------
    // Streak Integration Tests
    // ------------------------------------------------------------------------

    mod streak_integration_tests {
        use super::*;

        #[test]
        fn test_two_sessions_same_day_count_once() {
            let (mut machine, clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            run_to_completion(&mut machine);
            clock.advance(Duration::hours(2));
            run_to_completion(&mut machine);

            assert_eq!(machine.stats().sessions_completed, 2);
            assert_eq!(machine.stats().current_streak, 1);
        }

        #[test]
        fn test_consecutive_days_extend_streak() {
            let (mut machine, clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 1);

            machine.switch_timer_type(TimerType::Focus);
            clock.advance(Duration::days(1));
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 2);

            machine.switch_timer_type(TimerType::Focus);
            clock.advance(Duration::days(1));
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 3);
        }

        #[test]
        fn test_skipped_day_resets_streak() {
            let (mut machine, clock) = create_machine(fast_settings());
            run_to_completion(&mut machine);
            machine.switch_timer_type(TimerType::Focus);
            clock.advance(Duration::days(1));
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 2);

            machine.switch_timer_type(TimerType::Focus);
            clock.advance(Duration::days(2));
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 1);
        }

        #[test]
        fn test_streak_follows_clock_offset_not_utc() {
            // 20:00 UTC on the 4th and 10:00 UTC on the 5th are both the 5th at +09:00
            let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
            let clock = Arc::new(MockClock::with_offset(
                Utc.with_ymd_and_hms(2024, 3, 4, 20, 0, 0).unwrap(),
                tokyo,
            ));
            let mut machine =
                SessionMachine::with_clock(fast_settings(), Stats::default(), clock.clone());
            run_to_completion(&mut machine);

            machine.switch_timer_type(TimerType::Focus);
            clock.set(Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap());
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 1);

            // 16:00 UTC on the 5th is already the 6th at +09:00
            machine.switch_timer_type(TimerType::Focus);
            clock.set(Utc.with_ymd_and_hms(2024, 3, 5, 16, 0, 0).unwrap());
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 2);
        }

        #[test]
        fn test_sessions_either_side_of_midnight_are_two_days() {
            let (mut machine, clock) = create_machine(fast_settings());
            clock.set(Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 0).unwrap());
            run_to_completion(&mut machine);

            machine.switch_timer_type(TimerType::Focus);
            clock.advance(Duration::minutes(2));
            run_to_completion(&mut machine);
            assert_eq!(machine.stats().current_streak, 2);
        }
    }

    // ------------------------------------------------------------------------
    // Event Tests
    // ------------------------------------------------------------------------

    mod event_tests {
        use super::*;

        #[test]
        fn test_toggle_emits_run_toggled() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            let mut rx = machine.subscribe();

            machine.toggle_run();
            assert_eq!(
                rx.try_recv().unwrap(),
                SessionEvent::RunToggled { is_active: true }
            );
        }

        #[test]
        fn test_inactive_tick_emits_nothing() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            let mut rx = machine.subscribe();
            machine.tick();
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_completion_event_sequence() {
            let (mut machine, _clock) = create_machine(fast_settings());
            machine.toggle_run();
            machine.advance(59);
            let mut rx = machine.subscribe();

            machine.tick();
            assert_eq!(
                rx.try_recv().unwrap(),
                SessionEvent::Tick { display_seconds: 0 }
            );
            match rx.try_recv().unwrap() {
                SessionEvent::FocusCompleted { stats, next } => {
                    assert_eq!(stats.sessions_completed, 1);
                    assert_eq!(next, TimerType::ShortBreak);
                }
                other => panic!("Expected FocusCompleted, got {:?}", other),
            }
        }

        #[test]
        fn test_dropped_subscriber_is_pruned() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            let rx = machine.subscribe();
            drop(rx);
            let mut live = machine.subscribe();

            machine.reset();
            assert_eq!(live.try_recv().unwrap(), SessionEvent::Reset);
            assert_eq!(machine.subscribers.len(), 1);
        }

        #[test]
        fn test_settings_change_event() {
            let (mut machine, _clock) = create_machine(TimerSettings::default());
            let mut rx = machine.subscribe();
            let settings = TimerSettings::default().with_focus_duration(50);
            machine.update_settings(settings);
            assert_eq!(
                rx.try_recv().unwrap(),
                SessionEvent::SettingsChanged(settings)
            );
        }
    }
}
