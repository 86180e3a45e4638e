//! Display utilities for the StudyFlow CLI.
//!
//! This module provides formatted output for:
//! - The live timer frame
//! - Settings, statistics and theme listings
//! - Completion notices and error messages

use std::fmt::Write as _;

use crate::session::SessionEvent;
use crate::types::{SessionSnapshot, SettingField, Stats, Theme, TimerMode, TimerSettings};

const PROGRESS_WIDTH: usize = 20;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Formats seconds as `MM:SS` (minutes are not wrapped into hours).
    pub fn format_clock(total_seconds: u64) -> String {
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    /// Renders a fixed-width bar for a remaining-fraction in `[0, 1]`.
    pub fn progress_bar(progress: f64, width: usize) -> String {
        let filled = (progress.clamp(0.0, 1.0) * width as f64).round() as usize;
        let mut bar = String::with_capacity(width + 2);
        bar.push('[');
        bar.extend(std::iter::repeat('#').take(filled));
        bar.extend(std::iter::repeat('.').take(width - filled));
        bar.push(']');
        bar
    }

    /// Status word shown under the clock.
    pub fn run_label(snapshot: &SessionSnapshot) -> &'static str {
        let state = &snapshot.state;
        match (state.is_active, state.mode) {
            (false, _) => "Paused",
            (true, TimerMode::Stopwatch) => "Running",
            (true, TimerMode::Pomodoro) if state.timer_type.is_break() => "On break",
            (true, TimerMode::Pomodoro) => "Focusing",
        }
    }

    /// Formats the single-line live timer frame.
    pub fn format_frame(snapshot: &SessionSnapshot, theme: Theme, color: bool) -> String {
        let state = &snapshot.state;
        let clock = Self::format_clock(state.display_seconds());
        let clock = if color {
            format!("\x1b[1;38;5;{}m{}\x1b[0m", theme.accent(), clock)
        } else {
            clock
        };

        match state.mode {
            TimerMode::Pomodoro => format!(
                "{:<11} {} {} {:<8} session {}/{}",
                state.timer_type.label(),
                clock,
                Self::progress_bar(snapshot.progress, PROGRESS_WIDTH),
                Self::run_label(snapshot),
                state.current_session_index,
                snapshot.settings.sessions_before_long,
            ),
            TimerMode::Stopwatch => {
                format!("{:<11} {} {}", "Stopwatch", clock, Self::run_label(snapshot))
            }
        }
    }

    /// Formats a notice for events worth announcing, if any.
    pub fn format_event(event: &SessionEvent) -> Option<String> {
        match event {
            SessionEvent::FocusCompleted { stats, next } => Some(format!(
                "Focus session complete! {} sessions, {} day streak. Next: {}",
                stats.sessions_completed,
                stats.current_streak,
                next.label()
            )),
            SessionEvent::BreakCompleted { was } => {
                Some(format!("{} over. Ready to focus.", was.label()))
            }
            SessionEvent::SettingsChanged(settings) => Some(format!(
                "Settings: focus {}m, short {}m, long {}m, long break every {}",
                settings.focus_duration,
                settings.short_break_duration,
                settings.long_break_duration,
                settings.sessions_before_long
            )),
            SessionEvent::StatsReset => Some("Statistics cleared".to_string()),
            _ => None,
        }
    }

    /// Formats the settings table.
    pub fn format_settings(settings: &TimerSettings) -> String {
        let mut out = String::new();
        for field in SettingField::ALL {
            let (min, max) = field.bounds();
            let unit = if field == SettingField::SessionsBeforeLong {
                "  "
            } else {
                "m "
            };
            let _ = writeln!(
                out,
                "  {:<27} {:>3}{} ({}-{})",
                field.label(),
                settings.get(field),
                unit,
                min,
                max
            );
        }
        out
    }

    /// Formats the statistics block.
    pub fn format_stats(stats: &Stats) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  Streak:     {} days", stats.current_streak);
        let _ = writeln!(out, "  Sessions:   {}", stats.sessions_completed);
        let _ = writeln!(out, "  Focus Time: {} min", stats.total_focus_minutes());
        if let Some(last) = stats.last_session_date {
            let local = last.with_timezone(&chrono::Local);
            let _ = writeln!(out, "  Last:       {}", local.format("%Y-%m-%d %H:%M"));
        }
        out
    }

    /// Formats the theme list, marking the current theme.
    pub fn format_themes(current: Theme) -> String {
        let mut out = String::new();
        for theme in Theme::ALL {
            let marker = if theme == current { "*" } else { " " };
            let shade = if theme.is_dark() { "dark" } else { "light" };
            let _ = writeln!(out, "{} {:<10} {:<9} {}", marker, theme.id(), theme.name(), shade);
        }
        out
    }

    /// Interactive command help.
    pub fn help_text() -> &'static str {
        "Commands:\n\
         \x20 s, <enter>   start / pause\n\
         \x20 r            reset\n\
         \x20 f / b / l    focus / short break / long break\n\
         \x20 p / w        pomodoro / stopwatch mode\n\
         \x20 t <theme>    change theme\n\
         \x20 +focus, -short, +long, -sessions ...   adjust settings\n\
         \x20 ?            help\n\
         \x20 q            quit\n"
    }

    /// Shows settings, statistics and theme.
    pub fn show_status(snapshot: &SessionSnapshot, theme: Theme) {
        println!("StudyFlow");
        println!("─────────────────────────────");
        println!("Theme: {}", theme.name());
        println!();
        println!("Settings");
        print!("{}", Self::format_settings(&snapshot.settings));
        println!();
        println!("Stats");
        print!("{}", Self::format_stats(&snapshot.stats));
    }

    /// Shows settings only.
    pub fn show_settings(settings: &TimerSettings) {
        println!("Settings");
        print!("{}", Self::format_settings(settings));
    }

    /// Shows the theme list.
    pub fn show_themes(current: Theme) {
        print!("{}", Self::format_themes(current));
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }
}

// ============================================================================
// Tests
// ============================================================================
