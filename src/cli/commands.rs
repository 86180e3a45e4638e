//! Command definitions for the StudyFlow CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{Theme, TimerMode, TimerType};

// ============================================================================
// CLI Structure
// ============================================================================

/// StudyFlow - Pomodoro timer and stopwatch for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "studyflow",
    version,
    about = "Pomodoro timer and stopwatch with focus streaks",
    long_about = "A terminal productivity timer: focus/break cycles, a plain stopwatch,\n\
                  session statistics with a daily streak, and colour themes.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding settings, statistics and theme
    #[arg(long, global = true, env = "STUDYFLOW_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer
    Run(RunArgs),

    /// Show settings, statistics and theme
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change timer settings
    #[command(subcommand)]
    Config(ConfigCommand),

    /// List or select colour themes
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Clear all statistics
    ResetStats {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Starting mode
    #[arg(short, long, value_enum, default_value = "pomodoro")]
    pub mode: TimerMode,

    /// Starting timer type (pomodoro mode)
    #[arg(short = 't', long = "type", value_enum, default_value = "focus")]
    pub timer_type: TimerType,

    /// Start the timer immediately
    #[arg(short, long)]
    pub autostart: bool,
}

// ============================================================================
// Config Command
// ============================================================================

/// Settings subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Print the current settings
    Show,

    /// Change one or more settings
    Set(ConfigSetArgs),
}

/// Arguments for `config set`
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigSetArgs {
    /// Focus duration in minutes (1-120)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub focus: Option<u32>,

    /// Short break duration in minutes (1-30)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub short_break: Option<u32>,

    /// Long break duration in minutes (1-60)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub long_break: Option<u32>,

    /// Focus sessions before a long break (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub sessions: Option<u32>,
}

impl ConfigSetArgs {
    /// Returns true if no option was given.
    pub fn is_empty(&self) -> bool {
        self.focus.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.sessions.is_none()
    }
}

// ============================================================================
// Theme Command
// ============================================================================

/// Theme subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ThemeCommand {
    /// List available themes
    List,

    /// Select a theme
    Set {
        /// Theme id (e.g. ocean, midnight)
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Parses a theme id.
fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse::<Theme>().map_err(|e| {
        let ids: Vec<_> = Theme::ALL.iter().map(Theme::id).collect();
        format!("{} (available: {})", e, ids.join(", "))
    })
}

// ============================================================================
// Tests
// ============================================================================
