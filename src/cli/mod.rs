//! CLI module for StudyFlow.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic
//! - `interactive`: The line-driven timer session

pub mod commands;
pub mod display;
pub mod interactive;

pub use commands::{Cli, Commands, ConfigCommand, ConfigSetArgs, RunArgs, ThemeCommand};
pub use display::Display;
pub use interactive::{parse_command, run_interactive, Command};
