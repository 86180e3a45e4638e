//! Line-oriented interactive session.
//!
//! Reads one command per line, drives the [`App`] and redraws the timer
//! frame after every input and every tick. When input reaches EOF the
//! session keeps running until the timer is no longer active.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::display::Display;
use crate::app::{Action, App};
use crate::session::TickSource;
use crate::storage::KeyValueStore;
use crate::types::{SettingField, Theme, TimerMode, TimerType};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an action to the app
    Apply(Action),
    /// Print the command list
    Help,
    /// Leave the session
    Quit,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or("");
    let arg = parts.next();

    let command = match head {
        "" | "s" | "start" | "pause" => Command::Apply(Action::ToggleRun),
        "r" | "reset" => Command::Apply(Action::Reset),
        "f" | "focus" => Command::Apply(Action::SwitchTimerType(TimerType::Focus)),
        "b" | "short" => Command::Apply(Action::SwitchTimerType(TimerType::ShortBreak)),
        "l" | "long" => Command::Apply(Action::SwitchTimerType(TimerType::LongBreak)),
        "p" | "pomodoro" => Command::Apply(Action::SwitchMode(TimerMode::Pomodoro)),
        "w" | "stopwatch" => Command::Apply(Action::SwitchMode(TimerMode::Stopwatch)),
        "t" | "theme" => {
            let name = arg.ok_or_else(|| "usage: t <theme>".to_string())?;
            let theme = name.parse::<Theme>().map_err(|e| e.to_string())?;
            Command::Apply(Action::SetTheme(theme))
        }
        "?" | "h" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        nudge if nudge.starts_with('+') || nudge.starts_with('-') => {
            let (sign, name) = nudge.split_at(1);
            let field = SettingField::from_short_name(name)
                .ok_or_else(|| format!("unknown setting '{}'", name))?;
            let step = match arg {
                Some(n) => n
                    .parse::<i32>()
                    .map_err(|_| format!("invalid step '{}'", n))?,
                None => 1,
            };
            let delta = if sign == "-" { -step } else { step };
            Command::Apply(Action::AdjustSetting { field, delta })
        }
        other => return Err(format!("unknown command '{}' (? for help)", other)),
    };
    Ok(command)
}

// ============================================================================
// Session Loop
// ============================================================================

/// Runs the interactive session until `q` or until input ends and the timer
/// is idle.
///
/// `tty` selects in-place redraws with theme colours; otherwise each frame
/// is written on its own line.
pub async fn run_interactive<S, R, W>(
    app: &mut App<S>,
    period: Duration,
    input: R,
    out: &mut W,
    tty: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut events = app.machine_mut().subscribe();
    let (mut ticker, mut ticks) = TickSource::new(period);
    let mut lines = input.lines();
    let mut input_open = true;

    sync_ticker(&mut ticker, app);
    draw_frame(out, app, tty)?;

    loop {
        if !input_open && !app.machine().state().is_active {
            tracing::debug!("input closed and timer idle, leaving session");
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line? {
                    Some(line) => match parse_command(&line) {
                        Ok(Command::Quit) => break,
                        Ok(Command::Help) => write_notice(out, Display::help_text().trim_end(), tty)?,
                        Ok(Command::Apply(action)) => app.dispatch(action),
                        Err(message) => write_notice(out, &message, tty)?,
                    },
                    None => input_open = false,
                }
            }
            Some(tick) = ticks.recv() => {
                if !ticker.is_current(&tick) {
                    continue;
                }
                app.on_tick();
            }
        }

        while let Ok(event) = events.try_recv() {
            if let Some(notice) = Display::format_event(&event) {
                write_notice(out, &notice, tty)?;
            }
        }

        sync_ticker(&mut ticker, app);
        draw_frame(out, app, tty)?;
    }

    ticker.stop();
    app.commit();
    if tty {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Keeps exactly one tick task alive while the timer is active.
fn sync_ticker<S: KeyValueStore>(ticker: &mut TickSource, app: &App<S>) {
    let active = app.machine().state().is_active;
    if active && !ticker.is_running() {
        ticker.start();
    } else if !active && ticker.is_running() {
        ticker.stop();
    }
}

fn draw_frame<S: KeyValueStore, W: Write>(out: &mut W, app: &App<S>, tty: bool) -> Result<()> {
    let frame = Display::format_frame(&app.snapshot(), app.theme(), tty);
    if tty {
        write!(out, "\r\x1b[2K{}", frame)?;
    } else {
        writeln!(out, "{}", frame)?;
    }
    out.flush()?;
    Ok(())
}

fn write_notice<W: Write>(out: &mut W, text: &str, tty: bool) -> Result<()> {
    if tty {
        write!(out, "\r\x1b[2K")?;
    }
    writeln!(out, "{}", text)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
