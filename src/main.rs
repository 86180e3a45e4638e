//! StudyFlow CLI - A terminal productivity timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 focus sessions
//!
//! A plain stopwatch mode, session statistics with a daily streak, and
//! colour themes are also available.

use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use dialoguer::Confirm;
use tokio::io::BufReader;

use studyflow::cli::{
    run_interactive, Cli, Commands, ConfigCommand, ConfigSetArgs, Display, RunArgs, ThemeCommand,
};
use studyflow::session::TICK_PERIOD;
use studyflow::storage::{FileStore, KeyValueStore};
use studyflow::types::{SettingField, TimerMode, TimerType};
use studyflow::{Action, App};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    let code = match execute(cli).await {
        Ok(()) => 0,
        Err(e) => {
            Display::show_error(&format!("{:#}", e));
            1
        }
    };

    // A pending stdin read cannot be cancelled and would block runtime shutdown.
    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with timer frames.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads the app from `--data-dir` or the platform data directory.
fn load_app(data_dir: Option<&Path>) -> Result<App<FileStore>> {
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_default_dir()?,
    };
    tracing::debug!(dir = %store.dir().display(), "using data directory");
    Ok(App::load(store))
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Some(Commands::Run(args)) => {
            let mut app = load_app(data_dir)?;
            run_session(&mut app, &args).await?;
        }
        Some(Commands::Status { json }) => {
            let app = load_app(data_dir)?;
            if json {
                let mut value = serde_json::to_value(app.snapshot())?;
                value["theme"] = serde_json::Value::from(app.theme().id());
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                Display::show_status(&app.snapshot(), app.theme());
            }
        }
        Some(Commands::Config(ConfigCommand::Show)) => {
            let app = load_app(data_dir)?;
            Display::show_settings(app.machine().settings());
        }
        Some(Commands::Config(ConfigCommand::Set(args))) => {
            let mut app = load_app(data_dir)?;
            if args.is_empty() {
                println!("Nothing to change. Current settings:");
            } else {
                apply_config(&mut app, &args);
                println!("Settings saved.");
            }
            Display::show_settings(app.machine().settings());
        }
        Some(Commands::Theme(ThemeCommand::List)) => {
            let app = load_app(data_dir)?;
            Display::show_themes(app.theme());
        }
        Some(Commands::Theme(ThemeCommand::Set { theme })) => {
            let mut app = load_app(data_dir)?;
            app.dispatch(Action::SetTheme(theme));
            println!("Theme set to {}.", theme.name());
        }
        Some(Commands::ResetStats { yes }) => {
            let mut app = load_app(data_dir)?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Reset all statistics? This cannot be undone.")
                    .default(false)
                    .interact()
                    .context("confirmation prompt failed (use --yes when not on a terminal)")?;
            if confirmed {
                app.dispatch(Action::ResetStats);
                println!("Statistics cleared.");
            } else {
                println!("Cancelled.");
            }
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Applies `config set` options on top of the current settings.
fn apply_config<S: KeyValueStore>(app: &mut App<S>, args: &ConfigSetArgs) {
    let mut settings = *app.machine().settings();
    let updates = [
        (SettingField::FocusDuration, args.focus),
        (SettingField::ShortBreakDuration, args.short_break),
        (SettingField::LongBreakDuration, args.long_break),
        (SettingField::SessionsBeforeLong, args.sessions),
    ];
    for (field, value) in updates {
        if let Some(value) = value {
            settings.set_clamped(field, value);
        }
    }
    app.dispatch(Action::SetSettings(settings));
}

/// Applies the starting type, mode and autostart from `run` options.
///
/// The type is loaded before the mode switch so a stopwatch session still
/// returns to the requested type when switching back to pomodoro.
fn prepare_session<S: KeyValueStore>(app: &mut App<S>, args: &RunArgs) {
    if args.timer_type != TimerType::Focus {
        app.dispatch(Action::SwitchTimerType(args.timer_type));
    }
    if args.mode == TimerMode::Stopwatch {
        app.dispatch(Action::SwitchMode(TimerMode::Stopwatch));
    }
    if args.autostart {
        app.dispatch(Action::ToggleRun);
    }
}

/// Runs the interactive timer until the user quits or presses Ctrl-C.
async fn run_session<S: KeyValueStore>(app: &mut App<S>, args: &RunArgs) -> Result<()> {
    prepare_session(app, args);

    let tty = std::io::stdout().is_terminal();
    if tty {
        println!("{}", Display::help_text());
    }

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = run_interactive(app, TICK_PERIOD, input, &mut stdout, tty) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted");
            println!();
        }
    }

    app.commit();
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
