//! Phase Timer
//!
//! A terminal countdown that splits a logo design session into weighted
//! phases, with an optional generated branding prompt to work on.
//! Run with: phasetimer [-d|--hours <HOURS>] [--offline] [--log <FILE>]

mod app;
mod config;
mod constants;
mod countdown;
mod event;
mod format;
mod logging;
mod prompt_client;
mod schedule;
mod selector;
mod ticker;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{AppEvent, EventHandler};
use crate::prompt_client::PromptGenerator;
use crate::selector::DurationSelector;

const USAGE: &str = "\
phasetimer - phased countdown for logo design sessions

Usage: phasetimer [OPTIONS]

Options:
  -d, --hours <HOURS>  Initial session length in hours (default 1)
      --offline        Never call the prompt service; use local prompts
      --log <FILE>     Append logs to FILE (filter with RUST_LOG)
  -h, --help           Show this help message

Environment:
  PHASETIMER_PROMPT_URL  Prompt service endpoint
  PHASETIMER_LOG         Log file when --log is not given";

/// Options given on the command line.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    hours: Option<f64>,
    offline: bool,
    log_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(CliArgs),
    Help,
}

/// Parses command line arguments (without the program name).
///
/// Supports:
/// - `-d <HOURS>` or `--hours <HOURS>` for the initial session length
/// - `--offline` to disable the prompt service
/// - `--log <FILE>` to write logs to a file
/// - `-h` or `--help` to show usage
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut cli = CliArgs::default();
    let mut args_iter = args.into_iter();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-d" | "--hours" => {
                let value = args_iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a HOURS argument"))?;
                let hours = value
                    .parse::<f64>()
                    .ok()
                    .filter(|hours| hours.is_finite())
                    .ok_or_else(|| format!("Invalid number of hours '{value}'"))?;
                cli.hours = Some(hours);
            }
            "--offline" => cli.offline = true,
            "--log" => {
                let path = args_iter
                    .next()
                    .ok_or_else(|| "--log requires a FILE argument".to_string())?;
                cli.log_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument '{other}'")),
        }
    }

    Ok(Command::Run(cli))
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(cli)) => cli,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let mut config = AppConfig::from_env();
    if cli.offline {
        config.offline = true;
    }
    if cli.log_path.is_some() {
        config.log_path = cli.log_path;
    }

    logging::init(config.log_path.as_deref())?;

    let hours = cli.hours.unwrap_or(config.range.default_hours);
    let selector = DurationSelector::new(config.range, hours)
        .with_context(|| format!("Cannot start a {hours} hour session"))?;
    let generator = PromptGenerator::from_config(&config);

    info!(
        hours,
        phases = config.plan.len(),
        online = generator.is_online(),
        "Starting phasetimer"
    );

    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(config.plan, selector, generator, tx);
    debug!(durations = ?app.countdown.schedule().durations(), "Initial schedule");

    let terminal = ratatui::init();
    let result = run_app(terminal, app, rx);
    ratatui::restore();

    result
}

/// Main application loop.
///
/// 1. Apply messages from background tasks (ticks, prompts)
/// 2. Draw the current state
/// 3. Wait briefly for a key and handle it
/// 4. Repeat until the user quits
fn run_app(
    mut terminal: ratatui::DefaultTerminal,
    mut app: App,
    mut background: UnboundedReceiver<AppEvent>,
) -> Result<()> {
    let event_handler = EventHandler::new();

    loop {
        while let Ok(event) = background.try_recv() {
            app.handle_background(event);
        }

        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        if let Some(action) = event_handler.next().context("Failed to read input")? {
            if app.handle_event(action) {
                break;
            }
        }
    }

    info!("Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse_args(args(&[])), Ok(Command::Run(CliArgs::default())));
    }

    #[test]
    fn test_parse_all_options() {
        let parsed = parse_args(args(&["-d", "2.5", "--offline", "--log", "/tmp/pt.log"]));
        assert_eq!(
            parsed,
            Ok(Command::Run(CliArgs {
                hours: Some(2.5),
                offline: true,
                log_path: Some(PathBuf::from("/tmp/pt.log")),
            }))
        );
    }

    #[test]
    fn test_parse_long_hours() {
        let parsed = parse_args(args(&["--hours", "3"]));
        assert_eq!(
            parsed,
            Ok(Command::Run(CliArgs {
                hours: Some(3.0),
                ..CliArgs::default()
            }))
        );
    }

    #[test]
    fn test_parse_help_wins() {
        assert_eq!(parse_args(args(&["--offline", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--hours"])).is_err());
        assert!(parse_args(args(&["-d", "soon"])).is_err());
        assert!(parse_args(args(&["-d", "NaN"])).is_err());
        assert!(parse_args(args(&["--log"])).is_err());
        assert!(parse_args(args(&["--project", "x"])).is_err());
    }
}
