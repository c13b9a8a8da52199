//! # tipsplit CLI Library
//!
//! Terminal front end over `tipsplit-core`: owns the bill form state and
//! reruns the calculators after every input.
//!
//! ## Module Organization
//! ```text
//! tipsplit_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── router.rs       ◄─── clap definition, interactive line parsing
//! ├── output.rs       ◄─── text / JSON rendering
//! ├── state/
//! │   ├── config.rs   ◄─── AppConfig from env + flags
//! │   └── form.rs     ◄─── BillForm, FormState, FormSummary
//! ├── commands/
//! │   ├── form.rs     ◄─── set_bill, set_tip_position, increment_split, ...
//! │   └── calc.rs     ◄─── one-shot calculation
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod commands;
pub mod error;
pub mod output;
pub mod router;
pub mod state;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{calc, form};
use error::AppResult;
use output::{render_error, render_summary, OutputFormat};
use router::{parse_event, Cli, Event, INTERACTIVE_HELP};
use state::{AppConfig, BillForm, FormState};

/// Runs the CLI.
///
/// ## Startup Sequence
/// 1. Parse arguments
/// 2. Initialize logging (stderr)
/// 3. Load configuration (env, then flag overrides)
/// 4. Dispatch to `calc` or the interactive loop
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);

    match dispatch(&cli, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match format {
                OutputFormat::Json => println!("{}", render_error(&err, format)),
                OutputFormat::Text => eprintln!("{}", render_error(&err, format)),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &Cli, format: OutputFormat) -> AppResult<()> {
    let config = AppConfig::load()?.with_overrides(
        cli.overrides.split_max,
        cli.overrides.slider_intervals,
        cli.overrides.currency.clone(),
    )?;
    info!(?config, "configuration loaded");

    if let Some(input) = cli.command.calc_input() {
        let summary = calc::calculate(&config, &input)?;
        println!("{}", render_summary(&summary, format)?);
        return Ok(());
    }

    let state = FormState::new(BillForm::new(&config)?);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&state, stdin.lock(), stdout.lock(), format)
}

/// Reads events line by line and prints the recomputed summary after each.
///
/// Bad lines print an error and the loop continues; only I/O failures end
/// it early.
pub fn run_interactive<R, W>(
    state: &FormState,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    if format == OutputFormat::Text {
        writeln!(out, "{}", INTERACTIVE_HELP)?;
        writeln!(out)?;
        writeln!(out, "{}", render_summary(&form::get_summary(state), format)?)?;
    }

    for line in input.lines() {
        let line = line?;

        let event = match parse_event(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", render_error(&err, format))?;
                continue;
            }
        };

        let result = match event {
            Event::Quit => break,
            Event::Help => {
                writeln!(out, "{}", INTERACTIVE_HELP)?;
                continue;
            }
            Event::Bill(text) => Ok(form::set_bill(state, &text)),
            Event::Tip(pct) => form::set_tip_percentage(state, pct),
            Event::Slide(position) => form::set_tip_position(state, position),
            Event::Split(count) => form::set_split(state, count),
            Event::Increment => Ok(form::increment_split(state)),
            Event::Decrement => Ok(form::decrement_split(state)),
            Event::Reset => Ok(form::reset_form(state)),
            Event::Show => Ok(form::get_summary(state)),
        };

        match result {
            Ok(summary) => writeln!(out, "{}", render_summary(&summary, format)?)?,
            Err(err) => writeln!(out, "{}", render_error(&err, format))?,
        }
        out.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber. Logs go to stderr so stdout only
/// carries results.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for the tipsplit crates when `RUST_LOG` is unset
/// - Default: WARN level
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,tipsplit_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
