//! # Router
//!
//! Command line definition and parsing of interactive input lines.

use clap::{Args, Parser, Subcommand};

use crate::commands::calc::CalcInput;
use crate::error::{AppError, AppResult};

/// tipsplit - split a bill and work out the tip
#[derive(Parser, Debug)]
#[command(name = "tipsplit")]
#[command(about = "Split a bill between people and work out the tip")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

/// Flags overriding `TIPSPLIT_*` environment configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Largest split count allowed
    #[arg(long, global = true, value_name = "N")]
    pub split_max: Option<u32>,

    /// Number of stops on the tip slider (0 = continuous)
    #[arg(long, global = true, value_name = "N")]
    pub slider_intervals: Option<u32>,

    /// Currency prefix for displayed amounts
    #[arg(long, global = true, value_name = "SYMBOL")]
    pub currency: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Calculate once from flags
    Calc {
        /// Bill amount, e.g. 84.20
        #[arg(short, long, allow_hyphen_values = true)]
        bill: String,

        /// Tip percentage (0-100)
        #[arg(short, long, conflicts_with = "slider", allow_hyphen_values = true)]
        tip: Option<i64>,

        /// Tip slider position (0.0-1.0); the percentage is truncated
        #[arg(long, allow_hyphen_values = true)]
        slider: Option<f64>,

        /// Number of people splitting the bill
        #[arg(short, long, allow_hyphen_values = true)]
        split: Option<i64>,
    },

    /// Edit the bill form line by line and watch the totals update
    Interactive,
}

impl Commands {
    /// Converts `calc` flags into a command input.
    pub fn calc_input(&self) -> Option<CalcInput> {
        match self {
            Commands::Calc {
                bill,
                tip,
                slider,
                split,
            } => Some(CalcInput {
                bill: bill.clone(),
                tip_percentage: *tip,
                slider_position: *slider,
                split_count: *split,
            }),
            Commands::Interactive => None,
        }
    }
}

// =============================================================================
// Interactive Events
// =============================================================================

/// Help text for interactive mode.
pub const INTERACTIVE_HELP: &str = "\
commands:
  bill <amount>   set the bill (e.g. bill 84.20)
  tip <percent>   set the tip percentage (0-100)
  slide <pos>     move the tip slider (0.0-1.0)
  split <n>       set the number of people
  + / -           one more / one fewer person
  show            print the current totals
  reset           clear the form
  help            show this text
  quit            exit";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Bill(String),
    Tip(i64),
    Slide(f64),
    Split(i64),
    Increment,
    Decrement,
    Show,
    Reset,
    Help,
    Quit,
}

/// Parses an interactive input line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_event(line: &str) -> AppResult<Option<Event>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word.to_ascii_lowercase().as_str() {
        // bill text is kept verbatim; the form decides whether it is valid
        "bill" | "b" => Event::Bill(rest.to_string()),
        "tip" | "t" => Event::Tip(parse_arg(word, rest)?),
        "slide" | "slider" => Event::Slide(parse_arg(word, rest)?),
        "split" | "s" => Event::Split(parse_arg(word, rest)?),
        "+" | "inc" => Event::Increment,
        "-" | "dec" => Event::Decrement,
        "show" | "?" => Event::Show,
        "reset" => Event::Reset,
        "help" | "h" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        other => return Err(AppError::usage(format!("unknown command '{}'", other))),
    };

    Ok(Some(event))
}

fn parse_arg<T: std::str::FromStr>(word: &str, rest: &str) -> AppResult<T> {
    if rest.is_empty() {
        return Err(AppError::usage(format!("'{}' needs a value", word)));
    }
    rest.parse()
        .map_err(|_| AppError::usage(format!("'{}' is not a valid value for '{}'", rest, word)))
}
