//! # tipsplit Entry Point
//!
//! ```text
//! tipsplit calc --bill 100 --tip 15 --split 4
//! tipsplit interactive
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    tipsplit_cli::run()
}
