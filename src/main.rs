//! # find-loading CLI
//!
//! Command-line interface for the loading screenshot finder.
//!
//! ## Usage
//! ```bash
//! find-loading check --source fridge-poem
//! find-loading delete --source fridge-poem --output json
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    loading_screenshot_finder::init_tracing();

    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
