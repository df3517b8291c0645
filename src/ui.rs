//! Leveled, timestamped progress output
//!
//! Info and success lines go to stdout, warnings and errors to stderr.
//! Debug lines are printed only when verbose mode has been enabled from the
//! CLI flag.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{SecondsFormat, Utc};
use console::Style;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enable or disable verbose (debug) output for the whole process
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Informational progress message
pub fn info(message: &str) {
    println!(
        "{} [{}] {}",
        Style::new().cyan().apply_to("i"),
        timestamp(),
        message
    );
}

/// Success message
pub fn success(message: &str) {
    println!(
        "{} [{}] {}",
        Style::new().green().bold().apply_to("ok"),
        timestamp(),
        message
    );
}

/// Non-fatal warning
pub fn warn(message: &str) {
    eprintln!(
        "{} [{}] {}",
        Style::new().yellow().bold().apply_to("warn"),
        timestamp(),
        message
    );
}

/// Fatal error message
pub fn error(message: &str) {
    eprintln!(
        "{} [{}] {}",
        Style::new().red().bold().apply_to("error"),
        timestamp(),
        message
    );
}

/// Verbose-only detail line
pub fn debug(message: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        println!(
            "{} [{}] {}",
            Style::new().dim().apply_to("debug"),
            timestamp(),
            message
        );
    }
}
