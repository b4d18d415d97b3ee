//! Console logging helpers for bot authors.
//!
//! Severity tags are colorized, multi-value lines are pretty-printed as JSON,
//! and [`Logger::debug`] stamps each line with a process-wide counter.
//! Logging never fails: stream errors are discarded.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use colored::Colorize;
use serde::{Serialize, Serializer};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Counts debug lines across the whole process. Starts at 1, never resets.
static DEBUG_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A single loggable value.
pub enum ConsoleValue {
    /// Plain text. Printed verbatim when it is the only value on the line.
    Text(String),
    /// Structured data, rendered as pretty-printed JSON.
    Data(Value),
    /// An error chain, rendered with its full cause chain.
    Failure(anyhow::Error),
}

impl ConsoleValue {
    /// Convert any serializable value into a [`ConsoleValue::Data`].
    ///
    /// Unserializable input degrades to a placeholder rather than failing.
    pub fn data<T: Serialize>(value: T) -> Self {
        Self::Data(serde_json::to_value(value).unwrap_or(Value::String("<unserializable>".to_owned())))
    }
}

impl From<&str> for ConsoleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for ConsoleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for ConsoleValue {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<anyhow::Error> for ConsoleValue {
    fn from(error: anyhow::Error) -> Self {
        Self::Failure(error)
    }
}

impl Serialize for ConsoleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Data(value) => value.serialize(serializer),
            Self::Failure(error) => serializer.serialize_str(&format!("{error:#}")),
        }
    }
}

/// Static console logging facade.
///
/// The [`log_info!`], [`log_warn!`], [`log_error!`], and [`log_debug!`]
/// macros are the variadic front end; the methods here take the already
/// collected value list.
pub struct Logger;

impl Logger {
    /// Write an info line to stdout, tagged `i` (single value) or `info`.
    pub fn info(values: Vec<ConsoleValue>) {
        let tag = if values.len() > 1 { "info" } else { "i" };
        let _ = writeln!(
            io::stdout(),
            "[ {} ] {}",
            tag.blue(),
            format_values(&values)
        );
    }

    /// Write a warning line to stdout, tagged `!` (single value) or `warning`.
    pub fn warn(values: Vec<ConsoleValue>) {
        let tag = if values.len() > 1 { "warning" } else { "!" };
        let _ = writeln!(
            io::stdout(),
            "[ {} ] {}",
            tag.yellow(),
            format_values(&values)
        );
    }

    /// Write each value to stderr independently.
    ///
    /// Error chains use their native multi-line rendering; everything else
    /// gets an `ERROR` tag. One bad value never aborts the rest of the line.
    pub fn error(values: Vec<ConsoleValue>) {
        let mut stderr = io::stderr();

        for value in values {
            match value {
                ConsoleValue::Failure(error) => {
                    let _ = writeln!(stderr, "{error:?}");
                }
                other => {
                    let _ = writeln!(
                        stderr,
                        "[ {} ] {}",
                        "ERROR".red(),
                        format_values(std::slice::from_ref(&other))
                    );
                }
            }
        }
    }

    /// Write a debug line carrying the current counter value, then advance
    /// the counter.
    pub fn debug() {
        let _ = writeln!(io::stdout(), "{}", format_debug_line(next_debug_index()));
    }
}

/// Variadic [`Logger::info`] front end.
#[macro_export]
macro_rules! log_info {
    ($($value:expr),+ $(,)?) => {
        $crate::logger::Logger::info(vec![$($crate::logger::ConsoleValue::from($value)),+])
    };
}

/// Variadic [`Logger::warn`] front end.
#[macro_export]
macro_rules! log_warn {
    ($($value:expr),+ $(,)?) => {
        $crate::logger::Logger::warn(vec![$($crate::logger::ConsoleValue::from($value)),+])
    };
}

/// Variadic [`Logger::error`] front end.
#[macro_export]
macro_rules! log_error {
    ($($value:expr),+ $(,)?) => {
        $crate::logger::Logger::error(vec![$($crate::logger::ConsoleValue::from($value)),+])
    };
}

/// [`Logger::debug`] front end, for symmetry with the other macros.
#[macro_export]
macro_rules! log_debug {
    () => {
        $crate::logger::Logger::debug()
    };
}

fn next_debug_index() -> u64 {
    DEBUG_COUNTER.fetch_add(1, Ordering::Relaxed)
}

fn format_debug_line(at: u64) -> String {
    format!("[ {} ] At #{at}", "debug".blue())
}

/// Shared info/warn formatting: a sole text value prints verbatim, anything
/// else becomes a pretty-printed JSON array on a fresh line.
fn format_values(values: &[ConsoleValue]) -> String {
    if let [ConsoleValue::Text(text)] = values {
        return text.clone();
    }

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);

    match values.serialize(&mut serializer) {
        Ok(()) => format!("\n{}", String::from_utf8_lossy(&out)),
        Err(_) => "\n<unprintable>".to_owned(),
    }
}
