//! Command listing formatter trait and factory.
//!
//! Listings are printed instead of writing artifacts when `--list` is given.
//! They show what the scan found, in discovery order.

use crate::cli::ListFormat;
use crate::scan::CommandSet;

/// Trait for formatting a command set for display.
pub trait ListFormatter {
    /// Formats all commands into a single string, without trailing newline.
    fn format(&self, commands: &CommandSet) -> String;
}

/// Creates the appropriate formatter for the given listing format.
pub fn create_formatter(format: ListFormat) -> Box<dyn ListFormatter> {
    use super::json::JsonFormatter;
    use super::plain::PlainFormatter;

    match format {
        ListFormat::Plain => Box::new(PlainFormatter),
        ListFormat::Json => Box::new(JsonFormatter),
    }
}
