//! Plain text command listing.

use crate::scan::CommandSet;

use super::formatter::ListFormatter;

/// One command per line: the command syntax, padded to a common width,
/// followed by the `file:line` it was found at.
pub struct PlainFormatter;

impl ListFormatter for PlainFormatter {
    fn format(&self, commands: &CommandSet) -> String {
        let width = commands
            .iter()
            .map(|c| c.syntax().chars().count())
            .max()
            .unwrap_or(0);

        commands
            .iter()
            .map(|c| format!("{:<width$}  {}", c.syntax(), c.location()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
