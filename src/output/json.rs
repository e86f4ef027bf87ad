//! JSON command listing.

use serde::Serialize;

use crate::scan::CommandSet;

use super::formatter::ListFormatter;

/// Listing entry. Paths are rendered with forward slashes so listings are
/// stable across platforms.
#[derive(Serialize)]
struct CommandEntry<'a> {
    name: &'a str,
    syntax: String,
    file: String,
    line: usize,
    help: Vec<String>,
}

/// Formatter that outputs the command set as a pretty-printed JSON array.
pub struct JsonFormatter;

impl ListFormatter for JsonFormatter {
    fn format(&self, commands: &CommandSet) -> String {
        let entries: Vec<CommandEntry> = commands
            .iter()
            .map(|c| CommandEntry {
                name: &c.name,
                syntax: c.syntax(),
                file: c.source_file.to_string_lossy().replace('\\', "/"),
                line: c.line,
                help: c.help_lines(),
            })
            .collect();

        serde_json::to_string_pretty(&entries).expect("JSON serialization should not fail")
    }
}
