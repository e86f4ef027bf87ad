use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::doc_comment::DocComment;
use super::model::CommandRecord;

/// Marker that registers a command in libcli.
pub const COMMAND_MARKER: &str = "CLI_COMMAND";

// Declaration at the very start of a line.
static LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CLI_COMMAND\((.+?)\)").expect("valid regex"));

// Optional `/** ... */` block directly above a declaration. The block body
// cannot contain `*/`, so a block only pairs with the declaration that
// immediately follows it.
static DOCUMENTED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:/\*\*((?:[^*]|\*+[^*/])*)\*+/\s*)?CLI_COMMAND\((.*?)\)")
        .expect("valid regex")
});

/// How declarations are matched in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Line by line, declaration anchored at column 0. Doc blocks are not
    /// collected. Used for the dispatch table.
    Line,
    /// Whole file, declarations anywhere, paired with the doc block directly
    /// above them. Used for help text.
    Documented,
}

/// Pulls `CLI_COMMAND(...)` declarations out of source text.
///
/// Extraction is plain pattern matching over conventionally formatted code;
/// declarations hidden behind macros or split in unusual ways are missed.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationExtractor {
    mode: ExtractionMode,
}

impl DeclarationExtractor {
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    /// Extracts all declarations from `content`, tagging each with
    /// `source_file`.
    pub fn extract(&self, content: &str, source_file: &Path) -> Vec<CommandRecord> {
        let records = match self.mode {
            ExtractionMode::Line => Self::extract_lines(content, source_file),
            ExtractionMode::Documented => Self::extract_documented(content, source_file),
        };

        records
            .into_iter()
            .filter(|record| {
                if record.name.is_empty() {
                    debug!(
                        "Ignoring declaration without a name at {}",
                        record.location()
                    );
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    fn extract_lines(content: &str, source_file: &Path) -> Vec<CommandRecord> {
        content
            .lines()
            .enumerate()
            .filter_map(|(line, text)| {
                let cap = LINE_PATTERN.captures(text)?;
                Some(CommandRecord::new(
                    &cap[1],
                    source_file.to_path_buf(),
                    line,
                    None,
                ))
            })
            .collect()
    }

    fn extract_documented(content: &str, source_file: &Path) -> Vec<CommandRecord> {
        DOCUMENTED_PATTERN
            .captures_iter(content)
            .filter_map(|cap| {
                let args = cap.get(2)?;
                let marker_start = args.start() - COMMAND_MARKER.len() - 1;
                let line = content[..marker_start].matches('\n').count();
                let doc = cap.get(1).map(|body| DocComment::parse(body.as_str()));

                Some(CommandRecord::new(
                    args.as_str(),
                    source_file.to_path_buf(),
                    line,
                    doc,
                ))
            })
            .collect()
    }
}
