use std::path::PathBuf;

use super::doc_comment::DocComment;

/// A single `CLI_COMMAND(...)` declaration found in a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Command name, the first argument token of the declaration.
    pub name: String,
    /// Raw text between the parentheses, emitted verbatim into the table.
    pub declaration: String,
    /// Path of the declaring file relative to the project root.
    pub source_file: PathBuf,
    /// 0-based line index of the declaration marker.
    pub line: usize,
    /// Documentation block directly above the declaration, if any.
    pub doc: Option<DocComment>,
}

impl CommandRecord {
    /// Builds a record from the raw declaration arguments.
    ///
    /// The name is the first comma separated token, trimmed. An empty
    /// argument list leaves the name empty; the extractor filters those.
    pub fn new(
        declaration: &str,
        source_file: PathBuf,
        line: usize,
        doc: Option<DocComment>,
    ) -> Self {
        let name = declaration
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        Self {
            name,
            declaration: declaration.trim().to_string(),
            source_file,
            line,
            doc,
        }
    }

    /// The command syntax shown in help output: the name followed by the
    /// documented argument tokens.
    pub fn syntax(&self) -> String {
        match &self.doc {
            Some(doc) if !doc.arguments.is_empty() => {
                let tokens: Vec<&str> = doc.arguments.iter().map(|a| a.token.as_str()).collect();
                format!("{} {}", self.name, tokens.join(" "))
            }
            _ => self.name.clone(),
        }
    }

    /// Help body lines. Empty when the declaration carries no doc block.
    pub fn help_lines(&self) -> Vec<String> {
        match &self.doc {
            Some(doc) => doc.help_lines(),
            None => Vec::new(),
        }
    }

    /// `file:line` location used in diagnostics and listings.
    pub fn location(&self) -> String {
        format!("{}:{}", self.source_file.display(), self.line)
    }
}
