//! Parsing of `/** ... */` documentation blocks attached to commands.
//!
//! Only two tags are understood:
//!
//! ```text
//! /**
//!  * @brief Sets a configuration value
//!  * @arg key    Name of the value
//!  * @arg value  New value
//!  */
//! ```
//!
//! Everything else in the block is ignored.

use std::sync::LazyLock;

use regex::Regex;

/// Help text used when a doc block exists but has no `@brief` tag.
pub const NO_HELP_AVAILABLE: &str = "No help available.";

static BRIEF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@brief\s+(.*)").expect("valid regex"));

static ARG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@arg\s+(\S+)\s+(.*)").expect("valid regex"));

/// One `@arg <token> <description>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDoc {
    pub token: String,
    pub description: String,
}

/// Parsed documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    /// Text following `@brief`, trimmed. `None` if the tag is missing.
    pub brief: Option<String>,
    /// `@arg` entries in the order they appear in the block.
    pub arguments: Vec<ArgumentDoc>,
}

impl DocComment {
    /// Parses the body of a documentation block (the text between `/**`
    /// and `*/`).
    pub fn parse(body: &str) -> Self {
        let brief = BRIEF_PATTERN
            .captures(body)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().trim().to_string());

        let arguments = ARG_PATTERN
            .captures_iter(body)
            .map(|cap| ArgumentDoc {
                token: cap[1].to_string(),
                description: cap[2].trim_end().to_string(),
            })
            .collect();

        Self { brief, arguments }
    }

    /// Renders the help body: the brief (or the fallback text) followed by
    /// one `<token> ... <description>` line per argument.
    pub fn help_lines(&self) -> Vec<String> {
        let mut text = self.brief.as_deref().unwrap_or(NO_HELP_AVAILABLE).to_string();
        for arg in &self.arguments {
            text.push('\n');
            text.push_str(&format!("{} ... {}", arg.token, arg.description));
        }

        text.trim().split('\n').map(String::from).collect()
    }
}
