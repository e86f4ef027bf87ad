//! Help text generation (`help.cpp`).
//!
//! Every command gets one C string constant. The first help line starts at
//! the same column for all commands, further lines are indented to line up
//! under it:
//!
//! ```text
//! led pin    Toggle a led
//!              pin ... Pin number
//! reset      Resets device
//! ```

use crate::scan::{CommandRecord, CommandSet, ExtractionMode};

use super::Synthesizer;

/// Output file name of the help text constants.
pub const HELP_FILE_NAME: &str = "help.cpp";

/// Spaces between the longest syntax and the help text.
const COLUMN_GAP: usize = 4;

/// Extra indent of continuation lines relative to the first help line.
const CONTINUATION_INDENT: usize = 2;

/// Renders one `cmd_<name>_help` constant per command, sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpSynthesizer;

impl HelpSynthesizer {
    /// Formats the help string of every command, in name order.
    ///
    /// Returns `(name, text)` pairs; `text` is already escaped for a C string
    /// literal.
    pub fn format_commands(&self, commands: &CommandSet) -> Vec<(String, String)> {
        let sorted = commands.sorted_by_name();
        let max_syntax = sorted
            .iter()
            .map(|c| c.syntax().chars().count())
            .max()
            .unwrap_or(0);

        sorted
            .into_iter()
            .map(|command| (command.name.clone(), Self::format_command(command, max_syntax)))
            .collect()
    }

    fn format_command(command: &CommandRecord, max_syntax: usize) -> String {
        let syntax = command.syntax();
        let lines = command.help_lines();
        let first = lines.first().map(String::as_str).unwrap_or_default();

        let padding = " ".repeat(max_syntax - syntax.chars().count() + COLUMN_GAP);
        let mut text = format!("{}{}{}", escape(&syntax), padding, escape(first));

        let indent = " ".repeat(max_syntax + COLUMN_GAP + CONTINUATION_INDENT);
        for line in lines.iter().skip(1) {
            text.push_str("\\n");
            text.push_str(&indent);
            text.push_str(&escape(line));
        }

        text
    }
}

impl Synthesizer for HelpSynthesizer {
    fn file_name(&self) -> &'static str {
        HELP_FILE_NAME
    }

    fn extraction_mode(&self) -> ExtractionMode {
        ExtractionMode::Documented
    }

    fn render(&self, commands: &CommandSet) -> String {
        self.format_commands(commands)
            .into_iter()
            .map(|(name, text)| format!("const char *cmd_{}_help = \"{}\";\n", name, text))
            .collect()
    }
}

/// Escapes text for use inside a C string literal.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::DocComment;
    use std::path::PathBuf;

    fn add(set: &mut CommandSet, name: &str, doc: Option<&str>) {
        set.insert_if_absent(CommandRecord::new(
            name,
            PathBuf::from("src/main.cpp"),
            0,
            doc.map(DocComment::parse),
        ));
    }

    #[test]
    fn render_sorts_and_aligns_briefs() {
        let mut set = CommandSet::new();
        add(&mut set, "status", Some(" @brief Prints status\n"));
        add(&mut set, "reset", Some(" @brief Resets device\n"));

        let output = HelpSynthesizer.render(&set);

        assert_eq!(
            output,
            "const char *cmd_reset_help = \"reset     Resets device\";\n\
             const char *cmd_status_help = \"status    Prints status\";\n"
        );
    }

    #[test]
    fn first_help_line_starts_at_common_column() {
        let mut set = CommandSet::new();
        add(&mut set, "a", Some(" @brief Short\n"));
        add(&mut set, "led", Some(" @brief Led\n * @arg pin Pin number\n * @arg on State\n"));
        add(&mut set, "reboot", Some(" @brief Reboots\n"));

        let formatted = HelpSynthesizer.format_commands(&set);
        let start = "led pin on".len() + COLUMN_GAP;

        assert_eq!(formatted.len(), 3);
        for (_, text) in &formatted {
            let first_line = text.split("\\n").next().unwrap();
            assert_eq!(&first_line[start - 1..start], " ");
            assert_ne!(&first_line[start..start + 1], " ");
        }
    }

    #[test]
    fn argument_lines_are_indented_under_first_line() {
        let mut set = CommandSet::new();
        add(&mut set, "led", Some(" @brief Toggle a led\n * @arg pin Pin number\n"));
        add(&mut set, "reset", Some(" @brief Resets device\n"));

        let formatted = HelpSynthesizer.format_commands(&set);

        assert_eq!(formatted[0].0, "led");
        assert_eq!(
            formatted[0].1,
            format!("led pin    Toggle a led\\n{}pin ... Pin number", " ".repeat(13))
        );
        assert_eq!(formatted[1].1, "reset      Resets device");
    }

    #[test]
    fn missing_doc_differs_from_missing_brief() {
        let mut set = CommandSet::new();
        add(&mut set, "bare", None);
        add(&mut set, "prose", Some(" Just some prose\n"));

        let formatted = HelpSynthesizer.format_commands(&set);

        assert_eq!(formatted[0].1, "bare     ");
        assert_eq!(formatted[1].1, "prose    No help available.");
    }

    #[test]
    fn render_escapes_quotes_and_backslashes() {
        let mut set = CommandSet::new();
        add(&mut set, "echo", Some(" @brief Prints \"text\" with \\ escapes\n"));

        let output = HelpSynthesizer.render(&set);

        assert_eq!(
            output,
            "const char *cmd_echo_help = \"echo    Prints \\\"text\\\" with \\\\ escapes\";\n"
        );
    }

    #[test]
    fn render_empty_set_emits_nothing() {
        assert!(HelpSynthesizer.render(&CommandSet::new()).is_empty());
        assert!(HelpSynthesizer.format_commands(&CommandSet::new()).is_empty());
    }
}
