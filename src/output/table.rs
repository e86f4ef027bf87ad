//! Dispatch table generation (`cmdTable.cpp`).

use crate::scan::{CommandSet, ExtractionMode};

use super::Synthesizer;

/// Output file name of the dispatch table.
pub const TABLE_FILE_NAME: &str = "cmdTable.cpp";

/// Forward declarations are padded to this width before the location
/// comment.
const DECLARATION_WIDTH: usize = 32;

/// Renders the command table in discovery order.
#[derive(Debug, Clone)]
pub struct TableSynthesizer {
    pub project_name: String,
    pub copyright_holder: String,
    pub year: i32,
}

impl TableSynthesizer {
    fn header(&self) -> String {
        format!(
            r#"/*
 * libcli, a simple and generic command line interface with small footprint for
 * bare metal embedded projects.
 *
 * This is a generated file for project {project}.
 *
 * Copyright (C) {year} {holder}
 *
 * SPDX-License-Identifier: GPL-3.0-or-later
 */

/******************************************************************************
 *********** WARNING: AUTO GENERATED FILE, DO NOT EDIT IT MANUALLY! ***********
 *****************************************************************************/

#include "cli/cli.hpp"
#include <generic/generic.hpp>

/**
 * Declaration of functions found in cpp files within the project.
 */
"#,
            project = self.project_name,
            year = self.year,
            holder = self.copyright_holder,
        )
    }
}

impl Synthesizer for TableSynthesizer {
    fn file_name(&self) -> &'static str {
        TABLE_FILE_NAME
    }

    fn extraction_mode(&self) -> ExtractionMode {
        ExtractionMode::Line
    }

    fn render(&self, commands: &CommandSet) -> String {
        let mut out = self.header();

        if commands.is_empty() {
            out.push_str("#warning No cli commands found, see libcli README\n");
        } else {
            for command in commands {
                let declaration = format!("CLI_COMMAND({}); ", command.declaration);
                out.push_str(&format!(
                    "{:<width$}/* Found in {} at line {} */\n",
                    declaration,
                    command.source_file.to_string_lossy().replace('\\', "/"),
                    command.line,
                    width = DECLARATION_WIDTH,
                ));
            }
        }

        out.push_str(
            r#"
/**
 * The generated command table
 */
cliCmd_t cmdTable_generated[] =
{
"#,
        );

        let entries: Vec<String> = commands
            .iter()
            .map(|c| format!("    CLI_CMD_DEF({})", c.declaration))
            .collect();
        if entries.is_empty() {
            out.push_str("    {0, 0}");
        } else {
            out.push_str(&entries.join(",\n"));
        }

        out.push_str(&format!(
            r#"
}};

void Cli::begin(Stream *pIoStr)
{{
    pCmdTab = cmdTable_generated;
    CmdTabSiz = {count};
    setStream(pIoStr);
}}
"#,
            count = entries.len(),
        ));

        out
    }
}
