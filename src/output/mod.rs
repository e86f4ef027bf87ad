//! Generated artifacts and command listings.
//!
//! Each artifact is produced by a [`Synthesizer`], a pure function from the
//! collected [`CommandSet`] to file content. [`ArtifactWriter`] puts the
//! rendered text on disk, overwriting whatever was there.

pub mod formatter;
pub mod help;
pub mod json;
pub mod plain;
pub mod table;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{ListFormat, Target};
use crate::scan::{CommandSet, ExtractionMode};
use formatter::create_formatter;
use help::HelpSynthesizer;
use table::TableSynthesizer;

/// Errors that can occur while writing generated files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Cannot create output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Renders a command set into the content of one generated file.
pub trait Synthesizer {
    /// Name of the generated file inside the output directory.
    fn file_name(&self) -> &'static str;

    /// How declarations must be extracted for this artifact.
    fn extraction_mode(&self) -> ExtractionMode;

    /// Renders the complete file content.
    fn render(&self, commands: &CommandSet) -> String;
}

/// Creates the synthesizers needed for `target`, table first.
pub fn create_synthesizers(target: Target, table: TableSynthesizer) -> Vec<Box<dyn Synthesizer>> {
    match target {
        Target::Table => vec![Box::new(table)],
        Target::Help => vec![Box::new(HelpSynthesizer)],
        Target::All => vec![Box::new(table), Box::new(HelpSynthesizer)],
    }
}

/// Writes generated files into a directory.
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Renders `commands` with `synthesizer` and writes the result.
    ///
    /// Returns the path of the written file.
    pub fn write(
        &self,
        synthesizer: &dyn Synthesizer,
        commands: &CommandSet,
    ) -> Result<PathBuf, OutputError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| OutputError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(synthesizer.file_name());
        let content = synthesizer.render(commands);
        fs::write(&path, content).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("Written: {}", path.display());
        Ok(path)
    }
}

/// Prints the command set to stdout instead of writing files.
pub fn print_listing(format: ListFormat, commands: &CommandSet) -> Result<(), OutputError> {
    let formatter = create_formatter(format);
    let formatted = formatter.format(commands);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if !formatted.is_empty() {
        writeln!(handle, "{}", formatted)?;
    }

    Ok(())
}
