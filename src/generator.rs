//! Ties scanning and rendering together for one generator run.

use std::path::PathBuf;

use log::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::output::table::TableSynthesizer;
use crate::output::{ArtifactWriter, Synthesizer, create_synthesizers};
use crate::scan::{CommandCollector, CommandSet, ExtractionMode, SourceScanner};

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub commands: usize,
}

pub struct Generator<'a> {
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Collects commands for the given extraction mode across all configured
    /// search roots.
    pub fn collect(&self, mode: ExtractionMode) -> Result<CommandSet> {
        let scanner =
            SourceScanner::new(&self.config.extension).skip_dir(&self.config.output_dir);

        let commands = CommandCollector::new(&self.config.project_dir, scanner, mode)
            .with_policy(self.config.on_duplicate)
            .collect(&self.config.roots)?;

        Ok(commands)
    }

    /// Generates all files selected by the configured target.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>> {
        let writer = ArtifactWriter::new(&self.config.output_dir);
        let table = TableSynthesizer {
            project_name: self.config.project_name.clone(),
            copyright_holder: self.config.copyright_holder.clone(),
            year: self.config.year,
        };

        let mut generated = Vec::new();
        for synthesizer in create_synthesizers(self.config.target, table) {
            generated.push(self.generate_one(&writer, synthesizer.as_ref())?);
        }

        Ok(generated)
    }

    fn generate_one(
        &self,
        writer: &ArtifactWriter,
        synthesizer: &dyn Synthesizer,
    ) -> Result<GeneratedFile> {
        info!("Generating {} ...", synthesizer.file_name());
        let commands = self.collect(synthesizer.extraction_mode())?;

        if commands.is_empty() {
            info!("No cli commands found for {}", synthesizer.file_name());
        }
        for command in &commands {
            debug!("  {} ({})", command.name, command.location());
        }

        let path = writer.write(synthesizer, &commands)?;
        Ok(GeneratedFile {
            path,
            commands: commands.len(),
        })
    }
}
