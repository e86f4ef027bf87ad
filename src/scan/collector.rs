use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::ScanError;
use super::extractor::{DeclarationExtractor, ExtractionMode};
use super::model::CommandRecord;
use super::scanner::{SearchRoot, SourceScanner};

/// What to do when a command name is declared more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DuplicatePolicy {
    /// Keep the first declaration, drop later ones silently
    #[default]
    Ignore,
    /// Keep the first declaration and warn about later ones
    Warn,
    /// Abort generation
    Error,
}

/// Commands keyed by name, in first-discovery order.
///
/// A name, once inserted, is never replaced.
#[derive(Debug, Default, Clone)]
pub struct CommandSet {
    records: Vec<CommandRecord>,
    index: HashMap<String, usize>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` unless its name is already present.
    ///
    /// Returns the record that was kept when the name already existed.
    pub fn insert_if_absent(&mut self, record: CommandRecord) -> Option<&CommandRecord> {
        if let Some(&existing) = self.index.get(&record.name) {
            return Some(&self.records[existing]);
        }

        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        None
    }

    pub fn get(&self, name: &str) -> Option<&CommandRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandRecord> {
        self.records.iter()
    }

    /// Records sorted by name. Equal names cannot occur, so the order is
    /// fully determined by the names.
    pub fn sorted_by_name(&self) -> Vec<&CommandRecord> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a CommandRecord;
    type IntoIter = std::slice::Iter<'a, CommandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Runs scanner and extractor over all search roots and merges the results
/// into a [`CommandSet`].
#[derive(Debug, Clone)]
pub struct CommandCollector {
    project_dir: PathBuf,
    scanner: SourceScanner,
    extractor: DeclarationExtractor,
    policy: DuplicatePolicy,
}

impl CommandCollector {
    pub fn new(
        project_dir: impl Into<PathBuf>,
        scanner: SourceScanner,
        mode: ExtractionMode,
    ) -> Self {
        Self {
            project_dir: project_dir.into(),
            scanner,
            extractor: DeclarationExtractor::new(mode),
            policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scans `roots` in order. Earlier roots take precedence over later ones
    /// for equally named commands.
    pub fn collect(&self, roots: &[SearchRoot]) -> Result<CommandSet, ScanError> {
        let mut commands = CommandSet::new();
        let mut files_scanned = 0usize;

        for root in roots {
            debug!("Scanning {}", root.path.display());

            for file in self.scanner.scan(root) {
                let content = match fs::read_to_string(&file) {
                    // Line endings are normalized so CRLF files parse like LF ones
                    Ok(content) => content.replace("\r\n", "\n"),
                    Err(err) => {
                        warn!("Skipping unreadable file {}: {}", file.display(), err);
                        continue;
                    }
                };
                files_scanned += 1;

                let relative = self.relative_path(&file);
                for record in self.extractor.extract(&content, &relative) {
                    self.insert(&mut commands, record)?;
                }
            }
        }

        info!(
            "Scanned {} files, found {} commands",
            files_scanned,
            commands.len()
        );
        Ok(commands)
    }

    fn insert(&self, commands: &mut CommandSet, record: CommandRecord) -> Result<(), ScanError> {
        let duplicate_location = record.location();
        let Some(kept) = commands.insert_if_absent(record) else {
            return Ok(());
        };

        match self.policy {
            DuplicatePolicy::Ignore => {
                debug!(
                    "Dropping duplicate command '{}' at {}",
                    kept.name, duplicate_location
                );
                Ok(())
            }
            DuplicatePolicy::Warn => {
                warn!(
                    "Command '{}' at {} is already declared at {}, ignoring it",
                    kept.name,
                    duplicate_location,
                    kept.location()
                );
                Ok(())
            }
            DuplicatePolicy::Error => Err(ScanError::DuplicateCommand {
                name: kept.name.clone(),
                first: kept.location(),
                duplicate: duplicate_location,
            }),
        }
    }

    fn relative_path(&self, file: &Path) -> PathBuf {
        file.strip_prefix(&self.project_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| file.to_path_buf())
    }
}
