use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::cli::{Cli, ListFormat, Target};
use crate::error::GeneratorError;
use crate::scan::{DuplicatePolicy, SearchRoot};

/// Directories below the project root that are scanned when no `--root` is
/// given, in precedence order.
pub const DEFAULT_ROOTS: &[&str] = &["src", "lib", "include"];

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub project_dir: PathBuf,
    pub project_name: String,
    pub roots: Vec<SearchRoot>,
    pub output_dir: PathBuf,
    pub target: Target,
    pub extension: String,
    pub on_duplicate: DuplicatePolicy,
    pub copyright_holder: String,
    pub list: Option<ListFormat>,
    /// Year written into the generated table header.
    pub year: i32,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, GeneratorError> {
        let project_dir = Self::resolve_path(&cli.project_dir)?;

        if !project_dir.exists() {
            return Err(GeneratorError::Config(format!(
                "Project directory does not exist: {}",
                project_dir.display()
            )));
        }

        if !project_dir.is_dir() {
            return Err(GeneratorError::Config(format!(
                "Project directory is not a directory: {}",
                project_dir.display()
            )));
        }

        // Canonicalize so relative source paths and the output directory
        // exclusion compare against walked paths reliably.
        let project_dir = project_dir.canonicalize().map_err(|e| {
            GeneratorError::Config(format!(
                "Cannot canonicalize project directory {}: {}",
                project_dir.display(),
                e
            ))
        })?;

        let project_name = match cli.project_name {
            Some(name) => name,
            None => project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    GeneratorError::Config(format!(
                        "Cannot derive project name from {}, use --project-name",
                        project_dir.display()
                    ))
                })?,
        };

        let roots = Self::search_roots(&project_dir, &cli.roots, cli.pio_env.as_deref());

        let output_dir = match cli.output_dir {
            Some(path) => Self::resolve_path(&path)?,
            None => std::env::current_dir().map_err(|e| {
                GeneratorError::Config(format!("Cannot determine current directory: {}", e))
            })?,
        };
        // The directory may not exist yet; it is created on write.
        let output_dir = output_dir.canonicalize().unwrap_or(output_dir);

        let extension = cli.extension.trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(GeneratorError::Config(
                "Source file extension must not be empty".to_string(),
            ));
        }

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            project_dir,
            project_name,
            roots,
            output_dir,
            target: cli.target,
            extension,
            on_duplicate: cli.on_duplicate,
            copyright_holder: cli.copyright_holder,
            list: cli.list,
            year: chrono::Local::now().year(),
        })
    }

    /// Builds the ordered list of search roots.
    ///
    /// Explicit roots replace the defaults. Without them, `src`, `lib` and
    /// `include` are scanned, followed by `.pio/libdeps/<env>` when a
    /// PlatformIO environment is known.
    pub fn search_roots(
        project_dir: &Path,
        explicit: &[PathBuf],
        pio_env: Option<&str>,
    ) -> Vec<SearchRoot> {
        if !explicit.is_empty() {
            return explicit
                .iter()
                .map(|root| SearchRoot::new(project_dir.join(root)))
                .collect();
        }

        let mut roots: Vec<SearchRoot> = DEFAULT_ROOTS
            .iter()
            .map(|dir| SearchRoot::new(project_dir.join(dir)))
            .collect();

        if let Some(env) = pio_env {
            roots.push(SearchRoot::new(
                project_dir.join(".pio").join("libdeps").join(env),
            ));
        }

        roots
    }

    /// Resolves a path to an absolute path.
    /// - Absolute paths are returned as-is
    /// - Relative paths are resolved relative to current directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf, GeneratorError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                GeneratorError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}
