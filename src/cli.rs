use std::path::PathBuf;

use clap::Parser;

use crate::scan::DuplicatePolicy;

/// libcli command table generator
///
/// Scans the project for CLI_COMMAND declarations and generates the command
/// dispatch table (cmdTable.cpp) and the help text constants (help.cpp).
///
/// Run it from the build before compiling; generated files are overwritten
/// on every run.
#[derive(Parser, Debug)]
#[command(name = "cmdgen")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Root directory of the project
    #[arg(short = 'p', long = "project-dir", env = "PROJECT_DIR")]
    pub project_dir: PathBuf,

    /// Project name used in the generated header [default: project directory name]
    #[arg(long = "project-name")]
    pub project_name: Option<String>,

    /// PlatformIO environment; adds .pio/libdeps/<env> to the search roots
    #[arg(short = 'e', long = "pio-env", env = "PIOENV")]
    pub pio_env: Option<String>,

    /// Directory to scan, relative to the project directory. Repeat to scan
    /// several; earlier roots win on duplicate commands [default: src, lib,
    /// include and the libdeps directory]
    #[arg(short = 'r', long = "root")]
    pub roots: Vec<PathBuf>,

    /// Output directory for generated files [default: current directory]
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Which files to generate
    #[arg(short = 't', long = "target", default_value = "all")]
    pub target: Target,

    /// Extension of source files that are scanned
    #[arg(short = 'x', long = "extension", default_value = "cpp")]
    pub extension: String,

    /// What to do when a command name is declared more than once
    #[arg(long = "on-duplicate", default_value = "ignore")]
    pub on_duplicate: DuplicatePolicy,

    /// Copyright holder named in the generated table header
    #[arg(long = "copyright-holder", default_value = "libcli contributors")]
    pub copyright_holder: String,

    /// Print the discovered commands instead of writing files
    #[arg(short = 'l', long = "list")]
    pub list: Option<ListFormat>,
}

/// Generated artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    /// cmdTable.cpp only
    Table,
    /// help.cpp only
    Help,
    /// Both files
    #[default]
    All,
}

/// Output format of `--list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Plain,
    Json,
}
