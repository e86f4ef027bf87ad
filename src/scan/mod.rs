//! Discovery of `CLI_COMMAND` declarations in a project source tree.
//!
//! The pipeline is shared by both generated artifacts:
//!
//! 1. [`SourceScanner`] walks the search roots and yields source files.
//! 2. [`DeclarationExtractor`] finds declarations (and their doc blocks).
//! 3. [`DocComment`] parses `@brief` / `@arg` tags.
//! 4. [`CommandCollector`] merges everything into a [`CommandSet`], keeping
//!    the first declaration of each name.

pub mod collector;
pub mod doc_comment;
pub mod extractor;
pub mod model;
pub mod scanner;

pub use collector::{CommandCollector, CommandSet, DuplicatePolicy};
pub use doc_comment::{ArgumentDoc, DocComment, NO_HELP_AVAILABLE};
pub use extractor::{DeclarationExtractor, ExtractionMode};
pub use model::CommandRecord;
pub use scanner::{SearchRoot, SourceScanner};

use thiserror::Error;

/// Errors raised while collecting commands.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Command '{name}' declared at {duplicate} is already declared at {first}")]
    DuplicateCommand {
        name: String,
        first: String,
        duplicate: String,
    },
}
