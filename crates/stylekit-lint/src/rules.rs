//! Lint rule trait and the built-in rules.

use std::path::PathBuf;

use crate::report::LintIssue;
use crate::source::SourceFile;

pub mod aria;
pub mod factory;
pub mod naming;
pub mod testid;

pub use aria::RequireAriaAttributes;
pub use factory::EnforceComponentFactory;
pub use naming::EnforceComponentNaming;
pub use testid::RequireDataTestId;

/// A stateless check over one parsed source file.
pub trait LintRule: Send + Sync {
    /// Unique kebab-case identifier (e.g. "require-data-testid").
    fn id(&self) -> &'static str;

    /// One-line summary shown by `stylekit rules`.
    fn description(&self) -> &'static str;

    /// Issues are created at the default severity; the registry applies the
    /// configured one.
    fn check(&self, file: &SourceFile) -> Vec<LintIssue>;
}

/// A file or directory a run could not read.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
