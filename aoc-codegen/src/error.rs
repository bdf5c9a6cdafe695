//! Error types for scanning and code generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning the solution tree or writing generated files
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A directory of the solution tree could not be listed
    #[error("Failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template failed to render
    #[error("Failed to render template: {0}")]
    Render(#[from] askama::Error),

    /// A generated or downloaded file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Write { path, source }
    }
}
