//! Error types for documentation middleware setup

use std::io;
use std::path::PathBuf;

/// Failures surfaced while configuring the middleware or loading a specification
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// Specification file could not be read from disk
    #[error("failed to read specification '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Requested file is not part of the embedded bundle
    #[error("specification '{path}' not found in embedded bundle")]
    EmbeddedNotFound { path: String },

    /// Index template could not be rendered
    #[error("failed to render index template: {0}")]
    Template(String),
}

impl DocsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
