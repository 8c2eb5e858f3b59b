//! Error types for stamp-renderer.

use std::path::PathBuf;

use thiserror::Error;

use stamp_core::ResolveError;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, include lookup, render).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Data could not be converted into a rendering context.
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The data document is a scalar or sequence instead of a mapping.
    #[error("data must be a mapping at the top level, found {kind}")]
    DataNotMapping { kind: &'static str },

    /// Template key computation failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// A discovered template could not be read.
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`RenderError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
