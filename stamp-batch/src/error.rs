//! Error types for stamp-batch.

use std::path::PathBuf;

use thiserror::Error;

use stamp_core::{DataError, ResolveError};
use stamp_renderer::RenderError;

/// All errors that can abort a render run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Discovery or output-mapping failure.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The data file is missing or malformed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// An error from the rendering engine.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// An I/O error while writing output, with annotated path for context.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BatchError {
    BatchError::Io {
        path: path.into(),
        source,
    }
}
