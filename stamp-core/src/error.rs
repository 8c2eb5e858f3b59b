//! Error types for stamp-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while discovering templates and mapping output paths.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The template argument is neither an existing file nor a directory.
    #[error("template file or directory not found: {path}")]
    NotFound { path: PathBuf },

    /// A template directory contained no file ending with the suffix.
    #[error("no template found in directory: {path} (expected files ending with '{suffix}')")]
    EmptyTemplateSet { path: PathBuf, suffix: String },

    /// A single template file does not end with the suffix.
    #[error("template file must have '{suffix}' extension: {path}")]
    WrongExtension { path: PathBuf, suffix: String },

    /// `--output` and `--directory` were both supplied.
    #[error("only one of --output or --directory can be used")]
    ConflictingOutputOptions,

    /// `--output` names one file but several templates were discovered.
    #[error("--output requires a single template file, but {count} templates were found")]
    OutputFileWithMultipleTemplates { count: usize },

    /// No usable output target was resolved for a mapping that needed one.
    #[error("missing output configuration (either an output file or an output directory must be set)")]
    MissingOutputConfiguration,

    /// A discovered template does not lie under the template root.
    #[error("template {template} is not located under template root {root}")]
    TemplateOutsideRoot { template: PathBuf, root: PathBuf },

    /// Stripping the suffix left nothing to name the output file with.
    #[error("template {path} has no file name left after stripping '{suffix}'")]
    EmptyOutputName { path: PathBuf, suffix: String },

    /// The template suffix itself is unusable.
    #[error("template suffix must not be empty")]
    EmptySuffix,

    /// Filesystem failure, annotated with the offending path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading the YAML data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data argument does not name an existing file.
    #[error("data file not found: {path}")]
    DataFileNotFound { path: PathBuf },

    /// The data file exists but could not be read.
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid YAML. Carries serde_yaml's line context.
    #[error("failed to parse data file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience constructor for [`ResolveError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ResolveError {
    ResolveError::Io {
        path: path.into(),
        source,
    }
}
