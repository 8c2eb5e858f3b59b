//! Domain types for template discovery and output mapping.
//!
//! All path fields use `PathBuf`; never `String` for filesystem paths.
//! Values produced by resolution are immutable: accessors only, no setters.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::paths;

/// Suffix used when the caller does not pick one.
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".twig";

/// Parsed data document shared by every render of an invocation.
pub type DataValue = serde_yaml::Value;

// ---------------------------------------------------------------------------
// TemplateSuffix
// ---------------------------------------------------------------------------

/// File name ending that marks a file as a template. Matching is an exact,
/// case-sensitive suffix comparison on the file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateSuffix(String);

impl TemplateSuffix {
    /// Build a suffix, rejecting the empty string (it would match every file).
    pub fn new(suffix: impl Into<String>) -> Result<Self, ResolveError> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(ResolveError::EmptySuffix);
        }
        Ok(Self(suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when `name` ends with this suffix. Non UTF-8 names never match.
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| n.ends_with(&self.0))
    }

    /// `name` with the suffix removed, or `None` when it does not match.
    pub fn strip<'a>(&self, name: &'a OsStr) -> Option<&'a str> {
        name.to_str().and_then(|n| n.strip_suffix(self.0.as_str()))
    }
}

impl Default for TemplateSuffix {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE_SUFFIX.to_owned())
    }
}

impl fmt::Display for TemplateSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// TemplateSet
// ---------------------------------------------------------------------------

/// Result of resolving a template argument: the template root plus the
/// discovered templates in a stable, sorted order.
///
/// Every template lies at or below the root. The set is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    root: PathBuf,
    canonical_root: PathBuf,
    templates: Vec<PathBuf>,
    suffix: TemplateSuffix,
}

impl TemplateSet {
    pub(crate) fn new(
        root: PathBuf,
        canonical_root: PathBuf,
        templates: Vec<PathBuf>,
        suffix: TemplateSuffix,
    ) -> Self {
        debug_assert!(!templates.is_empty(), "a template set is never empty");
        Self {
            root,
            canonical_root,
            templates,
            suffix,
        }
    }

    /// Template root as derived from the caller's argument.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute, symlink-resolved form of [`root`](Self::root).
    pub fn canonical_root(&self) -> &Path {
        &self.canonical_root
    }

    pub fn templates(&self) -> &[PathBuf] {
        &self.templates
    }

    pub fn suffix(&self) -> &TemplateSuffix {
        &self.suffix
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Directory containing `template`, relative to the root.
    /// Empty when the template sits directly in the root.
    pub fn relative_dir(&self, template: &Path) -> Result<PathBuf, ResolveError> {
        paths::relative_parent(&self.canonical_root, template)
    }

    /// Lookup name of `template` for the engine: its root-relative path
    /// joined with `/`, e.g. `subdir/p.txt.twig`.
    pub fn key(&self, template: &Path) -> Result<String, ResolveError> {
        paths::template_key(&self.canonical_root, template)
    }
}

// ---------------------------------------------------------------------------
// OutputMode
// ---------------------------------------------------------------------------

/// Where rendered output goes. Exactly one mode is active per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write the single rendered template to this exact path.
    SingleFile(PathBuf),
    /// Mirror the template tree below this directory.
    Directory(PathBuf),
    /// Write beside each template, i.e. `Directory(template root)`.
    #[default]
    Mirror,
}

impl OutputMode {
    /// Build the mode from the two optional CLI values.
    ///
    /// Empty values count as absent. Supplying both is rejected before any
    /// filesystem access happens.
    pub fn from_options(
        output: Option<PathBuf>,
        directory: Option<PathBuf>,
    ) -> Result<Self, ResolveError> {
        let output = output.filter(|p| !p.as_os_str().is_empty());
        let directory = directory.filter(|p| !p.as_os_str().is_empty());
        match (output, directory) {
            (Some(_), Some(_)) => Err(ResolveError::ConflictingOutputOptions),
            (Some(file), None) => Ok(OutputMode::SingleFile(file)),
            (None, Some(dir)) => Ok(OutputMode::Directory(dir)),
            (None, None) => Ok(OutputMode::Mirror),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::SingleFile(path) => write!(f, "file {}", path.display()),
            OutputMode::Directory(path) => write!(f, "directory {}", path.display()),
            OutputMode::Mirror => f.write_str("mirror"),
        }
    }
}
