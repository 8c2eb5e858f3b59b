//! Template discovery.
//!
//! [`resolve`] turns the template argument into a [`TemplateSet`]:
//!
//! | Argument  | Templates                              | Root              |
//! |-----------|----------------------------------------|-------------------|
//! | directory | every file below it ending with suffix | the directory     |
//! | file      | the file itself (suffix required)      | its parent        |
//!
//! Discovery only reads the filesystem. Directory results are sorted by full
//! path so repeated runs on an unchanged tree yield the same order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{io_err, ResolveError};
use crate::paths::{canonicalize, parent_dir};
use crate::types::{TemplateSet, TemplateSuffix};

/// Discover the templates named by `path`.
pub fn resolve(path: &Path, suffix: &TemplateSuffix) -> Result<TemplateSet, ResolveError> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "template argument stat failed");
            return Err(ResolveError::NotFound {
                path: path.to_path_buf(),
            });
        }
    };

    if meta.is_dir() {
        resolve_directory(path, suffix)
    } else if meta.is_file() {
        resolve_file(path, suffix)
    } else {
        Err(ResolveError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

fn resolve_directory(dir: &Path, suffix: &TemplateSuffix) -> Result<TemplateSet, ResolveError> {
    let mut templates = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(|e| {
            let at = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            io_err(at, e.into())
        })?;
        // `Path::is_file` follows symlinks, so linked templates are picked up
        // while dangling links are skipped.
        if entry.path().is_file() && suffix.matches(entry.file_name()) {
            templates.push(entry.into_path());
        }
    }

    if templates.is_empty() {
        return Err(ResolveError::EmptyTemplateSet {
            path: dir.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }
    templates.sort();

    tracing::debug!(
        root = %dir.display(),
        count = templates.len(),
        "discovered templates in directory"
    );
    let canonical_root = canonicalize(dir)?;
    Ok(TemplateSet::new(
        dir.to_path_buf(),
        canonical_root,
        templates,
        suffix.clone(),
    ))
}

fn resolve_file(file: &Path, suffix: &TemplateSuffix) -> Result<TemplateSet, ResolveError> {
    let has_suffix = file.file_name().is_some_and(|name| suffix.matches(name));
    if !has_suffix {
        return Err(ResolveError::WrongExtension {
            path: file.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }

    let root: PathBuf = parent_dir(file).to_path_buf();
    let canonical_root = canonicalize(&root)?;
    tracing::debug!(template = %file.display(), root = %root.display(), "single template file");
    Ok(TemplateSet::new(
        root,
        canonical_root,
        vec![file.to_path_buf()],
        suffix.clone(),
    ))
}
