//! Path relativization against the template root.
//!
//! Both sides are canonicalized before comparison, so `..` segments, symlinked
//! roots and platform separators do not affect the result.

use std::path::{Component, Path, PathBuf};

use crate::error::{io_err, ResolveError};

/// Parent directory of `path`, with `.` standing in for a bare file name.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

pub(crate) fn canonicalize(path: &Path) -> Result<PathBuf, ResolveError> {
    path.canonicalize().map_err(|e| io_err(path, e))
}

/// Directory of `template` relative to `canonical_root`.
///
/// Only the template's parent is canonicalized: a symlinked template file
/// keeps its in-tree location.
pub(crate) fn relative_parent(
    canonical_root: &Path,
    template: &Path,
) -> Result<PathBuf, ResolveError> {
    let parent = canonicalize(parent_dir(template))?;
    parent
        .strip_prefix(canonical_root)
        .map(Path::to_path_buf)
        .map_err(|_| ResolveError::TemplateOutsideRoot {
            template: template.to_path_buf(),
            root: canonical_root.to_path_buf(),
        })
}

/// Root-relative, `/`-joined name of `template`.
pub(crate) fn template_key(canonical_root: &Path, template: &Path) -> Result<String, ResolveError> {
    let file_name = template
        .file_name()
        .ok_or_else(|| ResolveError::TemplateOutsideRoot {
            template: template.to_path_buf(),
            root: canonical_root.to_path_buf(),
        })?;
    let relative = relative_parent(canonical_root, template)?.join(file_name);
    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parent_of_bare_name_is_dot() {
        assert_eq!(parent_dir(Path::new("a.twig")), Path::new("."));
        assert_eq!(parent_dir(Path::new("dir/a.twig")), Path::new("dir"));
    }

    #[test]
    fn template_in_root_has_empty_relative_dir() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let template = tmp.path().join("a.twig");
        fs::write(&template, "x").unwrap();

        let rel = relative_parent(&root, &template).unwrap();
        assert_eq!(rel, PathBuf::new());
        assert_eq!(template_key(&root, &template).unwrap(), "a.twig");
    }

    #[test]
    fn nested_template_key_uses_forward_slashes() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let dir = tmp.path().join("sub").join("deeper");
        fs::create_dir_all(&dir).unwrap();
        let template = dir.join("p.txt.twig");
        fs::write(&template, "x").unwrap();

        assert_eq!(
            relative_parent(&root, &template).unwrap(),
            Path::new("sub").join("deeper")
        );
        assert_eq!(template_key(&root, &template).unwrap(), "sub/deeper/p.txt.twig");
    }

    #[test]
    fn dotdot_segments_are_normalized() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        fs::create_dir_all(tmp.path().join("other")).unwrap();
        let template = tmp.path().join("other").join("..").join("sub").join("p.twig");
        fs::write(tmp.path().join("sub").join("p.twig"), "x").unwrap();

        assert_eq!(template_key(&root, &template).unwrap(), "sub/p.twig");
    }

    #[test]
    fn template_outside_root_is_rejected() {
        let root_dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let root = root_dir.path().canonicalize().unwrap();
        let template = elsewhere.path().join("x.twig");
        fs::write(&template, "x").unwrap();

        let err = relative_parent(&root, &template).unwrap_err();
        assert!(matches!(err, ResolveError::TemplateOutsideRoot { .. }), "got: {err}");
    }
}
