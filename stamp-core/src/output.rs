//! Output path mapping.
//!
//! | Mode                | Output for `<root>/sub/p.txt.twig` |
//! |---------------------|------------------------------------|
//! | `SingleFile(f)`     | `f`                                |
//! | `Directory(d)`      | `d/sub/p.txt`                      |
//! | `Mirror`            | `<root>/sub/p.txt`                 |

use std::path::{Path, PathBuf};

use crate::error::{io_err, ResolveError};
use crate::types::{OutputMode, TemplateSet};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    File(PathBuf),
    Directory(PathBuf),
}

/// Maps discovered templates of one [`TemplateSet`] to output locations.
#[derive(Debug, Clone)]
pub struct OutputMapper<'a> {
    set: &'a TemplateSet,
    target: Target,
}

impl<'a> OutputMapper<'a> {
    /// Bind `mode` to `set`, resolving `Mirror` to the template root.
    ///
    /// `SingleFile` is rejected when the set holds more than one template,
    /// since every render would otherwise overwrite the same file.
    pub fn new(set: &'a TemplateSet, mode: &OutputMode) -> Result<Self, ResolveError> {
        let target = match mode {
            OutputMode::SingleFile(file) => {
                if set.len() > 1 {
                    return Err(ResolveError::OutputFileWithMultipleTemplates { count: set.len() });
                }
                Target::File(file.clone())
            }
            OutputMode::Directory(dir) => Target::Directory(dir.clone()),
            OutputMode::Mirror => Target::Directory(set.root().to_path_buf()),
        };

        let (Target::File(p) | Target::Directory(p)) = &target;
        if p.as_os_str().is_empty() {
            return Err(ResolveError::MissingOutputConfiguration);
        }
        Ok(Self { set, target })
    }

    /// Output location for `template`. Pure: touches nothing but the
    /// `canonicalize` calls needed for relativization.
    pub fn output_path(&self, template: &Path) -> Result<PathBuf, ResolveError> {
        match &self.target {
            Target::File(file) => Ok(file.clone()),
            Target::Directory(dir) => {
                let relative = self.set.relative_dir(template)?;
                let name = self.stripped_name(template)?;
                Ok(dir.join(relative).join(name))
            }
        }
    }

    fn stripped_name(&self, template: &Path) -> Result<String, ResolveError> {
        let suffix = self.set.suffix();
        let file_name = template.file_name().unwrap_or_default();
        match suffix.strip(file_name) {
            Some("") => Err(ResolveError::EmptyOutputName {
                path: template.to_path_buf(),
                suffix: suffix.to_string(),
            }),
            Some(stem) => Ok(stem.to_owned()),
            None => Err(ResolveError::WrongExtension {
                path: template.to_path_buf(),
                suffix: suffix.to_string(),
            }),
        }
    }
}

/// Create every missing directory above `output`. Existing ones are fine.
pub fn ensure_parent_dir(output: &Path) -> Result<(), ResolveError> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))
        }
        _ => Ok(()),
    }
}
