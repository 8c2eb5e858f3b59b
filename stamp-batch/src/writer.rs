//! Output writer.
//!
//! ## `write_output` protocol
//!
//! 1. Render content (already done by caller).
//! 2. Create missing parent directories.
//! 3. Write to `<path>.stamp.tmp`.
//! 4. Rename to final path, replacing whatever was there.
//!
//! Two destinations are written in place instead:
//!
//! - a symlink, so the link survives and its target receives the content;
//! - a file whose directory refuses the temp file (read-only directory,
//!   writable file).
//!
//! There is no existence check and no backup: the last writer wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stamp_core::ensure_parent_dir;

use crate::error::{io_err, BatchError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written { template: PathBuf, path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { template: PathBuf, path: PathBuf },
}

impl WriteResult {
    /// Destination of the write.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::WouldWrite { path, .. } => path,
        }
    }

    /// Template the content was rendered from.
    pub fn template(&self) -> &Path {
        match self {
            WriteResult::Written { template, .. } | WriteResult::WouldWrite { template, .. } => {
                template
            }
        }
    }
}

// ---------------------------------------------------------------------------
// write_output
// ---------------------------------------------------------------------------

/// Write rendered `content` for `template` to `path`, overwriting it.
pub(crate) fn write_output(
    template: &Path,
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, BatchError> {
    let tmp = PathBuf::from(format!("{}.stamp.tmp", path.display()));
    write_output_with_tmp(template, path, content, dry_run, &tmp)
}

fn write_output_with_tmp(
    template: &Path,
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, BatchError> {
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            template: template.to_path_buf(),
            path: path.to_path_buf(),
        });
    }

    ensure_parent_dir(path)?;
    if is_symlink(path) {
        tracing::debug!(path = %path.display(), "destination is a symlink, writing through it");
        write_in_place(path, content)?;
    } else {
        write_via_tmp(path, content, tmp)?;
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        template: template.to_path_buf(),
        path: path.to_path_buf(),
    })
}

fn write_via_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), BatchError> {
    if tmp.parent() != path.parent() {
        ensure_parent_dir(tmp)?;
    }
    match std::fs::write(tmp, content) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            tracing::debug!(path = %path.display(), "temp file refused, writing in place");
            return write_in_place(path, content);
        }
        Err(e) => return Err(io_err(tmp, e)),
    }

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

fn write_in_place(path: &Path, content: &str) -> Result<(), BatchError> {
    std::fs::write(path, content).map_err(|e| io_err(path, e))
}

fn is_symlink(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
