//! Target file validation, reading and replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::error::RewriteError;

/// How the target file's content is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Write a sibling temporary file, then rename it over the target
    #[default]
    Atomic,
    /// Truncate and write the target directly
    InPlace,
}

impl WriteMode {
    /// Mode name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Atomic => "atomic",
            Self::InPlace => "in-place",
        }
    }
}

/// Ensures `path` names an existing regular file.
///
/// Symlinks are followed. Nothing is opened or created.
pub fn validate(path: &Path) -> Result<(), RewriteError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(RewriteError::NotFoundOrNotRegularFile {
            path: path.to_path_buf(),
        }),
    }
}

/// Reads the whole target as UTF-8.
pub fn read(path: &Path) -> Result<String, RewriteError> {
    fs::read_to_string(path).map_err(|source| RewriteError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the target's content with `content`.
pub fn write(path: &Path, content: &str, mode: WriteMode) -> Result<(), RewriteError> {
    let result = match mode {
        WriteMode::Atomic => write_atomic(path, content),
        WriteMode::InPlace => fs::write(path, content),
    };
    result.map_err(|source| RewriteError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Stages `content` next to the file `path` resolves to and renames it into
/// place.
///
/// Symlinks are resolved first so the linked file is replaced, not the link.
/// Permissions are copied onto the staged file; on unix the owner and group
/// are carried over when the process is allowed to set them. The temporary
/// file is removed on any failure before the rename, so the original stays
/// intact.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let resolved = fs::canonicalize(path)?;
    let dir = resolved.parent().unwrap_or_else(|| Path::new("."));

    let metadata = fs::metadata(&resolved)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    debug!(
        file = %resolved.display(),
        staged = %staged.path().display(),
        "staging rewritten content"
    );
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    fs::set_permissions(staged.path(), metadata.permissions())?;
    copy_ownership(staged.as_file(), &metadata);

    staged.persist(&resolved).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn copy_ownership(staged: &fs::File, original: &fs::Metadata) {
    use std::os::unix::fs::{fchown, MetadataExt};

    if let Err(e) = fchown(staged, Some(original.uid()), Some(original.gid())) {
        debug!(error = %e, "could not carry over owner and group");
    }
}

#[cfg(not(unix))]
fn copy_ownership(_staged: &fs::File, _original: &fs::Metadata) {}
