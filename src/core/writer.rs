//! Atomic, permission-hardened persistence of an injected template.
//!
//! All visible mutation is deferred to a single rename: the content is
//! written to a fresh temporary file in the target's own directory (same
//! filesystem, so the rename is atomic), locked to owner-only access, and
//! only then moved over the target. A crash at any earlier point leaves the
//! target untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, WriteError};

/// Write `content` to `target`, refusing if `target` resolves to the same
/// file as `source` (the template being injected).
///
/// The guard exists because `stencil inject t.py ... t.py` — or its shell
/// redirection equivalent — would otherwise truncate the source template
/// before it could be read back.
///
/// # Errors
///
/// `WriteError::SelfOverwrite` when the guard trips; other `WriteError`
/// variants for temp-file, permission, or rename failures. No partial file
/// is ever observable at `target`.
pub fn write_atomic(target: &Path, source: &Path, content: &str) -> Result<()> {
    if resolve(target) == resolve(source) {
        return Err(WriteError::SelfOverwrite {
            path: target.to_path_buf(),
        }
        .into());
    }

    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|source| WriteError::TempFile {
        dir: dir.clone(),
        source,
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|source| WriteError::TempFile {
        dir: dir.clone(),
        source,
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|source| WriteError::Write { source })?;

    set_mode(tmp.path(), 0o600)?;

    // A read-only target from a previous run would make the replace fail on
    // some platforms; lift the edit barrier before renaming over it.
    if let Ok(meta) = fs::metadata(target) {
        if meta.permissions().readonly() {
            let mut perms = meta.permissions();
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            fs::set_permissions(target, perms).map_err(|source| WriteError::Permissions {
                path: target.to_path_buf(),
                source,
            })?;
        }
    }

    tmp.persist(target).map_err(|e| WriteError::Replace {
        path: target.to_path_buf(),
        source: e.error,
    })?;

    // Edit barrier: the injected file is generated output, not a source of
    // truth. Owner read-only, no security claim.
    set_mode(target, 0o400)?;

    debug!(path = %target.display(), bytes = content.len(), "wrote injected template");
    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|source| {
        WriteError::Permissions {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

#[cfg(not(unix))]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    let meta = fs::metadata(path).map_err(|source| WriteError::Permissions {
        path: path.to_path_buf(),
        source,
    })?;
    let mut perms = meta.permissions();
    perms.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, perms).map_err(|source| {
        WriteError::Permissions {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Resolve a path for the self-overwrite comparison: follow symlinks and
/// normalize relative components. A target that does not exist yet resolves
/// through its parent directory.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let file = match path.file_name() {
        Some(f) => f,
        None => return path.to_path_buf(),
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match parent.canonicalize() {
        Ok(p) => p.join(file),
        Err(_) => path.to_path_buf(),
    }
}
