use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Result of sanitizing an archive entry path.
#[derive(Clone, Debug)]
pub struct SanitizedPath {
    pub original: PathBuf,
    pub resolved: PathBuf,
}

/// Sanitize an entry path for extraction under `base`.
///
/// Combines lexical normalization with a containment check (zip-slip
/// protection). This is checked for every entry independently of
/// whatever the archive library already guarantees.
pub fn sanitize_path<P: AsRef<Path>, B: AsRef<Path>>(
    entry_path: P,
    base: B,
) -> Result<SanitizedPath> {
    let entry_path = entry_path.as_ref();
    let base = normalize_path(base.as_ref())?;

    // A `..` that climbs out of the entry's own tree is an escape
    // attempt, not something to silently neutralize.
    let normalized = normalize_path(entry_path).map_err(|_| Error::ZipSlip {
        entry: entry_path.to_path_buf(),
        resolved: entry_path.to_path_buf(),
    })?;

    // Reject absolute entry paths outright
    if normalized.is_absolute() {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved: normalized,
        });
    }

    let resolved = normalize_path(&base.join(normalized))?;

    // Result must stay a descendant of the destination
    if !resolved.starts_with(&base) {
        return Err(Error::ZipSlip {
            entry: entry_path.to_path_buf(),
            resolved,
        });
    }

    Ok(SanitizedPath {
        original: entry_path.to_path_buf(),
        resolved,
    })
}

/// Normalize path separators and resolve relative components.
///
/// `..` pops the previous component and fails when there is nothing
/// left to pop.
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::InvalidPath);
                }
            }
            Component::Normal(part) => result.push(part),
            Component::RootDir => result.push("/"),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::CurDir => {} // ignore current dir
        }
    }

    Ok(result)
}
