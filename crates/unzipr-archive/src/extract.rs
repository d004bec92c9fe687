use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use crate::error::{Error, Result};
use crate::report::{ArchiveReport, ExtractedEntry};
use crate::sanitize::sanitize_path;

/// Extracts every entry of a ZIP archive into a destination directory.
///
/// The destination is created if it does not exist. Each entry path is
/// sanitized against the destination before anything is written.
pub struct ZipExtractor;

impl ZipExtractor {
    pub fn extract<R: Read + Seek>(&self, reader: R, destination: &Path) -> Result<ArchiveReport> {
        let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;

        create_dir_checked(destination)?;

        let mut entries = Vec::new();
        let mut total_bytes = 0u64;

        for i in 0..archive.len() {
            let mut file = archive.by_index(i).map_err(|_| Error::Corrupted)?;

            let raw_path = file.enclosed_name().ok_or(Error::InvalidPath)?;
            let sanitized = sanitize_path(&raw_path, destination)?;

            let size = file.size();
            let is_dir = file.is_dir();

            if is_dir {
                create_dir_checked(&sanitized.resolved)?;
            } else {
                if let Some(parent) = sanitized.resolved.parent() {
                    if !parent.exists() {
                        create_dir_checked(parent)?;
                    }
                }

                let mut out_file = File::create(&sanitized.resolved).map_err(|e| {
                    Error::ExtractionFailed {
                        path: sanitized.resolved.clone(),
                        source: e,
                    }
                })?;
                io::copy(&mut file, &mut out_file).map_err(|e| Error::ExtractionFailed {
                    path: sanitized.resolved.clone(),
                    source: e,
                })?;

                #[cfg(unix)]
                if let Some(mode) = file.unix_mode() {
                    use std::os::unix::fs::PermissionsExt;
                    // Entries written without mode bits stay readable
                    let mode = if mode & 0o111 != 0 { mode } else { mode | 0o644 };
                    std::fs::set_permissions(
                        &sanitized.resolved,
                        std::fs::Permissions::from_mode(mode),
                    )?;
                }
            }

            total_bytes += size;

            entries.push(ExtractedEntry {
                original_path: sanitized.original,
                target_path: sanitized.resolved,
                size,
                is_directory: is_dir,
            });
        }

        Ok(ArchiveReport {
            entry_count: entries.len(),
            total_bytes,
            entries,
        })
    }
}

/// Open the archive at `path` and extract it into `destination`.
pub fn extract_archive(path: &Path, destination: &Path) -> Result<ArchiveReport> {
    let file = File::open(path)?;
    ZipExtractor.extract(BufReader::new(file), destination)
}

fn create_dir_checked(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
