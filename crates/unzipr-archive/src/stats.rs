use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Compressed vs uncompressed byte totals for one archive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressionStats {
    pub compressed_bytes: u64,
    pub uncompressed_bytes: u64,
}

impl CompressionStats {
    /// Measure the archive file against the tree it was extracted to.
    ///
    /// Compressed size is the archive file's own length; uncompressed
    /// size is the sum of every regular file under `extracted_root`.
    pub fn measure(archive_path: &Path, extracted_root: &Path) -> Result<Self> {
        let compressed_bytes = fs::metadata(archive_path)
            .map_err(|e| Error::SizeScan {
                path: archive_path.to_path_buf(),
                source: e,
            })?
            .len();
        let uncompressed_bytes = tree_size(extracted_root)?;

        Ok(Self {
            compressed_bytes,
            uncompressed_bytes,
        })
    }

    /// Compression ratio, `uncompressed / compressed`.
    ///
    /// `None` when the archive file is empty; the ratio is undefined
    /// rather than infinite in that case.
    pub fn ratio(&self) -> Option<f64> {
        if self.compressed_bytes == 0 {
            return None;
        }
        Some(self.uncompressed_bytes as f64 / self.compressed_bytes as f64)
    }

    /// Space saving as a percentage, `(1 - compressed/uncompressed) * 100`.
    ///
    /// An extraction that produced no bytes saved nothing, so
    /// `uncompressed == 0` reports 0%.
    pub fn space_saving(&self) -> Option<f64> {
        if self.compressed_bytes == 0 {
            return None;
        }
        if self.uncompressed_bytes == 0 {
            return Some(0.0);
        }
        Some((1.0 - self.compressed_bytes as f64 / self.uncompressed_bytes as f64) * 100.0)
    }
}

/// Sum of the lengths of every regular file under `root`, recursively.
/// Symlinks are not followed.
fn tree_size(root: &Path) -> Result<u64> {
    let mut total = 0u64;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::SizeScan {
                path,
                source: e.into(),
            }
        })?;
        if entry.file_type().is_file() {
            let metadata = entry.metadata().map_err(|e| Error::SizeScan {
                path: entry.path().to_path_buf(),
                source: e.into(),
            })?;
            total += metadata.len();
        }
    }

    Ok(total)
}
