//! ZIP extraction with path sanitization, size metrics and entry ages.
//!
//! # Architecture
//!
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `extract.rs` - Extraction into a destination directory
//! - `report.rs` - Extraction result types
//! - `stats.rs` - Compressed vs uncompressed size metrics
//! - `age.rs` - Oldest-entry age by last-modified date

pub use age::{oldest_entry_age, oldest_entry_age_in_file};
pub use error::{Error, Result};
pub use extract::{ZipExtractor, extract_archive};
pub use report::{ArchiveReport, ExtractedEntry};
pub use sanitize::{SanitizedPath, sanitize_path};
pub use stats::CompressionStats;

pub mod age;
pub mod extract;
pub mod stats;
mod error;
mod report;
mod sanitize;
