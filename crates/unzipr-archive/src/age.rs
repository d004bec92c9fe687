use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use time::{Date, Month};

use crate::error::{Error, Result};

/// Age in whole days of the oldest entry in the archive, by
/// last-modified date at date-only precision.
///
/// This is a metadata-only scan; nothing is extracted. Entries without
/// a usable timestamp are skipped, future-dated entries count as age 0,
/// and an archive with no entries is 0 by definition.
pub fn oldest_entry_age<R: Read + Seek>(reader: R, today: Date) -> Result<u32> {
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| Error::Corrupted)?;

    let mut oldest = 0u32;
    for i in 0..archive.len() {
        let file = archive.by_index(i).map_err(|_| Error::Corrupted)?;

        let Some(modified) = file.last_modified() else {
            continue;
        };
        let Some(date) = entry_date(&modified) else {
            continue;
        };

        let age = (today - date).whole_days().max(0) as u32;
        if age > oldest {
            oldest = age;
        }
    }

    Ok(oldest)
}

/// Convenience over [`oldest_entry_age`] for an archive on disk.
pub fn oldest_entry_age_in_file(path: &Path, today: Date) -> Result<u32> {
    let file = File::open(path)?;
    oldest_entry_age(BufReader::new(file), today)
}

/// Calendar date from the DOS timestamp fields of an entry. DOS
/// timestamps can encode invalid dates (month 0, day 32), which map
/// to `None`.
fn entry_date(modified: &zip::DateTime) -> Option<Date> {
    let month = Month::try_from(modified.month()).ok()?;
    Date::from_calendar_date(i32::from(modified.year()), month, modified.day()).ok()
}
