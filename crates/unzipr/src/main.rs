//! Interactive ZIP extractor.
//!
//! Sequential pipeline: collect an archive path, resolve a fresh
//! destination, extract, then report the compression ratio and the age
//! of the oldest entry. Extraction failure skips only the ratio
//! report; the age scan reads archive metadata directly and runs
//! regardless.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::Term;
use time::OffsetDateTime;

use unzipr_archive::{CompressionStats, extract_archive, oldest_entry_age_in_file};

mod cli;
mod prompt;

fn main() -> Result<()> {
    let _app = cli::App::parse();
    let term = Term::stdout();

    let archive = prompt::collect_archive_path(&term)?;
    let destination = prompt::resolve_destination(&term, &archive)?;

    println!("Will unzip to: {}", prompt::display_destination(&destination));
    println!("Unzipping...");
    let unzipped = extract_archive(&archive, &destination);
    match &unzipped {
        Ok(_) => println!("Unzipping process complete."),
        Err(e) => println!("Something went wrong when attempting to unzip: {e}"),
    }

    if unzipped.is_ok() {
        report_compression(&archive, &destination);
    } else {
        println!("Due to failure in unzipping unable to calculate compression rate.");
    }

    report_oldest_age(&archive);

    prompt::pause(&term)?;
    Ok(())
}

fn report_compression(archive: &Path, destination: &Path) {
    let stats = match CompressionStats::measure(archive, destination) {
        Ok(stats) => stats,
        Err(e) => {
            println!("Something went wrong when attempting to retrieve archive sizes: {e}");
            return;
        }
    };

    let Some(ratio) = stats.ratio() else {
        println!("The compression ratio is undefined for an empty archive file.");
        return;
    };
    println!("The compression ratio of the Zip archive was: {ratio:.2}:1");

    if let Some(saving) = stats.space_saving() {
        println!("The space saving of the Zip archive was {saving:.2}%.");
    }
}

fn report_oldest_age(archive: &Path) {
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();

    match oldest_entry_age_in_file(archive, today) {
        Ok(age) => {
            println!("The oldest file (by last modified date) was last modified {age} days ago.");
        }
        Err(e) => println!("Was unable to determine oldest file age: {e}"),
    }
}
