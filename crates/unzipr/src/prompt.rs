//! Interactive prompt loops and the Continue/Exit dialog.

use std::io::{self, BufRead, Write};
use std::path::{self, MAIN_SEPARATOR, Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use console::{Key, Term};

/// Prompt until the user supplies a path to an existing file.
pub fn collect_archive_path(term: &Term) -> Result<PathBuf> {
    loop {
        let answer = read_line("Insert path to Zip archive: ")?;
        let path = Path::new(&answer);
        if path.is_file() {
            return Ok(path.to_path_buf());
        }

        println!("Unable to locate Zip archive at: {answer}");
        println!("Please check your path.");
        continue_or_exit(term)?;
    }
}

/// Prompt for a base directory and resolve the extraction destination
/// under it, named after the archive. Re-prompts while the resolved
/// directory already exists, so extraction always starts fresh.
pub fn resolve_destination(term: &Term, archive: &Path) -> Result<PathBuf> {
    loop {
        let answer = read_line("Insert path where to unzip the ZIP archive: ")?;
        let destination = destination_for(&answer, archive)
            .context("unable to resolve the extraction destination")?;

        if destination_conflicts(&destination) {
            println!("The provided directory path is not unique and poses a risk of conflict.");
            println!("Please use another path.");
            continue_or_exit(term)?;
            continue;
        }

        return Ok(destination);
    }
}

/// Extraction must create the destination fresh, so anything already
/// present there, directory or file, is a conflict.
fn destination_conflicts(destination: &Path) -> bool {
    destination.exists()
}

/// Absolute destination path: `<base>/<archive file stem>`. Accepts
/// both absolute and relative bases; the path is normalized without
/// touching the filesystem since it must not exist yet.
pub fn destination_for(base: &str, archive: &Path) -> io::Result<PathBuf> {
    let stem = archive.file_stem().unwrap_or_default();
    path::absolute(Path::new(base).join(stem))
}

/// Destination rendered with a guaranteed trailing separator.
pub fn display_destination(destination: &Path) -> String {
    let mut rendered = destination.display().to_string();
    if !rendered.ends_with(MAIN_SEPARATOR) {
        rendered.push(MAIN_SEPARATOR);
    }
    rendered
}

/// Blocks for a single keypress: Escape exits the process with code 0,
/// Enter returns to the caller, anything else re-displays the dialog.
pub fn continue_or_exit(term: &Term) -> Result<()> {
    loop {
        println!("Press ESC key to exit or ENTER to continue.");
        match term.read_key().context("unable to read a key")? {
            Key::Escape => process::exit(0),
            Key::Enter => return Ok(()),
            _ => {}
        }
    }
}

/// Final pause before the process ends; any key is accepted.
pub fn pause(term: &Term) -> Result<()> {
    println!("Press any key to exit...");
    term.read_key().context("unable to read a key")?;
    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("unable to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("unable to read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_is_absolute_and_named_after_archive() {
        let destination = destination_for("some/dir", Path::new("backup.zip")).unwrap();
        assert!(destination.is_absolute());
        assert!(destination.ends_with("some/dir/backup"));
    }

    #[test]
    fn destination_strips_only_the_extension() {
        let destination = destination_for("/data", Path::new("/archives/logs.2024.zip")).unwrap();
        assert_eq!(destination, Path::new("/data/logs.2024"));
    }

    #[test]
    fn pre_existing_destination_conflicts() {
        let dir = tempfile::tempdir().unwrap();

        // A directory conflicts, and so does a plain file
        assert!(destination_conflicts(dir.path()));
        let file_path = dir.path().join("taken");
        std::fs::write(&file_path, b"occupied").unwrap();
        assert!(destination_conflicts(&file_path));

        assert!(!destination_conflicts(&dir.path().join("fresh")));
    }

    #[test]
    fn displayed_destination_has_trailing_separator() {
        let rendered = display_destination(Path::new("/data/backup"));
        assert!(rendered.ends_with(MAIN_SEPARATOR));

        // Already-terminated paths gain no second separator
        let root = display_destination(Path::new("/"));
        assert_eq!(root, "/");
    }
}
