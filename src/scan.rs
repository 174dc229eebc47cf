//! Scan driver
//!
//! Walks the root, applies the extension and size filters, tokenizes each
//! candidate, and accumulates run totals. A file that cannot be read as
//! UTF-8 text is reported on stderr and counted with zero tokens; the run
//! continues. Structural failures (missing root, unreadable directory)
//! abort the run before any summary is printed.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::core::extensions::ExtensionSet;
use crate::core::file_reader::read_file_text;
use crate::core::model::RunTotals;
use crate::core::render::{format_token_count, render_summary};
use crate::core::tokenizer::count_tokens;

/// Structural failures that terminate the run.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Enumerate candidate files under a directory root.
///
/// Lazily yields every file at any depth whose final extension matches the
/// set. Symlinks are not followed. Traversal errors (e.g. an unreadable
/// directory) are passed through for the caller to surface.
pub fn candidate_files<'a>(
    root: &Path,
    extensions: &'a ExtensionSet,
) -> impl Iterator<Item = walkdir::Result<DirEntry>> + 'a {
    WalkDir::new(root).into_iter().filter(move |entry| match entry {
        Ok(e) => e.file_type().is_file() && extensions.matches(e.path()),
        Err(_) => true,
    })
}

/// Size-check, read, and tokenize one candidate, folding it into totals.
///
/// `announce_skip` controls whether an over-size skip prints a notice;
/// the single-file case always announces, a directory walk only when
/// verbose.
fn process_file(
    path: &Path,
    max_file_size: u64,
    verbose: bool,
    announce_skip: bool,
    totals: &mut RunTotals,
) -> Result<()> {
    let size = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();

    if size > max_file_size {
        totals.record_skipped();
        if announce_skip {
            println!("Skipped {}: File too large", path.display());
        }
        return Ok(());
    }

    let tokens = match read_file_text(path) {
        Ok(text) => count_tokens(&text)?,
        Err(err) => {
            let msg = format!("Error processing {}: {}", path.display(), err);
            eprintln!("{}", msg.red());
            0
        }
    };

    if verbose {
        println!("{}: {}", path.display(), format_token_count(tokens));
    }
    totals.record_processed(tokens);
    Ok(())
}

/// Run a full scan and print the summary.
pub fn run_scan(
    path: &Path,
    extensions: &ExtensionSet,
    max_file_size: u64,
    verbose: bool,
) -> Result<()> {
    if !path.exists() {
        return Err(ScanError::RootNotFound(path.to_path_buf()).into());
    }

    let mut totals = RunTotals::new();

    if path.is_file() {
        // An explicitly named file bypasses the extension filter.
        process_file(path, max_file_size, verbose, true, &mut totals)?;
    } else {
        for entry in candidate_files(path, extensions) {
            let entry = entry?;
            process_file(entry.path(), max_file_size, verbose, verbose, &mut totals)?;
        }
    }

    println!("{}", render_summary(&totals));
    Ok(())
}
