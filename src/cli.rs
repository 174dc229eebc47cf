//! CLI module - Command-line interface definition and dispatch

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::extensions::{ExtensionSet, DEFAULT_EXTENSIONS};

/// tokscan - count cl100k_base tokens in source files and estimate API cost.
#[derive(Parser, Debug)]
#[command(name = "tokscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"tokscan walks PATH, tokenizes matching text files with the cl100k_base
encoding, and prints a summary with a cost estimate at $3 per 1M tokens.

When PATH is a directory, files are selected by extension (see --extensions)
at any depth. When PATH is a single file, it is processed regardless of its
extension. Files larger than --max-file-size are skipped, not tokenized.

Examples:
    tokscan src
    tokscan README.md --verbose
    tokscan . --extensions rs,toml --max-file-size 262144
"#
)]
pub struct Cli {
    /// File or directory to scan.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Comma-separated list of file extensions to process.
    #[arg(
        long,
        value_name = "LIST",
        value_delimiter = ',',
        default_value = DEFAULT_EXTENSIONS,
        long_help = "Comma-separated list of file extensions to process (e.g., .py,.js,.txt).\n\n\
Entries without a leading dot get one prepended, so 'py,js' and '.py,.js'\n\
are equivalent. Matching is case-sensitive and applies only while walking a\n\
directory; a single-file PATH is always processed."
    )]
    pub extensions: Vec<String>,

    /// Show token count for each file.
    #[arg(
        short,
        long,
        long_help = "Print one line per processed file as it is counted, plus a notice for\n\
each file skipped for size. Without this flag only the final summary is\n\
printed (skipped files are still counted)."
    )]
    pub verbose: bool,

    /// Maximum file size to process in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = 1_048_576,
        long_help = "Inclusive upper bound on file size in bytes (default: 1048576 = 1MB).\n\n\
Larger files are never read or tokenized; they are counted in the\n\
'Files skipped (too large)' summary line."
    )]
    pub max_file_size: u64,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let extensions = ExtensionSet::new(&cli.extensions);
    crate::scan::run_scan(&cli.path, &extensions, cli.max_file_size, cli.verbose)
}
