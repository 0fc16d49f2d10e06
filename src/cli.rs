//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backends::tree::SystemTree;
use crate::config;

/// snipgen - generate documentation shortcodes from example source trees.
#[derive(Parser, Debug)]
#[command(name = "snipgen")]
#[command(
    author,
    version,
    about,
    long_about = r#"snipgen scans the example projects under ROOT for marker-delimited
snippets and writes each one as a fenced code block to its own shortcode
file, ready for inclusion in the documentation site.

Snippet markers use the host language's comment syntax:

    //<gen>inbox_send
    ... code ...
    //</gen>

Whole-file listings and directory-tree snapshots from the static site
configuration are written alongside the extracted snippets.

Examples:
    snipgen
    snipgen --root ../examples generate
    snipgen --root ../examples --out-dir build/shortcodes generate
    snipgen check
    snipgen list
"#
)]
pub struct Cli {
    /// Root directory containing the example projects.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory containing the example projects (defaults to the current\n\
directory). Rule globs, full-file paths, and tree paths all resolve\n\
relative to this root."
    )]
    pub root: PathBuf,

    /// Output directory for shortcode files.
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        long_help = "Output directory for shortcode files.\n\n\
Defaults to `shortcodes/` under ROOT. A relative value is resolved\n\
against ROOT; the directory is created if missing."
    )]
    pub out_dir: Option<PathBuf>,

    /// Quiet mode (errors only).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (per-file progress on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract snippets and write shortcode files (the default).
    #[command(
        long_about = "Run the full pipeline: resolve every extraction rule's globs, validate\n\
marker balance, extract snippet blocks, fold in full-file listings and\n\
directory trees, and write one fenced shortcode file per key.\n\n\
Any failure aborts the run; files already written stay on disk."
    )]
    Generate,

    /// Validate snippet marker balance across all configured rules.
    #[command(
        long_about = "Balance-check every file matched by the extraction rules and print one\n\
JSONL issue record per unbalanced file. Exits non-zero when any file\n\
fails, which makes this suitable for CI gating.\n\n\
Example:\n\
  snipgen check\n"
    )]
    Check,

    /// Print the shortcode inventory as JSONL without writing files.
    #[command(
        long_about = "Build the shortcode map and print one JSONL record per key (key,\n\
highlight tag, line and byte counts) instead of writing output files.\n\n\
Example:\n\
  snipgen list\n"
    )]
    List,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let out_dir = match cli.out_dir {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => root.join(dir),
        None => root.join(config::OUTPUT_DIR),
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            crate::flows::generate::run_generate(&root, &out_dir, &config::SITE, &SystemTree)
        }
        Commands::Check => crate::flows::check::run_check(&root, &config::SITE),
        Commands::List => crate::flows::list::run_list(&root, &config::SITE, &SystemTree),
    }
}
