//! snipgen - documentation shortcode generator
//!
//! Scans a tree of example projects for snippets delimited with the host
//! language's comment syntax:
//!
//!     //<gen>block_name
//!     ... code ...
//!     //</gen>
//!
//! and writes every snippet, full-file listing, and directory-tree snapshot
//! to its own fenced shortcode file for the documentation site.

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod config;
mod core;
mod flows;
mod snippets;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
