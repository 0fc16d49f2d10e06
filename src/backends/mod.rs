//! Backends module - filesystem traversal and external tools
//!
//! Provides:
//! - collect: glob expansion over a recursive directory walk
//! - tree: external `tree` invocation for directory snapshots

pub mod collect;
pub mod tree;
