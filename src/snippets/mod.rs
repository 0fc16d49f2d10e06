//! Snippets module - marker parsing and normalization
//!
//! A snippet is a region delimited in a source file with the host
//! language's comment syntax:
//!
//!     //<gen>block_name
//!     ... code ...
//!     //</gen>
//!
//! Marker pairs vary per language (`//<gen>`, `#<gen>`, `'<gen>`, bare
//! `<gen>`); the end marker is always the start marker with a `/` slipped
//! in front of the tag name.

pub mod balance;
pub mod extract;
pub mod indent;
