//! Core module - shared data model and error types
//!
//! This module provides:
//! - The shortcode accumulator map and its key scheme
//! - The error kinds every pipeline stage reports

pub mod error;
pub mod model;
