//! Rusty DU - Show what is taking up space in a directory
//!
//! This crate provides functionality for:
//! - Sizing every immediate child of a directory, subdirectories in parallel
//! - Recursive subtree sizing with hidden-entry pruning
//! - Text and JSON reports of the result

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{DuError, Result};
