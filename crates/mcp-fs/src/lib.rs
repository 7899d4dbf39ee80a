//! Filesystem helpers for MCP tool detection
//!
//! Provides normalized paths, atomic text writes and format-agnostic
//! config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
