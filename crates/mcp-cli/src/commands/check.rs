//! The check command

use colored::Colorize;
use std::path::Path;

use super::open_registry;
use crate::error::{CliError, Result};

/// Report fallback references that name no registered tool.
pub fn run_check(root: &Path, registry: Option<&Path>) -> Result<()> {
    let registry = open_registry(root, registry)?;
    let dangling = registry.dangling_fallbacks();

    if dangling.is_empty() {
        println!(
            "{} {} tools, all fallbacks resolve",
            "✓".green(),
            registry.len()
        );
        return Ok(());
    }

    for d in &dangling {
        tracing::warn!(tool = %d.tool, fallback = %d.fallback, "dangling fallback");
        eprintln!(
            "{} {} falls back to '{}', which is not registered",
            "✗".red(),
            d.tool.bold(),
            d.fallback
        );
    }

    Err(CliError::user(format!(
        "{} dangling fallback reference(s)",
        dangling.len()
    )))
}
