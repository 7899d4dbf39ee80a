//! The list command

use mcp_tools::{Capability, ToolRegistry, render_availability};
use std::path::Path;

use super::open_registry;
use crate::error::Result;

/// Print the availability listing, exactly as it is written to mcp-tools.txt.
///
/// With a capability filter only that group's tools are listed.
pub fn run_list(root: &Path, registry: Option<&Path>, capability: Option<Capability>) -> Result<()> {
    let registry = open_registry(root, registry)?;
    print!("{}", render_availability(&filter(registry, capability)));
    Ok(())
}

fn filter(registry: ToolRegistry, capability: Option<Capability>) -> ToolRegistry {
    match capability {
        Some(cap) => registry
            .iter()
            .filter(|t| t.capability == cap)
            .cloned()
            .collect(),
        None => registry,
    }
}
