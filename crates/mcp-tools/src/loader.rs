//! Registry files
//!
//! A registry file replaces the built-in table. TOML example:
//!
//! ```toml
//! [[tool]]
//! name = "crash"
//! available = true
//! capability = "reasoning"
//! fallback = "sequential_thinking"
//! use_cases = ["Complex architectural decisions"]
//! ```
//!
//! JSON and YAML files use the same shape (a top-level `tool` list).

use crate::registry::{ToolRecord, ToolRegistry};
use crate::{Error, Result};
use mcp_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default, rename = "tool")]
    tools: Vec<ToolRecord>,
}

/// Load a registry from a TOML, JSON or YAML file.
///
/// Tools are registered in file order. Names must be unique. Fallback
/// references are not checked here; see [`ToolRegistry::validate`].
pub fn load_registry(path: &NormalizedPath) -> Result<ToolRegistry> {
    let file: RegistryFile = ConfigStore::new().load(path)?;

    let mut registry = ToolRegistry::new();
    for record in file.tools {
        let name = record.name.clone();
        if registry.register(record).is_some() {
            return Err(Error::DuplicateTool { name });
        }
    }

    tracing::debug!(path = %path, tools = registry.len(), "loaded registry file");
    Ok(registry)
}
