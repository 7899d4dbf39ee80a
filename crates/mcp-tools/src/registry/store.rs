//! Tool registry storage

use super::{Capability, ToolRecord};
use crate::{Error, Result};
use std::collections::HashMap;

/// Registry of tool records keyed by name.
///
/// Iteration follows registration order. Capability grouping, primary
/// selection and both rendered artifacts depend on it.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolRecord>,
    index: HashMap<String, usize>,
}

/// Tools sharing one capability, in registry order.
#[derive(Debug, Clone)]
pub struct CapabilityGroup<'a> {
    pub capability: Capability,
    pub tools: Vec<&'a ToolRecord>,
}

impl<'a> CapabilityGroup<'a> {
    /// The first available tool of the group, if any.
    pub fn primary(&self) -> Option<&'a ToolRecord> {
        self.tools.iter().copied().find(|t| t.available)
    }
}

/// A fallback reference that names no registered tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingFallback {
    pub tool: String,
    pub fallback: String,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the built-in tool table.
    pub fn with_builtins() -> Self {
        super::builtins::builtin_records().into_iter().collect()
    }

    /// Register a tool.
    ///
    /// A record whose name is already registered replaces the old one in
    /// place and the old record is returned.
    pub fn register(&mut self, record: ToolRecord) -> Option<ToolRecord> {
        if let Some(&pos) = self.index.get(&record.name) {
            return Some(std::mem::replace(&mut self.tools[pos], record));
        }
        self.index.insert(record.name.clone(), self.tools.len());
        self.tools.push(record);
        None
    }

    /// Get a record by name.
    pub fn get(&self, name: &str) -> Option<&ToolRecord> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    /// Check if a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over records in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolRecord> {
        self.tools.iter()
    }

    /// Group records by capability.
    ///
    /// Groups appear in the order their capability is first encountered.
    pub fn by_capability(&self) -> Vec<CapabilityGroup<'_>> {
        let mut groups: Vec<CapabilityGroup<'_>> = Vec::new();
        for tool in &self.tools {
            match groups.iter_mut().find(|g| g.capability == tool.capability) {
                Some(group) => group.tools.push(tool),
                None => groups.push(CapabilityGroup {
                    capability: tool.capability,
                    tools: vec![tool],
                }),
            }
        }
        tracing::debug!(groups = groups.len(), tools = self.len(), "grouped tools by capability");
        groups
    }

    /// All fallback references that name no registered tool, in registry order.
    pub fn dangling_fallbacks(&self) -> Vec<DanglingFallback> {
        self.tools
            .iter()
            .filter_map(|t| {
                let fallback = t.fallback.as_deref()?;
                (!self.contains(fallback)).then(|| DanglingFallback {
                    tool: t.name.clone(),
                    fallback: fallback.to_string(),
                })
            })
            .collect()
    }

    /// Check that every declared fallback names a registered tool.
    pub fn validate(&self) -> Result<()> {
        match self.dangling_fallbacks().into_iter().next() {
            Some(DanglingFallback { tool, fallback }) => {
                Err(Error::DanglingFallback { tool, fallback })
            }
            None => Ok(()),
        }
    }
}

impl FromIterator<ToolRecord> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = ToolRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.register(record);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a ToolRegistry {
    type Item = &'a ToolRecord;
    type IntoIter = std::slice::Iter<'a, ToolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
