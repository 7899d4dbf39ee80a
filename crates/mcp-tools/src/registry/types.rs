//! Core types for the tool registry

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of task a tool assists with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Deep thinking tools
    Reasoning,
    /// Documentation lookup
    Research,
    /// Workflow organization
    Planning,
    /// Code analysis
    Analysis,
    /// Problem investigation
    Debug,
}

impl Capability {
    /// All capabilities in declaration order.
    pub const ALL: [Capability; 5] = [
        Capability::Reasoning,
        Capability::Research,
        Capability::Planning,
        Capability::Analysis,
        Capability::Debug,
    ];

    /// Lowercase identifier, as used in registry files and "manual" notices.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reasoning => "reasoning",
            Self::Research => "research",
            Self::Planning => "planning",
            Self::Analysis => "analysis",
            Self::Debug => "debug",
        }
    }

    /// Title-cased name used in strategy headings.
    pub fn title(self) -> &'static str {
        match self {
            Self::Reasoning => "Reasoning",
            Self::Research => "Research",
            Self::Planning => "Planning",
            Self::Analysis => "Analysis",
            Self::Debug => "Debug",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a capability name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability '{0}', expected one of: reasoning, research, planning, analysis, debug")]
pub struct ParseCapabilityError(pub String);

impl FromStr for Capability {
    type Err = ParseCapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCapabilityError(s.to_string()))
    }
}

/// Metadata for a single MCP tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Unique identifier (e.g., "crash", "web_search")
    pub name: String,
    /// Whether the tool can be called in this environment
    #[serde(default)]
    pub available: bool,
    /// Capability group the tool belongs to
    pub capability: Capability,
    /// Tool to recommend when this one cannot serve
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fallback: Option<String>,
    /// Example situations the tool suits, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
}

impl ToolRecord {
    /// Create an unavailable record with no fallback and no use cases.
    pub fn new(name: impl Into<String>, capability: Capability) -> Self {
        Self {
            name: name.into(),
            available: false,
            capability,
            fallback: None,
            use_cases: Vec::new(),
        }
    }

    /// Set availability (builder pattern).
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Set the fallback tool (builder pattern).
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Set the use cases (builder pattern).
    pub fn with_use_cases<I, S>(mut self, use_cases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_cases = use_cases.into_iter().map(Into::into).collect();
        self
    }
}

/// `fallback = ""` declares no fallback.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
