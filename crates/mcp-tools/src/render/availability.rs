//! Flat availability listing

use super::Render;
use crate::registry::ToolRegistry;

const HEADER: &str = "Available MCP Tools (Auto-Detected):\n\n";

/// Plain-text listing of every tool with its availability.
///
/// A declared fallback is always listed, whether or not it is available
/// or registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityListing;

impl Render for AvailabilityListing {
    fn file_name(&self) -> &'static str {
        "mcp-tools.txt"
    }

    fn render(&self, registry: &ToolRegistry) -> String {
        let mut out = String::from(HEADER);
        for tool in registry {
            let status = if tool.available {
                "✓ Available"
            } else {
                "✗ Not available"
            };
            out.push_str(&format!("- {}: {}\n", tool.name, status));
            if let Some(fallback) = &tool.fallback {
                out.push_str(&format!("  Fallback: {fallback}\n"));
            }
        }
        out
    }
}
