//! Capability strategy document

use super::Render;
use crate::registry::{CapabilityGroup, ToolRegistry};

const TITLE: &str = "# MCP Tool Strategy\n\n";

/// Markdown document recommending a primary tool per capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyDocument;

impl StrategyDocument {
    fn render_group(out: &mut String, group: &CapabilityGroup<'_>, registry: &ToolRegistry) {
        let capability = group.capability;
        out.push_str(&format!("## {} Tools\n\n", capability.title()));

        let Some(primary) = group.primary() else {
            out.push_str(&format!(
                "⚠️ No tools available - manual {capability} required\n\n"
            ));
            return;
        };

        out.push_str(&format!("**Primary**: `{}`\n\n", primary.name));

        if !primary.use_cases.is_empty() {
            out.push_str("Use when:\n\n");
            for use_case in &primary.use_cases {
                out.push_str(&format!("- {use_case}\n"));
            }
            out.push('\n');
        }

        // An unregistered fallback gets no line; `ToolRegistry::validate` reports it
        let Some(fallback) = primary.fallback.as_deref() else {
            return;
        };
        match registry.get(fallback) {
            Some(tool) if tool.available => {
                out.push_str(&format!("**Fallback**: `{fallback}`\n\n"));
            }
            Some(_) => {
                out.push_str(&format!(
                    "**Fallback**: Manual {capability} (no tools available)\n\n"
                ));
            }
            None => {
                tracing::debug!(tool = %primary.name, fallback, "fallback not registered, omitted");
            }
        }
    }
}

impl Render for StrategyDocument {
    fn file_name(&self) -> &'static str {
        "mcp-strategy.md"
    }

    fn render(&self, registry: &ToolRegistry) -> String {
        let mut out = String::from(TITLE);
        for group in registry.by_capability() {
            Self::render_group(&mut out, &group, registry);
        }
        out
    }
}
