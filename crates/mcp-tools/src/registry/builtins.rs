//! Built-in MCP tool table
//!
//! Availability here is declared, not detected. Edit this table when the
//! environment gains or loses a tool.

use super::{Capability, ToolRecord, ToolRegistry};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 9;

/// Returns the built-in tool records in registration order.
///
/// Order matters: it decides capability group order in the strategy
/// document and which available tool becomes a group's primary.
pub fn builtin_records() -> Vec<ToolRecord> {
    vec![
        // Reasoning: prefer crash, fall back to sequential_thinking
        ToolRecord::new("crash", Capability::Reasoning)
            .with_available(true)
            .with_fallback("sequential_thinking")
            .with_use_cases([
                "Complex architectural decisions",
                "Multi-branch design exploration",
                "Iterative problem refinement",
            ]),
        ToolRecord::new("sequential_thinking", Capability::Reasoning).with_use_cases([
            "Linear problem breakdown",
            "Step-by-step analysis",
            "Fallback when crash unavailable",
        ]),
        // Research
        ToolRecord::new("context7", Capability::Research)
            .with_fallback("web_search")
            .with_use_cases([
                "Library documentation lookup",
                "API reference retrieval",
                "Best practices research",
            ]),
        ToolRecord::new("web_search", Capability::Research)
            .with_available(true)
            .with_use_cases([
                "Latest framework updates",
                "Community best practices",
                "Fallback documentation lookup",
            ]),
        // Planning
        ToolRecord::new("zen_planner", Capability::Planning).with_use_cases([
            "Multi-phase project planning",
            "Migration strategy design",
            "Complex feature breakdown",
        ]),
        // Analysis
        ToolRecord::new("zen_thinkdeep", Capability::Analysis).with_use_cases([
            "Architecture review",
            "Performance analysis",
            "Security assessment",
        ]),
        ToolRecord::new("zen_analyze", Capability::Analysis).with_use_cases([
            "Code quality analysis",
            "Pattern detection",
            "Tech debt assessment",
        ]),
        // Debug
        ToolRecord::new("zen_debug", Capability::Debug).with_use_cases([
            "Root cause investigation",
            "Bug reproduction",
            "Performance debugging",
        ]),
        // Registered last but grouped with planning
        ToolRecord::new("zen_consensus", Capability::Planning).with_use_cases([
            "Architecture decision making",
            "Technology selection",
            "Multi-model validation",
        ]),
    ]
}

/// Build the registry from the built-in table.
pub fn builtin_registry() -> ToolRegistry {
    ToolRegistry::with_builtins()
}
