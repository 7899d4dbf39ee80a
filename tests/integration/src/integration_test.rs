//! End-to-end tests: registry file -> validation -> generated artifacts

use mcp_fs::NormalizedPath;
use mcp_tools::{
    AVAILABILITY_FILE, Capability, STRATEGY_FILE, ToolRecord, ToolRegistry, builtin_registry,
    generate, load_registry, render_availability, render_strategy,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Registry file mirroring the built-in table, as JSON
const BUILTIN_AS_JSON: &str = r#"{
  "tool": [
    {"name": "crash", "available": true, "capability": "reasoning", "fallback": "sequential_thinking",
     "use_cases": ["Complex architectural decisions", "Multi-branch design exploration", "Iterative problem refinement"]},
    {"name": "sequential_thinking", "capability": "reasoning",
     "use_cases": ["Linear problem breakdown", "Step-by-step analysis", "Fallback when crash unavailable"]},
    {"name": "context7", "capability": "research", "fallback": "web_search",
     "use_cases": ["Library documentation lookup", "API reference retrieval", "Best practices research"]},
    {"name": "web_search", "available": true, "capability": "research",
     "use_cases": ["Latest framework updates", "Community best practices", "Fallback documentation lookup"]},
    {"name": "zen_planner", "capability": "planning",
     "use_cases": ["Multi-phase project planning", "Migration strategy design", "Complex feature breakdown"]},
    {"name": "zen_thinkdeep", "capability": "analysis",
     "use_cases": ["Architecture review", "Performance analysis", "Security assessment"]},
    {"name": "zen_analyze", "capability": "analysis",
     "use_cases": ["Code quality analysis", "Pattern detection", "Tech debt assessment"]},
    {"name": "zen_debug", "capability": "debug",
     "use_cases": ["Root cause investigation", "Bug reproduction", "Performance debugging"]},
    {"name": "zen_consensus", "capability": "planning",
     "use_cases": ["Architecture decision making", "Technology selection", "Multi-model validation"]}
  ]
}"#;

#[test]
fn test_registry_file_matches_builtin_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("registry.json");
    fs::write(&path, BUILTIN_AS_JSON).unwrap();

    let from_file = load_registry(&NormalizedPath::new(&path)).unwrap();
    let builtin = builtin_registry();

    let file_records: Vec<_> = from_file.iter().cloned().collect();
    let builtin_records: Vec<_> = builtin.iter().cloned().collect();
    assert_eq!(file_records, builtin_records);
    assert_eq!(render_strategy(&from_file), render_strategy(&builtin));
    assert_eq!(render_availability(&from_file), render_availability(&builtin));
}

#[test]
fn test_file_backed_and_builtin_generate_identical_artifacts() {
    let file_out = TempDir::new().unwrap();
    let builtin_out = TempDir::new().unwrap();
    let registry_path = file_out.path().join("registry.json");
    fs::write(&registry_path, BUILTIN_AS_JSON).unwrap();

    let from_file = load_registry(&NormalizedPath::new(&registry_path)).unwrap();
    from_file.validate().unwrap();
    generate(&from_file, &NormalizedPath::new(file_out.path())).unwrap();
    generate(&builtin_registry(), &NormalizedPath::new(builtin_out.path())).unwrap();

    for file in [STRATEGY_FILE, AVAILABILITY_FILE] {
        let a = fs::read(file_out.path().join(file)).unwrap();
        let b = fs::read(builtin_out.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs");
    }
}

#[test]
fn test_availability_change_moves_primary() {
    let temp = TempDir::new().unwrap();
    let out = NormalizedPath::new(temp.path());

    // sequential_thinking becomes the only available reasoning tool
    let registry: ToolRegistry = builtin_registry()
        .iter()
        .cloned()
        .map(|t| match t.name.as_str() {
            "crash" => t.with_available(false),
            "sequential_thinking" => t.with_available(true),
            _ => t,
        })
        .collect();

    generate(&registry, &out).unwrap();

    let strategy = fs::read_to_string(temp.path().join(STRATEGY_FILE)).unwrap();
    assert!(strategy.contains(concat!(
        "## Reasoning Tools\n\n",
        "**Primary**: `sequential_thinking`\n\n",
        "Use when:\n\n",
        "- Linear problem breakdown\n",
        "- Step-by-step analysis\n",
        "- Fallback when crash unavailable\n",
        "\n",
        "## Research Tools",
    )));

    let listing = fs::read_to_string(temp.path().join(AVAILABILITY_FILE)).unwrap();
    assert!(listing.contains("- crash: ✗ Not available\n  Fallback: sequential_thinking\n"));
}

#[test]
fn test_cross_capability_fallback_available() {
    let registry: ToolRegistry = [
        ToolRecord::new("context7", Capability::Research)
            .with_available(true)
            .with_fallback("crash"),
        ToolRecord::new("crash", Capability::Reasoning).with_available(true),
    ]
    .into_iter()
    .collect();

    assert!(registry.validate().is_ok());
    assert_eq!(
        render_strategy(&registry),
        concat!(
            "# MCP Tool Strategy\n\n",
            "## Research Tools\n\n",
            "**Primary**: `context7`\n\n",
            "**Fallback**: `crash`\n\n",
            "## Reasoning Tools\n\n",
            "**Primary**: `crash`\n\n",
        )
    );
}
