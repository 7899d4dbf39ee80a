//! Property tests for strategy and availability rendering over generated registries

use mcp_tools::{Capability, ToolRecord, ToolRegistry, render_availability, render_strategy};
use proptest::prelude::*;

fn capability() -> impl Strategy<Value = Capability> {
    prop::sample::select(Capability::ALL.to_vec())
}

/// Registries of uniquely named tools. Fallbacks may point at any name,
/// including ones that are not registered.
fn registry() -> impl Strategy<Value = ToolRegistry> {
    prop::collection::vec(
        (
            any::<bool>(),
            capability(),
            prop::option::of(0usize..12),
            prop::collection::vec("[A-Za-z ]{1,16}", 0..3),
        ),
        0..10,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (available, capability, fallback, use_cases))| {
                let mut rec = ToolRecord::new(format!("tool{i}"), capability)
                    .with_available(available)
                    .with_use_cases(use_cases);
                if let Some(f) = fallback {
                    rec = rec.with_fallback(format!("tool{f}"));
                }
                rec
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_one_heading_per_present_capability(reg in registry()) {
        let doc = render_strategy(&reg);
        for cap in Capability::ALL {
            let heading = format!("## {} Tools\n", cap.title());
            let expected = usize::from(reg.iter().any(|t| t.capability == cap));
            prop_assert_eq!(doc.matches(&heading).count(), expected);
        }
    }

    #[test]
    fn test_primary_is_first_available_in_group(reg in registry()) {
        let doc = render_strategy(&reg);
        for group in reg.by_capability() {
            let cap = group.capability;
            let section = section(&doc, cap);
            match group.tools.iter().find(|t| t.available) {
                Some(first) => {
                    let primary = format!("**Primary**: `{}`\n", first.name);
                    prop_assert!(section.starts_with(&primary));
                    prop_assert!(!section.contains("No tools available"));
                }
                None => {
                    let warning = format!("⚠️ No tools available - manual {cap} required\n\n");
                    prop_assert_eq!(section, warning.as_str());
                }
            }
        }
    }

    #[test]
    fn test_listing_has_one_entry_per_tool(reg in registry()) {
        let listing = render_availability(&reg);
        let lines: Vec<&str> = listing.lines().skip(2).collect();

        let entries = lines.iter().filter(|l| l.starts_with("- ")).count();
        let fallbacks = lines.iter().filter(|l| l.starts_with("  Fallback: ")).count();
        prop_assert_eq!(entries, reg.len());
        prop_assert_eq!(fallbacks, reg.iter().filter(|t| t.fallback.is_some()).count());
        prop_assert_eq!(lines.len(), entries + fallbacks);

        for tool in &reg {
            let prefix = format!("- {}: ", tool.name);
            let idx = lines.iter().position(|l| l.starts_with(&prefix));
            prop_assert!(idx.is_some());
            let next = idx.and_then(|i| lines.get(i + 1));
            let has_sub_line = next.is_some_and(|l| l.starts_with("  Fallback: "));
            prop_assert_eq!(has_sub_line, tool.fallback.is_some());
        }
    }

    #[test]
    fn test_rendering_is_deterministic(reg in registry()) {
        prop_assert_eq!(render_strategy(&reg), render_strategy(&reg.clone()));
        prop_assert_eq!(render_availability(&reg), render_availability(&reg.clone()));
    }
}

/// Body of a capability's section, after its heading and up to the next heading.
fn section(doc: &str, cap: Capability) -> &str {
    let heading = format!("## {} Tools\n\n", cap.title());
    let start = doc.find(&heading).map_or(doc.len(), |i| i + heading.len());
    let rest = &doc[start..];
    let end = rest.find("\n## ").map_or(rest.len(), |i| i + 1);
    &rest[..end]
}
