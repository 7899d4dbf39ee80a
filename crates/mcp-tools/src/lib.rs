//! MCP tool registry and strategy rendering.
//!
//! This crate holds the metadata for the MCP tools an agent may call
//! and derives two artifacts from it:
//!
//! 1. **Strategy document** (`mcp-strategy.md`) - tools grouped by
//!    capability, naming a primary tool and its fallback per group.
//!
//! 2. **Availability listing** (`mcp-tools.txt`) - one line per tool with
//!    its availability and declared fallback.
//!
//! Availability comes from the built-in table in [`registry::builtin_registry`]
//! or from a registry file read by [`loader::load_registry`]. Nothing is
//! probed at runtime.

pub mod error;
pub mod generator;
pub mod loader;
pub mod logging;
pub mod registry;
pub mod render;

pub use error::{Error, Result};
pub use generator::{
    AVAILABILITY_FILE, DEFAULT_OUTPUT_DIR, GeneratedArtifact, GeneratedArtifacts, STRATEGY_FILE,
    generate,
};
pub use loader::load_registry;
pub use registry::{
    BUILTIN_COUNT, Capability, CapabilityGroup, DanglingFallback, ParseCapabilityError,
    ToolRecord, ToolRegistry, builtin_records, builtin_registry,
};
pub use render::{AvailabilityListing, Render, StrategyDocument, render_availability, render_strategy};
