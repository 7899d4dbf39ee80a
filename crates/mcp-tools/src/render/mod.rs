//! Artifact renderers
//!
//! Each renderer turns a [`ToolRegistry`] into the full text of one
//! artifact:
//!
//! - **StrategyDocument**: Markdown, one section per capability
//! - **AvailabilityListing**: plain text, one entry per tool
//!
//! Rendering is pure. Writing the result is the generator's job.

mod availability;
mod strategy;

pub use availability::AvailabilityListing;
pub use strategy::StrategyDocument;

use crate::registry::ToolRegistry;

/// A text artifact derived from the registry.
pub trait Render {
    /// File name the artifact is written to, relative to the output directory.
    fn file_name(&self) -> &'static str;

    /// Render the complete artifact text.
    fn render(&self, registry: &ToolRegistry) -> String;
}

/// Render the capability strategy document.
pub fn render_strategy(registry: &ToolRegistry) -> String {
    StrategyDocument.render(registry)
}

/// Render the flat availability listing.
pub fn render_availability(registry: &ToolRegistry) -> String {
    AvailabilityListing.render(registry)
}
