//! Artifact generation: render both artifacts and write them to disk

use crate::Result;
use crate::registry::ToolRegistry;
use crate::render::{AvailabilityListing, Render, StrategyDocument};
use mcp_fs::{NormalizedPath, io};

/// Directory the artifacts go to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".gemini";

/// File name of the strategy document.
pub const STRATEGY_FILE: &str = "mcp-strategy.md";

/// File name of the availability listing.
pub const AVAILABILITY_FILE: &str = "mcp-tools.txt";

/// One written artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: NormalizedPath,
    pub bytes: usize,
}

/// The artifacts written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub strategy: GeneratedArtifact,
    pub availability: GeneratedArtifact,
}

/// Render the strategy document and availability listing and write them
/// into `output_dir`, replacing any previous versions.
///
/// The directory must exist. The strategy document is written first; if
/// that fails, the listing is not touched.
pub fn generate(registry: &ToolRegistry, output_dir: &NormalizedPath) -> Result<GeneratedArtifacts> {
    let strategy = write_artifact(&StrategyDocument, registry, output_dir)?;
    let availability = write_artifact(&AvailabilityListing, registry, output_dir)?;
    Ok(GeneratedArtifacts {
        strategy,
        availability,
    })
}

fn write_artifact(
    renderer: &dyn Render,
    registry: &ToolRegistry,
    output_dir: &NormalizedPath,
) -> Result<GeneratedArtifact> {
    let path = output_dir.join(renderer.file_name());
    let content = renderer.render(registry);
    io::write_text(&path, &content)?;
    tracing::info!(path = %path, bytes = content.len(), "generated artifact");
    Ok(GeneratedArtifact {
        path,
        bytes: content.len(),
    })
}
