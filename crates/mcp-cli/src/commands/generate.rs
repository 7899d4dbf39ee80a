//! The generate command

use colored::Colorize;
use mcp_fs::NormalizedPath;
use mcp_tools::generate;
use std::path::Path;

use super::{open_registry, resolve};
use crate::cli::GenerateArgs;
use crate::error::Result;

/// Write both artifacts and print the confirmation lines.
///
/// Paths are resolved against `root`; the confirmation lines show the
/// output directory as it was given.
pub fn run_generate(root: &Path, args: &GenerateArgs) -> Result<()> {
    let registry = open_registry(root, args.registry.as_deref())?;
    if args.registry.is_some() {
        registry.validate()?;
    }

    let output_dir = NormalizedPath::new(resolve(root, &args.output_dir));
    let artifacts = generate(&registry, &output_dir)?;
    tracing::debug!(
        strategy = artifacts.strategy.bytes,
        availability = artifacts.availability.bytes,
        "artifacts written"
    );

    let shown = NormalizedPath::new(&args.output_dir);
    let name_of = |path: &NormalizedPath| shown.join(path.file_name().unwrap_or_default());

    println!("{} MCP tool detection complete", "✓".green());
    println!(
        "{} Generated {}",
        "✓".green(),
        name_of(&artifacts.availability.path)
    );
    println!(
        "{} Generated {}",
        "✓".green(),
        name_of(&artifacts.strategy.path)
    );

    Ok(())
}
