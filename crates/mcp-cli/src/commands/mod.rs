//! Command implementations

mod check;
mod generate;
mod list;

pub use check::run_check;
pub use generate::run_generate;
pub use list::run_list;

use crate::error::Result;
use mcp_fs::NormalizedPath;
use mcp_tools::{ToolRegistry, builtin_registry, load_registry};
use std::path::{Path, PathBuf};

/// Resolve `path` against `root` unless it is already absolute.
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Load the registry from `file`, or the built-in table when none is given.
///
/// Fallback references are not validated here.
fn open_registry(root: &Path, file: Option<&Path>) -> Result<ToolRegistry> {
    match file {
        Some(file) => {
            let path = NormalizedPath::new(resolve(root, file));
            tracing::debug!(path = %path, "using registry file");
            Ok(load_registry(&path)?)
        }
        None => Ok(builtin_registry()),
    }
}
