//! Atomic text I/O with advisory locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write content atomically to a file.
///
/// Content goes to a locked temp file in the target directory which is then
/// renamed over the target, so readers never observe a partial artifact.
/// The parent directory must already exist; it is not created.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    // A missing directory surfaces here; errors report the target, not the temp name
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&native_path, e))?;

    let result = write_locked(&mut temp_file, content, &native_path);
    drop(temp_file);
    let result = result.and_then(|()| {
        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::debug!(path = %path, bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Lock, fill and flush the temp file. Failures name `target`.
fn write_locked(file: &mut File, content: &[u8], target: &Path) -> Result<()> {
    let lock_failed = |_| Error::LockFailed {
        path: target.to_path_buf(),
    };
    FileExt::lock_exclusive(&*file).map_err(lock_failed)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(target, e))?;
    FileExt::unlock(&*file).map_err(lock_failed)
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
