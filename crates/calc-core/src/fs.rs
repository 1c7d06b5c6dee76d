//! Whole-file replacement helpers.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `destination` with `bytes` so readers only ever see the old or
/// the new content.
///
/// The bytes go to a sibling temp file first, are flushed, then renamed into
/// place.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
/// The temp file is removed on failure.
pub fn write_atomic(destination: &Path, bytes: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    replace_file(&temp_path, destination)
}

/// Rename `temp_path` over `destination`.
///
/// Some platforms refuse to rename onto an existing file; in that case the
/// destination is removed and the rename retried once.
pub fn replace_file(temp_path: &Path, destination: &Path) -> io::Result<()> {
    let Err(first) = fs::rename(temp_path, destination) else {
        return Ok(());
    };
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination).map_err(|retry| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            retry.kind(),
            format!("Replacing {} failed ({}; retry: {})", destination.display(), first, retry),
        )
    })
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "store".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
