//! Backup-file helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Backup path for `path`: the literal `.bak` suffix appended to the full
/// file name.
///
/// # Example
/// ```ignore
/// use nbscrub::utils::fs::backup_path;
/// // "analysis.ipynb" -> "analysis.ipynb.bak"
/// let bak = backup_path(Path::new("analysis.ipynb"));
/// ```
#[inline]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy `path` verbatim to its sibling backup path.
///
/// `fs::copy` carries permissions over; the modified timestamp is carried
/// separately where the platform allows it.
pub fn backup_file(path: &Path) -> io::Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)?;

    if let Ok(meta) = fs::metadata(path)
        && let Ok(mtime) = meta.modified()
        && let Ok(file) = fs::OpenOptions::new().write(true).open(&backup)
    {
        // Timestamp carry-over is best effort, like the permission bits
        file.set_modified(mtime).ok();
    }

    Ok(backup)
}
