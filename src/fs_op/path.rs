use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fs_op::error::FsOpError;

/// Metadata of one entry returned by [`dirname`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub len: u64,
    pub is_dir: bool,
    pub is_symlink: bool,
    /// Permission bits (`mode & 0o777`).
    pub mode: u32,
    pub modified: SystemTime,
}

impl DirEntryInfo {
    fn from_entry(entry: fs::DirEntry) -> Result<Self, FsOpError> {
        // DirEntry::metadata does not traverse symlinks.
        let meta = entry.metadata()?;
        Ok(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            len: meta.len(),
            is_dir: meta.is_dir(),
            is_symlink: meta.file_type().is_symlink(),
            mode: meta.permissions().mode() & 0o777,
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
        })
    }
}

/// Return the trailing name component of `path`.
///
/// Trailing separators are ignored. An empty path yields `"."` and a path
/// made only of separators yields the root separator.
pub fn basename(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        return MAIN_SEPARATOR.to_string();
    }
    match trimmed.rfind(is_separator) {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// List the entries of the directory at `path`, sorted by file name.
///
/// Note the name: this does NOT return the parent path of `path`. It keeps
/// the listing behaviour existing callers depend on.
pub fn dirname<P: AsRef<Path>>(path: P) -> Result<Vec<DirEntryInfo>, FsOpError> {
    let mut entries = fs::read_dir(path.as_ref())?
        .map(|entry| DirEntryInfo::from_entry(entry?))
        .collect::<Result<Vec<_>, FsOpError>>()?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
