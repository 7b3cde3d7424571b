//! Predicates and metadata queries that collapse every fault into a plain
//! value.
//!
//! The public functions (`is_file`, `filemtime`, ...) only ever hand back a
//! `bool`, a timestamp or a mode. Callers cannot tell "does not exist" from
//! "permission denied". The `probe_*` twins return a [`Collapsed`] record that
//! also carries the discarded `io::Error`.

use std::fs::{self, OpenOptions};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use nix::unistd::{access, AccessFlags};

/// A value whose public form hides the fault that produced it.
#[derive(Debug)]
pub struct Collapsed<T> {
    /// What the collapsing function returns.
    pub value: T,
    /// The error that was swallowed, if any.
    pub fault: Option<io::Error>,
}

impl<T> Collapsed<T> {
    pub(crate) fn ok(value: T) -> Self {
        Collapsed { value, fault: None }
    }

    pub(crate) fn fault(fallback: T, err: io::Error) -> Self {
        Collapsed {
            value: fallback,
            fault: Some(err),
        }
    }

    /// Drop the fault and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn is_fault(&self) -> bool {
        self.fault.is_some()
    }

    fn logged(self, op: &str, path: &Path) -> Self {
        if let Some(e) = &self.fault {
            tracing::debug!("{} probe failed for {}: {}", op, path.display(), e);
        }
        self
    }
}

fn from_result<T>(res: io::Result<T>, fallback: T) -> Collapsed<T> {
    match res {
        Ok(v) => Collapsed::ok(v),
        Err(e) => Collapsed::fault(fallback, e),
    }
}

pub fn probe_file_exists<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    from_result(fs::metadata(p).map(|_| true), false).logged("file_exists", p)
}

pub fn probe_is_dir<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    from_result(fs::metadata(p).map(|m| m.is_dir()), false).logged("is_dir", p)
}

pub fn probe_is_file<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    from_result(fs::metadata(p).map(|m| m.file_type().is_file()), false).logged("is_file", p)
}

/// A path is a link when its target can be read back.
pub fn probe_is_link<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    from_result(fs::read_link(p).map(|_| true), false).logged("is_link", p)
}

/// Readability is tested by opening the path read-only. The handle is
/// dropped before returning.
pub fn probe_is_readable<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    from_result(fs::File::open(p).map(|_| true), false).logged("is_readable", p)
}

/// Files are opened write-only (never truncated). Directories cannot be
/// opened for writing, so the kernel is asked via `access(2)` instead.
pub fn probe_is_writable<P: AsRef<Path>>(path: P) -> Collapsed<bool> {
    let p = path.as_ref();
    let res = fs::metadata(p).and_then(|m| {
        if m.is_dir() {
            access(p, AccessFlags::W_OK).map_err(io::Error::from)
        } else {
            OpenOptions::new().write(true).open(p).map(|_| ())
        }
    });
    from_result(res.map(|_| true), false).logged("is_writable", p)
}

/// Modification time, or `UNIX_EPOCH` on any fault.
pub fn probe_filemtime<P: AsRef<Path>>(path: P) -> Collapsed<SystemTime> {
    let p = path.as_ref();
    from_result(fs::metadata(p).and_then(|m| m.modified()), UNIX_EPOCH).logged("filemtime", p)
}

/// Permission bits (`mode & 0o777`), or `0` on any fault.
pub fn probe_fileperms<P: AsRef<Path>>(path: P) -> Collapsed<u32> {
    let p = path.as_ref();
    from_result(fs::metadata(p).map(|m| m.permissions().mode() & 0o777), 0).logged("fileperms", p)
}

/// Return `true` if `path` exists (file, directory or anything else).
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    probe_file_exists(path).into_value()
}

/// Return `true` if `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    probe_is_dir(path).into_value()
}

/// Return `true` if `path` is a regular file. Symlinks are followed.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    probe_is_file(path).into_value()
}

/// Return `true` if `path` is a symbolic link.
pub fn is_link<P: AsRef<Path>>(path: P) -> bool {
    probe_is_link(path).into_value()
}

/// Return `true` if `path` exists and can be opened for reading.
pub fn is_readable<P: AsRef<Path>>(path: P) -> bool {
    probe_is_readable(path).into_value()
}

/// Return `true` if `path` exists and is writable.
pub fn is_writable<P: AsRef<Path>>(path: P) -> bool {
    probe_is_writable(path).into_value()
}

/// Alias of [`is_writable`].
pub fn is_writeable<P: AsRef<Path>>(path: P) -> bool {
    is_writable(path)
}

/// Modification time of `path`.
///
/// Returns `UNIX_EPOCH` when the metadata cannot be read, which cannot be
/// told apart from a file really stamped at the epoch. Use
/// [`probe_filemtime`] when the difference matters.
pub fn filemtime<P: AsRef<Path>>(path: P) -> SystemTime {
    probe_filemtime(path).into_value()
}

/// Permission bits of `path`, `0` when the metadata cannot be read.
pub fn fileperms<P: AsRef<Path>>(path: P) -> u32 {
    probe_fileperms(path).into_value()
}
