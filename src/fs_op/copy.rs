use std::fs;
use std::io;
use std::path::Path;

use fs_extra::error::ErrorKind as FsExtraErrorKind;
use fs_extra::file::{copy_with_progress, CopyOptions, TransitProcess};

use crate::fs_op::error::FsOpError;

/// Streaming buffer used by [`copy`].
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copy the regular file `src` to `dst` and return the number of bytes
/// written. `dst` is created or truncated; an existing `dst` keeps its mode.
///
/// Fails with [`FsOpError::NotRegularFile`] before `dst` is touched when
/// `src` (after following symlinks) is a directory or special file.
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<u64, FsOpError> {
    copy_with_buffer(src, dst, COPY_BUFFER_SIZE)
}

/// [`copy`] with an explicit streaming buffer size.
pub fn copy_with_buffer<P: AsRef<Path>, Q: AsRef<Path>>(
    src: P,
    dst: Q,
    buffer_size: usize,
) -> Result<u64, FsOpError> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    let meta = fs::metadata(src)?;
    if !meta.file_type().is_file() {
        return Err(FsOpError::NotRegularFile(src.to_path_buf()));
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = buffer_size.max(1);

    // Streams through `buffer_size` chunks into a `File::create`d destination.
    // The return value is the source length, so count what actually arrived.
    let mut n = 0u64;
    copy_with_progress(src, dst, &options, |p: TransitProcess| n = p.copied_bytes)
        .map_err(|e| from_fs_extra(e, src, dst))?;
    tracing::debug!("copied {} bytes from {} to {}", n, src.display(), dst.display());
    Ok(n)
}

// fs_extra returns its own error type; recover the IO error kind where it
// carries one so callers see the same faults as a plain `std::fs` call.
fn from_fs_extra(e: fs_extra::error::Error, src: &Path, dst: &Path) -> FsOpError {
    let msg = e.to_string();
    let kind = match e.kind {
        FsExtraErrorKind::Io(io_err) => return FsOpError::Io(io_err),
        FsExtraErrorKind::NotFound => io::ErrorKind::NotFound,
        FsExtraErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
        FsExtraErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
        FsExtraErrorKind::Interrupted => io::ErrorKind::Interrupted,
        _ => {
            return FsOpError::PathContext {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                msg,
            }
        }
    };
    FsOpError::Io(io::Error::new(kind, msg))
}
