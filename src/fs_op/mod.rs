//! File-system operations, one host call each.
//!
//! Three error conventions coexist and are kept per operation:
//! - propagate the OS fault (`copy`, `delete`, `mkdir`, `filesize`,
//!   `filetype`, `chown`/`chgrp`/`chmod`, `dirname`, `fopen`/`fclose`);
//! - collapse the fault into `false`/zero (`is_*`, `file_exists`,
//!   `filemtime`, `fileperms`, `disk_free_space`), with `probe_*` twins
//!   that keep it;
//! - string conversions that reject malformed input live in
//!   [`crate::strings`].

pub mod copy;
pub mod create;
pub mod disk;
pub mod error;
pub mod handle;
pub mod mime;
pub mod path;
pub mod permissions;
pub mod remove;
pub mod stat;

use std::path::Path;

pub use copy::{copy, copy_with_buffer, COPY_BUFFER_SIZE};
pub use create::mkdir;
pub use disk::{byte_count_iec, disk_free_space, probe_disk_free_space, DiskStatus};
pub use error::FsOpError;
pub use handle::{fclose, fopen, open_options};
pub use mime::{detect_content_type, filetype, SNIFF_LEN};
pub use path::{basename, dirname, DirEntryInfo};
pub use permissions::{chgrp, chmod, chown, format_unix_mode};
pub use remove::delete;
pub use stat::{
    file_exists, filemtime, fileperms, is_dir, is_file, is_link, is_readable, is_writable,
    is_writeable, probe_file_exists, probe_filemtime, probe_fileperms, probe_is_dir,
    probe_is_file, probe_is_link, probe_is_readable, probe_is_writable, Collapsed,
};

/// Size of the file at `path` in bytes. Errors are returned, not collapsed.
pub fn filesize<P: AsRef<Path>>(path: P) -> Result<u64, FsOpError> {
    Ok(std::fs::metadata(path.as_ref())?.len())
}
