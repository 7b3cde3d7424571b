//! PHP-style file-system and string helpers over native host APIs.
//!
//! Every function does one thing: a single delegation to the OS or to a
//! string primitive, with no state shared between calls. The whole surface
//! is re-exported here so callers can write `phpfuncs::is_file(..)` or
//! `phpfuncs::trim(..)` as they would in PHP.

#[cfg(not(unix))]
compile_error!("phpfuncs targets POSIX hosts only");

pub mod fs_op;
pub mod settings;
pub mod strings;

pub use crate::fs_op::{
    basename, byte_count_iec, chgrp, chmod, chown, copy, delete, dirname, disk_free_space,
    fclose, file_exists, filemtime, fileperms, filesize, filetype, fopen, is_dir, is_file,
    is_link, is_readable, is_writable, is_writeable, mkdir, DirEntryInfo, DiskStatus, FsOpError,
};
pub use crate::strings::{addslashes, bin2hex, explode, ltrim, rtrim, trim, StringError};
