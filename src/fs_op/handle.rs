//! `fopen`/`fclose` over owned `std::fs::File` handles.

use std::fs::{File, OpenOptions};
use std::os::unix::io::IntoRawFd;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Translate a PHP `fopen` mode string into `OpenOptions`.
///
/// The `b` and `t` flags are accepted and ignored. Returns `None` for
/// anything else outside `r r+ w w+ a a+ x x+ c c+`.
pub fn open_options(mode: &str) -> Option<OpenOptions> {
    let base: String = mode.chars().filter(|c| !matches!(c, 'b' | 't')).collect();
    let mut opts = OpenOptions::new();
    match base.as_str() {
        "r" => opts.read(true),
        "r+" => opts.read(true).write(true),
        "w" => opts.write(true).create(true).truncate(true),
        "w+" => opts.read(true).write(true).create(true).truncate(true),
        "a" => opts.append(true).create(true),
        "a+" => opts.read(true).append(true).create(true),
        "x" => opts.write(true).create_new(true),
        "x+" => opts.read(true).write(true).create_new(true),
        "c" => opts.write(true).create(true),
        "c+" => opts.read(true).write(true).create(true),
        _ => return None,
    };
    Some(opts)
}

/// Open `path` with a PHP mode string.
pub fn fopen<P: AsRef<Path>>(path: P, mode: &str) -> Result<File, FsOpError> {
    let opts = open_options(mode).ok_or_else(|| FsOpError::InvalidMode(mode.to_string()))?;
    Ok(opts.open(path.as_ref())?)
}

/// Close `file` and report the result of `close(2)`, which dropping a
/// `File` would silently discard.
pub fn fclose(file: File) -> Result<(), FsOpError> {
    let fd = file.into_raw_fd();
    nix::unistd::close(fd).map_err(std::io::Error::from)?;
    Ok(())
}
