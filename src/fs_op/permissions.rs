//! Ownership and mode mutation (`chown`, `chgrp`, `chmod`).
//!
//! All three propagate the OS error unchanged. Changing ownership to an
//! arbitrary user needs elevated privilege and otherwise fails with
//! `PermissionDenied`.

use std::fs::{self, Permissions};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use nix::unistd::{chown as nix_chown, Gid, Uid};

use crate::fs_op::error::FsOpError;

/// Change owner and/or group of `path`. `None` leaves that id unchanged.
pub fn chown<P: AsRef<Path>>(path: P, uid: Option<u32>, gid: Option<u32>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    nix_chown(p, uid.map(Uid::from_raw), gid.map(Gid::from_raw)).map_err(io::Error::from)?;
    Ok(())
}

/// Change the group of `path`, leaving the owner as is.
pub fn chgrp<P: AsRef<Path>>(path: P, gid: u32) -> Result<(), FsOpError> {
    chown(path, None, Some(gid))
}

/// Set the mode bits of `path` (including setuid/setgid/sticky if given).
pub fn chmod<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    fs::set_permissions(path.as_ref(), Permissions::from_mode(mode))?;
    Ok(())
}

/// Render the low nine permission bits as `rwxr-x---`.
pub fn format_unix_mode(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS
        .iter()
        .map(|&(bit, c)| if mode & bit != 0 { c } else { '-' })
        .collect()
}
