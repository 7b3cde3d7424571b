use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Create the single directory `path` with `mode` (the process umask still
/// applies). Parents are not created; OS errors propagate unchanged.
pub fn mkdir<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    DirBuilder::new().mode(mode).create(path.as_ref())?;
    Ok(())
}
