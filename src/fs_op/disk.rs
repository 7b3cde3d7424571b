use std::io;
use std::path::Path;

use nix::sys::statvfs::statvfs;
use serde::Serialize;

use crate::fs_op::stat::Collapsed;

/// Free space of the volume holding a path, already humanized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiskStatus {
    #[serde(rename = "Free")]
    pub free: String,
}

/// Query the file system holding `path` and report its free space.
///
/// The record is left empty when the query fails; nothing is signalled to
/// the caller. Only POSIX hosts are supported.
pub fn disk_free_space<P: AsRef<Path>>(path: P) -> DiskStatus {
    probe_disk_free_space(path).into_value()
}

/// [`disk_free_space`] keeping the fault that emptied the record.
pub fn probe_disk_free_space<P: AsRef<Path>>(path: P) -> Collapsed<DiskStatus> {
    let p = path.as_ref();
    match statvfs(p) {
        Ok(stat) => {
            let free = (stat.blocks_free() as u64).saturating_mul(stat.block_size() as u64);
            Collapsed::ok(DiskStatus {
                free: byte_count_iec(free),
            })
        }
        Err(errno) => {
            tracing::debug!("disk_free_space probe failed for {}: {}", p.display(), errno);
            Collapsed::fault(DiskStatus::default(), io::Error::from(errno))
        }
    }
}

/// Format a byte count with binary (1024-based) units.
///
/// Values below 1024 render as `"<n> B"`; larger ones as one decimal place
/// followed by `KiB`, `MiB`, ... up to `EiB`.
pub fn byte_count_iec(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    const PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let (mut div, mut exp) = (UNIT, 0usize);
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}iB", bytes as f64 / div as f64, PREFIXES[exp])
}
