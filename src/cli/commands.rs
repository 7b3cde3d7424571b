use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

use phpfuncs::fs_op::{self, copy_with_buffer, format_unix_mode, DirEntryInfo};
use phpfuncs::settings::Settings;
use phpfuncs::strings;

use crate::args::Command;

fn rfc3339(t: std::time::SystemTime) -> String {
    DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn long_line(e: &DirEntryInfo) -> String {
    let kind = if e.is_symlink {
        'l'
    } else if e.is_dir {
        'd'
    } else {
        '-'
    };
    format!(
        "{}{} {:>10} {} {}",
        kind,
        format_unix_mode(e.mode),
        e.len,
        rfc3339(e.modified),
        e.name
    )
}

/// Execute one subcommand, writing its result to `out`.
pub fn execute<W: Write>(cmd: Command, settings: &Settings, out: &mut W) -> Result<()> {
    match cmd {
        Command::Basename { path } => writeln!(out, "{}", fs_op::basename(&path))?,
        Command::Dirname { path, long } => {
            let entries = fs_op::dirname(&path)
                .with_context(|| format!("cannot list {}", path.display()))?;
            for e in &entries {
                if long {
                    writeln!(out, "{}", long_line(e))?;
                } else {
                    writeln!(out, "{}", e.name)?;
                }
            }
        }
        Command::Chmod { mode, path } => fs_op::chmod(&path, mode)
            .with_context(|| format!("chmod {:o} {}", mode, path.display()))?,
        Command::Chown { path, uid, gid } => {
            fs_op::chown(&path, uid, gid).with_context(|| format!("chown {}", path.display()))?
        }
        Command::Chgrp { gid, path } => {
            fs_op::chgrp(&path, gid).with_context(|| format!("chgrp {}", path.display()))?
        }
        Command::Copy { src, dst } => {
            let n = copy_with_buffer(&src, &dst, settings.copy_buffer_size)
                .with_context(|| format!("copy {} -> {}", src.display(), dst.display()))?;
            writeln!(out, "{}", n)?;
        }
        Command::Delete { path } => {
            fs_op::delete(&path).with_context(|| format!("delete {}", path.display()))?
        }
        Command::Mkdir { path, mode } => {
            fs_op::mkdir(&path, mode).with_context(|| format!("mkdir {}", path.display()))?
        }
        Command::FileExists { path } => writeln!(out, "{}", fs_op::file_exists(&path))?,
        Command::IsDir { path } => writeln!(out, "{}", fs_op::is_dir(&path))?,
        Command::IsFile { path } => writeln!(out, "{}", fs_op::is_file(&path))?,
        Command::IsLink { path } => writeln!(out, "{}", fs_op::is_link(&path))?,
        Command::IsReadable { path } => writeln!(out, "{}", fs_op::is_readable(&path))?,
        Command::IsWritable { path } => writeln!(out, "{}", fs_op::is_writable(&path))?,
        Command::Filemtime { path } => writeln!(out, "{}", rfc3339(fs_op::filemtime(&path)))?,
        Command::Fileperms { path } => writeln!(out, "{:04o}", fs_op::fileperms(&path))?,
        Command::Filesize { path } => {
            let n = fs_op::filesize(&path).with_context(|| format!("filesize {}", path.display()))?;
            writeln!(out, "{}", n)?;
        }
        Command::Filetype { path } => {
            let ct = fs_op::filetype(&path).with_context(|| format!("filetype {}", path.display()))?;
            writeln!(out, "{}", ct)?;
        }
        Command::DiskFreeSpace { path, json } => {
            let status = fs_op::disk_free_space(&path);
            if json {
                writeln!(out, "{}", serde_json::to_string(&status)?)?;
            } else {
                writeln!(out, "{}", status.free)?;
            }
        }
        Command::Addslashes { string } => writeln!(out, "{}", strings::addslashes(&string))?,
        Command::Bin2hex { string } => writeln!(out, "{}", strings::bin2hex(&string)?)?,
        Command::Explode { separator, string } => {
            for piece in strings::explode(&string, &separator) {
                writeln!(out, "{}", piece)?;
            }
        }
        Command::Ltrim { string, set } => writeln!(out, "{}", strings::ltrim(&string, &set))?,
        Command::Rtrim { string, set } => writeln!(out, "{}", strings::rtrim(&string, &set))?,
        Command::Trim { string, set } => writeln!(out, "{}", strings::trim(&string, &set))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(cmd: Command) -> Result<String> {
        let mut out = Vec::new();
        execute(cmd, &Settings::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn string_commands_print_results() {
        let got = run(Command::Explode {
            separator: ",".into(),
            string: "a,b,,c".into(),
        })
        .unwrap();
        assert_eq!(got, "a\nb\n\nc\n");
        let got = run(Command::Trim {
            string: "  x  ".into(),
            set: String::new(),
        })
        .unwrap();
        assert_eq!(got, "x\n");
    }

    #[test]
    fn bin2hex_failure_is_an_error() {
        assert!(run(Command::Bin2hex { string: "12".into() }).is_err());
    }

    #[test]
    fn predicates_print_booleans() {
        let got = run(Command::IsFile {
            path: PathBuf::from("/definitely/not/here"),
        })
        .unwrap();
        assert_eq!(got, "false\n");
    }

    #[test]
    fn epoch_formats_as_rfc3339() {
        assert_eq!(rfc3339(std::time::UNIX_EPOCH), "1970-01-01T00:00:00Z");
    }
}
