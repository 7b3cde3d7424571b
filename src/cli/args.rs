use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Run a single PHP-style file-system or string function from the shell.
#[derive(Parser, Debug)]
#[command(name = "phpfn", version, about)]
pub struct Cli {
    /// Settings file (default: settings.toml in the user config directory).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the trailing name component of a path.
    Basename {
        #[arg(allow_hyphen_values = true)]
        path: String,
    },
    /// List the entries of a directory (not its parent path).
    Dirname {
        path: PathBuf,
        /// Show mode, size and modification time.
        #[arg(short, long)]
        long: bool,
    },
    /// Change mode bits; MODE is octal, e.g. 644.
    Chmod {
        #[arg(value_parser = parse_octal)]
        mode: u32,
        path: PathBuf,
    },
    /// Change owner and/or group by numeric id.
    Chown {
        path: PathBuf,
        #[arg(long)]
        uid: Option<u32>,
        #[arg(long)]
        gid: Option<u32>,
    },
    /// Change group by numeric id.
    Chgrp { gid: u32, path: PathBuf },
    /// Copy a regular file and print the number of bytes copied.
    Copy { src: PathBuf, dst: PathBuf },
    /// Delete a file or an empty directory.
    Delete { path: PathBuf },
    /// Create one directory.
    Mkdir {
        path: PathBuf,
        #[arg(long, default_value = "755", value_parser = parse_octal)]
        mode: u32,
    },
    FileExists { path: PathBuf },
    IsDir { path: PathBuf },
    IsFile { path: PathBuf },
    IsLink { path: PathBuf },
    IsReadable { path: PathBuf },
    IsWritable { path: PathBuf },
    /// Print the modification time (RFC 3339, UTC); the epoch on failure.
    Filemtime { path: PathBuf },
    /// Print the permission bits in octal; 0000 on failure.
    Fileperms { path: PathBuf },
    Filesize { path: PathBuf },
    /// Sniff the MIME type from the first bytes of a file.
    Filetype { path: PathBuf },
    /// Print the free space of the volume holding PATH; empty on failure.
    DiskFreeSpace {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Addslashes {
        #[arg(allow_hyphen_values = true)]
        string: String,
    },
    /// Convert base-2 integer text to base-16 integer text.
    Bin2hex {
        #[arg(allow_hyphen_values = true)]
        string: String,
    },
    /// Split STRING on SEPARATOR, one piece per line.
    Explode {
        #[arg(allow_hyphen_values = true)]
        separator: String,
        #[arg(allow_hyphen_values = true)]
        string: String,
    },
    Ltrim {
        #[arg(allow_hyphen_values = true)]
        string: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        set: String,
    },
    Rtrim {
        #[arg(allow_hyphen_values = true)]
        string: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        set: String,
    },
    Trim {
        #[arg(allow_hyphen_values = true)]
        string: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        set: String,
    },
}

fn parse_octal(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0o").unwrap_or(s);
    u32::from_str_radix(digits, 8).map_err(|e| format!("`{}` is not an octal mode: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn octal_modes() {
        assert_eq!(parse_octal("644"), Ok(0o644));
        assert_eq!(parse_octal("0o4755"), Ok(0o4755));
        assert!(parse_octal("9").is_err());
    }

    #[test]
    fn negative_binary_is_a_value_not_a_flag() {
        let cli = Cli::try_parse_from(["phpfn", "bin2hex", "-1010"]).unwrap();
        assert!(matches!(cli.command, Command::Bin2hex { ref string } if string == "-1010"));
    }
}
