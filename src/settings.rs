//! Settings for the `phpfn` front end, read from TOML.
//!
//! ```toml
//! copy_buffer_size = 131072
//! log_filter = "phpfuncs=debug"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::fs_op::COPY_BUFFER_SIZE;

/// File name looked up inside [`project_config_dir`].
pub const SETTINGS_FILE: &str = "settings.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Streaming buffer used by the `copy` command.
    pub copy_buffer_size: usize,
    /// `tracing` filter directive used when neither `RUST_LOG` nor `-v` is set.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            copy_buffer_size: COPY_BUFFER_SIZE,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Per-user configuration directory, e.g. `~/.config/phpfuncs` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "phpfuncs").map(|d| d.config_dir().to_path_buf())
}

/// Load settings from `explicit` if given, otherwise from the project config
/// directory. A missing explicit file is an error; a missing default file
/// just means defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match project_config_dir() {
            Some(dir) => dir.join(SETTINGS_FILE),
            None => return Ok(Settings::default()),
        },
    };

    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if explicit.is_none() && e.kind() == io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(source) => return Err(SettingsError::Io { path, source }),
    };
    tracing::debug!("loaded settings from {}", path.display());
    Settings::from_toml(&text).map_err(|source| SettingsError::Parse { path, source })
}
