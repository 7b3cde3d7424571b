use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the propagating file-system operations.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source of a copy is a directory, device, socket or pipe.
    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    /// Content sniffing got zero bytes back from the file.
    #[error("{} is empty, nothing to sniff", .0.display())]
    EmptyFile(PathBuf),

    /// `fopen` was handed a mode string it does not understand.
    #[error("unsupported fopen mode `{0}`")]
    InvalidMode(String),

    /// Contextual error that includes source and destination paths.
    #[error("Operation failed from `{src}` to `{dst}`: {msg}")]
    PathContext {
        src: PathBuf,
        dst: PathBuf,
        msg: String,
    },
}

impl FsOpError {
    /// Kind of the wrapped IO error, if this is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FsOpError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}
