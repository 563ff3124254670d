//! Writes the finished page to disk.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `html` to `path`, creating any missing parent directories first. An
/// existing file at `path` is overwritten.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|err| Error::CreateDir {
            path: dir.to_owned(),
            err,
        })?;
    }
    std::fs::write(path, html).map_err(|err| Error::Write {
        path: path.to_owned(),
        err,
    })
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// Returned when the output directory can't be created.
    CreateDir { path: PathBuf, err: io::Error },

    /// Returned when the output file can't be written.
    Write { path: PathBuf, err: io::Error },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CreateDir { path, err } => {
                write!(f, "Creating output directory '{}': {}", path.display(), err)
            }
            Error::Write { path, err } => {
                write!(f, "Writing output file '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CreateDir { path: _, err } => Some(err),
            Error::Write { path: _, err } => Some(err),
        }
    }
}
