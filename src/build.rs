//! Exports the [`build_page`] function which stitches together the steps of
//! generating the page: reading the source document, extracting and rendering
//! its contents ([`crate::page`]), substituting them into the template
//! ([`crate::template`]), and writing the result ([`crate::write`]).

use crate::config::Config;
use crate::page::Page;
use crate::template::{Error as TemplateError, Template};
use crate::write::{write_page, Error as WriteError};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a successful build produced. The binary prints this as its status
/// lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// The path of the written page.
    pub output: PathBuf,

    /// The resolved page title.
    pub title: String,

    /// The number of distinct images found in the source document.
    pub images: usize,
}

/// Builds the page described by a [`Config`]. Both inputs are read before
/// anything is written, so a missing source or template leaves no output
/// behind.
pub fn build_page(config: &Config) -> Result<Report> {
    let source = read_source(&config.source)?;
    debug!(path = %config.source.display(), bytes = source.len(), "read source");

    let page = Page::from_markdown(&source, &config.default_title);

    let template = Template::load(&config.template)?;
    debug!(
        path = %config.template.display(),
        placeholders = ?template.placeholders(),
        "loaded template"
    );

    let html = template.render(|placeholder| page.value(placeholder));
    write_page(&config.output, &html)?;
    debug!(path = %config.output.display(), bytes = html.len(), "wrote page");

    Ok(Report {
        output: config.output.clone(),
        title: page.title,
        images: page.images.len(),
    })
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| Error::ReadSource {
        path: path.to_owned(),
        err,
    })
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the page.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source document can't be read.
    ReadSource { path: PathBuf, err: std::io::Error },

    /// Returned when the template can't be read.
    Template(TemplateError),

    /// Returned when the output page can't be written.
    Write(WriteError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ReadSource { path, err } => {
                write!(f, "Reading source file '{}': {}", path.display(), err)
            }
            Error::Template(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ReadSource { path: _, err } => Some(err),
            Error::Template(err) => Some(err),
            Error::Write(err) => Some(err),
        }
    }
}

impl From<TemplateError> for Error {
    /// Converts [`TemplateError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: TemplateError) -> Error {
        Error::Template(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
