//! Defines the [`Template`] type. Templates are plain HTML documents with
//! literal `{{NAME}}` placeholder tokens; there is no templating language.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;
use std::path::{Path, PathBuf};

/// The placeholders a template may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Title,
    Subtitle,
    BannerImg,
    Badges,
    Screenshots,
    Content,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Title,
        Placeholder::Subtitle,
        Placeholder::BannerImg,
        Placeholder::Badges,
        Placeholder::Screenshots,
        Placeholder::Content,
    ];

    /// The name between the braces, e.g. `TITLE` for `{{TITLE}}`.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Title => "TITLE",
            Placeholder::Subtitle => "SUBTITLE",
            Placeholder::BannerImg => "BANNER_IMG",
            Placeholder::Badges => "BADGES",
            Placeholder::Screenshots => "SCREENSHOTS",
            Placeholder::Content => "CONTENT",
        }
    }

    fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Placeholder {
    /// Displays the full token, braces included.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}

static RE_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = Placeholder::ALL.iter().map(|p| p.name()).collect();
    Regex::new(&format!(r"\{{\{{({})\}}\}}", names.join("|"))).unwrap()
});

/// A loaded template document.
pub struct Template {
    contents: String,
}

impl Template {
    pub fn new(contents: impl Into<String>) -> Template {
        Template {
            contents: contents.into(),
        }
    }

    /// Reads a template from disk.
    pub fn load(path: &Path) -> Result<Template> {
        std::fs::read_to_string(path)
            .map(Template::new)
            .map_err(|err| Error {
                path: path.to_owned(),
                err,
            })
    }

    /// Substitutes every occurrence of every placeholder with the value
    /// `lookup` returns for it. The substitution is a single pass, so text
    /// inserted for one placeholder is never itself searched for
    /// placeholders. Placeholders missing from the template are ignored.
    pub fn render<'v>(&self, lookup: impl Fn(Placeholder) -> &'v str) -> String {
        RE_PLACEHOLDER
            .replace_all(&self.contents, |caps: &Captures| {
                Placeholder::from_name(&caps[1]).map(&lookup).unwrap_or_default()
            })
            .into_owned()
    }

    /// The placeholders which appear at least once in the template.
    pub fn placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.contents.contains(&p.to_string()))
            .collect()
    }
}

type Result<T> = std::result::Result<T, Error>;

/// Returned when a template file can't be read.
#[derive(Debug)]
pub struct Error {
    path: PathBuf,
    err: std::io::Error,
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reading template file '{}': {}", self.path.display(), self.err)
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}
