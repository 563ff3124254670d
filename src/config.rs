//! Where the generator reads from and writes to. [`Config::default`] is the
//! whole behavior of a bare run: `README.md` and `template.html` in the working
//! directory, the page at `dist/about/index.html`. The YAML project file
//! (`--config`), the `--source`/`--template`/`--output` flags and `RUST_LOG`
//! are optional overrides; none of them is consulted unless given, so a run
//! without arguments never depends on them.

use crate::extract::DEFAULT_TITLE;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The optional YAML project file. Every key may be omitted, in which case the
/// built-in default is used.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Project {
    source: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    default_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The Markdown document the page is generated from.
    pub source: PathBuf,

    /// The HTML template with the `{{...}}` placeholders.
    pub template: PathBuf,

    /// Where the generated page is written.
    pub output: PathBuf,

    /// The page title when the source has no `# ` heading.
    pub default_title: String,
}

impl Default for Config {
    /// `README.md` and `template.html` from the working directory, written to
    /// `dist/about/index.html`.
    fn default() -> Self {
        Config {
            source: PathBuf::from("README.md"),
            template: PathBuf::from("template.html"),
            output: Path::new("dist").join("about").join("index.html"),
            default_title: DEFAULT_TITLE.to_owned(),
        }
    }
}

impl Config {
    /// Loads a project file. Relative paths in the file are resolved against
    /// the directory containing it.
    pub fn from_project_file(path: &Path) -> Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("Opening project file `{}`", path.display()))?;
        let project: Project = serde_yaml::from_reader(file)
            .with_context(|| format!("Loading configuration `{}`", path.display()))?;
        match path.parent() {
            None => Err(anyhow!(
                "Can't get parent directory for provided project file path '{:?}'",
                path
            )),
            Some(project_root) => Ok(Config::from_project(project, project_root)),
        }
    }

    fn from_project(project: Project, project_root: &Path) -> Config {
        let defaults = Config::default();
        let resolve = |path: Option<PathBuf>, default: PathBuf| {
            project_root.join(path.unwrap_or(default))
        };
        Config {
            source: resolve(project.source, defaults.source),
            template: resolve(project.template, defaults.template),
            output: resolve(project.output, defaults.output),
            default_title: project.default_title.unwrap_or(defaults.default_title),
        }
    }

    /// Replaces the paths for which an override is given.
    pub fn with_overrides(
        self,
        source: Option<PathBuf>,
        template: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Config {
        Config {
            source: source.unwrap_or(self.source),
            template: template.unwrap_or(self.template),
            output: output.unwrap_or(self.output),
            default_title: self.default_title,
        }
    }
}
