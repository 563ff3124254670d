//! Pulls the page metadata out of the source document: image URLs, badges,
//! and the title/subtitle pair. Nothing in here fails; a document without any
//! of these simply yields empty or default values.

use crate::badge::Badge;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use url::Url;

/// Matches either an HTML `<img>` tag (capturing its `src`) or a Markdown
/// image literal (capturing its destination).
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<img[^>]+src="([^"]+)"[^>]*>|!\[[^\]]*\]\(([^)]+)\)"#).unwrap()
});

/// Matches a Markdown image literal pointing at a shields.io static badge,
/// capturing the `label-value-color` path.
static RE_BADGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\]]+)\]\(https://img\.shields\.io/badge/([^)]+)\)").unwrap()
});

/// Title used when the document has no top-level heading.
pub const DEFAULT_TITLE: &str = "McIntosh Reference Digital Audio Player";

const TITLE_PREFIX: &str = "# ";
const SUBTITLE_PREFIX: &str = "## Inspired";

/// The deduplicated image URLs of a document, split into their positional
/// roles: the first is the banner, the next two are hero screenshots, and the
/// remainder go into the gallery grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Images {
    urls: Vec<String>,
}

impl Images {
    /// Collects every HTTP(S) image URL referenced by `lines`, in order of
    /// first appearance.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Images {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut urls = Vec::new();
        for line in lines {
            for caps in RE_IMAGE.captures_iter(line) {
                let url = match caps.get(1).or_else(|| caps.get(2)) {
                    Some(m) => m.as_str(),
                    None => continue,
                };
                if is_http(url) && seen.insert(url) {
                    urls.push(url.to_owned());
                }
            }
        }
        Images { urls }
    }

    /// All distinct image URLs.
    pub fn all(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn banner(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// The second and third images.
    pub fn hero(&self) -> &[String] {
        &self.urls[self.urls.len().min(1)..self.urls.len().min(3)]
    }

    /// Everything from the fourth image onward.
    pub fn grid(&self) -> &[String] {
        &self.urls[self.urls.len().min(3)..]
    }
}

fn is_http(url: &str) -> bool {
    match Url::parse(url) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Collects every shields.io badge in `lines`, in encounter order. Badges
/// whose path has fewer than three segments are skipped.
pub fn badges<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Badge> {
    lines
        .into_iter()
        .flat_map(|line| RE_BADGE.captures_iter(line))
        .filter_map(|caps| Badge::from_path(&caps[2]))
        .collect()
}

/// The page title and subtitle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleInfo {
    pub title: String,
    pub subtitle: String,
}

impl TitleInfo {
    /// Scans `lines` for the first-level heading (title) and the
    /// `## Inspired...` heading (subtitle). A later `# ` heading overwrites an
    /// earlier one until both have been found. `default_title` is used when
    /// no title heading exists.
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
        default_title: &str,
    ) -> TitleInfo {
        let mut title: Option<&str> = None;
        let mut subtitle: Option<&str> = None;
        for line in lines {
            if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
                title = Some(rest.trim());
            } else if line.starts_with(SUBTITLE_PREFIX) {
                // drop the `## ` marker but keep the word "Inspired"
                subtitle = Some(line[3..].trim());
            }
            if let (Some(t), Some(s)) = (title, subtitle) {
                if !t.is_empty() && !s.is_empty() {
                    break;
                }
            }
        }
        TitleInfo {
            title: title.unwrap_or(default_title).to_owned(),
            subtitle: subtitle.unwrap_or_default().to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::badge::BadgeClass;

    fn lines(doc: &str) -> Vec<&str> {
        doc.lines().collect()
    }

    #[test]
    fn test_no_images() {
        let images = Images::from_lines(lines("# Title\n\nJust prose.\n"));
        assert!(images.is_empty());
        assert_eq!(None, images.banner());
        assert!(images.hero().is_empty());
        assert!(images.grid().is_empty());
    }

    #[test]
    fn test_single_image_is_banner() {
        let images = Images::from_lines(lines("![banner](https://example.org/a.png)"));
        assert_eq!(Some("https://example.org/a.png"), images.banner());
        assert!(images.hero().is_empty());
        assert!(images.grid().is_empty());
    }

    #[test]
    fn test_positional_roles() {
        let doc = "![a](https://e.org/1.png)\n\
                   <img src=\"https://e.org/2.png\" width=\"300\">\n\
                   text ![c](http://e.org/3.png) and ![d](https://e.org/4.png)\n\
                   <p><img alt=\"x\" src=\"https://e.org/5.png\"></p>\n";
        let images = Images::from_lines(lines(doc));
        assert_eq!(Some("https://e.org/1.png"), images.banner());
        assert_eq!(&["https://e.org/2.png", "http://e.org/3.png"], images.hero());
        assert_eq!(&["https://e.org/4.png", "https://e.org/5.png"], images.grid());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let doc = "![a](https://e.org/1.png)\n\
                   ![b](https://e.org/2.png)\n\
                   ![a again](https://e.org/1.png)\n\
                   <img src=\"https://e.org/2.png\">\n\
                   ![c](https://e.org/3.png)\n";
        let images = Images::from_lines(lines(doc));
        assert_eq!(
            &["https://e.org/1.png", "https://e.org/2.png", "https://e.org/3.png"],
            images.all(),
        );
    }

    #[test]
    fn test_non_http_images_dropped() {
        let doc = "![local](docs/shot.png)\n\
                   ![data](data:image/png;base64,AAAA)\n\
                   ![ftp](ftp://e.org/x.png)\n\
                   <img src=\"./logo.svg\">\n";
        assert!(Images::from_lines(lines(doc)).is_empty());
    }

    #[test]
    fn test_badges_in_order_without_dedup() {
        let doc = "![s](https://img.shields.io/badge/status-active-success) \
                   ![v](https://img.shields.io/badge/version-2-1-0-blue)\n\
                   ![bad](https://img.shields.io/badge/short-x)\n\
                   ![s](https://img.shields.io/badge/status-active-success)\n";
        let badges = badges(lines(doc));
        assert_eq!(3, badges.len());
        assert_eq!("STATUS", badges[0].name);
        assert_eq!("2-1-0", badges[1].value);
        assert_eq!(BadgeClass::Blue, badges[1].class);
        assert_eq!(badges[0], badges[2]);
    }

    #[test]
    fn test_badges_count_as_images() {
        let doc = "![s](https://img.shields.io/badge/status-active-success)\n";
        assert_eq!(1, Images::from_lines(lines(doc)).len());
    }

    #[test]
    fn test_default_title() {
        let info = TitleInfo::from_lines(lines("## Features\n\ntext\n"), DEFAULT_TITLE);
        assert_eq!(DEFAULT_TITLE, info.title);
        assert_eq!("", info.subtitle);
    }

    #[test]
    fn test_title_and_subtitle() {
        let doc = "# My Player  \n## Inspired by the MCD600\n# Later Heading\n";
        let info = TitleInfo::from_lines(lines(doc), DEFAULT_TITLE);
        assert_eq!("My Player", info.title);
        assert_eq!("Inspired by the MCD600", info.subtitle);
    }

    #[test]
    fn test_title_overwritten_until_subtitle_found() {
        let doc = "# First\n# Second\n## Inspired by tubes\n# Third\n";
        let info = TitleInfo::from_lines(lines(doc), DEFAULT_TITLE);
        assert_eq!("Second", info.title);
    }

    #[test]
    fn test_subtitle_before_title() {
        let doc = "## Inspired by tubes\n# My Player\n";
        let info = TitleInfo::from_lines(lines(doc), DEFAULT_TITLE);
        assert_eq!("My Player", info.title);
        assert_eq!("Inspired by tubes", info.subtitle);
    }
}
