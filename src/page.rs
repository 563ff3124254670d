//! Defines the [`Page`] type, which holds everything computed from the source
//! document that ends up in the template.

use crate::badge::{badges_html, Badge};
use crate::extract::{self, Images, TitleInfo};
use crate::template::Placeholder;
use crate::{markdown, sanitize, style};
use tracing::debug;

/// The computed contents of the output page. Each field corresponds to one
/// [`Placeholder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub subtitle: String,

    /// The URL of the first image in the document, if any.
    pub banner_img: String,

    /// The badge list fragment.
    pub badges: String,

    /// The screenshot fragment (hero images and the gallery grid).
    pub screenshots: String,

    /// The rendered, restyled document body.
    pub content: String,

    /// All distinct images found in the document.
    pub images: Images,
}

impl Page {
    /// Builds a page from the source document's text. `default_title` is used
    /// when the document has no top-level heading.
    pub fn from_markdown(source: &str, default_title: &str) -> Page {
        let lines: Vec<&str> = source.lines().collect();

        let images = Images::from_lines(lines.iter().copied());
        let badges: Vec<Badge> = extract::badges(lines.iter().copied());
        let TitleInfo { title, subtitle } =
            TitleInfo::from_lines(lines.iter().copied(), default_title);
        debug!(
            lines = lines.len(),
            images = images.len(),
            badges = badges.len(),
            %title,
            "extracted page metadata"
        );

        let body = sanitize::sanitize(lines.iter().copied());
        let content = style::restyle(&markdown::to_html(&body));
        debug!(markdown = body.len(), html = content.len(), "rendered body");

        Page {
            title,
            subtitle,
            banner_img: images.banner().unwrap_or_default().to_owned(),
            badges: badges_html(&badges),
            screenshots: screenshots_html(&images),
            content,
            images,
        }
    }

    /// The value substituted for `placeholder`.
    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Title => &self.title,
            Placeholder::Subtitle => &self.subtitle,
            Placeholder::BannerImg => &self.banner_img,
            Placeholder::Badges => &self.badges,
            Placeholder::Screenshots => &self.screenshots,
            Placeholder::Content => &self.content,
        }
    }
}

fn img_tag(url: &str) -> String {
    format!(r#"<img src="{}" alt="Screenshot" loading="lazy">"#, url)
}

/// Renders the hero images as individual full-width blocks followed by the
/// remaining images in a single gallery grid. Empty groups produce no markup.
pub fn screenshots_html(images: &Images) -> String {
    let mut html = String::new();
    for url in images.hero() {
        html.push_str(&format!("<div class=\"ss-full\">{}</div>\n", img_tag(url)));
    }
    if !images.grid().is_empty() {
        html.push_str("<div class=\"ss-grid\">\n");
        for url in images.grid() {
            html.push_str(&format!("  {}\n", img_tag(url)));
        }
        html.push_str("</div>\n");
    }
    html
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::extract::DEFAULT_TITLE;

    const README: &str = "# My Player
## Inspired by the McIntosh MCD600

![banner](https://e.org/banner.png)
![status](https://img.shields.io/badge/status-active-success) ![v](https://img.shields.io/badge/version-2-1-0-blue)

An audio player.
Second line.

<img src=\"https://e.org/shot1.png\" width=\"600\">

## Features

- gapless playback
- ![inline](https://e.org/shot2.png) inline shot

---

> quoted
";

    fn images(n: usize) -> String {
        (1..=n)
            .map(|i| format!("![s{}](https://e.org/{}.png)\n", i, i))
            .collect()
    }

    #[test]
    fn test_no_images() {
        let page = Page::from_markdown("just text", DEFAULT_TITLE);
        assert_eq!("", page.banner_img);
        assert_eq!("", page.screenshots);
        assert!(page.images.is_empty());
        assert_eq!(DEFAULT_TITLE, page.title);
    }

    #[test]
    fn test_one_image() {
        let page = Page::from_markdown(&images(1), DEFAULT_TITLE);
        assert_eq!("https://e.org/1.png", page.banner_img);
        assert_eq!("", page.screenshots);
    }

    #[test]
    fn test_five_images() {
        let page = Page::from_markdown(&images(5), DEFAULT_TITLE);
        assert_eq!("https://e.org/1.png", page.banner_img);
        assert_eq!(
            "<div class=\"ss-full\"><img src=\"https://e.org/2.png\" alt=\"Screenshot\" loading=\"lazy\"></div>\n\
             <div class=\"ss-full\"><img src=\"https://e.org/3.png\" alt=\"Screenshot\" loading=\"lazy\"></div>\n\
             <div class=\"ss-grid\">\n  \
             <img src=\"https://e.org/4.png\" alt=\"Screenshot\" loading=\"lazy\">\n  \
             <img src=\"https://e.org/5.png\" alt=\"Screenshot\" loading=\"lazy\">\n\
             </div>\n",
            page.screenshots,
        );
    }

    #[test]
    fn test_two_images_has_no_grid() {
        let page = Page::from_markdown(&images(2), DEFAULT_TITLE);
        assert_eq!(1, page.screenshots.matches("ss-full").count());
        assert!(!page.screenshots.contains("ss-grid"));
    }

    #[test]
    fn test_readme() {
        let page = Page::from_markdown(README, DEFAULT_TITLE);
        assert_eq!("My Player", page.title);
        assert_eq!("Inspired by the McIntosh MCD600", page.subtitle);
        assert_eq!(
            "<span class=\"badge badge-green\">STATUS: ACTIVE</span>\n\
             <span class=\"badge badge-blue\">VERSION: 2-1-0</span>\n",
            page.badges,
        );
        // banner, two badges, two screenshots
        assert_eq!(5, page.images.len());
        assert_eq!("https://e.org/banner.png", page.banner_img);
        assert_eq!(
            &["https://img.shields.io/badge/status-active-success", "https://img.shields.io/badge/version-2-1-0-blue"],
            page.images.hero(),
        );

        let content = &page.content;
        assert!(content.contains("<p class=\"md-p\">An audio player.<br />\nSecond line.</p>"));
        assert!(content.contains("<h2 class=\"md-h2\" id=\"features\">Features</h2>"));
        assert!(content.contains("<ul class=\"md-ul\">"));
        assert!(content.contains("<li class=\"md-li\">gapless playback</li>"));
        assert!(content.contains("src=\"https://e.org/shot2.png\""));
        assert!(content.contains("<div class=\"divider\"></div>"));
        assert!(content.contains("<blockquote class=\"md-blockquote\">"));

        // sanitized lines never leak into the body
        assert!(!content.contains("My Player"));
        assert!(!content.contains("Inspired"));
        assert!(!content.contains("banner.png"));
        assert!(!content.contains("shields.io"));
        assert!(!content.contains("shot1.png"));
    }

    #[test]
    fn test_attribute_list_classes_are_merged() {
        let page = Page::from_markdown("A note.\n{: #n .note}", DEFAULT_TITLE);
        assert_eq!("<p id=\"n\" class=\"md-p note\">A note.</p>\n", page.content);
    }

    #[test]
    fn test_values() {
        let page = Page::from_markdown("# T\n\nbody", DEFAULT_TITLE);
        assert_eq!("T", page.value(Placeholder::Title));
        assert_eq!("", page.value(Placeholder::Subtitle));
        assert_eq!("<p class=\"md-p\">body</p>\n", page.value(Placeholder::Content));
    }
}
