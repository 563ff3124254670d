//! Strips the lines whose content is already shown elsewhere on the page
//! (banner and screenshots, badges, title and subtitle) from the source
//! document before it is rendered as the page body.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMAGE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[").unwrap());
static RE_IMG_TAG_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^<img\s").unwrap());

const BADGE_URL: &str = "img.shields.io/badge";

/// Returns whether `line` should be kept in the rendered body. Only whole
/// lines are considered; an image in the middle of a paragraph stays.
pub fn keep_line(line: &str) -> bool {
    !(RE_IMAGE_LINE.is_match(line)
        || RE_IMG_TAG_LINE.is_match(line)
        || line.contains(BADGE_URL)
        || line.starts_with("# ")
        || line.starts_with("## Inspired"))
}

/// Filters `lines` with [`keep_line`] and joins the survivors with `\n`.
pub fn sanitize<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .filter(|line| keep_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}
