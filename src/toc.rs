//! Heading anchors and the table of contents. Every heading in the body gets
//! an `id` so it can be linked to, and a paragraph consisting of only `[TOC]`
//! is replaced with a nested list of links to those headings.

use crate::escape;
use pulldown_cmark::{Event, Tag};
use std::collections::HashSet;

/// The marker paragraph which is replaced by the table of contents.
pub const TOC_MARKER: &str = "[TOC]";

/// A single heading in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The heading level, 1 through 6.
    pub level: usize,

    /// The unique anchor for the heading.
    pub id: String,

    /// The heading's plain text (markup stripped).
    pub text: String,
}

/// All headings of a document, in document order.
#[derive(Clone, Debug, Default)]
pub struct Toc {
    entries: Vec<Entry>,
}

impl Toc {
    /// Collects the headings from a parsed event stream. Headings with an
    /// explicit `{#id}` attribute keep it; the others are slugified from their
    /// text. Colliding ids get a `_1`, `_2`, ... suffix.
    pub fn collect(events: &[Event]) -> Toc {
        let mut entries = Vec::new();
        let mut ids: HashSet<String> = HashSet::new();
        let mut current: Option<(usize, Option<&str>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::Heading(level, id, _)) => {
                    current = Some((*level as usize, *id, String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, _, buf)) = current.as_mut() {
                        buf.push_str(text);
                    }
                }
                Event::End(Tag::Heading(..)) => {
                    if let Some((level, id, text)) = current.take() {
                        let id = unique_id(
                            &mut ids,
                            match id {
                                Some(id) => id.to_owned(),
                                None => slugify(&text),
                            },
                        );
                        entries.push(Entry { level, id, text });
                    }
                }
                _ => {}
            }
        }

        Toc { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Renders the table of contents as nested `<ul>` lists inside a
    /// `<div class="toc">`.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"toc\">\n");
        // levels of the currently open lists; the last entry's `<li>` is
        // always left open
        let mut open: Vec<usize> = Vec::new();

        for entry in &self.entries {
            match open.last() {
                None => {
                    out.push_str("<ul>\n");
                    open.push(entry.level);
                }
                Some(&top) if entry.level > top => {
                    out.push_str("\n<ul>\n");
                    open.push(entry.level);
                }
                Some(_) => {
                    out.push_str("</li>\n");
                    while open.len() > 1 && open.last().map_or(false, |&top| top > entry.level) {
                        out.push_str("</ul>\n</li>\n");
                        open.pop();
                    }
                }
            }
            out.push_str(&format!(
                "<li><a href=\"#{}\">{}</a>",
                escape::href(&entry.id),
                escape::html(&entry.text),
            ));
        }

        if !open.is_empty() {
            out.push_str("</li>\n");
            while open.len() > 1 {
                out.push_str("</ul>\n</li>\n");
                open.pop();
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
        out
    }
}

fn slugify(text: &str) -> String {
    match slug::slugify(text) {
        s if s.is_empty() => String::from("section"),
        s => s,
    }
}

fn unique_id(ids: &mut HashSet<String>, id: String) -> String {
    let mut candidate = id.clone();
    let mut n = 1;
    while ids.contains(&candidate) {
        candidate = format!("{}_{}", id, n);
        n += 1;
    }
    ids.insert(candidate.clone());
    candidate
}
