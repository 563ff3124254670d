//! Converts the sanitized document body from Markdown to HTML.
//!
//! Besides the CommonMark basics the body supports fenced code blocks,
//! tables, a `[TOC]` marker paragraph, hard line breaks on every single
//! newline, and attribute lists (see [`crate::attr`]): on headings
//! (`## Title {#id .class}`), as the last line of a paragraph (`{: .note}`),
//! and directly after an inline image or link (`![x](a.png){: .wide}`).
//! Heading anchors and the table of contents live in [`crate::toc`]; the
//! presentation classes are added afterwards by [`crate::style`].

use crate::attr::Attrs;
use crate::escape;
use crate::toc::{Toc, TOC_MARKER};
use pulldown_cmark::*;
use std::ops::Range;

/// Converts `markdown` to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();
    let toc = Toc::collect(&events);
    tracing::trace!(events = events.len(), headings = toc.entries().len(), "parsed body");

    let event_converter = EventConverter::new(&toc);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, event_converter.convert(events).into_iter());
    out
}

/// Rewrites the parsed event stream before it is rendered: headings are
/// emitted with their anchors, soft breaks become hard breaks, `[TOC]`
/// paragraphs become the table of contents, and attribute lists are moved
/// onto the element they annotate.
struct EventConverter<'t> {
    toc: &'t Toc,
}

impl<'t> EventConverter<'t> {
    fn new(toc: &'t Toc) -> Self {
        EventConverter { toc }
    }

    fn convert<'a>(&self, mut events: Vec<Event<'a>>) -> Vec<Event<'a>> {
        let mut out = Vec::with_capacity(events.len());
        let mut headings = self.toc.entries().iter();
        let mut dropped = vec![false; events.len()];
        let mut i = 0;

        while i < events.len() {
            if dropped[i] {
                i += 1;
                continue;
            }
            if let Some(inline) = inline_attrs(&events, i) {
                inline.apply(&mut events, &mut dropped, i);
            }

            match &events[i] {
                Event::Start(Tag::Paragraph) => {
                    if let Some(end) = toc_marker_end(&events, i) {
                        out.push(Event::Html(CowStr::from(self.toc.to_html())));
                        i = end + 1;
                        continue;
                    }
                    match paragraph_attrs(&events, i) {
                        Some((attrs, line)) => {
                            line.for_each(|j| dropped[j] = true);
                            out.push(Event::Html(CowStr::from(format!("<p{}>", attrs))));
                        }
                        None => out.push(events[i].clone()),
                    }
                }
                Event::Start(Tag::Heading(level, _, classes)) => {
                    // `Toc::collect` saw the same headings in the same order
                    let attrs = Attrs {
                        id: headings.next().map(|entry| entry.id.clone()),
                        classes: classes.iter().map(|class| class.to_string()).collect(),
                        ..Attrs::default()
                    };
                    out.push(Event::Html(CowStr::from(format!("<{}{}>", level, attrs))));
                }
                Event::End(Tag::Heading(level, _, _)) => {
                    out.push(Event::Html(CowStr::from(format!("</{}>\n", level))));
                }
                Event::SoftBreak => out.push(Event::HardBreak),
                event => out.push(event.clone()),
            }
            i += 1;
        }

        out
    }
}

/// An image or link followed by an inline attribute list, rewritten to raw
/// HTML.
struct Inline {
    /// The index of the element's closing event.
    end: usize,

    /// The opening tag carrying the attributes.
    open: String,

    /// The closing tag, or `None` for an image, whose alt text is already
    /// part of `open`.
    close: Option<&'static str>,

    /// The text that followed the attribute list.
    rest: String,
}

impl Inline {
    fn apply(self, events: &mut [Event], dropped: &mut [bool], start: usize) {
        events[start] = Event::Html(CowStr::from(self.open));
        match self.close {
            Some(close) => events[self.end] = Event::Html(CowStr::Borrowed(close)),
            None => dropped[start + 1..=self.end].iter_mut().for_each(|d| *d = true),
        }
        match self.rest.is_empty() {
            true => dropped[self.end + 1] = true,
            false => events[self.end + 1] = Event::Text(CowStr::from(self.rest)),
        }
    }
}

/// If the image or link opening at `start` is immediately followed by an
/// attribute list, builds its replacement tags.
fn inline_attrs(events: &[Event], start: usize) -> Option<Inline> {
    let (kind, dest, title) = match &events[start] {
        Event::Start(tag @ Tag::Image(_, dest, title)) => (tag, dest, title),
        Event::Start(tag @ Tag::Link(_, dest, title)) => (tag, dest, title),
        _ => return None,
    };
    let end = closing(events, start)?;
    let (attrs, rest) = match events.get(end + 1) {
        Some(Event::Text(text)) => Attrs::parse_prefix(text)?,
        _ => return None,
    };

    let title = match title.is_empty() {
        true => String::new(),
        false => format!(" title=\"{}\"", escape::html(title)),
    };
    let (open, close) = match kind {
        Tag::Image(..) => {
            let alt: String = events[start + 1..end]
                .iter()
                .filter_map(|event| match event {
                    Event::Text(text) | Event::Code(text) => Some(text.as_ref()),
                    _ => None,
                })
                .collect();
            let open = format!(
                "<img src=\"{}\" alt=\"{}\"{}{} />",
                escape::href(dest),
                escape::html(&alt),
                title,
                attrs,
            );
            (open, None)
        }
        _ => {
            let scheme = match kind {
                Tag::Link(LinkType::Email, ..) => "mailto:",
                _ => "",
            };
            let open = format!("<a href=\"{}{}\"{}{}>", scheme, escape::href(dest), title, attrs);
            (open, Some("</a>"))
        }
    };

    Some(Inline {
        end,
        open,
        close,
        rest: rest.to_owned(),
    })
}

/// If the last line of the paragraph starting at `start` is an attribute list,
/// returns it along with the events making up that line (including the line
/// break before it).
fn paragraph_attrs(events: &[Event], start: usize) -> Option<(Attrs, Range<usize>)> {
    let end = closing(events, start)?;
    let mut first = end;
    while matches!(events[first - 1], Event::Text(_)) {
        first -= 1;
    }
    if first == end || !matches!(events[first - 1], Event::SoftBreak | Event::HardBreak) {
        return None;
    }

    let line: String = events[first..end]
        .iter()
        .filter_map(|event| match event {
            Event::Text(text) => Some(text.as_ref()),
            _ => None,
        })
        .collect();
    Attrs::parse_line(&line).map(|attrs| (attrs, first - 1..end))
}

/// Returns the index of the event closing the element opened at `start`.
fn closing(events: &[Event], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, event) in events.iter().enumerate().skip(start) {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// If the paragraph starting at `start` consists of nothing but the `[TOC]`
/// marker, returns the index of its closing event.
fn toc_marker_end(events: &[Event], start: usize) -> Option<usize> {
    let mut text = String::new();
    for (offset, event) in events[start + 1..].iter().enumerate() {
        match event {
            Event::Text(t) => text.push_str(t),
            Event::End(Tag::Paragraph) => {
                return match text.trim() == TOC_MARKER {
                    true => Some(start + 1 + offset),
                    false => None,
                }
            }
            _ => return None,
        }
    }
    None
}
