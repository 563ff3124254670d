//! String-returning wrappers around [`pulldown_cmark::escape`], for building
//! tags by hand.

use pulldown_cmark::escape::{escape_href, escape_html};

/// Escapes `s` for use as HTML text or a quoted attribute value.
pub fn html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // infallible: the writer is a `String`
    let _ = escape_html(&mut out, s);
    out
}

/// Escapes `s` for use as an `href` or `src` attribute value.
pub fn href(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // infallible: the writer is a `String`
    let _ = escape_href(&mut out, s);
    out
}
