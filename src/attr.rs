//! Attribute lists: `{: #id .class key=value}` on the last line of a
//! paragraph, or directly after an inline image or link. The leading colon is
//! optional.

use crate::escape;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// A whole line holding nothing but an attribute list.
static RE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{:?[ ]*([^}\n ][^}\n]*?)[ ]*\}[ ]*$").unwrap());

/// An attribute list at the start of a text run.
static RE_INLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{:?[ ]*([^}\n ][^}\n]*?)[ ]*\}").unwrap());

static RE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"#([^\s"'#.=]+)|\.([^\s"'#.=]+)|([^\s"'#.=]+)=(?:"([^"]*)"|'([^']*)'|([^\s"']+))"#,
    )
    .unwrap()
});

/// The attributes for a single element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attrs {
    pub id: Option<String>,
    pub classes: Vec<String>,

    /// Any other `key=value` pairs, in order of appearance.
    pub pairs: Vec<(String, String)>,
}

impl Attrs {
    /// Parses a line consisting of only an attribute list.
    pub fn parse_line(line: &str) -> Option<Attrs> {
        RE_BLOCK
            .captures(line.trim())
            .map(|caps| Attrs::from_tokens(&caps[1]))
    }

    /// Parses an attribute list at the start of `text`, returning it together
    /// with the text that follows it.
    pub fn parse_prefix(text: &str) -> Option<(Attrs, &str)> {
        let caps = RE_INLINE.captures(text)?;
        let end = caps.get(0)?.end();
        Some((Attrs::from_tokens(&caps[1]), &text[end..]))
    }

    fn from_tokens(tokens: &str) -> Attrs {
        let mut attrs = Attrs::default();
        for caps in RE_TOKEN.captures_iter(tokens) {
            if let Some(id) = caps.get(1) {
                attrs.id = Some(id.as_str().to_owned());
            } else if let Some(class) = caps.get(2) {
                attrs.classes.push(class.as_str().to_owned());
            } else if let Some(key) = caps.get(3) {
                let value = caps
                    .get(4)
                    .or_else(|| caps.get(5))
                    .or_else(|| caps.get(6))
                    .map_or("", |m| m.as_str());
                match key.as_str() {
                    "id" => attrs.id = Some(value.to_owned()),
                    "class" => attrs
                        .classes
                        .extend(value.split_whitespace().map(str::to_owned)),
                    key => attrs.pairs.push((key.to_owned(), value.to_owned())),
                }
            }
        }
        attrs
    }
}

impl fmt::Display for Attrs {
    /// Renders the attributes with a leading space each, ready to drop into an
    /// opening tag: ` id="x" class="a b" k="v"`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            write!(f, r#" id="{}""#, escape::html(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, r#" class="{}""#, escape::html(&self.classes.join(" ")))?;
        }
        for (key, value) in &self.pairs {
            write!(f, r#" {}="{}""#, key, escape::html(value))?;
        }
        Ok(())
    }
}
