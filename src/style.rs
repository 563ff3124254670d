//! Adds the theme's presentation classes to the rendered body.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Opening tags that receive a class, and the class each receives.
const RESTYLED_TAGS: &[(&str, &str)] = &[
    ("h2", "md-h2"),
    ("h3", "md-h3"),
    ("h4", "md-h4"),
    ("p", "md-p"),
    ("ul", "md-ul"),
    ("ol", "md-ol"),
    ("li", "md-li"),
    ("pre", "md-pre"),
    ("blockquote", "md-blockquote"),
    ("table", "md-table"),
];

/// Replaces horizontal rules wholesale.
const DIVIDER: &str = r#"<div class="divider"></div>"#;

static RE_OPENING_TAG: Lazy<Regex> = Lazy::new(|| {
    let names: Vec<&str> = RESTYLED_TAGS.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r"<({})(\s[^>]*)?>", names.join("|"))).unwrap()
});

static RE_RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<hr\s*/?>").unwrap());

static RE_CLASS_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\sclass=""#).unwrap());

/// Rewrites every opening tag in [`RESTYLED_TAGS`] to carry its class and
/// every `<hr>` into a divider. A tag that already has a `class` attribute
/// gets the theme class prepended to it.
pub fn restyle(html: &str) -> String {
    let html = RE_OPENING_TAG.replace_all(html, |caps: &Captures| {
        let name = &caps[1];
        let class = class_for(name);
        match caps.get(2).map(|m| m.as_str()) {
            None => format!(r#"<{} class="{}">"#, name, class),
            Some(attrs) if RE_CLASS_ATTR.is_match(attrs) => format!(
                "<{}{}>",
                name,
                RE_CLASS_ATTR.replace(attrs, format!(r#" class="{} "#, class).as_str()),
            ),
            Some(attrs) => format!(r#"<{} class="{}"{}>"#, name, class, attrs),
        }
    });
    RE_RULE.replace_all(&html, DIVIDER).into_owned()
}

fn class_for(name: &str) -> &'static str {
    RESTYLED_TAGS
        .iter()
        .find(|(tag, _)| *tag == name)
        .map(|(_, class)| *class)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bare_tags() {
        fixture(
            r#"<p class="md-p">a</p><ul class="md-ul"><li class="md-li">b</li></ul>"#,
            "<p>a</p><ul><li>b</li></ul>",
        );
        fixture(
            r#"<blockquote class="md-blockquote"><pre class="md-pre"><code>x</code></pre></blockquote>"#,
            "<blockquote><pre><code>x</code></pre></blockquote>",
        );
        fixture(
            r#"<table class="md-table"><thead><tr><th>a</th></tr></thead></table>"#,
            "<table><thead><tr><th>a</th></tr></thead></table>",
        );
    }

    #[test]
    fn test_every_occurrence() {
        fixture(
            r#"<p class="md-p">1</p><p class="md-p">2</p><p class="md-p">3</p>"#,
            "<p>1</p><p>2</p><p>3</p>",
        );
    }

    #[test]
    fn test_tags_with_attributes() {
        fixture(r#"<h2 class="md-h2" id="intro">Intro</h2>"#, r#"<h2 id="intro">Intro</h2>"#);
        fixture(r#"<ol class="md-ol" start="3">"#, r#"<ol start="3">"#);
        fixture(
            r#"<h3 id="x" class="md-h3 wide">More</h3>"#,
            r#"<h3 id="x" class="wide">More</h3>"#,
        );
    }

    #[test]
    fn test_rules() {
        fixture(
            r#"<p class="md-p">a</p><div class="divider"></div><div class="divider"></div>"#,
            "<p>a</p><hr /><hr>",
        );
    }

    #[test]
    fn test_untouched_tags() {
        fixture(
            "<h1>t</h1><h5>t</h5><link><param><tbody><thead><code>",
            "<h1>t</h1><h5>t</h5><link><param><tbody><thead><code>",
        );
    }

    fn fixture(wanted: &str, html: &str) {
        assert_eq!(wanted, restyle(html));
    }
}
