//! Defines the [`Badge`] type, which represents a shields.io badge found in the
//! source document, e.g. `![status](https://img.shields.io/badge/status-active-success)`.

use std::fmt;

/// The presentation class a badge is rendered with. Each badge color key from
/// the badge URL maps onto one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeClass {
    Green,
    Blue,
    Gold,
}

impl BadgeClass {
    /// Maps a shields.io color key onto a [`BadgeClass`]. Unknown keys fall
    /// back to [`BadgeClass::Gold`].
    pub fn from_color_key(key: &str) -> BadgeClass {
        match key {
            "success" | "green" => BadgeClass::Green,
            "blue" => BadgeClass::Blue,
            "gold" => BadgeClass::Gold,
            _ => BadgeClass::Gold,
        }
    }

    /// The CSS class name for the badge.
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeClass::Green => "badge-green",
            BadgeClass::Blue => "badge-blue",
            BadgeClass::Gold => "badge-gold",
        }
    }
}

/// A badge parsed from a shields.io badge path of the form
/// `label-value-color`. The value may itself contain hyphens, in which case
/// everything between the first and the last segment is the value
/// (`version-2-1-0-blue` has the value `2-1-0`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    /// The uppercased label segment.
    pub name: String,

    /// The uppercased middle segments, rejoined with hyphens.
    pub value: String,

    pub class: BadgeClass,
}

impl Badge {
    /// Parses the part of a badge URL following `/badge/`. Returns [`None`]
    /// when the path has fewer than three hyphen-separated segments.
    pub fn from_path(path: &str) -> Option<Badge> {
        let parts: Vec<&str> = path.split('-').collect();
        match parts.as_slice() {
            [name, middle @ .., color] if !middle.is_empty() => Some(Badge {
                name: name.to_uppercase(),
                value: middle.join("-").to_uppercase(),
                class: BadgeClass::from_color_key(color),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Badge {
    /// Renders the badge as a single `<span>` element (without a trailing
    /// newline).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            r#"<span class="badge {}">{}: {}</span>"#,
            self.class.css_class(),
            self.name,
            self.value,
        )
    }
}

/// Renders the badge list fragment: one `<span>` line per badge, in order.
pub fn badges_html(badges: &[Badge]) -> String {
    badges.iter().map(|badge| format!("{}\n", badge)).collect()
}
