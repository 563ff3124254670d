//! The library code for the `readme-page` generator, which turns a project's
//! README into a themed static HTML page. The work is a single linear
//! pipeline:
//!
//! 1. Extracting the page metadata from the source lines: image URLs, badges,
//!    and the title/subtitle pair ([`crate::extract`], [`crate::badge`])
//! 2. Sanitizing the source, dropping the lines which the metadata already
//!    covers ([`crate::sanitize`])
//! 3. Rendering the sanitized Markdown to HTML ([`crate::markdown`],
//!    [`crate::toc`], [`crate::attr`]) and adding the theme's classes
//!    ([`crate::style`])
//! 4. Substituting everything into the template's placeholders
//!    ([`crate::template`]) and writing the page to disk ([`crate::write`])
//!
//! [`crate::page`] holds the computed contents and [`crate::build`] drives the
//! whole run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod attr;
pub mod badge;
pub mod build;
pub mod config;
pub mod escape;
pub mod extract;
pub mod markdown;
pub mod page;
pub mod sanitize;
pub mod style;
pub mod template;
pub mod toc;
pub mod write;
