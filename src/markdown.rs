//! Markdown rendering with GitHub Flavored Markdown support.
//!
//! This module provides markdown rendering using comrak with GFM extensions
//! (tables, strikethrough, autolinks, task lists) and a post-processing pass
//! that rewrites GitHub `[!TYPE]` alert blockquotes into styled containers.

mod alerts;
mod renderer;

pub use alerts::{AlertType, process_alerts};
pub use renderer::MarkdownRenderer;
