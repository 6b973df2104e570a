//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;

use super::alerts;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides the GFM extensions README files rely on: tables, strikethrough,
/// autolinks, and task lists, plus smart punctuation. Raw HTML passes
/// through unchanged since the input is the user's own file. Rendered
/// output goes through the alert pass, which rewrites `[!TYPE]` blockquotes
/// into styled callouts.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures extensions and security settings:
    /// - Tables, strikethrough, autolinks, task lists
    /// - Smart punctuation for quotes and dashes
    /// - Raw HTML passthrough (trusted local content)
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        // Parse options (smart punctuation)
        options.parse.smart = true;

        // Render options (security: we trust)
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to HTML string.
    ///
    /// Converts the markdown through comrak, then rewrites GitHub alert
    /// blockquotes into styled containers. The conversion is total; invalid
    /// markdown still produces HTML.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with alert blockquotes replaced by alert containers
    pub fn render(&self, content: &str) -> String {
        let html = comrak::markdown_to_html(content, &self.options);
        alerts::process_alerts(&html)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
