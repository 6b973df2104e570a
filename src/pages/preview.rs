//! Preview page generation for rendered markdown files

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use std::fs;
use std::path::Path;

use crate::components::layout::page_wrapper;
use crate::markdown::MarkdownRenderer;

/// Generates the HTML preview page for a markdown file
///
/// Reads the file, renders it with GitHub Flavored Markdown and the alert
/// pass, and wraps the result in the preview page shell with a header row
/// and the bundled stylesheet.
///
/// # Arguments
///
/// * `file_path`: Path to the markdown file on disk
/// * `title`: Page title shown in the header and the document title
///
/// # Returns
///
/// HTML markup ready for writing to disk
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - File content contains invalid UTF8
///
/// # Examples
///
/// ```no_run
/// use readview::pages::preview::generate;
/// use std::path::Path;
///
/// let html = generate(Path::new("README.md"), "README.md")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(file_path: impl AsRef<Path>, title: &str) -> Result<Markup> {
    let path_str = file_path.as_ref().display().to_string();

    let content_bytes = fs::read(file_path.as_ref())
        .with_context(|| format!("Failed to read markdown file: {}", path_str))?;

    let content = String::from_utf8(content_bytes)
        .with_context(|| format!("File contains invalid UTF8: {}", path_str))?;

    let renderer = MarkdownRenderer::new();
    let rendered_html = renderer.render(&content);

    Ok(preview_page_markup(title, &rendered_html))
}

/// Renders preview page HTML structure
fn preview_page_markup(title: &str, rendered_html: &str) -> Markup {
    page_wrapper(
        title,
        &["assets/preview.css"],
        html! {
            header class="preview-header" {
                h1 class="preview-title" { (title) }
            }
            main class="markdown-body" {
                (PreEscaped(rendered_html))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_basic_markdown() {
        // Arrange
        let temp_dir = tempfile::tempdir().expect("Should create temp directory");
        let file = temp_dir.path().join("README.md");
        fs::write(&file, "# Test\n\nSome **content** here.").expect("Should write file");

        // Act
        let html = generate(&file, "README.md").expect("Should generate preview");
        let html_str = html.into_string();

        // Assert
        assert!(html_str.contains("<h1>Test</h1>"), "Should render heading");
        assert!(
            html_str.contains("<strong>content</strong>"),
            "Should render bold text"
        );
        assert!(
            html_str.contains("README.md - Readview"),
            "Document title should carry the page title"
        );
        assert!(
            html_str.contains("class=\"markdown-body\""),
            "Rendered markdown should sit in the markdown body"
        );
    }

    #[test]
    fn test_generate_converts_alerts() {
        // Arrange
        let temp_dir = tempfile::tempdir().expect("Should create temp directory");
        let file = temp_dir.path().join("README.md");
        fs::write(&file, "> [!WARNING]\n> Mind the gap.").expect("Should write file");

        // Act
        let html = generate(&file, "README.md").expect("Should generate preview");
        let html_str = html.into_string();

        // Assert
        assert!(
            html_str.contains("markdown-alert markdown-alert-warning"),
            "Alert blockquote should be converted: {}",
            html_str
        );
        assert!(
            html_str.contains("Mind the gap."),
            "Alert body should survive"
        );
    }

    #[test]
    fn test_generate_page_shell() {
        // Arrange
        let temp_dir = tempfile::tempdir().expect("Should create temp directory");
        let file = temp_dir.path().join("notes.md");
        fs::write(&file, "hello").expect("Should write file");

        // Act
        let html = generate(&file, "notes.md").expect("Should generate preview");
        let html_str = html.into_string();

        // Assert
        assert!(
            html_str.contains("Content-Security-Policy"),
            "Head should carry the CSP meta tag"
        );
        assert!(
            !html_str.contains("<script"),
            "Preview page must not contain scripts"
        );
        assert!(
            html_str.contains("href=\"assets/preview.css\""),
            "Should link the bundled stylesheet"
        );
        assert!(
            html_str.contains("preview-header"),
            "Should have a header row"
        );
        assert!(html_str.contains("Readview"), "Footer should name the tool");
    }

    #[test]
    fn test_generate_missing_file() {
        // Arrange
        let temp_dir = tempfile::tempdir().expect("Should create temp directory");
        let file = temp_dir.path().join("absent.md");

        // Act
        let result = generate(&file, "absent.md");

        // Assert
        let err = result.expect_err("Missing file should error");
        assert!(
            format!("{:#}", err).contains("absent.md"),
            "Error should name the file: {:#}",
            err
        );
    }

    #[test]
    fn test_generate_invalid_utf8() {
        // Arrange
        let temp_dir = tempfile::tempdir().expect("Should create temp directory");
        let file = temp_dir.path().join("binary.md");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x42]).expect("Should write file");

        // Act
        let result = generate(&file, "binary.md");

        // Assert
        let err = result.expect_err("Invalid UTF8 should error");
        assert!(
            format!("{:#}", err).contains("invalid UTF8"),
            "Error should explain the decode failure: {:#}",
            err
        );
    }
}
