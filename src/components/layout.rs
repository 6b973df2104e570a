//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure.
/// The wrapper handles viewport configuration, charset, and stylesheet
/// loading while the caller provides page-specific body content. The head
/// carries a Content-Security-Policy that forbids script execution; the
/// preview is a display-only surface.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: Array of CSS file paths to include
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="Content-Security-Policy" content="script-src 'none';";
                title { (title) " - Readview" }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                div class="container" {
                    (body)
                }
                footer {
                    p {
                        "Generated by "
                        a href="https://github.com/readview/readview" target="_blank" { "Readview" }
                    }
                }
            }
        }
    }
}
