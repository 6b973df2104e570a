//! GitHub alert rewriting for rendered markdown HTML.
//!
//! GitHub's markdown dialect marks callouts with a bracketed keyword on the
//! first line of a blockquote (`> [!NOTE]`). Generic renderers emit those as
//! plain blockquotes; this module rescans the rendered HTML and rewrites
//! qualifying blockquotes into styled alert containers. Blockquote boundaries
//! are matched lazily against literal tags, so nested blockquotes are not
//! supported: the first closing tag ends the candidate.

use regex::Regex;
use std::sync::LazyLock;

/// Class token carried by every alert container.
///
/// Doubles as the reprocessing sentinel: HTML that already contains this
/// token is returned unchanged.
pub const ALERT_CLASS: &str = "markdown-alert";

const BLOCKQUOTE_OPEN: &str = "<blockquote>";
const BLOCKQUOTE_CLOSE: &str = "</blockquote>";

// Octicon glyphs shown in alert title rows (16x16, styled via .octicon)
const ICON_NOTE: &str = r#"<svg class="octicon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path d="M0 8a8 8 0 1 1 16 0A8 8 0 0 1 0 8Zm8-6.5a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13ZM6.5 7.75a.75.75 0 0 1 .75-.75h2a.75.75 0 0 1 .75.75v2a.75.75 0 0 1-.75.75h-2a.75.75 0 0 1-.75-.75Zm.75-3.5a.75.75 0 0 0-.75.75v1.5a.75.75 0 0 0 1.5 0v-1.5A.75.75 0 0 0 7.25 4.25Z"></path></svg>"#;
const ICON_TIP: &str = r#"<svg class="octicon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path d="M8 1.5c-.916 0-1.75.416-2.333 1.076A3.97 3.97 0 0 0 5 5.5c0 .776.255 1.491.689 2.069L4.78 9.22a.75.75 0 1 0 1.06 1.06l.91-.91c.577.433 1.292.688 2.068.688a3.97 3.97 0 0 0 2.924-1.333c.66-.583 1.076-1.417 1.076-2.333s-.416-1.75-1.076-2.333A3.97 3.97 0 0 0 8 1.5ZM6.5 5.5a1.5 1.5 0 1 1 3 0 1.5 1.5 0 0 1-3 0ZM8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0Zm-.75 4.75a.75.75 0 0 0-1.5 0v.5a.75.75 0 0 0 1.5 0Zm3.5 0a.75.75 0 0 0-1.5 0v.5a.75.75 0 0 0 1.5 0ZM8 11.5a.75.75 0 0 0 .75-.75v-.5a.75.75 0 0 0-1.5 0v.5c0 .414.336.75.75.75Z"></path></svg>"#;
const ICON_IMPORTANT: &str = r#"<svg class="octicon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path d="M0 1.75C0 .784.784 0 1.75 0h12.5C15.216 0 16 .784 16 1.75v12.5A1.75 1.75 0 0 1 14.25 16H1.75A1.75 1.75 0 0 1 0 14.25Zm1.75-.25a.25.25 0 0 0-.25.25v12.5c0 .138.112.25.25.25h12.5a.25.25 0 0 0 .25-.25V1.75a.25.25 0 0 0-.25-.25Zm7.47 3.97a.75.75 0 1 1 1.06 1.06L9.22 8.22a.75.75 0 0 1-1.06 0L6.22 6.28a.75.75 0 0 1 1.06-1.06l1 1ZM6 9.75a.75.75 0 0 1 .75-.75h2.5a.75.75 0 0 1 0 1.5h-2.5a.75.75 0 0 1-.75-.75Z"></path></svg>"#;
const ICON_WARNING: &str = r#"<svg class="octicon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path d="M6.457 1.047c.659-1.234 2.427-1.234 3.086 0l6.082 11.378A1.75 1.75 0 0 1 14.082 15H1.918a1.75 1.75 0 0 1-1.543-2.575Zm1.763.707a.25.25 0 0 0-.44 0L1.698 13.132a.25.25 0 0 0 .22.368h12.164a.25.25 0 0 0 .22-.368Zm.53 3.996v2.5a.75.75 0 0 1-1.5 0v-2.5a.75.75 0 0 1 1.5 0ZM9 11a1 1 0 1 1-2 0 1 1 0 0 1 2 0Z"></path></svg>"#;
const ICON_CAUTION: &str = r#"<svg class="octicon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path d="M8 0a8 8 0 1 1 0 16A8 8 0 0 1 8 0ZM1.5 8a6.5 6.5 0 1 0 13 0 6.5 6.5 0 0 0-13 0Zm6.5-3a.75.75 0 0 1 .75.75v3.5a.75.75 0 0 1-1.5 0v-3.5A.75.75 0 0 1 8 5Zm0 7a1 1 0 1 1 0-2 1 1 0 0 1 0 2Z"></path></svg>"#;

// Marker shapes, tried strictly in this order. All are anchored to the
// candidate's first paragraph; a keyword appearing later in the blockquote
// does not make it an alert. The keyword set is case-sensitive uppercase.
static OWN_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*<p>\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s*</p>").unwrap()
});
static NEWLINE_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\s*<p>\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s*[\n\r]+(.+?)</p>")
        .unwrap()
});
static LINE_BREAK_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\s*<p>\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s*<br\s*/?>\s*(.+?)</p>")
        .unwrap()
});
static INLINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\s*<p>\s*\[!(NOTE|TIP|IMPORTANT|WARNING|CAUTION)\]\s+(.+?)</p>").unwrap()
});
static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());

/// GitHub alert callout types.
///
/// Closed set recognized inside the bracket marker. Each type maps to an
/// octicon glyph and an accent color; the mapping is static and unknown
/// keys resolve to [`AlertType::Note`] at the lookup boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl AlertType {
    /// All types in marker-keyword order.
    pub const ALL: [AlertType; 5] = [
        AlertType::Note,
        AlertType::Tip,
        AlertType::Important,
        AlertType::Warning,
        AlertType::Caution,
    ];

    /// Parses an uppercase marker keyword; `None` for anything else.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "NOTE" => Some(AlertType::Note),
            "TIP" => Some(AlertType::Tip),
            "IMPORTANT" => Some(AlertType::Important),
            "WARNING" => Some(AlertType::Warning),
            "CAUTION" => Some(AlertType::Caution),
            _ => None,
        }
    }

    /// Uppercase keyword as written inside the bracket marker.
    pub fn keyword(self) -> &'static str {
        match self {
            AlertType::Note => "NOTE",
            AlertType::Tip => "TIP",
            AlertType::Important => "IMPORTANT",
            AlertType::Warning => "WARNING",
            AlertType::Caution => "CAUTION",
        }
    }

    /// Lowercase suffix for the type-specific container class.
    pub fn css_class(self) -> &'static str {
        match self {
            AlertType::Note => "note",
            AlertType::Tip => "tip",
            AlertType::Important => "important",
            AlertType::Warning => "warning",
            AlertType::Caution => "caution",
        }
    }

    /// Octicon SVG markup for the title row.
    pub fn icon(self) -> &'static str {
        match self {
            AlertType::Note => ICON_NOTE,
            AlertType::Tip => ICON_TIP,
            AlertType::Important => ICON_IMPORTANT,
            AlertType::Warning => ICON_WARNING,
            AlertType::Caution => ICON_CAUTION,
        }
    }

    /// Accent color as a `#rrggbb` hex string.
    pub fn color(self) -> &'static str {
        match self {
            AlertType::Note => "#0969da",
            AlertType::Tip => "#1a7f37",
            AlertType::Important => "#8250df",
            AlertType::Warning => "#9a6700",
            AlertType::Caution => "#cf222e",
        }
    }
}

/// Rewrites GitHub alert blockquotes in rendered markdown HTML.
///
/// Scans the document left to right for `<blockquote>`/`</blockquote>` pairs
/// and replaces each one whose first paragraph carries a recognized
/// `[!TYPE]` marker with a styled alert container. Blockquotes without a
/// marker, with an unrecognized or lowercase keyword, or with no body left
/// after the marker are preserved byte for byte. HTML that already contains
/// an alert container is returned unchanged, so the transform is idempotent.
///
/// The function is total: malformed or unbalanced markup never fails, it
/// simply passes through.
///
/// # Arguments
///
/// * `html`: HTML produced by a markdown renderer
///
/// # Returns
///
/// HTML with qualifying blockquotes replaced by alert containers
pub fn process_alerts(html: &str) -> String {
    // Coarse guard against running twice over the same document
    if html.contains(ALERT_CLASS) {
        return html.to_string();
    }

    let mut result = String::with_capacity(html.len());
    let mut last_end = 0;
    let mut search_pos = 0;

    while let Some(found) = html[search_pos..].find(BLOCKQUOTE_OPEN) {
        let open_start = search_pos + found;
        let inner_start = open_start + BLOCKQUOTE_OPEN.len();

        let Some(close) = html[inner_start..].find(BLOCKQUOTE_CLOSE) else {
            // Unclosed blockquote: the remainder passes through verbatim
            break;
        };
        let inner_end = inner_start + close;
        let candidate_end = inner_end + BLOCKQUOTE_CLOSE.len();

        if let Some(alert) = convert_candidate(&html[inner_start..inner_end]) {
            result.push_str(&html[last_end..open_start]);
            result.push_str(&alert);
            last_end = candidate_end;
        }

        search_pos = candidate_end;
    }

    result.push_str(&html[last_end..]);
    result
}

/// Tests one blockquote candidate and renders its alert container.
///
/// Returns `None` when the candidate is not an alert, leaving the caller to
/// keep the original blockquote text.
fn convert_candidate(inner: &str) -> Option<String> {
    if inner.contains(ALERT_CLASS) {
        return None;
    }

    let (keyword, content) = match_marker(inner)?;

    let cleaned = strip_empty_paragraphs(&content);
    if cleaned.is_empty() {
        // Alerts must carry a body
        return None;
    }

    let kind = AlertType::from_keyword(keyword).unwrap_or(AlertType::Note);
    Some(render_alert(kind, &cleaned))
}

/// Matches the four marker shapes in precedence order.
///
/// Returns the captured keyword and the extracted content HTML. The order
/// picks the content boundary for ambiguous inputs and must not change:
/// own-paragraph, then newline-separated, then line-break-separated, then
/// inline-whitespace.
fn match_marker(inner: &str) -> Option<(&str, String)> {
    // Own-paragraph: the body is everything after the marker paragraph
    if let Some(caps) = OWN_PARAGRAPH.captures(inner)
        && let (Some(whole), Some(keyword)) = (caps.get(0), caps.get(1))
    {
        let rest = inner[whole.end()..].trim();
        return Some((keyword.as_str(), rest.to_string()));
    }

    // Single-paragraph shapes: the body is the trailing text rewrapped
    for re in [&*NEWLINE_SEPARATED, &*LINE_BREAK_SEPARATED, &*INLINE_WHITESPACE] {
        if let Some(caps) = re.captures(inner)
            && let (Some(keyword), Some(trailing)) = (caps.get(1), caps.get(2))
        {
            let content = format!("<p>{}</p>", trailing.as_str());
            return Some((keyword.as_str(), content));
        }
    }

    None
}

/// Drops whitespace-only paragraph elements and trims the remainder.
fn strip_empty_paragraphs(content: &str) -> String {
    EMPTY_PARAGRAPH.replace_all(content, "").trim().to_string()
}

/// Renders the alert container markup for a cleaned body.
fn render_alert(kind: AlertType, content: &str) -> String {
    format!(
        r#"<div class="{ALERT_CLASS} {ALERT_CLASS}-{class}"><div class="{ALERT_CLASS}-title">{icon}<span>[!{keyword}]</span></div><div class="{ALERT_CLASS}-content">{content}</div></div>"#,
        class = kind.css_class(),
        icon = kind.icon(),
        keyword = kind.keyword(),
    )
}
