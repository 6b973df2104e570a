//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::markdown::AlertType;

const PAGE: &str = include_str!("../assets/page.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
///
/// Bundles the page shell and markdown body styles with the generated
/// alert theme rules into a single preview.css.
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    let alert_themes = alert_theme_css();
    write_bundled(assets_dir, "preview.css", &[PAGE, MARKDOWN, &alert_themes])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

/// Generates per-type alert theme rules from the alert color table.
///
/// [`AlertType`] is the single source of truth for accent colors: the
/// border, title, and icon use the solid color while the background uses a
/// translucent derivation of the same value.
fn alert_theme_css() -> String {
    let mut css = String::from("/* GitHub alert themes */\n");

    for kind in AlertType::ALL {
        let class = kind.css_class();
        let color = kind.color();
        let background = translucent(color).unwrap_or_else(|| color.to_string());

        css.push_str(&format!(
            "
.markdown-alert-{class} {{
  border-left-color: {color};
  background-color: {background};
}}

.markdown-alert-{class} .markdown-alert-title {{
  color: {color};
}}

.markdown-alert-{class} .octicon {{
  fill: {color};
}}
"
        ));
    }

    css
}

/// Converts a `#rrggbb` color to a 10% opacity `rgba()` value.
fn translucent(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

    Some(format!("rgba({}, {}, {}, 0.1)", r, g, b))
}
