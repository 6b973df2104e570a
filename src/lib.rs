//! README preview generator with GitHub-styled rendering.

mod assets;
pub mod components;
mod config;
mod markdown;
pub mod pages;
mod readme;

pub use assets::write_css_assets;
pub use config::Config;
pub use markdown::{AlertType, MarkdownRenderer, process_alerts};
pub use readme::{README_VARIANTS, find_readme, is_readme};
