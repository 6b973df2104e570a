use anyhow::{Context, Result};
use readview::Config;
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    // Resolve the file to preview: explicit argument or discovered README
    let file = match config.file.clone().or_else(|| readview::find_readme(".")) {
        Some(file) => file,
        None => {
            eprintln!("Warning: No README found in current directory");
            return Ok(());
        }
    };

    let title = config
        .page_title(&file)
        .context("Failed to determine page title")?;

    // Generate before touching the output directory so a failed read or
    // decode leaves nothing behind
    let html = readview::pages::preview::generate(&file, &title)
        .with_context(|| format!("Failed to generate preview for {}", file.display()))?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create output directory")?;

    readview::write_css_assets(&assets_dir)?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write preview page to {}", index_path.display()))?;

    println!("Generated: {}", index_path.display());

    if !config.no_open
        && let Err(e) = open::that(&index_path)
    {
        eprintln!("Warning: Failed to open preview in browser: {}", e);
    }

    Ok(())
}
