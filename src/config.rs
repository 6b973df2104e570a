//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command line configuration for Readview.
#[derive(Debug, Clone, Parser)]
#[command(name = "readview", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to preview (defaults to the README in the current directory)
    pub file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "preview")]
    pub output: PathBuf,

    /// Page title shown in the preview header
    #[arg(long)]
    pub title: Option<String>,

    /// Skip opening the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an explicitly named file does not exist.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file
            && !file.exists()
        {
            bail!("File does not exist: {}", file.display());
        }

        Ok(())
    }

    /// Returns the page title from configuration or the previewed file name.
    ///
    /// # Errors
    ///
    /// Returns error if the file path has no name component or contains invalid UTF8.
    pub fn page_title(&self, file: &Path) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        file.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot derive a page title from path: {}", file.display()))
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_with_explicit_title() {
        // Arrange
        let config = Config {
            file: None,
            output: PathBuf::from("preview"),
            title: Some("My Project".to_string()),
            no_open: false,
        };

        // Act
        let result = config.page_title(Path::new("README.md"));

        // Assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "My Project");
    }

    #[test]
    fn test_page_title_from_file_name() {
        // Arrange
        let config = Config {
            file: Some(PathBuf::from("docs/README.md")),
            output: PathBuf::from("preview"),
            title: None,
            no_open: false,
        };

        // Act
        let result = config.page_title(Path::new("docs/README.md"));

        // Assert
        assert!(result.is_ok());
        assert_eq!(
            result.unwrap(),
            "README.md",
            "Title should fall back to the file name"
        );
    }

    #[test]
    fn test_validate_without_file() {
        // Arrange: no explicit file means the README is discovered later
        let config = Config {
            file: None,
            output: PathBuf::from("preview"),
            title: None,
            no_open: true,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Missing positional file is not an error");
    }

    #[test]
    fn test_validate_missing_file() {
        // Arrange
        let config = Config {
            file: Some(PathBuf::from("/nonexistent/readme-that-is-not-there.md")),
            output: PathBuf::from("preview"),
            title: None,
            no_open: true,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Explicitly named file must exist");
    }

    #[test]
    fn test_validate_existing_file() {
        // Arrange
        let config = Config {
            file: Some(PathBuf::from(".")),
            output: PathBuf::from("preview"),
            title: None,
            no_open: true,
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Existing path should pass validation");
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = Config {
            file: Some(PathBuf::from("/test/README.md")),
            output: PathBuf::from("out"),
            title: Some("test".to_string()),
            no_open: true,
        };

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.file, original.file);
        assert_eq!(cloned.output, original.output);
        assert_eq!(cloned.title, original.title);
        assert_eq!(cloned.no_open, original.no_open);
    }

    #[test]
    fn test_config_debug_format() {
        // Arrange
        let config = Config {
            file: None,
            output: PathBuf::from("preview"),
            title: None,
            no_open: false,
        };

        // Act
        let debug_str = format!("{:?}", config);

        // Assert
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("output"));
    }
}
