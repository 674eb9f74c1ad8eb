//! Chapter book build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use quire_static::{BookBuilder, BuildConfig, Chapter, Registry};
use serde::Deserialize;

/// Configuration file structure (book.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    book: BookSettings,
    /// Ordered chapter list; compiled-in defaults when absent
    #[serde(default)]
    chapter: Vec<Chapter>,
}

#[derive(Debug, Deserialize)]
struct BookSettings {
    #[serde(default = "default_content_dir")]
    content: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_title")]
    title: String,
    /// Path to a page template; built-in template when absent
    template: Option<String>,
}

fn default_content_dir() -> String {
    "chapters".to_string()
}
fn default_output() -> String {
    "book".to_string()
}
fn default_title() -> String {
    "Documentation".to_string()
}

// Matches the serde defaults so an absent book.toml behaves like an empty one
impl Default for BookSettings {
    fn default() -> Self {
        Self {
            content: default_content_dir(),
            output: default_output(),
            title: default_title(),
            template: None,
        }
    }
}

/// Load configuration from book.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building chapter book...");

    let file_config = load_config(config_path)?;

    let chapters = if file_config.chapter.is_empty() {
        Registry::default_chapters()
    } else {
        file_config.chapter
    };

    // Paths in the config file are relative to the file itself
    let root = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let config = BuildConfig {
        content_dir: root.join(&file_config.book.content),
        output_dir: output.unwrap_or_else(|| root.join(&file_config.book.output)),
        template: file_config.book.template.map(|t| root.join(t)),
        title: file_config.book.title,
        chapters,
    };

    let result = BookBuilder::new(config)?.build()?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
