//! Chapter book builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::registry::{Chapter, Registry};
use crate::templates::{PageContext, TemplateEngine};

/// Configuration for building a chapter book.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding one Markdown file per chapter
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Path to a page template, or None for the built-in one
    pub template: Option<PathBuf>,

    /// Site title
    pub title: String,

    /// Ordered chapter list
    pub chapters: Vec<Chapter>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("chapters"),
            output_dir: PathBuf::from("book"),
            template: None,
            title: "Documentation".to_string(),
            chapters: Registry::default_chapters(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read chapter source: {0}")]
    ReadError(String),

    #[error("Failed to load or compile template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Duplicate chapter id: {0}")]
    DuplicateChapter(String),
}

/// Chapter book builder.
///
/// Processes chapters strictly in registry order, one at a time; the first
/// failure aborts the run and leaves already-written pages in place.
pub struct BookBuilder {
    content_dir: PathBuf,
    output_dir: PathBuf,
    site_title: String,
    registry: Registry,
    templates: TemplateEngine,
}

impl BookBuilder {
    /// Create a builder, validating the registry and compiling the template.
    ///
    /// Fails before any page is processed if a chapter id is duplicated or the
    /// template is missing or malformed.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        let registry = Registry::new(config.chapters);

        if let Some(id) = registry.duplicate_id() {
            return Err(BuildError::DuplicateChapter(id.to_string()));
        }

        let templates = match config.template {
            Some(path) => {
                let source = fs::read_to_string(&path).map_err(|e| {
                    BuildError::TemplateError(format!("{}: {}", path.display(), e))
                })?;
                TemplateEngine::with_source(source).map_err(|e| {
                    BuildError::TemplateError(format!("{}: {}", path.display(), e))
                })?
            }
            None => TemplateEngine::new(),
        };

        Ok(Self {
            content_dir: config.content_dir,
            output_dir: config.output_dir,
            site_title: config.title,
            registry,
            templates,
        })
    }

    /// Build one HTML page per chapter.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        for (index, chapter) in self.registry.iter().enumerate() {
            self.build_page(index, chapter)?;
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: self.registry.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.output_dir.clone(),
        })
    }

    /// Build the page for the chapter at `index`.
    fn build_page(&self, index: usize, chapter: &Chapter) -> Result<(), BuildError> {
        let source_path = self.content_dir.join(format!("{}.md", chapter.id));

        // Opaque passthrough, no Markdown parsing here
        let content = fs::read_to_string(&source_path)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", source_path.display(), e)))?;

        let (premenu, postmenu) = self.registry.split_menu(index);

        let page = PageContext {
            title: chapter.title.clone(),
            site_title: self.site_title.clone(),
            path_to_root: String::new(),
            content,
            premenu,
            postmenu,
        };

        let html = self
            .templates
            .render_page(&page)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let output_path = self.output_dir.join(format!("{}.html", chapter.id));
        fs::write(&output_path, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", output_path.display(), e)))?;

        tracing::debug!("Rendered {}", output_path.display());

        Ok(())
    }
}
