//! Initialize a chapter book in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quire_static::templates::PAGE_TEMPLATE;
use quire_static::Registry;

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing quire...");
    scaffold(Path::new("."), yes)
}

/// Scaffold config, chapter sources, and a page template under `root`.
fn scaffold(root: &Path, yes: bool) -> Result<()> {
    let chapters_dir = root.join("chapters");

    if !chapters_dir.exists() {
        fs::create_dir_all(&chapters_dir).context("Failed to create chapters directory")?;
    }

    // Create default config
    let config_path = root.join("book.toml");
    if !config_path.exists() || yes {
        fs::write(&config_path, default_config()).context("Failed to write book.toml")?;
        tracing::info!("Created book.toml");
    }

    // Create page template
    let template_path = root.join("page.html");
    if !template_path.exists() || yes {
        fs::write(&template_path, PAGE_TEMPLATE).context("Failed to write page.html")?;
        tracing::info!("Created page.html");
    }

    // Create a starter source per chapter
    for chapter in Registry::default().iter() {
        let path = chapters_dir.join(format!("{}.md", chapter.id));
        if !path.exists() || yes {
            fs::write(&path, format!("# {}\n\nWrite this chapter.\n", chapter.title))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created chapters/{}.md", chapter.id);
        }
    }

    tracing::info!("Done. Run `quire build` to generate the book.");

    Ok(())
}

/// Default book.toml listing the compiled-in chapters explicitly.
fn default_config() -> String {
    let mut config = String::from(
        "[book]\ncontent = \"chapters\"\noutput = \"book\"\ntitle = \"Documentation\"\ntemplate = \"page.html\"\n",
    );
    for chapter in Registry::default().iter() {
        config.push_str(&format!(
            "\n[[chapter]]\nid = \"{}\"\ntitle = \"{}\"\n",
            chapter.id, chapter.title
        ));
    }
    config
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn scaffolds_config_template_and_chapters() {
        let temp = tempdir().unwrap();

        scaffold(temp.path(), false).unwrap();

        assert!(temp.path().join("book.toml").exists());
        assert!(temp.path().join("page.html").exists());
        for chapter in Registry::default().iter() {
            assert!(temp
                .path()
                .join("chapters")
                .join(format!("{}.md", chapter.id))
                .exists());
        }
    }

    #[test]
    fn keeps_existing_files_without_yes() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("book.toml"), "# mine").unwrap();

        scaffold(temp.path(), false).unwrap();

        let config = fs::read_to_string(temp.path().join("book.toml")).unwrap();
        assert_eq!(config, "# mine");
    }

    #[test]
    fn yes_overwrites_existing_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("book.toml"), "# mine").unwrap();

        scaffold(temp.path(), true).unwrap();

        let config = fs::read_to_string(temp.path().join("book.toml")).unwrap();
        assert!(config.contains("[book]"));
    }

    #[test]
    fn scaffolded_config_parses_and_builds() {
        let temp = tempdir().unwrap();

        scaffold(temp.path(), false).unwrap();

        // The generated layout must build as-is
        super::super::build::run(&temp.path().join("book.toml"), None).unwrap();
    }
}
