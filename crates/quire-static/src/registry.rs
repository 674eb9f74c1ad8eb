//! Ordered chapter registry.

use std::collections::HashSet;

use crate::templates::MenuEntry;

/// A single documentation chapter.
///
/// The identifier names both the Markdown source (`<id>.md`) and the HTML
/// destination (`<id>.html`); the title is what readers see in headings and
/// navigation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chapter {
    /// File stem for source and destination paths
    pub id: String,
    /// Display title
    pub title: String,
}

impl Chapter {
    /// Create a chapter descriptor.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Project this chapter into a navigation link.
    pub fn menu_entry(&self) -> MenuEntry {
        MenuEntry {
            link: format!("{}.html", self.id),
            title: self.title.clone(),
        }
    }
}

/// The fixed, ordered set of chapters for one build.
///
/// Declaration order is load-bearing: it determines output ordering and the
/// before/after menu split for every page.
#[derive(Debug, Clone)]
pub struct Registry {
    chapters: Vec<Chapter>,
}

impl Registry {
    /// Create a registry from an ordered chapter list.
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// The compiled-in chapter list used when no configuration is present.
    pub fn default_chapters() -> Vec<Chapter> {
        vec![
            Chapter::new("introduction", "Introduction"),
            Chapter::new("getting-started", "Getting Started"),
            Chapter::new("configuration", "Configuration"),
            Chapter::new("templates", "Templates"),
            Chapter::new("deployment", "Deployment"),
        ]
    }

    /// First chapter id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.chapters
            .iter()
            .find(|c| !seen.insert(c.id.as_str()))
            .map(|c| c.id.as_str())
    }

    /// Number of chapters.
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Iterate chapters in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chapter> {
        self.chapters.iter()
    }

    /// Menu entries split around the chapter at `index`.
    ///
    /// The first sequence holds entries for chapters before `index` and the
    /// second those after it, both in declaration order. The chapter at
    /// `index` itself appears in neither.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for this registry.
    pub fn split_menu(&self, index: usize) -> (Vec<MenuEntry>, Vec<MenuEntry>) {
        debug_assert!(index < self.chapters.len());
        let premenu = self.chapters[..index].iter().map(Chapter::menu_entry).collect();
        let postmenu = self.chapters[index + 1..]
            .iter()
            .map(Chapter::menu_entry)
            .collect();
        (premenu, postmenu)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Self::default_chapters())
    }
}
