//! Template engine for rendering chapter pages.

use minijinja::{context, Environment};

/// A navigation link to one chapter.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MenuEntry {
    /// Relative URL of the chapter page
    pub link: String,
    /// Display title
    pub title: String,
}

/// Context for rendering one chapter page.
///
/// Serialized field names are the template contract: `title`, `pathToRoot`,
/// `content`, `premenu`, `postmenu`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Chapter title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Prefix from the page to the site root, empty for a flat site
    #[serde(rename = "pathToRoot")]
    pub path_to_root: String,
    /// Raw chapter content, passed through to the template untouched
    pub content: String,
    /// Menu entries for chapters before this one, in order
    pub premenu: Vec<MenuEntry>,
    /// Menu entries for chapters after this one, in order
    pub postmenu: Vec<MenuEntry>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with the default page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Create an engine from user-supplied template source.
    ///
    /// Fails if the source does not compile.
    pub fn with_source(source: String) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template_owned("page.html".to_string(), source)?;
        Ok(Self { env })
    }

    /// Render one chapter page.
    pub fn render_page(&self, page: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &page.title,
            site_title => &page.site_title,
            pathToRoot => &page.path_to_root,
            content => &page.content,
            premenu => &page.premenu,
            postmenu => &page.postmenu,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Default page template, also written out by `quire init` for customization.
pub const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="{{ pathToRoot }}style.css">
</head>
<body>
  <nav class="chapter-menu">
    <a href="{{ pathToRoot }}" class="site-title">{{ site_title }}</a>
    <ul>
{% for entry in premenu %}      <li><a href="{{ pathToRoot }}{{ entry.link }}">{{ entry.title }}</a></li>
{% endfor %}      <li class="current">{{ title }}</li>
{% for entry in postmenu %}      <li><a href="{{ pathToRoot }}{{ entry.link }}">{{ entry.title }}</a></li>
{% endfor %}    </ul>
  </nav>
  <main class="chapter">
    <h1>{{ title }}</h1>
{{ content | safe }}
  </main>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(link: &str, title: &str) -> MenuEntry {
        MenuEntry {
            link: link.to_string(),
            title: title.to_string(),
        }
    }

    fn context_for_b() -> PageContext {
        PageContext {
            title: "B".to_string(),
            site_title: "Docs".to_string(),
            path_to_root: String::new(),
            content: "B-content".to_string(),
            premenu: vec![entry("a.html", "A")],
            postmenu: vec![entry("c.html", "C")],
        }
    }

    #[test]
    fn renders_all_contract_fields() {
        let html = TemplateEngine::new().render_page(&context_for_b()).unwrap();

        assert!(html.contains("<title>B - Docs</title>"));
        assert!(html.contains("B-content"));
        assert!(html.contains(r#"<a href="a.html">A</a>"#));
        assert!(html.contains(r#"<a href="c.html">C</a>"#));
    }

    #[test]
    fn site_title_labels_the_menu() {
        let html = TemplateEngine::new().render_page(&context_for_b()).unwrap();

        assert!(html.contains(r#"<a href="" class="site-title">Docs</a>"#));
    }

    #[test]
    fn menu_surrounds_current_chapter() {
        let html = TemplateEngine::new().render_page(&context_for_b()).unwrap();

        let a = html.find("a.html").unwrap();
        let current = html.find(r#"<li class="current">B</li>"#).unwrap();
        let c = html.find("c.html").unwrap();

        assert!(a < current);
        assert!(current < c);
    }

    #[test]
    fn content_is_passed_through_unescaped() {
        let mut page = context_for_b();
        page.content = "<p>raw &amp; ready</p>".to_string();

        let html = TemplateEngine::new().render_page(&page).unwrap();

        assert!(html.contains("<p>raw &amp; ready</p>"));
    }

    #[test]
    fn path_to_root_prefixes_links() {
        let mut page = context_for_b();
        page.path_to_root = "../".to_string();

        let html = TemplateEngine::new().render_page(&page).unwrap();

        assert!(html.contains(r#"<a href="../a.html">A</a>"#));
        assert!(html.contains(r#"href="../style.css""#));
    }

    #[test]
    fn accepts_custom_template_source() {
        let engine =
            TemplateEngine::with_source("{{ title }}: {{ content }}".to_string()).unwrap();

        let html = engine.render_page(&context_for_b()).unwrap();

        assert_eq!(html, "B: B-content");
    }

    #[test]
    fn rejects_malformed_template_source() {
        assert!(TemplateEngine::with_source("{% for x in %}".to_string()).is_err());
    }
}
