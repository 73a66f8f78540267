//! Content management for markdown-based pages.
//!
//! Static pages (chi siamo, privacy, ...) live as markdown files with YAML
//! frontmatter under `content/pages/`. They are loaded once at startup,
//! parsed with gray_matter, and rendered to HTML with comrak.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Frontmatter metadata for a static page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded pages in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// A missing pages directory is not an error - the store just comes up
    /// empty and the affected routes 404.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;
        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Load all pages from the pages directory.
    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    /// Load a single page from a markdown file.
    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?
            .to_string();

        let (meta, content_html) = parse_page(&content)?;

        Ok(Page {
            slug,
            meta,
            content_html,
        })
    }

    /// Get a page by slug.
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }
}

/// Parse frontmatter and render the markdown body.
fn parse_page(content: &str) -> Result<(PageMeta, String), ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PageMeta> = matter
        .parse(content)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

    Ok((meta, render_markdown(&parsed.content)))
}

/// Render markdown to HTML.
fn render_markdown(markdown: &str) -> String {
    markdown_to_html(markdown, &Options::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frontmatter_and_renders_body() {
        let raw = "---\ntitle: Chi Siamo\ndescription: La nostra storia\n---\n\n# Benvenuti\n\nDal 1985 sul mare.\n";
        let (meta, html) = parse_page(raw).expect("valid page");
        assert_eq!(meta.title, "Chi Siamo");
        assert_eq!(meta.description.as_deref(), Some("La nostra storia"));
        assert!(html.contains("<h1>"));
        assert!(html.contains("Dal 1985 sul mare."));
    }

    #[test]
    fn page_without_frontmatter_is_rejected() {
        assert!(parse_page("# Solo markdown, niente frontmatter\n").is_err());
    }

    #[test]
    fn missing_directory_loads_empty() {
        let store =
            ContentStore::load(Path::new("/nonexistent/nautic-content")).expect("empty store");
        assert!(store.get_page("chi-siamo").is_none());
    }
}
