//! News article types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article loaded from `news.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub image_url: String,
    pub published_at: DateTime<Utc>,
}

/// Sort articles newest first. Ties keep their input order.
pub fn sort_newest_first(articles: &mut [NewsArticle]) {
    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, published_at: &str) -> NewsArticle {
        NewsArticle {
            id: id.to_string(),
            title: format!("Articolo {id}"),
            content: String::new(),
            excerpt: String::new(),
            image_url: String::new(),
            published_at: published_at.parse().expect("valid RFC 3339 timestamp"),
        }
    }

    #[test]
    fn newest_article_sorts_first() {
        let mut articles = vec![
            article("old", "2024-06-01T09:00:00Z"),
            article("new", "2025-03-12T10:30:00Z"),
            article("mid", "2024-11-20T08:15:00Z"),
        ];
        sort_newest_first(&mut articles);
        let ids: Vec<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
