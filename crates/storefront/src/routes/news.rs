//! News route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{DateTime, Datelike, Utc};
use tracing::instrument;

use nautic_core::NewsArticle;

use crate::error::AppError;
use crate::filters;
use crate::routes::vendita::PLACEHOLDER_IMAGE;
use crate::state::AppState;

/// Article display data for templates.
#[derive(Clone)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub published_at: String,
    pub href: String,
}

impl From<&NewsArticle> for ArticleView {
    fn from(article: &NewsArticle) -> Self {
        let image_url = if article.image_url.is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            article.image_url.clone()
        };

        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            image_url,
            published_at: format_date_it(article.published_at),
            href: format!("/news/{}", urlencoding::encode(&article.id)),
        }
    }
}

/// Italian month names, indexed by `month0`.
const MONTHS_IT: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Format a publish date the way the site reads: "12 marzo 2025".
fn format_date_it(date: DateTime<Utc>) -> String {
    let month = MONTHS_IT
        .get(date.month0() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {month} {}", date.day(), date.year())
}

/// News index page template.
///
/// The first (newest) article renders as the featured entry; the rest as
/// cards.
#[derive(Template, WebTemplate)]
#[template(path = "news/index.html")]
pub struct NewsIndexTemplate {
    pub articles: Vec<ArticleView>,
}

/// News article detail template.
#[derive(Template, WebTemplate)]
#[template(path = "news/show.html")]
pub struct NewsShowTemplate {
    pub article: ArticleView,
}

/// Display the news index, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let articles = state
        .catalog()
        .news()
        .await
        .iter()
        .map(ArticleView::from)
        .collect();

    NewsIndexTemplate { articles }
}

/// Display a single news article by id.
///
/// # Errors
///
/// Returns 404 if the article doesn't exist.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article = state
        .catalog()
        .find_article(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("articolo {id}")))?;

    Ok(NewsShowTemplate {
        article: ArticleView::from(&article),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_in_italian() {
        let date: DateTime<Utc> = "2025-03-12T10:30:00Z".parse().expect("valid timestamp");
        assert_eq!(format_date_it(date), "12 marzo 2025");

        let new_year: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().expect("valid timestamp");
        assert_eq!(format_date_it(new_year), "1 gennaio 2024");
    }
}
