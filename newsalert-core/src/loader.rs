use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::article::{Article, Category};
use crate::error::AlertError;

/// Source of the current article list for one content category.
#[async_trait]
pub trait ArticleLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<Article>, AlertError>;
}

/// Loader backed by the site's JSON article index.
pub struct HttpArticleLoader {
    client: Client,
    url: String,
    category: Category,
}

impl HttpArticleLoader {
    pub fn new(client: Client, url: impl Into<String>, category: Category) -> Self {
        Self {
            client,
            url: url.into(),
            category,
        }
    }
}

#[async_trait]
impl ArticleLoader for HttpArticleLoader {
    async fn load(&self) -> Result<Vec<Article>, AlertError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let raw: Vec<RawArticle> = response.json().await?;
        Ok(raw
            .into_iter()
            .filter_map(|article| article.into_article(self.category))
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    date: Option<String>,
}

impl RawArticle {
    fn into_article(self, category: Category) -> Option<Article> {
        let RawArticle {
            id,
            slug,
            title,
            excerpt,
            url,
            date,
        } = self;
        let Some(resolved_id) = id.or_else(|| slug.clone()) else {
            warn!(title = %title, "article has no id or slug, skipping");
            return None;
        };
        let anchor = slug.unwrap_or_else(|| resolved_id.clone());
        let url = url.unwrap_or_else(|| format!("{}#{}", category.section_path(), anchor));
        let published_at = date.as_deref().and_then(parse_publish_date);
        Some(Article {
            id: resolved_id,
            title,
            excerpt,
            url,
            category,
            published_at,
        })
    }
}

// Index dates are RFC 3339 timestamps or bare `YYYY-MM-DD` days; anything
// else is carried as "no date" and filtered out by the recency check.
fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
