use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Blog,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::News, Category::Blog];

    /// Fixed key under which this category's notified ids are persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Category::News => "notified_news",
            Category::Blog => "notified_blogs",
        }
    }

    /// Site section the category's articles are anchored under.
    pub fn section_path(self) -> &'static str {
        match self {
            Category::News => "/news",
            Category::Blog => "/blogs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::News => write!(f, "news"),
            Category::Blog => write!(f, "blog"),
        }
    }
}

/// One published article as reported by a content loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub category: Category,
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload handed to the email-delivery collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleNotice {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub category: Category,
}

impl From<&Article> for ArticleNotice {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            url: article.url.clone(),
            category: article.category,
        }
    }
}

/// Derive a url-safe identifier from an article title.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
