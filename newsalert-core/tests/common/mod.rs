#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use newsalert_core::{
    AlertError, Article, ArticleLoader, ArticleNotice, Category, DeliveryReport,
    SubscriberNotifier,
};

pub fn temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "newsalert_{}_{}",
        prefix,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

pub fn article(id: &str, category: Category, age_days: i64) -> Article {
    Article {
        id: id.to_string(),
        title: format!("Article {id}"),
        excerpt: "excerpt".to_string(),
        url: format!("{}#{id}", category.section_path()),
        category,
        published_at: Some(Utc::now() - chrono::Duration::days(age_days)),
    }
}

pub struct StaticLoader(pub Vec<Article>);

#[async_trait]
impl ArticleLoader for StaticLoader {
    async fn load(&self) -> Result<Vec<Article>, AlertError> {
        Ok(self.0.clone())
    }
}

pub struct FailingLoader;

#[async_trait]
impl ArticleLoader for FailingLoader {
    async fn load(&self) -> Result<Vec<Article>, AlertError> {
        Err(AlertError::Other("content source unavailable".to_string()))
    }
}

pub struct SlowLoader {
    pub articles: Vec<Article>,
    pub delay: Duration,
}

#[async_trait]
impl ArticleLoader for SlowLoader {
    async fn load(&self) -> Result<Vec<Article>, AlertError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.articles.clone())
    }
}

#[derive(Default)]
pub struct CountingNotifier {
    notified: Mutex<Vec<String>>,
}

impl CountingNotifier {
    pub fn count(&self) -> usize {
        self.notified.lock().unwrap().len()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notified.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriberNotifier for CountingNotifier {
    async fn notify(&self, notice: &ArticleNotice) -> Result<DeliveryReport, AlertError> {
        self.notified.lock().unwrap().push(notice.title.clone());
        Ok(DeliveryReport {
            success: 3,
            failed: 0,
        })
    }
}

pub struct FailingNotifier;

#[async_trait]
impl SubscriberNotifier for FailingNotifier {
    async fn notify(&self, _notice: &ArticleNotice) -> Result<DeliveryReport, AlertError> {
        Err(AlertError::Other("delivery endpoint down".to_string()))
    }
}
