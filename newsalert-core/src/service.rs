use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::article::{slugify, ArticleNotice, Category};
use crate::loader::ArticleLoader;
use crate::notifier::{DeliveryReport, SubscriberNotifier};
use crate::recency::is_recent;
use crate::store::{NotifiedStore, StoreStats};

/// What one poll cycle did. `skipped` is set when the cycle
/// short-circuited because a previous one was still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub notified_news: usize,
    pub notified_blogs: usize,
    pub skipped: bool,
}

/// Checks the news and blog loaders for freshly published articles and
/// notifies subscribers about each at most once, remembering what it
/// already announced across restarts.
pub struct AlertService {
    store: NotifiedStore,
    news: Arc<dyn ArticleLoader>,
    blogs: Arc<dyn ArticleLoader>,
    notifier: Arc<dyn SubscriberNotifier>,
    cycle_gate: Mutex<()>,
}

impl AlertService {
    pub fn new(
        store: NotifiedStore,
        news: Arc<dyn ArticleLoader>,
        blogs: Arc<dyn ArticleLoader>,
        notifier: Arc<dyn SubscriberNotifier>,
    ) -> Self {
        Self {
            store,
            news,
            blogs,
            notifier,
            cycle_gate: Mutex::new(()),
        }
    }

    /// Load previously notified ids from disk. Safe to call more than
    /// once; repeat calls are no-ops.
    pub async fn initialize(&self) {
        if self.store.initialize().await {
            let stats = self.store.stats().await;
            info!(
                news = stats.notified_news,
                blogs = stats.notified_blogs,
                "alert service initialized"
            );
        }
    }

    /// Run one check pass over both categories.
    pub async fn run_cycle(&self) -> CycleSummary {
        let Ok(_guard) = self.cycle_gate.try_lock() else {
            debug!("previous cycle still running, skipping");
            return CycleSummary {
                skipped: true,
                ..Default::default()
            };
        };
        debug!("checking for new content");
        let now = Utc::now();
        let notified_news = self.check_category(Category::News, &self.news, now).await;
        let notified_blogs = self.check_category(Category::Blog, &self.blogs, now).await;
        if notified_news > 0 || notified_blogs > 0 {
            info!(
                news = notified_news,
                blogs = notified_blogs,
                "notification check complete"
            );
        }
        CycleSummary {
            notified_news,
            notified_blogs,
            skipped: false,
        }
    }

    async fn check_category(
        &self,
        category: Category,
        loader: &Arc<dyn ArticleLoader>,
        now: DateTime<Utc>,
    ) -> usize {
        let articles = match loader.load().await {
            Ok(articles) => articles,
            Err(err) => {
                warn!(category = %category, error = %err, "failed to load articles, skipping category this cycle");
                return 0;
            }
        };

        let mut notified = 0;
        for article in articles {
            if !is_recent(article.published_at, now) {
                continue;
            }
            if self.store.contains(category, &article.id).await {
                continue;
            }
            info!(category = %category, title = %article.title, "found new article");
            // Record right after the attempt, whatever the outcome: a
            // failed send is dropped rather than retried.
            self.notify_subscribers(&ArticleNotice::from(&article)).await;
            self.store.record(category, article.id).await;
            notified += 1;
        }

        if notified > 0 {
            if let Err(err) = self.store.persist(category).await {
                warn!(category = %category, error = %err, "failed to persist notified ids");
            }
        }
        notified
    }

    async fn notify_subscribers(&self, notice: &ArticleNotice) -> DeliveryReport {
        match self.notifier.notify(notice).await {
            Ok(report) => {
                info!(title = %notice.title, success = report.success, "notified subscribers");
                if report.failed > 0 {
                    warn!(title = %notice.title, failed = report.failed, "some subscriber notifications failed");
                }
                report
            }
            Err(err) => {
                error!(title = %notice.title, error = %err, "failed to notify subscribers");
                DeliveryReport::default()
            }
        }
    }

    /// Announce a single article outside the scheduled cycle. The id is
    /// taken from the URL fragment, or slugified from the title when the
    /// URL carries none. Returns whether the send+record step as a whole
    /// went through.
    pub async fn manual_notify(&self, notice: ArticleNotice) -> bool {
        self.notify_subscribers(&notice).await;

        let id = notice
            .url
            .split('#')
            .nth(1)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| slugify(&notice.title));
        if !self.store.contains(notice.category, &id).await {
            self.store.record(notice.category, id).await;
        }
        match self.store.persist(notice.category).await {
            Ok(()) => true,
            Err(err) => {
                warn!(category = %notice.category, error = %err, "failed to persist manual notification");
                false
            }
        }
    }

    pub async fn has_notified(&self, category: Category, id: &str) -> bool {
        self.store.contains(category, id).await
    }

    pub async fn stats(&self) -> StoreStats {
        self.store.stats().await
    }

    /// Clear all persisted and in-memory notification history.
    pub async fn reset(&self) {
        self.store.reset().await;
    }
}
