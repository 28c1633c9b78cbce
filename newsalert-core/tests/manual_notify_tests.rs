mod common;

use std::sync::Arc;

use common::{article, CountingNotifier, StaticLoader};
use newsalert_core::{AlertService, ArticleNotice, Category, NotifiedStore};

fn notice(title: &str, url: &str, category: Category) -> ArticleNotice {
    ArticleNotice {
        title: title.to_string(),
        excerpt: "excerpt".to_string(),
        url: url.to_string(),
        category,
    }
}

fn empty_service(notifier: Arc<CountingNotifier>) -> AlertService {
    AlertService::new(
        NotifiedStore::in_memory(),
        Arc::new(StaticLoader(Vec::new())),
        Arc::new(StaticLoader(Vec::new())),
        notifier,
    )
}

#[tokio::test]
async fn derives_id_from_url_fragment() {
    let svc = empty_service(Arc::new(CountingNotifier::default()));
    svc.initialize().await;

    assert!(svc.manual_notify(notice("X", "/blogs#x-slug", Category::Blog)).await);
    assert!(svc.has_notified(Category::Blog, "x-slug").await);
}

#[tokio::test]
async fn falls_back_to_slugified_title() {
    let svc = empty_service(Arc::new(CountingNotifier::default()));
    svc.initialize().await;

    assert!(
        svc.manual_notify(notice("Breaking News  Today", "/news", Category::News))
            .await
    );
    assert!(svc.has_notified(Category::News, "breaking-news-today").await);
}

#[tokio::test]
async fn manual_notification_blocks_the_scheduled_cycle() {
    let notifier = Arc::new(CountingNotifier::default());
    let svc = AlertService::new(
        NotifiedStore::in_memory(),
        Arc::new(StaticLoader(Vec::new())),
        Arc::new(StaticLoader(vec![article("x-slug", Category::Blog, 1)])),
        notifier.clone(),
    );
    svc.initialize().await;

    svc.manual_notify(notice("X", "/blogs#x-slug", Category::Blog)).await;

    let summary = svc.run_cycle().await;
    assert_eq!(summary.notified_blogs, 0);
    assert_eq!(notifier.count(), 1, "only the manual send went out");
}

#[tokio::test]
async fn manual_notification_persists_immediately() {
    let dir = common::temp_dir("manual_persist");
    let svc = AlertService::new(
        NotifiedStore::open(&dir),
        Arc::new(StaticLoader(Vec::new())),
        Arc::new(StaticLoader(Vec::new())),
        Arc::new(CountingNotifier::default()),
    );
    svc.initialize().await;

    svc.manual_notify(notice("X", "/blogs#x-slug", Category::Blog)).await;

    let reopened = NotifiedStore::open(&dir);
    reopened.initialize().await;
    assert!(reopened.contains(Category::Blog, "x-slug").await);

    let _ = tokio::fs::remove_dir_all(&dir).await;
}

#[tokio::test]
async fn repeated_manual_notifications_keep_ids_unique() {
    let notifier = Arc::new(CountingNotifier::default());
    let svc = empty_service(notifier.clone());
    svc.initialize().await;

    svc.manual_notify(notice("X", "/blogs#x-slug", Category::Blog)).await;
    svc.manual_notify(notice("X", "/blogs#x-slug", Category::Blog)).await;

    assert_eq!(notifier.count(), 2, "each manual call sends");
    assert_eq!(svc.stats().await.notified_blogs, 1, "but the id is recorded once");
}
