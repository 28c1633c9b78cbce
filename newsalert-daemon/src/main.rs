use std::sync::Arc;
use std::time::Duration;

use newsalert_core::{
    spawn_scheduler, AlertService, AppConfig, Category, HttpArticleLoader, HttpSubscriberNotifier,
    NotifiedStore,
};
use reqwest::ClientBuilder;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::load();
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.delivery.request_timeout_secs))
        .user_agent("NewsAlert/0.1")
        .build()
        .expect("failed to build HTTP client");

    let store = NotifiedStore::open(AppConfig::state_dir());
    let news = Arc::new(HttpArticleLoader::new(
        client.clone(),
        config.content.news_url.clone(),
        Category::News,
    ));
    let blogs = Arc::new(HttpArticleLoader::new(
        client.clone(),
        config.content.blogs_url.clone(),
        Category::Blog,
    ));
    let notifier = Arc::new(HttpSubscriberNotifier::new(
        client,
        config.delivery.endpoint.clone(),
    ));

    let service = Arc::new(AlertService::new(store, news, blogs, notifier));
    service.initialize().await;

    let scheduler = spawn_scheduler(service.clone(), config.schedule.schedule_config());

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => error!(error = %err, "failed to listen for shutdown signal"),
    }
    if let Err(err) = scheduler.stop().await {
        error!(error = %err, "scheduler did not stop cleanly");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
