pub mod article;
pub mod config;
pub mod error;
pub mod loader;
pub mod notifier;
pub mod recency;
pub mod scheduler;
pub mod service;
pub mod store;

pub use article::{slugify, Article, ArticleNotice, Category};
pub use config::{AppConfig, ContentSettings, DeliverySettings, ScheduleSettings};
pub use error::AlertError;
pub use loader::{ArticleLoader, HttpArticleLoader};
pub use notifier::{DeliveryReport, HttpSubscriberNotifier, SubscriberNotifier};
pub use recency::{is_recent, RECENCY_WINDOW_DAYS};
pub use scheduler::{spawn_scheduler, ScheduleConfig, SchedulerHandle};
pub use service::{AlertService, CycleSummary};
pub use store::{load_recorded_ids, LoadOutcome, NotifiedStore, StoreStats};
