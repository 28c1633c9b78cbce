use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::article::Category;

#[derive(Debug, Clone, Default)]
struct NotifiedData {
    // category -> ordered list of notified article ids
    news: Vec<String>,
    blogs: Vec<String>,
}

impl NotifiedData {
    fn ids(&self, category: Category) -> &Vec<String> {
        match category {
            Category::News => &self.news,
            Category::Blog => &self.blogs,
        }
    }

    fn ids_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::News => &mut self.news,
            Category::Blog => &mut self.blogs,
        }
    }
}

/// Outcome of reading one category's persisted identifiers. `Missing`
/// and `Corrupt` both collapse to an empty sequence for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<String>),
    Missing,
    Corrupt,
}

impl LoadOutcome {
    pub fn into_ids(self) -> Vec<String> {
        match self {
            LoadOutcome::Loaded(ids) => ids,
            LoadOutcome::Missing | LoadOutcome::Corrupt => Vec::new(),
        }
    }
}

pub async fn load_recorded_ids(path: &Path) -> LoadOutcome {
    match tokio::fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<String>>(&bytes) {
            Ok(ids) => LoadOutcome::Loaded(ids),
            Err(err) => {
                warn!(error = %err, path = %path.display(), "failed to parse notified ids, treating as empty");
                LoadOutcome::Corrupt
            }
        },
        Err(_) => LoadOutcome::Missing,
    }
}

/// Persistent record of which article ids have already triggered a
/// notification, one ordered sequence per category.
#[derive(Debug, Clone)]
pub struct NotifiedStore {
    inner: Arc<RwLock<NotifiedData>>,
    dir: Option<PathBuf>,
    initialized: Arc<AtomicBool>,
}

impl NotifiedStore {
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(NotifiedData::default())),
            dir: None,
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Store backed by JSON files under `dir`. Nothing is read until
    /// [`initialize`](Self::initialize) runs.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(NotifiedData::default())),
            dir: Some(dir.as_ref().to_path_buf()),
            initialized: Arc::new(AtomicBool::new(false)),
        }
    }

    fn key_path(&self, category: Category) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.json", category.storage_key())))
    }

    /// Load the persisted sequences. Returns false (and does nothing)
    /// when the store was already initialized.
    pub async fn initialize(&self) -> bool {
        if self.initialized.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Some(dir) = &self.dir {
            if let Err(err) = tokio::fs::create_dir_all(dir).await {
                warn!(error = %err, "failed to create state dir");
            }
        }
        let mut inner = self.inner.write().await;
        for category in Category::ALL {
            if let Some(path) = self.key_path(category) {
                *inner.ids_mut(category) = load_recorded_ids(&path).await.into_ids();
            }
        }
        true
    }

    pub async fn contains(&self, category: Category, id: &str) -> bool {
        let inner = self.inner.read().await;
        inner.ids(category).iter().any(|known| known == id)
    }

    /// Append `id` to the category's sequence. Appends are not
    /// deduplicated here; callers record each id at most once per cycle.
    pub async fn record(&self, category: Category, id: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.ids_mut(category).push(id.into());
    }

    /// Ordered snapshot of the ids recorded for a category.
    pub async fn recorded_ids(&self, category: Category) -> Vec<String> {
        self.inner.read().await.ids(category).clone()
    }

    /// Write the category's full sequence to its key file, atomically.
    pub async fn persist(&self, category: Category) -> Result<(), std::io::Error> {
        let Some(path) = self.key_path(category) else {
            debug!("store is in-memory only; skipping persist");
            return Ok(());
        };
        let bytes = {
            let inner = self.inner.read().await;
            serde_json::to_vec_pretty(inner.ids(category)).expect("serialize notified ids")
        };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    /// Drop both in-memory sequences and remove both key files.
    pub async fn reset(&self) {
        {
            let mut inner = self.inner.write().await;
            inner.news.clear();
            inner.blogs.clear();
        }
        for category in Category::ALL {
            if let Some(path) = self.key_path(category) {
                let _ = tokio::fs::remove_file(&path).await;
            }
        }
        info!("notification history reset");
    }

    pub async fn stats(&self) -> StoreStats {
        let inner = self.inner.read().await;
        StoreStats {
            notified_news: inner.news.len(),
            notified_blogs: inner.blogs.len(),
            total: inner.news.len() + inner.blogs.len(),
            initialized: self.initialized.load(Ordering::SeqCst),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub notified_news: usize,
    pub notified_blogs: usize,
    pub total: usize,
    pub initialized: bool,
}
