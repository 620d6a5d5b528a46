use super::category::CATEGORY_NEW;
use super::types::{NewResource, Resource};

use anyhow::Result;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memoizing loader for the per-category resource datasets.
///
/// Constructed once at startup and shared behind an `Arc`. Each category's
/// dataset is read from `<data_dir>/<category>.json` on first request and
/// cached for the lifetime of the process. Cached datasets are immutable
/// snapshots; the only eviction is the `new-url` entry after an append, so the
/// next read observes the updated file.
pub struct CatalogStore {
    data_dir: PathBuf,
    cache: DashMap<String, Arc<Vec<Resource>>>,
    file_reads: AtomicU64,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: DashMap::new(),
            file_reads: AtomicU64::new(0),
        }
    }

    /// Loads the dataset for `category`, serving the cached snapshot when one
    /// exists.
    ///
    /// A missing backing file is not an error: callers get an empty dataset and
    /// a warning is logged. Parse and I/O failures are likewise swallowed to an
    /// empty dataset; this method never propagates an error.
    pub async fn load(&self, category: &str) -> Arc<Vec<Resource>> {
        if let Some(cached) = self.cache.get(category) {
            tracing::debug!("Cache hit for category {}", category);
            return cached.clone();
        }

        let path = self.file_path(category);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::warn!("Category file not found: {}", path.display());
            return Arc::new(Vec::new());
        }

        let resources = match self.read_resources(&path).await {
            Ok(resources) => Arc::new(resources),
            Err(e) => {
                tracing::error!("Error loading resources for category {}: {}", category, e);
                return Arc::new(Vec::new());
            }
        };

        self.cache.insert(category.to_string(), resources.clone());
        resources
    }

    /// Appends an accepted submission to the pending `new-url` dataset.
    ///
    /// The record gets a generated id, a `createdAt` stamp, and the `new-url`
    /// category. The cache entry is evicted only after the file write has
    /// completed, so a concurrent read cannot re-cache the stale list.
    pub async fn append_new_resource(&self, submission: NewResource) -> Result<Resource> {
        let path = self.file_path(CATEGORY_NEW);

        let mut pending = if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            self.read_resources(&path).await.unwrap_or_default()
        } else {
            Vec::new()
        };

        let resource = Resource {
            id: uuid::Uuid::new_v4().to_string(),
            name: submission.name,
            description: submission.description,
            url: submission.url,
            icon: submission.icon,
            category: CATEGORY_NEW.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        pending.push(resource.clone());

        let json = serde_json::to_string_pretty(&pending)?;
        tokio::fs::write(&path, json).await?;

        self.cache.remove(CATEGORY_NEW);

        tracing::info!("Appended new resource {} ({})", resource.id, resource.url);
        Ok(resource)
    }

    /// Number of backing-file reads performed so far.
    pub fn file_reads(&self) -> u64 {
        self.file_reads.load(Ordering::Relaxed)
    }

    fn file_path(&self, category: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", category))
    }

    async fn read_resources(&self, path: &Path) -> Result<Vec<Resource>> {
        self.file_reads.fetch_add(1, Ordering::Relaxed);

        let data = tokio::fs::read_to_string(path).await?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&data)?;

        let mut resources = Vec::with_capacity(raw.len());
        for entry in raw {
            match serde_json::from_value::<Resource>(entry) {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    tracing::warn!("Quarantined malformed entry in {}: {}", path.display(), e);
                }
            }
        }

        Ok(resources)
    }
}
