use super::splitter::split_blocks;
use crate::config::PipelineConfig;
use crate::errors::PipelineErrors;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Fetches CelesTrak element groups and keeps them in an on-disk cache.
pub struct CatalogManager {
    cache_dir: PathBuf,
    base_url: String,
    max_age: Duration,
}

impl CatalogManager {
    /// Creates a manager caching under the user cache directory.
    pub fn new(config: &PipelineConfig) -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tlescope");
        Self::with_cache_dir(config, cache_dir)
    }

    pub fn with_cache_dir(config: &PipelineConfig, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            base_url: config.celestrak_url.clone(),
            max_age: Duration::from_secs(config.cache_hours * 3600),
        }
    }

    pub fn cache_path(&self, group: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.txt", group))
    }

    /// Returns the blocks of `group`, downloading only when the cache is stale.
    /// A failed download falls back to a stale cache when one exists.
    pub fn get_group(&self, group: &str) -> Result<Vec<String>, PipelineErrors> {
        let cache_path = self.cache_path(group);

        if let Some(age) = cache_age(&cache_path) {
            if age < self.max_age {
                info!(
                    group,
                    minutes = age.as_secs() / 60,
                    "Using cached catalog"
                );
                return self.read_cache(group, &cache_path);
            }
        }

        match self.download_group(group, &cache_path) {
            Ok(blocks) => Ok(blocks),
            Err(e) if cache_path.exists() => {
                warn!(group, error = %e, "Download failed, falling back to stale cache");
                self.read_cache(group, &cache_path)
            }
            Err(e) => Err(e),
        }
    }

    /// Downloads the group unconditionally and rewrites the cache.
    pub fn refresh_group(&self, group: &str) -> Result<Vec<String>, PipelineErrors> {
        self.download_group(group, &self.cache_path(group))
    }

    fn download_group(&self, group: &str, cache_path: &Path) -> Result<Vec<String>, PipelineErrors> {
        info!(group, url = %self.base_url, "Fetching element sets");

        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&self.base_url)
            .query(&[("GROUP", group), ("FORMAT", "tle")])
            .send()?;
        let status = response.status();

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(PipelineErrors::HttpForbidden);
        }
        let response = response.error_for_status()?;
        let body = response.text()?;

        // CelesTrak answers unknown groups with 200 and a plain-text notice
        let blocks = split_blocks(&body);
        if blocks.is_empty() {
            return Err(PipelineErrors::EmptyCatalog(group.to_string()));
        }

        fs::create_dir_all(&self.cache_dir)?;
        fs::write(cache_path, body.as_bytes())?;
        info!(group, count = blocks.len(), "Cached element sets");
        Ok(blocks)
    }

    fn read_cache(&self, group: &str, cache_path: &Path) -> Result<Vec<String>, PipelineErrors> {
        let blocks = split_blocks(&fs::read_to_string(cache_path)?);
        if blocks.is_empty() {
            return Err(PipelineErrors::EmptyCatalog(group.to_string()));
        }
        Ok(blocks)
    }
}

fn cache_age(path: &Path) -> Option<Duration> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(
        SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO),
    )
}
