//! Model artifact resolution
//!
//! The predictor is deserialized from a single artifact file. The artifact
//! either already sits on local disk or is fetched once from a remote URL
//! into the cache directory and reused on every later start.

use respira_core::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Source location for the model artifact
#[derive(Debug, Clone)]
pub enum ArtifactSource {
    /// Load from the local file system
    LocalPath(PathBuf),

    /// Download from a remote URL into the cache directory
    RemoteUrl {
        url: String,
        /// File name the artifact is cached under
        filename: String,
    },
}

/// Configuration for resolving the model artifact
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    /// Source of the artifact
    pub source: ArtifactSource,

    /// Directory remote artifacts are cached in
    pub cache_dir: PathBuf,
}

impl ArtifactConfig {
    /// Create a configuration from a local artifact path
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ArtifactSource::LocalPath(path.into()),
            cache_dir: default_cache_dir(),
        }
    }

    /// Create a configuration from a remote URL
    pub fn from_url(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            source: ArtifactSource::RemoteUrl {
                url: url.into(),
                filename: filename.into(),
            },
            cache_dir: default_cache_dir(),
        }
    }

    /// Set the cache directory
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Path the artifact resolves to, without touching disk or network
    pub fn local_path(&self) -> PathBuf {
        match &self.source {
            ArtifactSource::LocalPath(path) => path.clone(),
            ArtifactSource::RemoteUrl { filename, .. } => self.cache_dir.join(filename),
        }
    }

    /// Resolve the artifact to a local file, downloading it if absent.
    ///
    /// A cached file is returned without any network traffic. A missing
    /// remote artifact triggers exactly one download attempt; there is no
    /// retry since the service cannot start without a model.
    pub async fn ensure_local(&self) -> Result<PathBuf> {
        match &self.source {
            ArtifactSource::LocalPath(path) => {
                if !path.exists() {
                    return Err(Error::artifact(format!(
                        "model artifact not found: {}",
                        path.display()
                    )));
                }
                Ok(path.clone())
            }
            ArtifactSource::RemoteUrl { url, filename } => {
                let target = self.cache_dir.join(filename);
                if target.exists() {
                    return Ok(target);
                }

                info!(url = %url, target = %target.display(), "downloading model artifact");
                download(url, &self.cache_dir, &target).await?;
                Ok(target)
            }
        }
    }
}

/// Default cache directory for downloaded artifacts
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("respira")
}

/// Fetch `url` into `target`, going through a temporary file so a failed
/// download never leaves a partial artifact behind.
async fn download(url: &str, cache_dir: &Path, target: &Path) -> Result<()> {
    tokio::fs::create_dir_all(cache_dir).await?;

    let mut response = reqwest::get(url)
        .await
        .map_err(|e| Error::artifact(format!("failed to fetch model artifact: {}", e)))?
        .error_for_status()
        .map_err(|e| Error::artifact(format!("model artifact fetch rejected: {}", e)))?;

    let tmp_path = target.with_extension("download");
    let mut file = tokio::fs::File::create(&tmp_path).await?;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| Error::artifact(format!("model artifact download interrupted: {}", e)))?
    {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp_path, target).await?;
    Ok(())
}
