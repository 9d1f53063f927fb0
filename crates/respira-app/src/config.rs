//! Application configuration

use respira_model::ArtifactConfig;
use std::path::PathBuf;

/// Remote location the pre-trained model artifact is published at
pub const DEFAULT_ARTIFACT_URL: &str =
    "https://drive.google.com/uc?id=1EICSdhQrmz8kpFvbhkK9EV8BMX1vfy_T";

/// File name the artifact is cached under
pub const DEFAULT_ARTIFACT_FILENAME: &str = "asthma_disease_rf_optimized.json";

/// Configuration assembled from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote artifact URL, fetched once on first run
    pub artifact_url: String,

    /// Explicit local artifact file; set, it overrides the download path
    pub artifact_path: Option<PathBuf>,

    /// Cache directory override for downloaded artifacts
    pub cache_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifact_url: DEFAULT_ARTIFACT_URL.to_string(),
            artifact_path: None,
            cache_dir: None,
        }
    }
}

impl AppConfig {
    /// Artifact resolution config for this application config
    pub fn artifact_config(&self) -> ArtifactConfig {
        let config = match &self.artifact_path {
            Some(path) => ArtifactConfig::from_local(path.clone()),
            None => ArtifactConfig::from_url(self.artifact_url.clone(), DEFAULT_ARTIFACT_FILENAME),
        };
        match &self.cache_dir {
            Some(dir) => config.with_cache_dir(dir.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respira_model::ArtifactSource;

    #[test]
    fn local_path_overrides_the_download() {
        let config = AppConfig {
            artifact_path: Some(PathBuf::from("/models/forest.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.artifact_config().source,
            ArtifactSource::LocalPath(_)
        ));
    }

    #[test]
    fn default_config_downloads_into_the_cache() {
        let config = AppConfig::default();
        let artifact = config.artifact_config();
        assert!(matches!(artifact.source, ArtifactSource::RemoteUrl { .. }));
        assert!(artifact
            .local_path()
            .ends_with(DEFAULT_ARTIFACT_FILENAME));
    }
}
