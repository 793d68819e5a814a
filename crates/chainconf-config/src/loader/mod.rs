//! Manifest loading and environment handling

pub mod env;
pub mod file;
pub mod validation;

pub use env::EnvSnapshot;
pub use file::FileLoader;
pub use validation::ManifestValidator;

use crate::utils::{ConfigUtils, MANIFEST_FILE};
use crate::{ConfigError, ConfigResult, Manifest, ProjectConfig};
use std::path::Path;

/// Main configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load with precedence: explicit path > discovered manifest > built-in
    /// project manifest
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> ConfigResult<Manifest> {
        let search_dirs = ConfigUtils::search_paths();
        Self::load_or_discover(path, &search_dirs).await
    }

    /// Same as [`ConfigLoader::load`], searching only `search_dirs` for a
    /// manifest when no path is given
    pub async fn load_or_discover<P: AsRef<Path>, D: AsRef<Path>>(
        path: Option<P>,
        search_dirs: &[D],
    ) -> ConfigResult<Manifest> {
        if let Some(path) = path {
            return FileLoader::load_auto(path).await;
        }

        match ConfigUtils::find_manifest_in(MANIFEST_FILE, search_dirs) {
            Ok(found) => {
                tracing::info!(path = %found.display(), "Using discovered manifest");
                FileLoader::load_auto(found).await
            }
            Err(ConfigError::FileNotFound(_)) => {
                tracing::debug!("No manifest found, using built-in networks");
                let manifest = Manifest::default();
                manifest.validate()?;
                Ok(manifest)
            }
            Err(e) => Err(e),
        }
    }

    /// Load the manifest and resolve it against an already captured snapshot
    pub async fn load_project<P: AsRef<Path>>(
        path: Option<P>,
        env: &EnvSnapshot,
    ) -> ConfigResult<ProjectConfig> {
        let manifest = Self::load(path).await?;
        Ok(ProjectConfig::resolve(env, &manifest))
    }
}
