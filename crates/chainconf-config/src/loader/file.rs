use crate::{ConfigError, ConfigResult, Manifest};
use std::path::Path;
use tokio::fs;

/// File-based manifest loader
pub struct FileLoader;

impl FileLoader {
    /// Load a manifest from a TOML file
    pub async fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<Manifest> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let manifest: Manifest = toml::from_str(&content)?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a JSON file
    pub async fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<Manifest> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let manifest: Manifest = serde_json::from_str(&content)?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Auto-detect file format and load the manifest
    pub async fn load_auto<P: AsRef<Path>>(path: P) -> ConfigResult<Manifest> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        tracing::debug!(path = %path.display(), "Loading manifest");

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_toml(path).await,
            Some("json") => Self::load_json(path).await,
            Some(ext) => Err(ConfigError::InvalidFormat(format!(
                "Unsupported file extension: {}",
                ext
            ))),
            None => {
                // Try TOML first, then JSON; report the TOML error if both fail
                match Self::load_toml(path).await {
                    Ok(manifest) => Ok(manifest),
                    Err(toml_err) => match Self::load_json(path).await {
                        Ok(manifest) => Ok(manifest),
                        Err(json_err) => {
                            tracing::debug!(error = %json_err, "JSON fallback failed");
                            Err(toml_err)
                        }
                    },
                }
            }
        }
    }

    /// Save a manifest to a TOML file
    pub async fn save_toml<P: AsRef<Path>>(manifest: &Manifest, path: P) -> ConfigResult<()> {
        let content = toml::to_string_pretty(manifest)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Save a manifest to a JSON file
    pub async fn save_json<P: AsRef<Path>>(manifest: &Manifest, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(manifest)?;
        fs::write(path, content).await?;
        Ok(())
    }
}
