use crate::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "chainconf.toml";

/// Configuration utility functions
pub struct ConfigUtils;

impl ConfigUtils {
    /// Directories searched for a manifest, in order
    pub fn search_paths() -> Vec<PathBuf> {
        vec![
            // Current directory
            PathBuf::from("."),
            // Config subdirectory
            PathBuf::from("config"),
            // User config directory
            dirs::config_dir()
                .map(|d| d.join("chainconf"))
                .unwrap_or_else(|| PathBuf::from(".chainconf")),
        ]
    }

    /// Find a manifest in the standard locations
    pub fn find_manifest(filename: &str) -> ConfigResult<PathBuf> {
        Self::find_manifest_in(filename, &Self::search_paths())
    }

    /// Find a manifest in the given directories. A bare name also matches
    /// with a `.toml` or `.json` extension.
    pub fn find_manifest_in<P: AsRef<Path>>(filename: &str, dirs: &[P]) -> ConfigResult<PathBuf> {
        for dir in dirs {
            let candidate = dir.as_ref().join(filename);
            if candidate.is_file() {
                return Ok(candidate);
            }

            for ext in ["toml", "json"] {
                let candidate = dir.as_ref().join(format!("{}.{}", filename, ext));
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        Err(ConfigError::FileNotFound(format!(
            "Manifest '{}' not found in standard locations",
            filename
        )))
    }
}
