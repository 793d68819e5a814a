use crate::{ConfigError, ConfigResult, Manifest};
use std::collections::HashSet;

/// Manifest validation
pub struct ManifestValidator;

impl ManifestValidator {
    /// Validate every section, then the cross-section rules
    pub fn validate(manifest: &Manifest) -> ConfigResult<()> {
        manifest.solidity.validate()?;
        manifest.gas_reporter.validate()?;
        manifest.etherscan.validate()?;
        for target in &manifest.abi_exporter {
            target.validate()?;
        }

        Self::validate_local_network(manifest)?;
        Self::validate_networks(manifest)?;
        Self::validate_export_paths(manifest)?;

        Ok(())
    }

    fn validate_local_network(manifest: &Manifest) -> ConfigResult<()> {
        if manifest.local.name.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Local network name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Network names must be unique and must not shadow the local network
    fn validate_networks(manifest: &Manifest) -> ConfigResult<()> {
        let mut names = HashSet::new();

        for spec in &manifest.networks {
            if spec.name.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "Network name cannot be empty".to_string(),
                ));
            }

            if spec.url_var.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network {} has an empty endpoint variable name",
                    spec.name
                )));
            }

            if spec.key_var.is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network {} has an empty key variable name",
                    spec.name
                )));
            }

            if spec.name == manifest.local.name {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network {} collides with the local network",
                    spec.name
                )));
            }

            if !names.insert(spec.name.as_str()) {
                return Err(ConfigError::ValidationFailed(format!(
                    "Network {} is declared more than once",
                    spec.name
                )));
            }
        }

        Ok(())
    }

    fn validate_export_paths(manifest: &Manifest) -> ConfigResult<()> {
        let mut paths = HashSet::new();
        for target in &manifest.abi_exporter {
            if !paths.insert(target.path.trim_end_matches('/')) {
                return Err(ConfigError::ValidationFailed(format!(
                    "ABI export path {} is used by multiple targets",
                    target.path
                )));
            }
        }
        Ok(())
    }
}
