use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Solidity compiler settings handed to the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityConfig {
    /// Exact compiler release, `MAJOR.MINOR.PATCH`
    pub version: String,

    /// Extra compiler outputs requested for every contract in every file
    #[serde(default)]
    pub output_selection: Vec<String>,

    /// Bytecode optimizer settings
    #[serde(default)]
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub enabled: bool,

    /// Expected number of contract calls the optimizer tunes for
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: 200,
        }
    }
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: "0.8.4".to_string(),
            output_selection: vec!["storageLayout".to_string()],
            optimizer: OptimizerConfig::default(),
        }
    }
}

impl SolidityConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Solidity version cannot be empty".to_string(),
            ));
        }

        let parts: Vec<&str> = self.version.split('.').collect();
        if parts.len() != 3
            || parts
                .iter()
                .any(|part| part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(ConfigError::ValidationFailed(format!(
                "Solidity version must be MAJOR.MINOR.PATCH, got {}",
                self.version
            )));
        }

        if self.optimizer.enabled && self.optimizer.runs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Optimizer runs must be greater than 0 when the optimizer is enabled".to_string(),
            ));
        }

        if self.output_selection.iter().any(|output| output.is_empty()) {
            return Err(ConfigError::ValidationFailed(
                "Output selection entries cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_project_compiler() {
        let solidity = SolidityConfig::default();
        assert_eq!(solidity.version, "0.8.4");
        assert!(solidity.optimizer.enabled);
        assert_eq!(solidity.optimizer.runs, 200);
        assert!(solidity.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_versions() {
        for version in ["", "0.8", "0.8.x", "^0.8.4", "0..4"] {
            let solidity = SolidityConfig {
                version: version.to_string(),
                ..SolidityConfig::default()
            };
            assert!(solidity.validate().is_err(), "accepted {:?}", version);
        }
    }

    #[test]
    fn zero_runs_only_matters_when_enabled() {
        let mut solidity = SolidityConfig::default();
        solidity.optimizer.runs = 0;
        assert!(solidity.validate().is_err());

        solidity.optimizer.enabled = false;
        assert!(solidity.validate().is_ok());
    }
}
