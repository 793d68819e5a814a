//! Plugin settings passed through to the deployment framework

use super::Secret;
use crate::error::{ConfigError, ConfigResult};
use crate::loader::EnvSnapshot;
use serde::{Deserialize, Serialize};

/// Gas usage report settings as declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasReporterConfig {
    /// Variable whose presence turns reporting on
    pub enabled_var: String,

    /// Fiat currency for cost columns
    pub currency: String,

    /// Gas price in gwei used for cost estimates
    pub gas_price: u64,

    pub show_time_spent: bool,

    /// Variable holding the price feed API key
    pub coinmarketcap_var: String,
}

impl Default for GasReporterConfig {
    fn default() -> Self {
        Self {
            enabled_var: "REPORT_GAS".to_string(),
            currency: "USD".to_string(),
            gas_price: 200,
            show_time_spent: true,
            coinmarketcap_var: "COINMARKETCAP_API".to_string(),
        }
    }
}

/// Gas reporter settings after reading the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasReporterSettings {
    pub enabled: bool,
    pub currency: String,
    pub gas_price: u64,
    pub show_time_spent: bool,
    pub coinmarketcap: Option<Secret>,
}

impl GasReporterConfig {
    /// Reporting is on whenever the variable is set, even to an empty
    /// string. The API key follows the credential rule: empty means unset.
    pub fn resolve(&self, env: &EnvSnapshot) -> GasReporterSettings {
        GasReporterSettings {
            enabled: env.contains(&self.enabled_var),
            currency: self.currency.clone(),
            gas_price: self.gas_price,
            show_time_spent: self.show_time_spent,
            coinmarketcap: env.get_non_empty(&self.coinmarketcap_var).map(Secret::new),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.enabled_var.is_empty() || self.coinmarketcap_var.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Gas reporter variable names cannot be empty".to_string(),
            ));
        }

        if self.currency.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Gas reporter currency cannot be empty".to_string(),
            ));
        }

        if self.gas_price == 0 {
            return Err(ConfigError::ValidationFailed(
                "Gas reporter gas price must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Block explorer source verification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtherscanConfig {
    /// Variable holding the explorer API key
    pub api_key_var: String,
}

impl Default for EtherscanConfig {
    fn default() -> Self {
        Self {
            api_key_var: "ETHERSCAN_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EtherscanSettings {
    pub api_key: Option<Secret>,
}

impl EtherscanConfig {
    pub fn resolve(&self, env: &EnvSnapshot) -> EtherscanSettings {
        EtherscanSettings {
            api_key: env.get_non_empty(&self.api_key_var).map(Secret::new),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.api_key_var.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Etherscan API key variable cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contract bytecode size report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSizerConfig {
    pub alpha_sort: bool,
    pub run_on_compile: bool,
    pub disambiguate_paths: bool,
}

impl Default for ContractSizerConfig {
    fn default() -> Self {
        Self {
            alpha_sort: true,
            run_on_compile: true,
            disambiguate_paths: false,
        }
    }
}

/// One ABI export target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiExportConfig {
    /// Output directory
    pub path: String,

    /// Wipe the directory before exporting
    #[serde(default)]
    pub clear: bool,

    /// Drop source directories from output file names
    #[serde(default)]
    pub flat: bool,

    /// Contract names to export; empty exports everything
    #[serde(default)]
    pub only: Vec<String>,

    /// Indentation for pretty output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u8>,

    /// Emit human-readable signatures instead of JSON fragments
    #[serde(default)]
    pub pretty: bool,
}

impl AbiExportConfig {
    /// Targets the project exports to by default
    pub fn defaults() -> Vec<AbiExportConfig> {
        let only: Vec<String> = ["NFT", "Factory", "ERC721AUpgradeable"]
            .iter()
            .map(|name| name.to_string())
            .collect();

        vec![
            AbiExportConfig {
                path: "./abi/".to_string(),
                clear: true,
                flat: true,
                only: only.clone(),
                spacing: Some(2),
                pretty: true,
            },
            AbiExportConfig {
                path: "./abi/ugly".to_string(),
                clear: true,
                flat: true,
                only,
                spacing: None,
                pretty: false,
            },
        ]
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.path.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "ABI export path cannot be empty".to_string(),
            ));
        }

        if self.only.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::ValidationFailed(format!(
                "ABI export target {} lists an empty contract name",
                self.path
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_reporter_enabled_by_presence() {
        let config = GasReporterConfig::default();

        let unset = EnvSnapshot::default();
        assert!(!config.resolve(&unset).enabled);

        let empty = EnvSnapshot::from_pairs([("REPORT_GAS", "")]);
        assert!(config.resolve(&empty).enabled);
    }

    #[test]
    fn empty_api_keys_are_unset() {
        let env = EnvSnapshot::from_pairs([("COINMARKETCAP_API", ""), ("ETHERSCAN_API_KEY", "")]);
        assert_eq!(GasReporterConfig::default().resolve(&env).coinmarketcap, None);
        assert_eq!(EtherscanConfig::default().resolve(&env).api_key, None);

        let env = EnvSnapshot::from_pairs([("ETHERSCAN_API_KEY", "ABC123")]);
        let settings = EtherscanConfig::default().resolve(&env);
        assert_eq!(settings.api_key.as_ref().map(Secret::expose), Some("ABC123"));
    }

    #[test]
    fn default_abi_targets() {
        let targets = AbiExportConfig::defaults();
        assert_eq!(targets.len(), 2);
        assert!(targets[0].pretty);
        assert_eq!(targets[0].spacing, Some(2));
        assert!(!targets[1].pretty);
        assert!(targets.iter().all(|t| t.only.len() == 3 && t.validate().is_ok()));
    }
}
