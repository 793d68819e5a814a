use super::*;
use crate::error::ConfigResult;
use crate::networks::{default_specs, NetworkSpec};
use serde::{Deserialize, Serialize};

/// Project declaration: which networks exist and where their settings come
/// from, plus the plugin settings passed through to the framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Compiler settings
    #[serde(default)]
    pub solidity: SolidityConfig,

    /// Framework's built-in network
    #[serde(default)]
    pub local: LocalNetworkConfig,

    /// Remote networks, resolved from the environment
    #[serde(default = "default_specs")]
    pub networks: Vec<NetworkSpec>,

    /// Gas usage reporting
    #[serde(default)]
    pub gas_reporter: GasReporterConfig,

    /// Block explorer verification
    #[serde(default)]
    pub etherscan: EtherscanConfig,

    /// Bytecode size reporting
    #[serde(default)]
    pub contract_sizer: ContractSizerConfig,

    /// ABI export targets
    #[serde(default = "AbiExportConfig::defaults")]
    pub abi_exporter: Vec<AbiExportConfig>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            solidity: SolidityConfig::default(),
            local: LocalNetworkConfig::default(),
            networks: default_specs(),
            gas_reporter: GasReporterConfig::default(),
            etherscan: EtherscanConfig::default(),
            contract_sizer: ContractSizerConfig::default(),
            abi_exporter: AbiExportConfig::defaults(),
        }
    }
}

impl Manifest {
    /// Validate the manifest for consistency
    pub fn validate(&self) -> ConfigResult<()> {
        crate::loader::ManifestValidator::validate(self)
    }

    /// Look up a network spec by name
    pub fn network(&self, name: &str) -> Option<&NetworkSpec> {
        self.networks.iter().find(|spec| spec.name == name)
    }

    /// Every environment variable the manifest reads
    pub fn referenced_vars(&self) -> Vec<&str> {
        let mut vars: Vec<&str> = self
            .networks
            .iter()
            .flat_map(|spec| [spec.url_var.as_str(), spec.key_var.as_str()])
            .chain([
                self.gas_reporter.enabled_var.as_str(),
                self.gas_reporter.coinmarketcap_var.as_str(),
                self.etherscan.api_key_var.as_str(),
            ])
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }
}
