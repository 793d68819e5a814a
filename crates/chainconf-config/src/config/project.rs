use super::*;
use crate::error::{ConfigError, ConfigResult};
use crate::loader::EnvSnapshot;
use crate::networks::NetworkType;
use crate::resolver::resolve;
use std::collections::BTreeMap;

/// Fully resolved project configuration.
///
/// Built once from a snapshot and a manifest, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub solidity: SolidityConfig,
    pub local: LocalNetworkConfig,
    pub networks: BTreeMap<String, NetworkProfile>,
    pub gas_reporter: GasReporterSettings,
    pub etherscan: EtherscanSettings,
    pub contract_sizer: ContractSizerConfig,
    pub abi_exporter: Vec<AbiExportConfig>,
}

impl ProjectConfig {
    /// Resolve the manifest against the snapshot. Never fails, missing
    /// variables fall back to their defaults.
    pub fn resolve(env: &EnvSnapshot, manifest: &Manifest) -> Self {
        let config = Self {
            solidity: manifest.solidity.clone(),
            local: manifest.local.clone(),
            networks: resolve(env, &manifest.networks),
            gas_reporter: manifest.gas_reporter.resolve(env),
            etherscan: manifest.etherscan.resolve(env),
            contract_sizer: manifest.contract_sizer.clone(),
            abi_exporter: manifest.abi_exporter.clone(),
        };

        tracing::info!(
            networks = config.networks.len(),
            usable = config.usable_networks().count(),
            gas_reporter = config.gas_reporter.enabled,
            "Resolved project configuration"
        );

        config
    }

    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Find a network by its exact key, or by a preset alias such as
    /// `mumbai` or `main`
    pub fn lookup(&self, name: &str) -> ConfigResult<&NetworkProfile> {
        if let Some(profile) = self.networks.get(name) {
            return Ok(profile);
        }

        let network: NetworkType = name.parse()?;
        self.networks
            .get(network.as_str())
            .ok_or_else(|| ConfigError::InvalidNetwork(name.to_string()))
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Networks with an endpoint configured
    pub fn usable_networks(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.networks.values().filter(|profile| profile.is_usable())
    }

    /// Render in the shape the deployment framework consumes
    pub fn framework(&self) -> FrameworkConfig<'_> {
        FrameworkConfig::from(self)
    }
}
