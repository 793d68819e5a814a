//! Rendering of a resolved project in the deployment framework's shape

use super::*;
use crate::error::ConfigResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Borrowed view of a [`ProjectConfig`] laid out the way the framework
/// expects its user configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig<'a> {
    pub solidity: FrameworkSolidity<'a>,
    pub networks: BTreeMap<&'a str, FrameworkNetwork<'a>>,
    pub gas_reporter: FrameworkGasReporter<'a>,
    pub etherscan: FrameworkEtherscan<'a>,
    pub contract_sizer: FrameworkContractSizer,
    pub abi_exporter: Vec<FrameworkAbiExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FrameworkSolidity<'a> {
    pub version: &'a str,
    pub settings: FrameworkCompilerSettings<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkCompilerSettings<'a> {
    pub optimizer: &'a OptimizerConfig,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub output_selection: BTreeMap<&'static str, BTreeMap<&'static str, &'a [String]>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FrameworkNetwork<'a> {
    Local(FrameworkLocalNetwork),
    Remote(FrameworkRemoteNetwork<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkLocalNetwork {
    pub initial_base_fee_per_gas: u64,
}

#[derive(Debug, Serialize)]
pub struct FrameworkRemoteNetwork<'a> {
    pub url: &'a str,
    pub accounts: &'a [Secret],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkGasReporter<'a> {
    pub enabled: bool,
    pub currency: &'a str,
    pub gas_price: u64,
    pub show_time_spent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinmarketcap: Option<&'a Secret>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkEtherscan<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a Secret>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkContractSizer {
    pub alpha_sort: bool,
    pub run_on_compile: bool,
    pub disambiguate_paths: bool,
}

#[derive(Debug, Serialize)]
pub struct FrameworkAbiExport<'a> {
    pub path: &'a str,
    pub clear: bool,
    pub flat: bool,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub only: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<u8>,
    pub pretty: bool,
}

impl<'a> From<&'a ProjectConfig> for FrameworkConfig<'a> {
    fn from(config: &'a ProjectConfig) -> Self {
        let mut output_selection = BTreeMap::new();
        if !config.solidity.output_selection.is_empty() {
            let per_contract = BTreeMap::from([("*", config.solidity.output_selection.as_slice())]);
            output_selection.insert("*", per_contract);
        }

        let mut networks = BTreeMap::new();
        networks.insert(
            config.local.name.as_str(),
            FrameworkNetwork::Local(FrameworkLocalNetwork {
                initial_base_fee_per_gas: config.local.initial_base_fee_per_gas,
            }),
        );
        for (name, profile) in &config.networks {
            networks.insert(
                name.as_str(),
                FrameworkNetwork::Remote(FrameworkRemoteNetwork {
                    url: &profile.endpoint_url,
                    accounts: &profile.credentials,
                }),
            );
        }

        Self {
            solidity: FrameworkSolidity {
                version: &config.solidity.version,
                settings: FrameworkCompilerSettings {
                    optimizer: &config.solidity.optimizer,
                    output_selection,
                },
            },
            networks,
            gas_reporter: FrameworkGasReporter {
                enabled: config.gas_reporter.enabled,
                currency: &config.gas_reporter.currency,
                gas_price: config.gas_reporter.gas_price,
                show_time_spent: config.gas_reporter.show_time_spent,
                coinmarketcap: config.gas_reporter.coinmarketcap.as_ref(),
            },
            etherscan: FrameworkEtherscan {
                api_key: config.etherscan.api_key.as_ref(),
            },
            contract_sizer: FrameworkContractSizer {
                alpha_sort: config.contract_sizer.alpha_sort,
                run_on_compile: config.contract_sizer.run_on_compile,
                disambiguate_paths: config.contract_sizer.disambiguate_paths,
            },
            abi_exporter: config
                .abi_exporter
                .iter()
                .map(|target| FrameworkAbiExport {
                    path: &target.path,
                    clear: target.clear,
                    flat: target.flat,
                    only: &target.only,
                    spacing: target.spacing,
                    pretty: target.pretty,
                })
                .collect(),
        }
    }
}

impl FrameworkConfig<'_> {
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
