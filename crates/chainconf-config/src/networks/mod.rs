//! Remote network declarations and the project's preset networks

pub mod mainnet;
pub mod testnet;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variable holding the signing key shared by every preset network
pub const DEFAULT_KEY_VAR: &str = "PRIVATE_KEY";

fn default_key_var() -> String {
    DEFAULT_KEY_VAR.to_string()
}

/// Declares where a network's endpoint and signing key come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Network key as the deployment framework knows it
    pub name: String,

    /// Environment variable holding the RPC endpoint
    pub url_var: String,

    /// Environment variable holding the signing key
    #[serde(default = "default_key_var")]
    pub key_var: String,
}

impl NetworkSpec {
    pub fn new(
        name: impl Into<String>,
        url_var: impl Into<String>,
        key_var: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url_var: url_var.into(),
            key_var: key_var.into(),
        }
    }

    /// Spec following the `<NAME>_URL` / `PRIVATE_KEY` naming convention.
    ///
    /// The name is uppercased and stripped of anything that is not ASCII
    /// alphanumeric, so `polygonMumbai` reads `POLYGONMUMBAI_URL`.
    pub fn conventional(name: impl Into<String>) -> Self {
        let name = name.into();
        let url_var = Self::conventional_url_var(&name);
        Self {
            name,
            url_var,
            key_var: default_key_var(),
        }
    }

    pub fn conventional_url_var(name: &str) -> String {
        let stem: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        format!("{}_URL", stem)
    }
}

/// Remote networks the project deploys to out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    Ropsten,
    Rinkeby,
    Polygon,
    PolygonMumbai,
    Mainnet,
}

impl NetworkType {
    pub const ALL: [NetworkType; 5] = [
        NetworkType::Ropsten,
        NetworkType::Rinkeby,
        NetworkType::Polygon,
        NetworkType::PolygonMumbai,
        NetworkType::Mainnet,
    ];

    /// Framework key for this network
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Ropsten => "ropsten",
            NetworkType::Rinkeby => "rinkeby",
            NetworkType::Polygon => "polygon",
            NetworkType::PolygonMumbai => "polygonMumbai",
            NetworkType::Mainnet => "mainnet",
        }
    }

    pub fn spec(&self) -> NetworkSpec {
        match self {
            NetworkType::Ropsten => testnet::ropsten(),
            NetworkType::Rinkeby => testnet::rinkeby(),
            NetworkType::PolygonMumbai => testnet::polygon_mumbai(),
            NetworkType::Polygon => mainnet::polygon(),
            NetworkType::Mainnet => mainnet::mainnet(),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NetworkType {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ropsten" => Ok(NetworkType::Ropsten),
            "rinkeby" => Ok(NetworkType::Rinkeby),
            "polygon" | "matic" => Ok(NetworkType::Polygon),
            "polygonmumbai" | "polygon-mumbai" | "polygon_mumbai" | "mumbai" => {
                Ok(NetworkType::PolygonMumbai)
            }
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            _ => Err(crate::error::ConfigError::InvalidNetwork(s.to_string())),
        }
    }
}

/// All preset network specs, in declaration order
pub fn default_specs() -> Vec<NetworkSpec> {
    NetworkType::ALL.iter().map(NetworkType::spec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_url_var_drops_punctuation() {
        assert_eq!(NetworkSpec::conventional_url_var("polygonMumbai"), "POLYGONMUMBAI_URL");
        assert_eq!(NetworkSpec::conventional_url_var("base-sepolia"), "BASESEPOLIA_URL");
    }

    #[test]
    fn presets_follow_the_convention() {
        for network in NetworkType::ALL {
            assert_eq!(network.spec(), NetworkSpec::conventional(network.as_str()));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("MUMBAI".parse::<NetworkType>().unwrap(), NetworkType::PolygonMumbai);
        assert_eq!("main".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert!("goerli".parse::<NetworkType>().is_err());
    }
}
