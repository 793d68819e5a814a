use serde::{Deserialize, Serialize};

/// In-process development network provided by the framework itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalNetworkConfig {
    /// Key the framework reserves for its built-in network
    pub name: String,

    /// Base fee of the genesis block
    pub initial_base_fee_per_gas: u64,
}

impl Default for LocalNetworkConfig {
    fn default() -> Self {
        Self {
            name: "hardhat".to_string(),
            initial_base_fee_per_gas: 0,
        }
    }
}
