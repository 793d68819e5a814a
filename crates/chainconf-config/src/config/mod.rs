//! Configuration structures and types
pub mod compiler;
pub mod framework;
pub mod manifest;
pub mod network;
pub mod profile;
pub mod project;
pub mod secret;
pub mod tooling;

// Re-export main config types
pub use compiler::{OptimizerConfig, SolidityConfig};
pub use framework::FrameworkConfig;
pub use manifest::Manifest;
pub use network::LocalNetworkConfig;
pub use profile::NetworkProfile;
pub use project::ProjectConfig;
pub use secret::Secret;
pub use tooling::{
    AbiExportConfig, ContractSizerConfig, EtherscanConfig, EtherscanSettings, GasReporterConfig,
    GasReporterSettings,
};
