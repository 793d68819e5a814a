//! Deployment network configuration for smart-contract projects
//!
//! This crate snapshots the process environment, resolves every configured
//! network into an endpoint and signing credentials, and carries the rest of
//! the project's framework settings (compiler, gas reporter, block explorer
//! verification, contract sizer, ABI exporter) as typed data.

pub mod config;
pub mod error;
pub mod loader;
pub mod networks;
pub mod resolver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use loader::*;
pub use resolver::resolve;
pub use utils::ConfigUtils;

// Re-export main types
pub use error::{ConfigError, ConfigResult};

// Re-export network presets
pub use networks::{default_specs, NetworkSpec, NetworkType};
