use super::NetworkSpec;

/// Ethereum main network
pub fn mainnet() -> NetworkSpec {
    NetworkSpec::conventional("mainnet")
}

/// Polygon PoS main network
pub fn polygon() -> NetworkSpec {
    NetworkSpec::conventional("polygon")
}
