use super::NetworkSpec;

/// Ropsten proof-of-work test network
pub fn ropsten() -> NetworkSpec {
    NetworkSpec::conventional("ropsten")
}

/// Rinkeby proof-of-authority test network
pub fn rinkeby() -> NetworkSpec {
    NetworkSpec::conventional("rinkeby")
}

/// Polygon's Mumbai test network
pub fn polygon_mumbai() -> NetworkSpec {
    NetworkSpec::conventional("polygonMumbai")
}
