use super::Secret;

/// Resolved connection descriptor for one remote network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Network key, unique within a resolved mapping
    pub name: String,

    /// RPC endpoint; empty when the variable was unset
    pub endpoint_url: String,

    /// Zero or one signing keys
    pub credentials: Vec<Secret>,
}

impl NetworkProfile {
    pub fn new(name: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint_url: endpoint_url.into(),
            credentials: Vec::new(),
        }
    }

    pub fn with_credential(mut self, key: Secret) -> Self {
        self.credentials.push(key);
        self
    }

    pub fn has_endpoint(&self) -> bool {
        !self.endpoint_url.is_empty()
    }

    /// Whether the framework could reach this network at all.
    ///
    /// Purely informational: unusable profiles are still valid output.
    pub fn is_usable(&self) -> bool {
        self.has_endpoint()
    }

    /// Raw keys in the order the framework expects them
    pub fn accounts(&self) -> Vec<&str> {
        self.credentials.iter().map(Secret::expose).collect()
    }
}
