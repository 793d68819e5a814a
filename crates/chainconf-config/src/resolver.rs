//! Environment-to-network resolution

use crate::config::{NetworkProfile, Secret};
use crate::loader::EnvSnapshot;
use crate::networks::NetworkSpec;
use std::collections::BTreeMap;

/// Resolve every spec against the snapshot.
///
/// Never fails. An unset endpoint variable yields an empty URL, and an unset
/// or empty key variable yields no credentials. Values are taken verbatim.
/// When two specs share a name the later one replaces the earlier.
pub fn resolve(env: &EnvSnapshot, specs: &[NetworkSpec]) -> BTreeMap<String, NetworkProfile> {
    let mut profiles = BTreeMap::new();

    for spec in specs {
        let profile = resolve_one(env, spec);

        tracing::debug!(
            network = %profile.name,
            endpoint_set = profile.has_endpoint(),
            credentials = profile.credentials.len(),
            "Resolved network profile"
        );

        if let Some(previous) = profiles.insert(spec.name.clone(), profile) {
            tracing::warn!(
                network = %previous.name,
                "Duplicate network name, later declaration replaces earlier one"
            );
        }
    }

    profiles
}

/// Resolve a single spec
pub fn resolve_one(env: &EnvSnapshot, spec: &NetworkSpec) -> NetworkProfile {
    let endpoint_url = env.get(&spec.url_var).unwrap_or_default();
    let mut profile = NetworkProfile::new(spec.name.clone(), endpoint_url);

    if let Some(key) = env.get_non_empty(&spec.key_var) {
        profile = profile.with_credential(Secret::new(key));
    }

    profile
}
