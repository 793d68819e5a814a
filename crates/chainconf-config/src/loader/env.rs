use crate::error::ConfigResult;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

/// Default dotenv file looked up in the working directory
pub const DOTENV_FILE: &str = ".env";

/// Immutable capture of environment variables.
///
/// Taken once at startup and passed by reference to everything that needs
/// configuration. Lookups never read the live process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    pub fn from_process() -> Self {
        let mut vars = BTreeMap::new();
        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    vars.insert(key, value);
                }
                (Ok(key), Err(_)) => {
                    tracing::warn!(variable = %key, "Skipping environment variable with non-Unicode value");
                }
                (Err(key), _) => {
                    tracing::warn!(variable = ?key, "Skipping environment variable with non-Unicode name");
                }
            }
        }

        tracing::debug!(count = vars.len(), "Captured process environment");
        Self { vars }
    }

    /// Build a snapshot from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Merge variables from a dotenv file. Variables already in the
    /// snapshot keep their value.
    ///
    /// `${VAR}` substitutions inside the file are expanded by `dotenvy`
    /// against the live process environment and earlier lines of the same
    /// file, not against this snapshot. This is the one place the process
    /// environment is read after capture.
    pub fn with_dotenv_file<P: AsRef<Path>>(mut self, path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut added = 0usize;

        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                added += 1;
            }
        }

        tracing::debug!(path = %path.display(), added, "Merged dotenv file");
        Ok(self)
    }

    /// Merge `.env` from the working directory if there is one
    pub fn with_default_dotenv(self) -> ConfigResult<Self> {
        if !Path::new(DOTENV_FILE).is_file() {
            tracing::debug!("No {} file in working directory", DOTENV_FILE);
            return Ok(self);
        }
        self.with_dotenv_file(DOTENV_FILE)
    }

    /// Value of a variable, if set (possibly empty)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of a variable, treating an empty value as unset
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_present_but_not_non_empty() {
        let env = EnvSnapshot::from_pairs([("PRIVATE_KEY", "")]);
        assert!(env.contains("PRIVATE_KEY"));
        assert_eq!(env.get("PRIVATE_KEY"), Some(""));
        assert_eq!(env.get_non_empty("PRIVATE_KEY"), None);
    }

    #[test]
    fn values_are_not_trimmed() {
        let env = EnvSnapshot::from_pairs([("MAINNET_URL", " https://rpc.example ")]);
        assert_eq!(env.get_non_empty("MAINNET_URL"), Some(" https://rpc.example "));
    }
}
