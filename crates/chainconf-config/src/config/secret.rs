use serde::{Serialize, Serializer};
use std::fmt;

/// Signing key or API key read from the environment.
///
/// Formatting never reveals the value. Serialization writes it verbatim,
/// since the deployment framework consumes the raw key.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_hides_the_value() {
        let secret = Secret::new("0xdeadbeef");
        assert!(!format!("{:?}", secret).contains("deadbeef"));
        assert!(!secret.to_string().contains("deadbeef"));
        assert_eq!(secret.expose(), "0xdeadbeef");
    }

    #[test]
    fn serializes_verbatim() {
        let secret = Secret::new("0xabc");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"0xabc\"");
    }
}
