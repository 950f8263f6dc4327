//! Google Pay environment tags.
//!
//! The wallet SDK runs against one of three environments. The tag is
//! reported by the native side and never chosen by this layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The environment the underlying wallet SDK is configured for.
///
/// # Serialization
///
/// Serializes to/from the exact uppercase wire strings `"PROD"`,
/// `"SANDBOX"`, and `"DEV"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    /// Production environment with live tokenization.
    Prod,
    /// Sandbox environment for integration testing.
    Sandbox,
    /// Development environment.
    Dev,
}

impl Environment {
    /// Returns the wire string for this environment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prod => "PROD",
            Self::Sandbox => "SANDBOX",
            Self::Dev => "DEV",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown environment tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown environment '{0}', expected PROD, SANDBOX, or DEV")]
pub struct ParseEnvironmentError(String);

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROD" => Ok(Self::Prod),
            "SANDBOX" => Ok(Self::Sandbox),
            "DEV" => Ok(Self::Dev),
            other => Err(ParseEnvironmentError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_serialize() {
        assert_eq!(
            serde_json::to_string(&Environment::Prod).unwrap(),
            "\"PROD\""
        );
        assert_eq!(
            serde_json::to_string(&Environment::Sandbox).unwrap(),
            "\"SANDBOX\""
        );
        assert_eq!(serde_json::to_string(&Environment::Dev).unwrap(), "\"DEV\"");
    }

    #[test]
    fn test_environment_deserialize() {
        let env: Environment = serde_json::from_str("\"SANDBOX\"").unwrap();
        assert_eq!(env, Environment::Sandbox);
    }

    #[test]
    fn test_environment_deserialize_unknown() {
        let result: Result<Environment, _> = serde_json::from_str("\"STAGING\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_from_str_roundtrip() {
        for env in [Environment::Prod, Environment::Sandbox, Environment::Dev] {
            assert_eq!(env.as_str().parse::<Environment>().unwrap(), env);
        }
    }
}
