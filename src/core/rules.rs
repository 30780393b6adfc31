//! Rule definitions and JSON rule source loading
//!
//! The rule source is a plain JSON array of objects with string fields
//! `name`, `port`, and `protocol`. Ports and protocols are carried as raw
//! tokens: netsh itself is the authority on what constitutes a valid port
//! range or protocol keyword, and second-guessing it here would only make
//! the generated scripts drift from what the tool accepts.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use tracing::info;

/// A single declarative firewall rule
///
/// Immutable once loaded; every generated command is derived from these
/// three fields and the requested [`Operation`](crate::core::compile::Operation).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Display name, embedded verbatim inside double quotes in commands
    pub name: String,
    /// Raw port token (`"80"`, `"8000-8999"`); accepts a JSON integer too
    #[serde(deserialize_with = "port_token")]
    pub port: String,
    /// Raw protocol token (`"TCP"`, `"UDP"`); not validated against a closed set
    pub protocol: String,
}

/// Deserializes the `port` field from either a JSON string or integer.
///
/// Hand-written rule files commonly use bare numbers (`"port": 80`) while
/// exported ones quote them; both map to the same raw token.
fn port_token<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct PortVisitor;

    impl serde::de::Visitor<'_> for PortVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a port token as a string or integer")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(PortVisitor)
}

/// Loads firewall rules from a JSON file.
///
/// Returns an empty vector when the source contains zero rules; the
/// caller decides whether that is fatal. Rule names are validated for
/// safe command-line embedding (see [`crate::validators`]) before the
/// set is handed to the rest of the pipeline.
///
/// # Errors
///
/// Returns `Error::Load` if the file cannot be read or is not a
/// well-formed JSON array of rule objects, and `Error::InvalidRuleName`
/// if any name would break the generated quoting.
pub async fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| Error::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let rules: Vec<Rule> = serde_json::from_str(&json).map_err(|e| Error::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    for rule in &rules {
        crate::validators::validate_rule_name(&rule.name).map_err(|reason| {
            Error::InvalidRuleName {
                name: rule.name.clone(),
                reason,
            }
        })?;
    }

    info!("Rule file '{}' loaded successfully.", path.display());
    Ok(rules)
}
