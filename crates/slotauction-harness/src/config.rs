//! Harness configuration, loadable from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use slotauction_types::{AuctionError, MechanismConfig, Result};

/// Configuration for one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Settings passed through to every engine.
    pub mechanism: MechanismConfig,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            mechanism: MechanismConfig::default(),
            pretty: true,
        }
    }
}

impl HarnessConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AuctionError::Configuration(e.to_string()))
    }

    /// Load a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AuctionError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use slotauction_types::TieBreak;

    use super::*;

    #[test]
    fn defaults() {
        let cfg = HarnessConfig::default();
        assert!(cfg.pretty);
        assert_eq!(cfg.mechanism, MechanismConfig::default());
    }

    #[test]
    fn nested_partial_document() {
        let cfg = HarnessConfig::from_json_str(
            r#"{"mechanism":{"tie_break":"bidder_id_ascending"},"pretty":false}"#,
        )
        .unwrap();
        assert!(!cfg.pretty);
        assert_eq!(cfg.mechanism.tie_break, TieBreak::BidderIdAscending);
        assert!(cfg.mechanism.enforce_unique_bidders);
    }

    #[test]
    fn malformed_document_is_a_configuration_error() {
        let err = HarnessConfig::from_json_str("{ pretty: yes }").unwrap_err();
        assert!(matches!(err, AuctionError::Configuration(_)));
        assert!(format!("{err}").starts_with("SA_ERR_902"));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = HarnessConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AuctionError::Configuration(_)));
    }
}
