//! CLE YAML descriptor
//!
//! A descriptor declares where a CLE task reads its data from
//! (`dataSources`) and where its results are published (`dataDestinations`).
//!
//! ```yaml
//! specVersion: 0.0.2
//! apiVersion: 0.0.2
//! name: eg_event
//! dataSources:
//!   - kind: ethereum
//!     network: sepolia
//! mapping:
//!   language: wasm/assemblyscript
//!   file: ./mapping.ts
//!   handler: handleBlocks
//! dataDestinations:
//!   - kind: ethereum
//!     network: sepolia
//!     address: "0x0000000000000000000000000000000000000001"
//! ```

use crate::error::{CleError, CleResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleYaml {
    pub spec_version: String,
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    pub data_sources: Vec<DataSource>,
    #[serde(default)]
    pub mapping: Option<Mapping>,
    #[serde(default)]
    pub data_destinations: Vec<DataDestination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    pub kind: String,
    pub network: String,
    /// Event filters, kept as raw YAML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<serde_yaml::Value>,
    /// Storage slots, kept as raw YAML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<serde_yaml::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    pub language: String,
    pub file: String,
    pub handler: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataDestination {
    pub kind: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl CleYaml {
    /// Parse and validate a descriptor from YAML text
    pub fn from_yaml_str(content: &str) -> CleResult<Self> {
        let yaml: Self = serde_yaml::from_str(content)?;
        yaml.validate()?;
        Ok(yaml)
    }

    pub fn validate(&self) -> CleResult<()> {
        if self.spec_version.trim().is_empty() {
            return Err(CleError::InvalidYaml(
                "specVersion must not be empty".to_string(),
            ));
        }

        if self.data_sources.is_empty() {
            return Err(CleError::InvalidYaml(
                "dataSources must not be empty".to_string(),
            ));
        }

        if let Some(source) = self.data_sources.iter().find(|s| s.network.trim().is_empty()) {
            return Err(CleError::InvalidYaml(format!(
                "dataSource of kind '{}' has no network",
                source.kind
            )));
        }

        Ok(())
    }

    /// The network this task publishes its results to.
    ///
    /// Taken from the first data destination that names a network.
    /// Returns `None` when no destination declares one.
    #[must_use]
    pub fn decide_publish_network(&self) -> Option<String> {
        self.data_destinations
            .iter()
            .map(|d| d.network.trim())
            .find(|n| !n.is_empty())
            .map(str::to_lowercase)
    }
}

/// Load a CLE descriptor from `path`
pub fn load_yaml_from_path(path: impl AsRef<Path>) -> CleResult<CleYaml> {
    let path = path.as_ref();
    debug!("Loading CLE yaml from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| CleError::io(path, e))?;
    CleYaml::from_yaml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EVENT_YAML: &str = r#"
specVersion: 0.0.2
apiVersion: 0.0.2
name: eg_event
description: "Demo event task"
repository: https://github.com/ora-io/cle
dataSources:
  - kind: ethereum
    network: sepolia
    event:
      - address: "0xa60ecf32309539dd84f27a9563754dca818b815e"
        events:
          - "Sync(uint112,uint112)"
mapping:
  language: wasm/assemblyscript
  file: ./mapping.ts
  handler: handleBlocks
dataDestinations:
  - kind: ethereum
    network: Sepolia
    address: "0x0000000000000000000000000000000000000001"
"#;

    #[test]
    fn test_parse_event_yaml() {
        let yaml = CleYaml::from_yaml_str(EVENT_YAML).unwrap();

        assert_eq!(yaml.spec_version, "0.0.2");
        assert_eq!(yaml.name.as_deref(), Some("eg_event"));
        assert_eq!(yaml.data_sources.len(), 1);
        assert_eq!(yaml.data_sources[0].network, "sepolia");
        assert!(yaml.data_sources[0].event.is_some());
        assert_eq!(yaml.mapping.as_ref().unwrap().handler, "handleBlocks");
    }

    #[test]
    fn test_publish_network_is_lowercased() {
        let yaml = CleYaml::from_yaml_str(EVENT_YAML).unwrap();
        assert_eq!(yaml.decide_publish_network().as_deref(), Some("sepolia"));
    }

    #[test]
    fn test_publish_network_skips_blank_destinations() {
        let content = r"
specVersion: 0.0.2
dataSources:
  - kind: ethereum
    network: mainnet
dataDestinations:
  - kind: ethereum
    network: ''
  - kind: ethereum
    network: mainnet
";
        let yaml = CleYaml::from_yaml_str(content).unwrap();
        assert_eq!(yaml.decide_publish_network().as_deref(), Some("mainnet"));
    }

    #[test]
    fn test_no_destination_means_no_publish_network() {
        let content = r"
specVersion: 0.0.2
dataSources:
  - kind: ethereum
    network: sepolia
";
        let yaml = CleYaml::from_yaml_str(content).unwrap();
        assert!(yaml.decide_publish_network().is_none());
    }

    #[test]
    fn test_rejects_missing_data_sources() {
        let content = "specVersion: 0.0.2\ndataSources: []\n";
        let err = CleYaml::from_yaml_str(content).unwrap_err();
        assert!(matches!(err, CleError::InvalidYaml(_)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = CleYaml::from_yaml_str("specVersion: [unterminated").unwrap_err();
        assert!(matches!(err, CleError::Yaml(_)));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EVENT_YAML.as_bytes()).unwrap();

        let yaml = load_yaml_from_path(file.path()).unwrap();
        assert_eq!(yaml.data_destinations.len(), 1);

        let missing = load_yaml_from_path("/nonexistent/cle.yaml").unwrap_err();
        assert!(missing.is_not_found());
    }
}
