use crate::error::{CleError, CleResult};
use std::collections::BTreeMap;
use std::env;
use url::Url;

/// Where proofs are written and read when no template is configured
pub const DEFAULT_OUTPUT_PROOF_FILE_PATH: &str = "build/proof_{{taskId}}.json";

const JSON_RPC_PROVIDER_URL: &str = "JSON_RPC_PROVIDER_URL";
const JSON_RPC_PROVIDER_URL_PREFIX: &str = "JSON_RPC_PROVIDER_URL_";
const ZKWASM_PROVIDER_URL: &str = "ZKWASM_PROVIDER_URL";
const OUTPUT_PROOF_FILE_PATH: &str = "OUTPUT_PROOF_FILE_PATH";

/// User-level settings shared by the CLE commands
#[derive(Debug, Clone)]
pub struct UserConfig {
    pub json_rpc_provider_url: JsonRpcProviderUrls,
    pub zkwasm_provider_url: Option<Url>,
    pub output_proof_file_path: String,
}

/// JSON-RPC endpoints keyed by network name.
///
/// An override URL, when set, is used for every network.
#[derive(Debug, Clone, Default)]
pub struct JsonRpcProviderUrls {
    per_network: BTreeMap<String, Url>,
    override_url: Option<Url>,
}

impl JsonRpcProviderUrls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, network: &str, url: Url) {
        self.per_network.insert(normalize_network(network), url);
    }

    #[must_use]
    pub fn with_network(mut self, network: &str, url: Url) -> Self {
        self.insert(network, url);
        self
    }

    /// Replace the override; `None` keeps the current one
    #[must_use]
    pub fn with_override(mut self, url: Option<Url>) -> Self {
        if url.is_some() {
            self.override_url = url;
        }
        self
    }

    /// The endpoint to use for `network`
    #[must_use]
    pub fn resolve(&self, network: Option<&str>) -> Option<&Url> {
        self.override_url
            .as_ref()
            .or_else(|| network.and_then(|n| self.per_network.get(&normalize_network(n))))
    }

    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.per_network.keys().map(String::as_str)
    }
}

impl UserConfig {
    /// Build the configuration from process environment variables.
    ///
    /// `JSON_RPC_PROVIDER_URL_<NETWORK>` sets the endpoint for one network
    /// (`JSON_RPC_PROVIDER_URL_BASE_SEPOLIA` maps to `base-sepolia`), while a
    /// plain `JSON_RPC_PROVIDER_URL` overrides all of them.
    pub fn from_env() -> CleResult<Self> {
        Self::from_vars(env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> CleResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut json_rpc_provider_url = JsonRpcProviderUrls::new();
        let mut zkwasm_provider_url = None;
        let mut output_proof_file_path = None;

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if value.is_empty() {
                continue;
            }

            if key == JSON_RPC_PROVIDER_URL {
                json_rpc_provider_url.override_url = Some(parse_url(key, value)?);
            } else if let Some(network) = key.strip_prefix(JSON_RPC_PROVIDER_URL_PREFIX) {
                json_rpc_provider_url.insert(network, parse_url(key, value)?);
            } else if key == ZKWASM_PROVIDER_URL {
                zkwasm_provider_url = Some(parse_url(key, value)?);
            } else if key == OUTPUT_PROOF_FILE_PATH {
                output_proof_file_path = Some(value.to_string());
            }
        }

        Ok(Self {
            json_rpc_provider_url,
            zkwasm_provider_url,
            output_proof_file_path: output_proof_file_path
                .unwrap_or_else(|| DEFAULT_OUTPUT_PROOF_FILE_PATH.to_string()),
        })
    }
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            json_rpc_provider_url: JsonRpcProviderUrls::new(),
            zkwasm_provider_url: None,
            output_proof_file_path: DEFAULT_OUTPUT_PROOF_FILE_PATH.to_string(),
        }
    }
}

fn parse_url(name: &str, value: &str) -> CleResult<Url> {
    Url::parse(value).map_err(|source| CleError::InvalidUrl {
        name: name.to_string(),
        source,
    })
}

fn normalize_network(network: &str) -> String {
    network.trim().to_lowercase().replace('_', "-")
}
