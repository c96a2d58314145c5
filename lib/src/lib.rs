//! Shared building blocks for the CLE command line tools.
//!
//! This crate owns everything the commands read from disk or from the
//! environment: the CLE YAML descriptor, persisted proof parameters, path
//! templates and the user configuration holding provider URLs.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod proof;
pub mod tag;
pub mod yaml;

pub use config::{JsonRpcProviderUrls, UserConfig, DEFAULT_OUTPUT_PROOF_FILE_PATH};
pub use error::{CleError, CleResult};
pub use proof::{read_proof_params_file, write_proof_params_file, ProofParams};
pub use tag::{default_tags, parse_template_tag, TemplateTags, TASK_ID_TAG};
pub use yaml::{load_yaml_from_path, CleYaml, DataDestination, DataSource, Mapping};
