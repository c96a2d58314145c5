//! Persisted proof parameters
//!
//! A proving run writes its output as JSON with hex-encoded byte fields.
//! The verify command reads the file back and hands the parameters to the
//! verifier untouched.

use crate::error::{CleError, CleResult};
use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Aggregated proof plus the auxiliary values the verifier contract needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofParams {
    pub aggregate_proof: Bytes,
    pub batch_instances: Bytes,
    pub aux: Bytes,
    pub instances: Vec<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl ProofParams {
    /// Total payload size in bytes, for logging
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.aggregate_proof.len()
            + self.batch_instances.len()
            + self.aux.len()
            + self.instances.iter().map(|b| b.len()).sum::<usize>()
    }
}

/// Read proof parameters previously written by [`write_proof_params_file`]
pub fn read_proof_params_file(path: impl AsRef<Path>) -> CleResult<ProofParams> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| CleError::io(path, e))?;
    let params: ProofParams = serde_json::from_str(&content)?;

    debug!(
        "Read proof params from {} ({} bytes, {} instance groups)",
        path.display(),
        params.byte_len(),
        params.instances.len()
    );

    Ok(params)
}

/// Persist proof parameters, creating parent directories as needed
pub fn write_proof_params_file(path: impl AsRef<Path>, params: &ProofParams) -> CleResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CleError::io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(params)?;
    std::fs::write(path, content).map_err(|e| CleError::io(path, e))?;

    info!("Proof params written to {}", path.display());
    Ok(())
}
