//! `cle verify`: check a locally produced proof against the on-chain verifier.

use super::log_divider;
use alloy_primitives::Address;
use cle_lib::{
    default_tags, load_yaml_from_path, parse_template_tag, read_proof_params_file,
    JsonRpcProviderUrls, TASK_ID_TAG,
};
use ethereum_client::{verifier_address, VerificationClient, VerificationRequest, VerifyError};
use eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing::{debug, error, info};
use url::Url;

#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub task_id: String,
    pub yaml_path: PathBuf,
    pub zkwasm_provider_url: Option<Url>,
    pub json_rpc_provider_url: JsonRpcProviderUrls,
    /// Path template, e.g. `build/proof_{{taskId}}.json`
    pub output_proof_file_path: String,
}

/// What the verifier said about one proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub verified: bool,
    pub network: String,
    pub verifier_address: Address,
    pub proof_file: PathBuf,
}

/// Verify the proof of `options.task_id` on its publish network.
///
/// Configuration problems and unfinished prover tasks are logged and yield
/// `Ok(None)`. A missing proof file or a failing verification client is
/// returned as an error.
pub async fn verify<C>(options: &VerifyOptions, client: &C) -> Result<Option<VerificationResult>>
where
    C: VerificationClient + ?Sized,
{
    info!(">> VERIFY PROOF ONCHAIN");

    let outcome = run_verify(options, client).await;

    log_divider();

    match &outcome {
        Ok(Some(result)) if result.verified => info!(">> VERIFY PROOF ONCHAIN SUCCESS"),
        Ok(_) => error!(">> VERIFY PROOF ONCHAIN FAILED"),
        Err(e) => error!(">> VERIFY PROOF ONCHAIN FAILED: {:#}", e),
    }

    outcome
}

async fn run_verify<C>(options: &VerifyOptions, client: &C) -> Result<Option<VerificationResult>>
where
    C: VerificationClient + ?Sized,
{
    let cle_yaml = match load_yaml_from_path(&options.yaml_path) {
        Ok(yaml) => yaml,
        Err(e) => {
            error!("[-] ERROR: Failed to get yaml");
            error!("    {}: {}", options.yaml_path.display(), e);
            return Ok(None);
        }
    };

    let network = cle_yaml.decide_publish_network();
    let rpc_url = options.json_rpc_provider_url.resolve(network.as_deref());

    let mut tags = default_tags();
    tags.insert(TASK_ID_TAG.to_string(), options.task_id.clone());
    let proof_file = PathBuf::from(parse_template_tag(&options.output_proof_file_path, &tags));

    let proof_params = read_proof_params_file(&proof_file).wrap_err_with(|| {
        format!("Failed to read proof params from {}", proof_file.display())
    })?;
    debug!("Loaded proof params from {}", proof_file.display());

    let Some(network) = network else {
        error!("[-] ERROR: Failed to get network");
        return Ok(None);
    };

    let Some(verifier_address) = verifier_address(&network) else {
        error!("[-] ERROR: No verifier contract deployed on network '{}'", network);
        return Ok(None);
    };

    let Some(rpc_url) = rpc_url else {
        error!("[-] ERROR: No JSON-RPC provider URL configured for network '{}'", network);
        debug!(
            "Configured networks: {:?}",
            options.json_rpc_provider_url.networks().collect::<Vec<_>>()
        );
        return Ok(None);
    };

    info!(
        "Verifying {} on {} against {}",
        proof_file.display(),
        network,
        verifier_address
    );

    let request = VerificationRequest {
        proof_params: &proof_params,
        verifier_address,
        rpc_url,
        task_id: &options.task_id,
    };

    let verified = match client.verify(request).await {
        Ok(verified) => verified,
        Err(VerifyError::NotReady(message)) => {
            error!(">> PROOF IS NOT READY. {}", message);
            return Ok(None);
        }
        Err(VerifyError::Failed(e)) => return Err(e.into()),
    };

    Ok(Some(VerificationResult {
        verified,
        network,
        verifier_address,
        proof_file,
    }))
}
