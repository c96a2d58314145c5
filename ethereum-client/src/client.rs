use crate::{
    contracts::{IAggregatorVerifier, VerifyCallArgs},
    error::{EthereumError, Result},
    verifier::{VerificationClient, VerificationRequest, VerifyError},
    zkwasm::{ensure_task_ready, ZkWasmClient},
};
use alloy_json_rpc::RpcError;
use alloy_primitives::Address;
use alloy_provider::{Provider, ProviderBuilder};
use async_trait::async_trait;
use cle_lib::ProofParams;
use tracing::{info, warn};
use url::Url;

/// Verifies proofs by calling the aggregator verifier contract over JSON-RPC.
///
/// When a zkWasm hub is configured the prover task is checked first, so an
/// unfinished task is reported as not ready instead of as a failed proof.
#[derive(Debug, Clone, Default)]
pub struct EthereumClient {
    zkwasm: Option<ZkWasmClient>,
}

impl EthereumClient {
    #[must_use]
    pub fn new(zkwasm_provider_url: Option<Url>) -> Self {
        Self {
            zkwasm: zkwasm_provider_url.map(ZkWasmClient::new),
        }
    }

    async fn check_task(&self, task_id: &str) -> std::result::Result<(), VerifyError> {
        let Some(zkwasm) = &self.zkwasm else {
            return Ok(());
        };
        if task_id.is_empty() {
            return Ok(());
        }

        let record = zkwasm.query_task(task_id).await?;
        ensure_task_ready(task_id, record.as_ref())?;
        info!("✅ Prover task {} is done", task_id);
        Ok(())
    }

    /// Call `verify` on the verifier contract. A reverted call means the proof was rejected.
    ///
    /// Fails when `verifier_address` holds no code on the connected chain.
    pub async fn verify_on_chain(
        &self,
        proof_params: &ProofParams,
        verifier_address: Address,
        rpc_url: &Url,
    ) -> Result<bool> {
        let provider = ProviderBuilder::new().connect_http(rpc_url.clone());

        let chain_id = provider.get_chain_id().await?;
        info!("🔗 Connected to chain {} via {}", chain_id, rpc_url);
        info!("📋 Verifier contract: {}", verifier_address);

        // A call to an address without code returns empty data instead of reverting
        let code = provider.get_code_at(verifier_address).await?;
        if code.is_empty() {
            return Err(EthereumError::Contract(format!(
                "no verifier contract at {verifier_address}"
            )));
        }

        let args = VerifyCallArgs::from(proof_params);
        let verifier = IAggregatorVerifier::new(verifier_address, provider);

        match verifier
            .verify(args.proof, args.verify_instance, args.aux, args.target_instance)
            .call()
            .await
        {
            Ok(_) => Ok(true),
            Err(alloy_contract::Error::TransportError(RpcError::ErrorResp(payload))) => {
                warn!("⚠️  Verifier rejected the proof: {}", payload.message);
                Ok(false)
            }
            Err(e) => Err(EthereumError::Contract(e.to_string())),
        }
    }
}

#[async_trait]
impl VerificationClient for EthereumClient {
    async fn verify(&self, request: VerificationRequest<'_>) -> std::result::Result<bool, VerifyError> {
        self.check_task(request.task_id).await?;

        let verified = self
            .verify_on_chain(request.proof_params, request.verifier_address, request.rpc_url)
            .await?;
        Ok(verified)
    }
}
