//! The seam between the verify command and whatever performs verification.

use crate::error::EthereumError;
use alloy_primitives::Address;
use async_trait::async_trait;
use cle_lib::ProofParams;
use thiserror::Error;
use url::Url;

/// Why a verification attempt produced no answer
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The proving task has not finished, there is nothing to verify yet
    #[error("{0}")]
    NotReady(String),

    /// Anything else: transport, contract or API failures
    #[error(transparent)]
    Failed(#[from] EthereumError),
}

impl VerifyError {
    #[must_use]
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::NotReady(_))
    }
}

/// Everything needed for one on-chain verification
#[derive(Debug, Clone, Copy)]
pub struct VerificationRequest<'a> {
    pub proof_params: &'a ProofParams,
    pub verifier_address: Address,
    pub rpc_url: &'a Url,
    /// Prover task the proof came from; empty when unknown
    pub task_id: &'a str,
}

#[async_trait]
pub trait VerificationClient: Send + Sync {
    /// `Ok(true)` when the verifier accepts the proof, `Ok(false)` when it rejects it
    async fn verify(&self, request: VerificationRequest<'_>) -> Result<bool, VerifyError>;
}
