use alloy_primitives::{address, Address, U256};
use alloy_sol_types::sol;
use cle_lib::ProofParams;

sol! {
    #[sol(rpc)]
    interface IAggregatorVerifier {
        function verify(
            uint256[] calldata proof,
            uint256[] calldata verify_instance,
            uint256[] calldata aux,
            uint256[][] calldata target_instance
        ) external view;
    }
}

pub use IAggregatorVerifier::IAggregatorVerifierInstance;

/// Deployed aggregator verifier contracts, keyed by network name
pub const AGGREGATOR_VERIFIER_ADDRESS: &[(&str, Address)] = &[
    ("mainnet", address!("9b13520f499e95f7e94e8346ed8f52d2f830d955")),
    ("sepolia", address!("fd74dce645eb5eb65d818aec544c72ba325d93b0")),
    ("goerli", address!("bef9572648284cb63a0da32a89d3b4f2bed65a89")),
];

/// Verifier contract deployed on `network`, if any
#[must_use]
pub fn verifier_address(network: &str) -> Option<Address> {
    let network = network.trim();
    AGGREGATOR_VERIFIER_ADDRESS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(network))
        .map(|(_, address)| *address)
}

pub fn supported_networks() -> impl Iterator<Item = &'static str> {
    AGGREGATOR_VERIFIER_ADDRESS.iter().map(|(name, _)| *name)
}

/// Split `bytes` into 32-byte little-endian words; the last word is zero-padded.
#[must_use]
pub fn bytes_to_words(bytes: &[u8]) -> Vec<U256> {
    bytes.chunks(32).map(U256::from_le_slice).collect()
}

/// Arguments of `IAggregatorVerifier.verify`, derived from proof params
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCallArgs {
    pub proof: Vec<U256>,
    pub verify_instance: Vec<U256>,
    pub aux: Vec<U256>,
    pub target_instance: Vec<Vec<U256>>,
}

impl From<&ProofParams> for VerifyCallArgs {
    fn from(params: &ProofParams) -> Self {
        Self {
            proof: bytes_to_words(&params.aggregate_proof),
            verify_instance: bytes_to_words(&params.batch_instances),
            aux: bytes_to_words(&params.aux),
            target_instance: params
                .instances
                .iter()
                .map(|instance| bytes_to_words(instance))
                .collect(),
        }
    }
}
