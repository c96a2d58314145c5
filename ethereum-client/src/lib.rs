#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod client;
pub mod contracts;
pub mod error;
pub mod verifier;
pub mod zkwasm;

pub use client::EthereumClient;
pub use contracts::{supported_networks, verifier_address, AGGREGATOR_VERIFIER_ADDRESS};
pub use error::{EthereumError, Result};
pub use verifier::{VerificationClient, VerificationRequest, VerifyError};
pub use zkwasm::{TaskStatus, ZkWasmClient};
