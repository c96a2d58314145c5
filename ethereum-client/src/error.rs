use thiserror::Error;

pub type Result<T> = std::result::Result<T, EthereumError>;

#[derive(Error, Debug)]
pub enum EthereumError {
    #[error("Provider error: {0}")]
    Provider(#[from] alloy_transport::TransportError),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("zkWasm API error: {status_code} - {message}")]
    ZkWasmApi { status_code: u16, message: String },
}
