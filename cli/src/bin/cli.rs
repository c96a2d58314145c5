//! Command line interface for CLE tasks
//!
//! Usage examples:
//! ```shell
//! # Verify the proof of task 42 on its publish network
//! cle verify --task-id 42
//!
//! # Use another descriptor and an explicit RPC endpoint
//! cle verify --task-id 42 --yaml-path tasks/event.yaml --json-rpc-url http://localhost:8545
//! ```
//!
//! Per-network endpoints are read from `JSON_RPC_PROVIDER_URL_<NETWORK>`
//! (for example `JSON_RPC_PROVIDER_URL_SEPOLIA`), optionally from a `.env` file.

use clap::{Parser, Subcommand};
use cle_cli::commands::{verify, VerifyOptions};
use cle_lib::UserConfig;
use ethereum_client::EthereumClient;
use eyre::Result;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "cle")]
#[command(about = "CLI for CLE proof tasks")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. `info` or `cle_cli=debug`
    #[arg(long, env = "RUST_LOG", default_value = "cle=info,cle_cli=info,ethereum_client=info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a generated proof against the on-chain verifier contract
    Verify {
        /// Prover task id, substituted for `{{taskId}}` in the proof path
        #[arg(long, default_value = "")]
        task_id: String,
        /// CLE yaml descriptor
        #[arg(long, default_value = "src/cle.yaml")]
        yaml_path: PathBuf,
        /// zkWasm hub used to check that the prover task is done
        #[arg(long, env = "ZKWASM_PROVIDER_URL")]
        zkwasm_provider_url: Option<Url>,
        /// JSON-RPC endpoint used for every network
        #[arg(long, env = "JSON_RPC_PROVIDER_URL")]
        json_rpc_url: Option<Url>,
        /// Proof file path template
        #[arg(long, env = "OUTPUT_PROOF_FILE_PATH")]
        output_proof_file_path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let user_config = UserConfig::from_env()?;

    match cli.command {
        Commands::Verify {
            task_id,
            yaml_path,
            zkwasm_provider_url,
            json_rpc_url,
            output_proof_file_path,
        } => {
            let options = VerifyOptions {
                task_id,
                yaml_path,
                zkwasm_provider_url: zkwasm_provider_url.or(user_config.zkwasm_provider_url),
                json_rpc_provider_url: user_config.json_rpc_provider_url.with_override(json_rpc_url),
                output_proof_file_path: output_proof_file_path
                    .unwrap_or(user_config.output_proof_file_path),
            };

            let client = EthereumClient::new(options.zkwasm_provider_url.clone());

            match verify(&options, &client).await {
                Ok(Some(result)) if result.verified => {
                    info!("✅ Proof {} verified on {}", result.proof_file.display(), result.network);
                }
                Ok(_) => std::process::exit(1),
                Err(e) => {
                    error!("❌ Verification aborted: {:#}", e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
