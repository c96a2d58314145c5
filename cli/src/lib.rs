#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;

pub use commands::{verify, VerificationResult, VerifyOptions};
