pub mod verify;

pub use verify::{verify, VerificationResult, VerifyOptions};

use tracing::info;

const DIVIDER_WIDTH: usize = 60;

pub(crate) fn log_divider() {
    info!("{}", "=".repeat(DIVIDER_WIDTH));
}
