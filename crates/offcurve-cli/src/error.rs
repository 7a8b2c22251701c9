//! CLI error types.

use offcurve_core::DeriveError;
use thiserror::Error;

/// Errors from running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Derivation rejected the input or found no address.
    #[error("derivation failed: {0}")]
    Derive(#[from] DeriveError),

    /// Writing the result failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Input errors exit with 2 (usage), everything else with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Derive(err) if err.is_input_error() => 2,
            Self::Derive(_) | Self::Io(_) => 1,
        }
    }
}
