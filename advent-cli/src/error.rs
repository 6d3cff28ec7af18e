//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_harness::RegistrationError),

    /// Registry error
    #[error("Registry error: {0}")]
    Registry(#[from] advent_harness::RegistryError),

    /// Runner error
    #[error("Runner error: {0}")]
    Runner(#[from] advent_harness::RunnerError),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] advent_harness::StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
