//! Contract loading errors

use thiserror::Error;

/// Errors that can occur while loading or validating a service contract
#[derive(Debug, Error)]
pub enum ContractError {
    /// Failed to read the contract file
    #[error("Failed to read contract file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse a TOML contract
    #[error("Failed to parse contract TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Failed to parse a JSON contract
    #[error("Failed to parse contract JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The contract file has an extension we cannot read
    #[error("Unsupported contract format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    /// Validation error
    #[error("Invalid contract: {0}")]
    ValidationError(String),
}
