//! Code generation errors

use crate::config::ConfigError;
use crate::naming::ValidationError;
use soapgen_types::ContractError;
use thiserror::Error;

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Operation '{operation}' has no valid method name: {source}")]
    InvalidMethodName {
        operation: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render source: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
