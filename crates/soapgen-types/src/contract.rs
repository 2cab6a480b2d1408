//! Service contract documents
//!
//! A contract is the already-parsed description of a remote service, stored
//! as TOML or JSON:
//!
//! ```toml
//! [service]
//! identifier = "Weather"
//! description = "Weather lookups"
//!
//! [[types]]
//! identifier = "City"
//! kind = "complex"
//!
//! [[operations]]
//! name = "GetTemp"
//! params = { city = "City" }
//! ```

use crate::catalog::TypeCatalog;
use crate::error::ContractError;
use crate::operation::OperationDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Service identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub identifier: String,

    /// Description used as the class documentation
    #[serde(default)]
    pub description: String,
}

/// A complete service contract document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceContract {
    /// Service identity
    pub service: ServiceInfo,

    /// Known data types, in contract order
    #[serde(default)]
    pub types: TypeCatalog,

    /// Remote operations, in declaration order
    #[serde(default)]
    pub operations: Vec<OperationDescriptor>,
}

/// On-disk contract encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl ContractFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ContractError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(ContractFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(ContractFormat::Json),
            other => Err(ContractError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl ServiceContract {
    /// Load a contract from a file, picking the format by extension
    pub fn from_file(path: &Path) -> Result<Self, ContractError> {
        let format = ContractFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse a contract from a string in the given format
    pub fn parse(content: &str, format: ContractFormat) -> Result<Self, ContractError> {
        let mut contract: ServiceContract = match format {
            ContractFormat::Toml => toml::from_str(content)?,
            ContractFormat::Json => serde_json::from_str(content)?,
        };
        contract.fill_generated_identifiers();
        contract.validate()?;
        Ok(contract)
    }

    /// Validate the contract
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.service.identifier.trim().is_empty() {
            return Err(ContractError::ValidationError(
                "Service identifier cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.types {
            if entry.identifier.is_empty() {
                return Err(ContractError::ValidationError(
                    "Type identifier cannot be empty".to_string(),
                ));
            }
            if !seen.insert(entry.identifier.as_str()) {
                return Err(ContractError::ValidationError(format!(
                    "Type '{}' is declared more than once",
                    entry.identifier
                )));
            }
        }

        for op in &self.operations {
            if op.name.trim().is_empty() {
                return Err(ContractError::ValidationError(
                    "Operation name cannot be empty".to_string(),
                ));
            }
            if op.params.keys().any(|p| p.is_empty()) {
                return Err(ContractError::ValidationError(format!(
                    "Operation '{}' has a parameter with an empty name",
                    op.name
                )));
            }
        }

        Ok(())
    }

    /// Default every missing generated identifier to the contract identifier
    fn fill_generated_identifiers(&mut self) {
        for entry in self.types.entries_mut() {
            if entry.generated_identifier.is_empty() {
                entry.generated_identifier = entry.identifier.clone();
            }
        }
    }
}
