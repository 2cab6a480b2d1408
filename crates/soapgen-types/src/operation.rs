//! Remote operation descriptors
//!
//! An operation carries its declared parameters in declaration order. The
//! signature parameters (with type hints) and the call-argument rendering
//! (without) both walk the same ordered map, so they always enumerate the
//! same parameters in the same order.

use crate::catalog::TypeCatalog;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Descriptor for one remote operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Operation name as declared by the contract
    pub name: String,

    /// Human readable description
    #[serde(default)]
    pub description: String,

    /// Declared parameters: name to contract type hint, in declaration order
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

/// A parameter resolved against the type catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedParam {
    /// Parameter name (without any sigil)
    pub name: String,
    /// Generated type name, present only for complex catalog types
    pub type_hint: Option<String>,
}

/// Documentation info for one parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParamInfo {
    /// Displayed type (generated name for complex types, contract hint otherwise)
    pub type_name: String,
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
}

impl OperationDescriptor {
    /// Create an operation with no parameters
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: IndexMap::new(),
        }
    }

    /// Builder-style parameter declaration
    pub fn with_param(mut self, name: impl Into<String>, hint: impl Into<String>) -> Self {
        self.params.insert(name.into(), hint.into());
        self
    }

    /// Parameters with type hints resolved through the catalog.
    ///
    /// Only complex types get a hint; scalar hints cannot be expressed in
    /// the generated signature.
    pub fn typed_params(&self, types: &TypeCatalog) -> Vec<TypedParam> {
        self.params
            .iter()
            .map(|(name, hint)| TypedParam {
                name: name.clone(),
                type_hint: types
                    .find_complex(hint)
                    .map(|entry| entry.generated_identifier.clone()),
            })
            .collect()
    }

    /// Call-argument rendering with hints stripped, e.g. `$city, $days`
    pub fn call_arguments(&self) -> String {
        self.params
            .keys()
            .map(|name| format!("${}", name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Documentation info for a declared parameter
    pub fn doc_param(&self, param: &str, types: &TypeCatalog) -> Option<DocParamInfo> {
        let hint = self.params.get(param)?;
        let type_name = match types.find_complex(hint) {
            Some(entry) => entry.generated_identifier.clone(),
            None => hint.clone(),
        };
        Some(DocParamInfo {
            type_name,
            name: param.to_string(),
            description: String::new(),
        })
    }
}
