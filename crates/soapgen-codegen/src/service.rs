//! Service descriptors
//!
//! A [`ServiceDescriptor`] collects a service's identifier, description,
//! type catalog and operations, and builds its client class at most once.
//! The cell is not `Sync`, so concurrent first use has to be serialized by
//! the owner.

use crate::config::GeneratorConfig;
use crate::error::CodegenResult;
use crate::model::GeneratedClass;
use crate::naming::NamingResolver;
use crate::synthesizer::ClassSynthesizer;
use once_cell::unsync::OnceCell;
use soapgen_types::{OperationDescriptor, ServiceContract, TypeCatalog};
use tracing::warn;

/// A service and its lazily generated client class
#[derive(Debug)]
pub struct ServiceDescriptor {
    identifier: String,
    description: String,
    types: TypeCatalog,
    operations: Vec<OperationDescriptor>,
    class: OnceCell<GeneratedClass>,
}

impl ServiceDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        types: TypeCatalog,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            types,
            operations: Vec::new(),
            class: OnceCell::new(),
        }
    }

    pub fn from_contract(contract: ServiceContract) -> Self {
        let mut service = Self::new(
            contract.service.identifier,
            contract.types,
            contract.service.description,
        );
        service.operations = contract.operations;
        service
    }

    /// Append an operation. Operations added after the class was generated
    /// are ignored.
    pub fn add_operation(&mut self, operation: OperationDescriptor) {
        if self.is_generated() {
            warn!(
                service = %self.identifier,
                operation = %operation.name,
                "class already generated, ignoring operation"
            );
            return;
        }
        self.operations.push(operation);
    }

    /// The generated class, built on first call.
    ///
    /// Later calls return the cached class regardless of the arguments. A
    /// failed generation is not cached.
    pub fn get_class<R: NamingResolver + ?Sized>(
        &self,
        config: &GeneratorConfig,
        resolver: &R,
    ) -> CodegenResult<&GeneratedClass> {
        self.class.get_or_try_init(|| {
            ClassSynthesizer::new(config, resolver).synthesize(
                &self.identifier,
                &self.description,
                &self.types,
                &self.operations,
            )
        })
    }

    pub fn is_generated(&self) -> bool {
        self.class.get().is_some()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }
}
