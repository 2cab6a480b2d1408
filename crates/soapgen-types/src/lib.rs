//! Soapgen Service Contract Types
//!
//! Descriptors for a remote service contract: the catalog of known data
//! types, the remote operations, and the serialized contract document the
//! generator is driven by.

#![warn(missing_docs)]

pub mod catalog;
pub mod contract;
pub mod error;
pub mod operation;

pub use catalog::{TypeCatalog, TypeCatalogEntry, TypeKind};
pub use contract::{ContractFormat, ServiceContract, ServiceInfo};
pub use error::ContractError;
pub use operation::{DocParamInfo, OperationDescriptor, TypedParam};
