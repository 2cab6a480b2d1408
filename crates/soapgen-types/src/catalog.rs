//! Type catalog
//!
//! The data types a service contract knows about, in contract order.

use serde::{Deserialize, Serialize};

/// Whether a contract type is structured or scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A structured type that needs a generated class counterpart
    Complex,
    /// A scalar/simple type (string, int, enumerations, ...)
    Simple,
}

/// Descriptor for one known data type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypeCatalogEntry {
    /// Type name as it appears in the contract
    pub identifier: String,

    /// Name of the generated type (defaults to `identifier` when omitted)
    #[serde(default)]
    pub generated_identifier: String,

    /// Complex or simple
    pub kind: TypeKind,
}

impl TypeCatalogEntry {
    /// Create a complex type entry
    pub fn complex(identifier: impl Into<String>, generated: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            generated_identifier: generated.into(),
            kind: TypeKind::Complex,
        }
    }

    /// Create a simple type entry
    pub fn simple(identifier: impl Into<String>, generated: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            generated_identifier: generated.into(),
            kind: TypeKind::Simple,
        }
    }

    /// True for structured types
    pub fn is_complex(&self) -> bool {
        self.kind == TypeKind::Complex
    }
}

/// Ordered catalog of the types a service knows about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    entries: Vec<TypeCatalogEntry>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate all entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.entries.iter()
    }

    /// Iterate only the complex entries, in catalog order
    pub fn complex_types(&self) -> impl Iterator<Item = &TypeCatalogEntry> {
        self.entries.iter().filter(|e| e.is_complex())
    }

    /// Look up an entry by its contract identifier
    pub fn find(&self, identifier: &str) -> Option<&TypeCatalogEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    /// Look up a complex entry by its contract identifier
    pub fn find_complex(&self, identifier: &str) -> Option<&TypeCatalogEntry> {
        self.find(identifier).filter(|e| e.is_complex())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [TypeCatalogEntry] {
        &mut self.entries
    }
}

impl FromIterator<TypeCatalogEntry> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeCatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeCatalogEntry;
    type IntoIter = std::slice::Iter<'a, TypeCatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeCatalog {
        [
            TypeCatalogEntry::complex("Person", "PersonType"),
            TypeCatalogEntry::simple("string", "string"),
            TypeCatalogEntry::complex("Address", "Address"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_complex_types_keep_catalog_order() {
        let catalog = sample();
        let names: Vec<&str> = catalog
            .complex_types()
            .map(|e| e.identifier.as_str())
            .collect();
        assert_eq!(names, vec!["Person", "Address"]);
    }

    #[test]
    fn test_find_complex_skips_simple_types() {
        let catalog = sample();
        assert!(catalog.find("string").is_some());
        assert!(catalog.find_complex("string").is_none());
        assert_eq!(
            catalog.find_complex("Person").map(|e| e.generated_identifier.as_str()),
            Some("PersonType")
        );
    }

    #[test]
    fn test_unknown_identifier() {
        assert!(sample().find("Missing").is_none());
    }
}
