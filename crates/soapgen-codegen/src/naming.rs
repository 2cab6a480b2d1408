//! Identifier validation and normalization
//!
//! Class names go through [`NamingResolver::validate_class_name`], which may
//! reject a candidate; the synthesizer recovers from that with a fixed
//! fallback suffix. Method names go through
//! [`NamingResolver::normalize_method_name`], where a rejection is fatal.

use thiserror::Error;

/// Why an identifier was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing usable remained after normalization
    #[error("'{candidate}' contains no identifier characters")]
    Empty {
        /// The rejected candidate
        candidate: String,
    },

    /// The normalized name is a reserved word of the target language
    #[error("'{name}' is a reserved word")]
    ReservedWord {
        /// The normalized name
        name: String,
    },
}

/// Validates and normalizes identifiers for the generated source
pub trait NamingResolver {
    /// Normalize a candidate into a usable class name, or reject it
    fn validate_class_name(&self, candidate: &str) -> Result<String, ValidationError>;

    /// Normalize a candidate into a usable method name, or reject it
    fn normalize_method_name(&self, candidate: &str) -> Result<String, ValidationError>;
}

/// PHP identifier rules
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpNamingResolver;

/// Keywords and reserved type names that cannot name a PHP class
const PHP_RESERVED: &[&str] = &[
    "__halt_compiler", "abstract", "and", "array", "as", "bool", "break", "callable",
    "case", "catch", "class", "clone", "const", "continue", "declare", "default", "die",
    "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor", "endforeach",
    "endif", "endswitch", "endwhile", "enum", "eval", "exit", "extends", "false", "final",
    "finally", "float", "fn", "for", "foreach", "function", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof", "int",
    "interface", "isset", "iterable", "list", "match", "mixed", "namespace", "never",
    "new", "null", "object", "or", "parent", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "self", "static", "string",
    "switch", "throw", "trait", "true", "try", "unset", "use", "var", "void", "while",
    "xor", "yield",
];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

/// Check a name against the reserved word list (PHP keywords are case-insensitive)
pub fn is_reserved(name: &str) -> bool {
    PHP_RESERVED.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}

/// Drop leading characters that cannot start an identifier, then every
/// character that cannot appear in one.
pub fn normalize_identifier(candidate: &str) -> Result<String, ValidationError> {
    let name: String = candidate
        .trim_start_matches(|c: char| !is_ident_start(c))
        .chars()
        .filter(|&c| is_ident_continue(c))
        .collect();

    if name.is_empty() {
        return Err(ValidationError::Empty {
            candidate: candidate.to_string(),
        });
    }
    Ok(name)
}

impl NamingResolver for PhpNamingResolver {
    fn validate_class_name(&self, candidate: &str) -> Result<String, ValidationError> {
        let name = normalize_identifier(candidate)?;
        if is_reserved(&name) {
            return Err(ValidationError::ReservedWord { name });
        }
        Ok(name)
    }

    fn normalize_method_name(&self, candidate: &str) -> Result<String, ValidationError> {
        normalize_identifier(candidate)
    }
}
