//! Integration tests for loading contracts from disk

use soapgen_types::{ContractError, ServiceContract, TypeKind};
use std::fs;
use tempfile::TempDir;

const WEATHER_TOML: &str = r#"
[service]
identifier = "Weather"
description = "Weather lookups"

[[types]]
identifier = "City"
kind = "complex"

[[types]]
identifier = "Reading"
generated-identifier = "TemperatureReading"
kind = "complex"

[[types]]
identifier = "string"
kind = "simple"

[[operations]]
name = "GetTemp"
description = "Current temperature"
params = { city = "City" }

[[operations]]
name = "Ping"
"#;

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.toml");
    fs::write(&path, WEATHER_TOML).unwrap();

    let contract = ServiceContract::from_file(&path).unwrap();
    assert_eq!(contract.service.identifier, "Weather");
    assert_eq!(contract.operations.len(), 2);
    assert!(contract.operations[1].params.is_empty());

    let kinds: Vec<TypeKind> = contract.types.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TypeKind::Complex, TypeKind::Complex, TypeKind::Simple]);
    assert_eq!(
        contract.types.find("Reading").unwrap().generated_identifier,
        "TemperatureReading"
    );
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.json");
    fs::write(
        &path,
        r#"{ "service": { "identifier": "Weather", "description": "d" }, "operations": [] }"#,
    )
    .unwrap();

    let contract = ServiceContract::from_file(&path).unwrap();
    assert!(contract.types.is_empty());
    assert!(contract.operations.is_empty());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = ServiceContract::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ContractError::IoError(_))));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weather.wsdl");
    fs::write(&path, "<definitions/>").unwrap();

    let result = ServiceContract::from_file(&path);
    assert!(matches!(result, Err(ContractError::UnsupportedFormat(_))));
}

#[test]
fn test_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[service\nidentifier = ").unwrap();

    let result = ServiceContract::from_file(&path);
    assert!(matches!(result, Err(ContractError::TomlError(_))));
}
