//! Integration tests for configuration resolution and the generate pipeline

use soapgen_cli::commands::generate::render_contract;
use soapgen_cli::commands::inspect::{method_signature, option_keys};
use soapgen_cli::{load_config, ConfigOverrides, DEFAULT_CONFIG_FILE};
use soapgen_codegen::{ClassExistsPolicy, GeneratorConfig, PhpNamingResolver, ServiceDescriptor};
use soapgen_types::{ContractFormat, ServiceContract};
use std::fs;
use tempfile::TempDir;

const CONTRACT: &str = r#"
[service]
identifier = "Weather"
description = "Weather lookups"

[[types]]
identifier = "City"
kind = "complex"

[[operations]]
name = "GetTemp"
description = "Current temperature"
params = { city = "City", unit = "string" }
"#;

fn write_contract(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("weather.toml");
    fs::write(&path, CONTRACT).unwrap();
    path
}

#[test]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&ConfigOverrides::default(), dir.path()).unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_discovers_default_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "suffix = \"Service\"\nwsdl-cache = \"WSDL_CACHE_NONE\"\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        prefix: Some("Ws".to_string()),
        ..ConfigOverrides::default()
    };
    let config = load_config(&overrides, dir.path()).unwrap();
    assert_eq!(config.prefix, "Ws");
    assert_eq!(config.suffix, "Service");
    assert_eq!(config.wsdl_cache, "WSDL_CACHE_NONE");
}

#[test]
fn test_explicit_config_file_must_exist() {
    let dir = TempDir::new().unwrap();
    let overrides = ConfigOverrides {
        config: Some(dir.path().join("missing.toml")),
        ..ConfigOverrides::default()
    };
    assert!(load_config(&overrides, dir.path()).is_err());
}

#[test]
fn test_invalid_feature_override_rejected() {
    let dir = TempDir::new().unwrap();
    let overrides = ConfigOverrides {
        features: vec!["NOT VALID".to_string()],
        ..ConfigOverrides::default()
    };
    assert!(load_config(&overrides, dir.path()).is_err());
}

#[test]
fn test_render_contract() {
    let dir = TempDir::new().unwrap();
    let contract = write_contract(&dir);
    let overrides = ConfigOverrides {
        suffix: Some("Service".to_string()),
        class_exists: true,
        input_file: Some("weather.wsdl".to_string()),
        ..ConfigOverrides::default()
    };
    let config = load_config(&overrides, dir.path()).unwrap();
    assert_eq!(config.class_exists, ClassExistsPolicy::Guarded);

    let generated = render_contract(&contract, &config).unwrap();
    assert_eq!(generated.class_name, "WeatherService");
    assert!(generated
        .source
        .starts_with("<?php\n\nif (!class_exists(\"WeatherService\", false))\n{\n"));
    assert!(generated.source.contains("$wsdl = 'weather.wsdl'"));
    assert!(generated
        .source
        .contains("public function GetTemp(City $city, $unit)"));
}

#[test]
fn test_render_missing_contract() {
    let dir = TempDir::new().unwrap();
    let result = render_contract(&dir.path().join("nope.toml"), &GeneratorConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_inspect_helpers() {
    let contract = ServiceContract::parse(CONTRACT, ContractFormat::Toml).unwrap();
    let service = ServiceDescriptor::from_contract(contract);
    let config = GeneratorConfig {
        compression: "SOAP_COMPRESSION_ACCEPT".to_string(),
        ..GeneratorConfig::default()
    };
    let class = service.get_class(&config, &PhpNamingResolver).unwrap();

    assert_eq!(option_keys(class), vec!["compression"]);
    let method = class.method("GetTemp").unwrap();
    assert_eq!(method_signature(method), "GetTemp(City $city, $unit)");
}
