//! Configuration file discovery and command-line overrides

use anyhow::Context;
use clap::Args;
use soapgen_codegen::{ClassExistsPolicy, GeneratorConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "soapgen.toml";

/// Generator settings that can be given on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Configuration file (defaults to ./soapgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Class name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Class name suffix
    #[arg(long)]
    pub suffix: Option<String>,

    /// Wrap the class in a class_exists guard
    #[arg(long)]
    pub class_exists: bool,

    /// Document location used as the constructor default
    #[arg(long)]
    pub input_file: Option<String>,

    /// Transport feature flag, OR-ed in the given order (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Transport cache directive (e.g. WSDL_CACHE_NONE)
    #[arg(long)]
    pub wsdl_cache: Option<String>,

    /// Transport compression directive
    #[arg(long)]
    pub compression: Option<String>,
}

impl ConfigOverrides {
    /// Apply every override that was given on top of `config`
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if self.class_exists {
            config.class_exists = ClassExistsPolicy::Guarded;
        }
        if let Some(input) = &self.input_file {
            config.input_file = input.clone();
        }
        if !self.features.is_empty() {
            config.option_features = self.features.clone();
        }
        if let Some(cache) = &self.wsdl_cache {
            config.wsdl_cache = cache.clone();
        }
        if let Some(compression) = &self.compression {
            config.compression = compression.clone();
        }
        config
    }
}

/// Resolve the effective configuration: explicit file, else `soapgen.toml`
/// in `search_dir` if present, else defaults; then the overrides.
pub fn load_config(
    overrides: &ConfigOverrides,
    search_dir: &Path,
) -> anyhow::Result<GeneratorConfig> {
    let base = match &overrides.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let default_path = search_dir.join(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                debug!(path = %default_path.display(), "using configuration file");
                GeneratorConfig::from_file(&default_path)
                    .with_context(|| format!("Failed to load config {}", default_path.display()))?
            } else {
                GeneratorConfig::default()
            }
        }
    };

    let config = overrides.apply(base);
    config.validate().context("Invalid command-line options")?;
    Ok(config)
}
