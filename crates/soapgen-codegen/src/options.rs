//! Runtime option composition
//!
//! Turns the feature/cache/compression part of the configuration into a
//! list of guarded option defaults for the constructor. Each default is only
//! applied when the caller has not set that option key already. Empty
//! configuration values produce no guard at all.

use crate::config::GeneratorConfig;
use crate::template;

pub const FEATURES_KEY: &str = "features";
pub const WSDL_CACHE_KEY: &str = "wsdl_cache";
pub const COMPRESSION_KEY: &str = "compression";

/// One "if the caller has not set `key`, set it to `value`" guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefault {
    pub key: &'static str,
    /// Source expression assigned to the key
    pub value: String,
}

/// The guards for one constructor, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedOptions {
    defaults: Vec<OptionDefault>,
}

impl ComposedOptions {
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionDefault> {
        self.defaults.iter()
    }

    pub fn get(&self, key: &str) -> Option<&OptionDefault> {
        self.defaults.iter().find(|d| d.key == key)
    }

    /// Guard blocks as source text; empty when there are no guards
    pub fn to_source(&self) -> String {
        self.defaults
            .iter()
            .map(|d| template::option_guard(d.key, &d.value))
            .collect()
    }
}

/// Builds [`ComposedOptions`] from a configuration
pub struct OptionsComposer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> OptionsComposer<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn compose(&self) -> ComposedOptions {
        let mut defaults = Vec::with_capacity(3);

        if !self.config.option_features.is_empty() {
            defaults.push(OptionDefault {
                key: FEATURES_KEY,
                value: self.config.option_features.join(" | "),
            });
        }

        if !self.config.wsdl_cache.is_empty() {
            defaults.push(OptionDefault {
                key: WSDL_CACHE_KEY,
                value: self.config.wsdl_cache.clone(),
            });
        }

        if !self.config.compression.is_empty() {
            defaults.push(OptionDefault {
                key: COMPRESSION_KEY,
                value: self.config.compression.clone(),
            });
        }

        ComposedOptions { defaults }
    }
}
