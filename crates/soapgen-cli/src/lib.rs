//! Soapgen command-line support
//!
//! Configuration resolution, logging setup and the subcommand
//! implementations behind the `soapgen` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod overrides;

pub use overrides::{load_config, ConfigOverrides, DEFAULT_CONFIG_FILE};
