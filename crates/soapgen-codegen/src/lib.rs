//! Soapgen Code Generation
//!
//! Synthesizes SOAP client classes from service contracts and renders them
//! as PHP.
//!
//! ```text
//! ServiceContract → ServiceDescriptor → ClassSynthesizer → GeneratedClass → PhpRenderer → .php
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod options;
pub mod render;
pub mod service;
pub mod synthesizer;
pub mod template;

pub use config::{ClassExistsPolicy, ConfigError, GeneratorConfig};
pub use error::{CodegenError, CodegenResult};
pub use model::{
    DocBlock, DocParam, Field, GeneratedClass, Method, MethodBody, Param, ParamDefault,
    Visibility,
};
pub use naming::{NamingResolver, PhpNamingResolver, ValidationError};
pub use options::{ComposedOptions, OptionDefault, OptionsComposer};
pub use render::PhpRenderer;
pub use service::ServiceDescriptor;
pub use synthesizer::ClassSynthesizer;

use soapgen_types::ServiceContract;

/// Generate the PHP client source for a contract with the default naming rules
pub fn generate_php(
    contract: ServiceContract,
    config: &GeneratorConfig,
) -> CodegenResult<String> {
    let service = ServiceDescriptor::from_contract(contract);
    let class = service.get_class(config, &PhpNamingResolver)?;
    PhpRenderer::new().render_file(class)
}
