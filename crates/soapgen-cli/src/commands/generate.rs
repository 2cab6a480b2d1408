//! `soapgen generate` — Render the PHP client class for a contract.

use crate::output::StyledOutput;
use anyhow::Context;
use soapgen_codegen::{GeneratorConfig, PhpNamingResolver, PhpRenderer, ServiceDescriptor};
use soapgen_types::ServiceContract;
use std::path::Path;
use tracing::info;

/// Generated client: class name and PHP source
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    pub class_name: String,
    pub source: String,
}

/// Load a contract and render its client class
pub fn render_contract(
    contract_path: &Path,
    config: &GeneratorConfig,
) -> anyhow::Result<GeneratedSource> {
    let contract = ServiceContract::from_file(contract_path)
        .with_context(|| format!("Failed to load contract {}", contract_path.display()))?;
    info!(
        service = %contract.service.identifier,
        types = contract.types.len(),
        operations = contract.operations.len(),
        "loaded contract"
    );

    let service = ServiceDescriptor::from_contract(contract);
    let class = service
        .get_class(config, &PhpNamingResolver)
        .context("Failed to synthesize client class")?;
    let source = PhpRenderer::new().render_file(class)?;

    Ok(GeneratedSource {
        class_name: class.name.clone(),
        source,
    })
}

pub fn execute(
    contract_path: &Path,
    config: &GeneratorConfig,
    output: Option<&Path>,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let generated = render_contract(contract_path, config)?;

    match output {
        Some(path) => {
            std::fs::write(path, &generated.source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            out.status_success(
                "Generated",
                &format!("{} -> {}", generated.class_name, path.display()),
            );
        }
        None => out
            .source(&generated.source)
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
