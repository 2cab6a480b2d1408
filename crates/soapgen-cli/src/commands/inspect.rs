//! `soapgen inspect` — Summarize the generated class model without rendering.

use crate::output::StyledOutput;
use anyhow::Context;
use soapgen_codegen::{
    GeneratedClass, GeneratorConfig, Method, MethodBody, PhpNamingResolver, ServiceDescriptor,
};
use soapgen_types::ServiceContract;
use std::path::Path;

/// `Name(Type $a, $b)` for a method
pub fn method_signature(method: &Method) -> String {
    let params = method
        .params
        .iter()
        .map(|p| match &p.type_hint {
            Some(hint) => format!("{} ${}", hint, p.name),
            None => format!("${}", p.name),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", method.name, params)
}

/// Option keys the constructor sets when the caller did not
pub fn option_keys(class: &GeneratedClass) -> Vec<&'static str> {
    match &class.constructor.body {
        MethodBody::Constructor { options, .. } => options.iter().map(|d| d.key).collect(),
        MethodBody::RemoteCall { .. } => Vec::new(),
    }
}

pub fn execute(
    contract_path: &Path,
    config: &GeneratorConfig,
    out: &mut StyledOutput,
) -> anyhow::Result<()> {
    let contract = ServiceContract::from_file(contract_path)
        .with_context(|| format!("Failed to load contract {}", contract_path.display()))?;
    let operation_count = contract.operations.len();
    let service = ServiceDescriptor::from_contract(contract);
    let class = service
        .get_class(config, &PhpNamingResolver)
        .context("Failed to synthesize client class")?;

    out.heading("Class:    ");
    out.info(&class.name);
    out.plain(&format!(" extends {}", class.base_class));
    out.newline();

    let classmap = class.fields.iter().find(|f| f.is_static);
    let entries = classmap.map(|f| f.value.len()).unwrap_or(0);
    out.heading("Classmap: ");
    out.plain(&format!("{} entries", entries));
    out.newline();
    if let Some(field) = classmap {
        for (from, to) in &field.value {
            out.plain(&format!("  {} => {}", from, to));
            out.newline();
        }
    }

    let keys = option_keys(class);
    out.heading("Options:  ");
    if keys.is_empty() {
        out.plain("(none)");
    } else {
        out.plain(&keys.join(", "));
    }
    out.newline();

    out.heading("Methods:  ");
    out.plain(&format!("{}", class.method_count()));
    let dropped = operation_count.saturating_sub(class.method_count());
    if dropped > 0 {
        out.highlight(&format!(" ({} operations dropped as duplicates)", dropped));
    }
    out.newline();
    for method in class.methods() {
        out.plain(&format!("  {}", method_signature(method)));
        out.newline();
    }

    Ok(())
}
