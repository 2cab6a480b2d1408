//! Client class synthesis
//!
//! Builds a [`GeneratedClass`] from a service's identifier, description,
//! type catalog and operations:
//!
//! 1. Resolve the class name (`prefix + identifier + suffix`), falling back
//!    to the raw candidate plus [`CLASS_NAME_FALLBACK_SUFFIX`] when the
//!    naming rules reject it.
//! 2. Build the constructor: classmap merge, option guards, base delegation.
//! 3. Build the static classmap field from the complex catalog types.
//! 4. Build one delegating method per operation. Operations whose names
//!    normalize to an already used method name are dropped; the first one
//!    keeps the name.

use crate::config::GeneratorConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::model::{
    DocBlock, DocParam, Field, GeneratedClass, Method, MethodBody, Param, ParamDefault,
    Visibility,
};
use crate::naming::NamingResolver;
use crate::options::OptionsComposer;
use crate::template::{OPTIONS_PARAM, WSDL_PARAM};
use indexmap::IndexMap;
use soapgen_types::{OperationDescriptor, TypeCatalog};
use tracing::{debug, warn};

/// Transport base class every generated client extends
pub const TRANSPORT_BASE_CLASS: &str = "SoapClient";
/// Appended to a class name the naming rules rejected
pub const CLASS_NAME_FALLBACK_SUFFIX: &str = "Custom";
/// Name of the static classmap field
pub const CLASSMAP_FIELD: &str = "classmap";
/// Name of the generated constructor
pub const CONSTRUCTOR_NAME: &str = "__construct";

/// Synthesizes client classes for one configuration
pub struct ClassSynthesizer<'a, R: NamingResolver + ?Sized> {
    config: &'a GeneratorConfig,
    resolver: &'a R,
}

impl<'a, R: NamingResolver + ?Sized> ClassSynthesizer<'a, R> {
    pub fn new(config: &'a GeneratorConfig, resolver: &'a R) -> Self {
        Self { config, resolver }
    }

    /// Build the whole class
    pub fn synthesize(
        &self,
        identifier: &str,
        description: &str,
        types: &TypeCatalog,
        operations: &[OperationDescriptor],
    ) -> CodegenResult<GeneratedClass> {
        let name = self.resolve_class_name(identifier);
        debug!(class = %name, operations = operations.len(), "synthesizing client class");

        let mut class = GeneratedClass::new(
            name,
            TRANSPORT_BASE_CLASS,
            self.config.class_exists,
            DocBlock::new(description),
            self.build_constructor(),
        );
        class.add_field(build_classmap(types));

        for op in operations {
            let method = self.build_method(op, types)?;
            let method_name = method.name.clone();
            if let Some(existing) = class.case_clash(&method_name) {
                warn!(
                    operation = %op.name,
                    method = %method_name,
                    existing = %existing,
                    "method name differs from an existing one only in case"
                );
            }
            if !class.add_method(method) {
                debug!(
                    operation = %op.name,
                    method = %method_name,
                    "method name already taken, dropping operation"
                );
            }
        }

        debug!(class = %class.name, methods = class.method_count(), "client class synthesized");
        Ok(class)
    }

    /// `prefix + identifier + suffix`, validated, with a single fallback.
    ///
    /// The fallback name is used even if it is still invalid; that case is
    /// only logged.
    pub fn resolve_class_name(&self, identifier: &str) -> String {
        let candidate = format!("{}{}{}", self.config.prefix, identifier, self.config.suffix);
        match self.resolver.validate_class_name(&candidate) {
            Ok(name) => name,
            Err(err) => {
                let fallback = format!("{}{}", candidate, CLASS_NAME_FALLBACK_SUFFIX);
                warn!(
                    candidate = %candidate,
                    fallback = %fallback,
                    error = %err,
                    "class name rejected, using fallback"
                );
                if let Err(err) = self.resolver.validate_class_name(&fallback) {
                    warn!(
                        fallback = %fallback,
                        error = %err,
                        "fallback class name is not a valid identifier either"
                    );
                }
                fallback
            }
        }
    }

    /// Constructor taking the caller's options and the document location
    pub fn build_constructor(&self) -> Method {
        let doc = DocBlock::default()
            .with_param(DocParam::new("array", OPTIONS_PARAM, "A array of config values"))
            .with_param(DocParam::new("string", WSDL_PARAM, "The wsdl file to use"))
            .with_access(Visibility::Public);

        let params = vec![
            Param::new(OPTIONS_PARAM, Some("array".to_string()))
                .with_default(ParamDefault::EmptyArray),
            Param::new(WSDL_PARAM, None)
                .with_default(ParamDefault::Str(self.config.input_file.clone())),
        ];

        Method {
            visibility: Visibility::Public,
            name: CONSTRUCTOR_NAME.to_string(),
            params,
            body: MethodBody::Constructor {
                classmap_field: CLASSMAP_FIELD.to_string(),
                options: OptionsComposer::new(self.config).compose(),
            },
            doc,
        }
    }

    /// One public method delegating to the remote-call primitive
    pub fn build_method(
        &self,
        op: &OperationDescriptor,
        types: &TypeCatalog,
    ) -> CodegenResult<Method> {
        let name = self
            .resolver
            .normalize_method_name(&op.name)
            .map_err(|source| CodegenError::InvalidMethodName {
                operation: op.name.clone(),
                source,
            })?;

        let mut doc = DocBlock::new(op.description.as_str());
        for param in op.params.keys() {
            if let Some(info) = op.doc_param(param, types) {
                doc.params
                    .push(DocParam::new(info.type_name, info.name, info.description));
            }
        }
        doc.access = Some(Visibility::Public);

        let params: Vec<Param> = op
            .typed_params(types)
            .into_iter()
            .map(|p| Param::new(p.name, p.type_hint))
            .collect();
        Ok(Method {
            visibility: Visibility::Public,
            body: MethodBody::RemoteCall {
                method: name.clone(),
                args: op.call_arguments(),
            },
            name,
            params,
            doc,
        })
    }
}

/// Private static map from contract type name to generated type name
pub fn build_classmap(types: &TypeCatalog) -> Field {
    let value: IndexMap<String, String> = types
        .complex_types()
        .map(|t| (t.identifier.clone(), t.generated_identifier.clone()))
        .collect();

    Field {
        visibility: Visibility::Private,
        is_static: true,
        name: CLASSMAP_FIELD.to_string(),
        value,
        doc: DocBlock::default()
            .with_var(DocParam::new("array", CLASSMAP_FIELD, "The defined classes"))
            .with_access(Visibility::Private),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::PhpNamingResolver;
    use crate::options::FEATURES_KEY;
    use soapgen_types::TypeCatalogEntry;

    fn config(prefix: &str, suffix: &str) -> GeneratorConfig {
        GeneratorConfig {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            input_file: "service.wsdl".to_string(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_valid_class_name_used_as_is() {
        let config = config("Ws", "Service");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        assert_eq!(synth.resolve_class_name("Weather"), "WsWeatherService");
    }

    #[test]
    fn test_reserved_class_name_falls_back() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        assert_eq!(synth.resolve_class_name("List"), "ListCustom");
    }

    #[test]
    fn test_fallback_uses_raw_candidate() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        assert_eq!(synth.resolve_class_name("42"), "42Custom");
    }

    #[test]
    fn test_classmap_skips_simple_types() {
        let types: TypeCatalog = [
            TypeCatalogEntry::complex("Person", "PersonType"),
            TypeCatalogEntry::simple("string", "string"),
        ]
        .into_iter()
        .collect();

        let field = build_classmap(&types);
        assert_eq!(field.name, "classmap");
        assert!(field.is_static);
        assert_eq!(field.visibility, Visibility::Private);
        assert_eq!(field.value.len(), 1);
        assert_eq!(field.value["Person"], "PersonType");
    }

    #[test]
    fn test_classmap_keeps_catalog_order() {
        let types: TypeCatalog = ["B", "A", "C"]
            .into_iter()
            .map(|n| TypeCatalogEntry::complex(n, n))
            .collect();
        let field = build_classmap(&types);
        let keys: Vec<&str> = field.value.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_constructor_signature_and_options() {
        let mut config = config("", "");
        config.option_features = vec!["SOAP_SINGLE_ELEMENT_ARRAYS".to_string()];
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let ctor = synth.build_constructor();

        assert_eq!(ctor.name, "__construct");
        assert_eq!(ctor.params.len(), 2);
        assert_eq!(ctor.params[0].default, Some(ParamDefault::EmptyArray));
        assert_eq!(
            ctor.params[1].default,
            Some(ParamDefault::Str("service.wsdl".to_string()))
        );
        match &ctor.body {
            MethodBody::Constructor { options, .. } => {
                assert!(options.get(FEATURES_KEY).is_some())
            }
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_method_args_match_signature() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let types: TypeCatalog = [TypeCatalogEntry::complex("City", "CityType")]
            .into_iter()
            .collect();
        let op = OperationDescriptor::new("GetForecast", "Forecast")
            .with_param("city", "City")
            .with_param("days", "int");

        let method = synth.build_method(&op, &types).unwrap();
        let signature: Vec<String> = method
            .params
            .iter()
            .map(|p| format!("${}", p.name))
            .collect();
        match &method.body {
            MethodBody::RemoteCall { method: called, args } => {
                assert_eq!(called, "GetForecast");
                assert_eq!(args, &signature.join(", "));
            }
            other => panic!("unexpected body: {:?}", other),
        }
        assert_eq!(method.params[0].type_hint.as_deref(), Some("CityType"));
        assert_eq!(method.params[1].type_hint, None);
        assert_eq!(method.doc.params[0].type_name, "CityType");
        assert_eq!(method.doc.params[1].type_name, "int");
    }

    #[test]
    fn test_invalid_method_name_is_fatal() {
        let config = config("", "Service");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let ops = vec![
            OperationDescriptor::new("Good", ""),
            OperationDescriptor::new("???", ""),
        ];
        let result = synth.synthesize("Svc", "", &TypeCatalog::new(), &ops);
        assert!(matches!(
            result,
            Err(CodegenError::InvalidMethodName { ref operation, .. }) if operation == "???"
        ));
    }

    #[test]
    fn test_duplicate_normalized_names_first_wins() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let ops = vec![
            OperationDescriptor::new("Get-Temp", "first"),
            OperationDescriptor::new("GetTemp", "second").with_param("x", "int"),
        ];
        let class = synth
            .synthesize("Svc", "", &TypeCatalog::new(), &ops)
            .unwrap();
        assert_eq!(class.method_count(), 1);
        let method = class.method("GetTemp").unwrap();
        assert_eq!(method.doc.description, "first");
        assert!(method.params.is_empty());
    }

    #[test]
    fn test_case_only_difference_keeps_both_methods() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let ops = vec![
            OperationDescriptor::new("Get", "upper"),
            OperationDescriptor::new("get", "lower"),
        ];
        let class = synth
            .synthesize("Svc", "", &TypeCatalog::new(), &ops)
            .unwrap();
        assert_eq!(class.method_count(), 2);
        assert_eq!(class.case_clash("get"), Some("Get"));
    }

    #[test]
    fn test_empty_operation_list() {
        let config = config("", "");
        let synth = ClassSynthesizer::new(&config, &PhpNamingResolver);
        let class = synth
            .synthesize("Svc", "A service", &TypeCatalog::new(), &[])
            .unwrap();
        assert_eq!(class.method_count(), 0);
        assert_eq!(class.fields.len(), 1);
        assert!(class.field("classmap").unwrap().value.is_empty());
        assert_eq!(class.base_class, "SoapClient");
        assert_eq!(class.doc.description, "A service");
    }
}
