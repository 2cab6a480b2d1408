//! Structural model of a generated client class
//!
//! Synthesis produces these values; turning them into text is the job of a
//! renderer (see [`crate::render`]). Method bodies are kept as
//! [`MethodBody`] data and only become text through the fixed templates in
//! [`crate::template`].

use crate::config::ClassExistsPolicy;
use crate::options::ComposedOptions;
use crate::template;
use indexmap::IndexMap;
use std::fmt;

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `@param`/`@var` line of a documentation block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParam {
    pub type_name: String,
    pub name: String,
    pub description: String,
}

impl DocParam {
    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Documentation block attached to a class, field or method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub description: String,
    pub params: Vec<DocParam>,
    pub var: Option<DocParam>,
    pub access: Option<Visibility>,
}

impl DocBlock {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, param: DocParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_var(mut self, var: DocParam) -> Self {
        self.var = Some(var);
        self
    }

    pub fn with_access(mut self, access: Visibility) -> Self {
        self.access = Some(access);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.trim().is_empty()
            && self.params.is_empty()
            && self.var.is_none()
            && self.access.is_none()
    }
}

/// Default value of a signature parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// An empty array literal
    EmptyArray,
    /// A string literal
    Str(String),
}

/// A parameter of a generated method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_hint: Option<String>,
    pub default: Option<ParamDefault>,
}

impl Param {
    pub fn new(name: impl Into<String>, type_hint: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_hint,
            default: None,
        }
    }

    pub fn with_default(mut self, default: ParamDefault) -> Self {
        self.default = Some(default);
        self
    }
}

/// Body of a generated method, as template parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// Merge classmap defaults, apply option guards, delegate to the base constructor
    Constructor {
        classmap_field: String,
        options: ComposedOptions,
    },
    /// Delegate to the remote-call primitive; `args` is the rendered
    /// positional argument list, e.g. `$city, $days`
    RemoteCall { method: String, args: String },
}

impl MethodBody {
    /// Body source text, produced by the fixed templates
    pub fn source(&self) -> String {
        match self {
            MethodBody::Constructor {
                classmap_field,
                options,
            } => template::constructor_body(classmap_field, options),
            MethodBody::RemoteCall { method, args } => template::remote_call(method, args),
        }
    }
}

/// A generated method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub visibility: Visibility,
    pub name: String,
    pub params: Vec<Param>,
    pub body: MethodBody,
    pub doc: DocBlock,
}

/// A generated field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub visibility: Visibility,
    pub is_static: bool,
    pub name: String,
    /// Initializer, a string-to-string map literal
    pub value: IndexMap<String, String>,
    pub doc: DocBlock,
}

/// The synthesized client class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub name: String,
    pub base_class: String,
    pub class_exists: ClassExistsPolicy,
    pub doc: DocBlock,
    pub fields: Vec<Field>,
    pub constructor: Method,
    methods: IndexMap<String, Method>,
}

impl GeneratedClass {
    pub fn new(
        name: impl Into<String>,
        base_class: impl Into<String>,
        class_exists: ClassExistsPolicy,
        doc: DocBlock,
        constructor: Method,
    ) -> Self {
        Self {
            name: name.into(),
            base_class: base_class.into(),
            class_exists,
            doc,
            fields: Vec::new(),
            constructor,
            methods: IndexMap::new(),
        }
    }

    /// True if the constructor or an added method already uses `name`
    pub fn has_method(&self, name: &str) -> bool {
        self.constructor.name == name || self.methods.contains_key(name)
    }

    /// Add a method unless its name is taken. Returns false when the method
    /// was dropped; the first method to claim a name keeps it.
    pub fn add_method(&mut self, method: Method) -> bool {
        if self.has_method(&method.name) {
            return false;
        }
        self.methods.insert(method.name.clone(), method);
        true
    }

    /// An existing method name equal to `name` ignoring ASCII case but not
    /// identical to it. PHP method names are case-insensitive, so such a
    /// pair cannot be declared on one class.
    pub fn case_clash(&self, name: &str) -> Option<&str> {
        std::iter::once(self.constructor.name.as_str())
            .chain(self.methods.keys().map(String::as_str))
            .find(|existing| *existing != name && existing.eq_ignore_ascii_case(name))
    }

    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Methods in insertion order, constructor excluded
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values()
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
