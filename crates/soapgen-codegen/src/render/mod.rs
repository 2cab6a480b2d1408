//! PHP rendering of a [`GeneratedClass`]
//!
//! The renderer only formats the model; every decision about names,
//! members and bodies was made during synthesis.

pub mod code_writer;

use crate::config::ClassExistsPolicy;
use crate::error::CodegenResult;
use crate::model::{DocBlock, DocParam, Field, GeneratedClass, Method, Param, ParamDefault};
use crate::template::quote;
use code_writer::CodeWriter;
use std::fmt;

/// Renders generated classes as PHP source
#[derive(Debug, Clone)]
pub struct PhpRenderer {
    indent_spaces: usize,
}

impl Default for PhpRenderer {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

impl PhpRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete PHP file holding the class
    pub fn render_file(&self, class: &GeneratedClass) -> CodegenResult<String> {
        let mut out = String::from("<?php\n\n");
        out.push_str(&self.render_class(class)?);
        Ok(out)
    }

    /// The class declaration alone
    pub fn render_class(&self, class: &GeneratedClass) -> CodegenResult<String> {
        let mut out = String::new();
        {
            let mut w = CodeWriter::with_indent_spaces(&mut out, self.indent_spaces);
            match class.class_exists {
                ClassExistsPolicy::Unchecked => write_class(&mut w, class)?,
                ClassExistsPolicy::Guarded => {
                    let guard = format!("if (!class_exists(\"{}\", false))", class.name);
                    w.block(&guard, |w| write_class(w, class))?
                }
            }
        }
        Ok(out)
    }
}

fn write_class<W: fmt::Write>(w: &mut CodeWriter<W>, class: &GeneratedClass) -> fmt::Result {
    write_doc(w, &class.doc)?;
    let header = format!("class {} extends {}", class.name, class.base_class);
    w.block(&header, |w| {
        for field in &class.fields {
            w.blank_line()?;
            write_field(w, field)?;
        }
        w.blank_line()?;
        write_method(w, &class.constructor)?;
        for method in class.methods() {
            w.blank_line()?;
            write_method(w, method)?;
        }
        Ok(())
    })
}

fn doc_param_line(tag: &str, param: &DocParam) -> String {
    let mut line = format!("@{} {} ${}", tag, param.type_name, param.name);
    if !param.description.is_empty() {
        line.push(' ');
        line.push_str(&param.description);
    }
    line
}

fn write_doc<W: fmt::Write>(w: &mut CodeWriter<W>, doc: &DocBlock) -> fmt::Result {
    if doc.is_empty() {
        return Ok(());
    }

    let mut lines: Vec<String> = doc
        .description
        .trim()
        .lines()
        .map(|l| l.trim().to_string())
        .collect();

    let mut tags = Vec::new();
    for param in &doc.params {
        tags.push(doc_param_line("param", param));
    }
    if let Some(var) = &doc.var {
        tags.push(doc_param_line("var", var));
    }
    if let Some(access) = doc.access {
        tags.push(format!("@access {}", access));
    }

    if !lines.is_empty() && !tags.is_empty() {
        lines.push(String::new());
    }
    lines.extend(tags);
    w.doc_comment(lines.iter().map(String::as_str))
}

fn write_field<W: fmt::Write>(w: &mut CodeWriter<W>, field: &Field) -> fmt::Result {
    write_doc(w, &field.doc)?;
    let modifiers = if field.is_static {
        format!("{} static", field.visibility)
    } else {
        field.visibility.to_string()
    };

    if field.value.is_empty() {
        return w.writeln(&format!("{} ${} = array();", modifiers, field.name));
    }

    w.writeln(&format!("{} ${} = array(", modifiers, field.name))?;
    {
        let _indent = w.indent();
        for (key, value) in &field.value {
            w.writeln(&format!("{} => {},", quote(key), quote(value)))?;
        }
    }
    w.writeln(");")
}

fn param_source(param: &Param) -> String {
    let mut out = String::new();
    if let Some(hint) = &param.type_hint {
        out.push_str(hint);
        out.push(' ');
    }
    out.push('$');
    out.push_str(&param.name);
    match &param.default {
        Some(ParamDefault::EmptyArray) => out.push_str(" = array()"),
        Some(ParamDefault::Str(value)) => {
            out.push_str(" = ");
            out.push_str(&quote(value));
        }
        None => {}
    }
    out
}

fn write_method<W: fmt::Write>(w: &mut CodeWriter<W>, method: &Method) -> fmt::Result {
    write_doc(w, &method.doc)?;
    let params = method
        .params
        .iter()
        .map(param_source)
        .collect::<Vec<_>>()
        .join(", ");
    let header = format!("{} function {}({})", method.visibility, method.name, params);
    w.block(&header, |w| w.write_lines(&method.body.source()))
}
