//! Fixed body templates
//!
//! The only place where method body text is produced. Bodies are written
//! relative to the method's own indentation with two-space nesting; the
//! renderer indents every line to its final position.

use crate::options::ComposedOptions;
use std::fmt::Write;

/// Name of the constructor's caller-supplied option map parameter
pub const OPTIONS_PARAM: &str = "options";
/// Name of the constructor's document location parameter
pub const WSDL_PARAM: &str = "wsdl";
/// Option key the classmap is merged under
pub const CLASSMAP_OPTION_KEY: &str = "classmap";

/// Single-quoted PHP string literal
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Set `key` to `value` unless the caller already did
pub fn option_guard(key: &str, value: &str) -> String {
    let opt = OPTIONS_PARAM;
    format!(
        "if (isset(${opt}['{key}']) == false)\n{{\n  ${opt}['{key}'] = {value};\n}}\n"
    )
}

/// Constructor body: classmap merge, option guards, base constructor call
pub fn constructor_body(classmap_field: &str, options: &ComposedOptions) -> String {
    let opt = OPTIONS_PARAM;
    let map = CLASSMAP_OPTION_KEY;
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "foreach (self::${classmap_field} as $key => $value)\n\
         {{\n  \
         if (!isset(${opt}['{map}'][$key]))\n  \
         {{\n    \
         ${opt}['{map}'][$key] = $value;\n  \
         }}\n\
         }}\n"
    );
    out.push_str(&options.to_source());
    let _ = writeln!(out, "parent::__construct(${}, ${});", WSDL_PARAM, opt);
    out
}

/// Delegate to the remote-call primitive; `args` are positional, in order
pub fn remote_call(method: &str, args: &str) -> String {
    format!(
        "return $this->__soapCall({}, array({}));\n",
        quote(method),
        args
    )
}
