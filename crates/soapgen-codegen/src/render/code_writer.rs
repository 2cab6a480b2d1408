//! Indentation-tracking writer for generated PHP.
//!
//! Indentation is held in an `Rc<Cell<usize>>` so an [`IndentGuard`] can
//! live alongside mutable writes. Blocks use the brace-on-its-own-line
//! layout the generated clients follow:
//!
//! ```
//! use soapgen_codegen::render::code_writer::CodeWriter;
//!
//! let mut output = String::new();
//! let mut w = CodeWriter::with_indent_spaces(&mut output, 2);
//! w.block("class Foo", |w| w.writeln("public $x;")).unwrap();
//! assert_eq!(output, "class Foo\n{\n  public $x;\n}\n");
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub struct CodeWriter<W> {
    writer: W,
    indent_level: Rc<Cell<usize>>,
    indent_string: String,
    at_line_start: bool,
}

impl<W: fmt::Write> CodeWriter<W> {
    pub fn new(writer: W, indent_string: String) -> Self {
        Self {
            writer,
            indent_level: Rc::new(Cell::new(0)),
            indent_string,
            at_line_start: true,
        }
    }

    pub fn with_indent_spaces(writer: W, spaces: usize) -> Self {
        Self::new(writer, " ".repeat(spaces))
    }

    /// Write text without a newline. Adds indentation if at line start.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.writer.write_str(&self.indent_string)?;
            }
            self.at_line_start = false;
        }

        self.writer.write_str(text)
    }

    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    pub fn blank_line(&mut self) -> fmt::Result {
        self.writer.write_char('\n')?;
        self.at_line_start = true;
        Ok(())
    }

    /// Write multi-line text, indenting each line to the current level.
    /// Leading whitespace inside `text` is kept as relative indentation.
    pub fn write_lines(&mut self, text: &str) -> fmt::Result {
        for line in text.lines() {
            if line.trim().is_empty() {
                self.blank_line()?;
            } else {
                self.writeln(line)?;
            }
        }
        Ok(())
    }

    /// Indentation increases while the guard is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    /// `header`, then the body between braces on their own lines
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(header)?;
        self.writeln("{")?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln("}")
    }

    /// `/** ... */` comment with one ` * ` line per entry. A `*/` inside an
    /// entry is written as `*\/` so the comment cannot end early.
    pub fn doc_comment<'l, I>(&mut self, lines: I) -> fmt::Result
    where
        I: IntoIterator<Item = &'l str>,
    {
        self.writeln("/**")?;
        for line in lines {
            if line.is_empty() {
                self.writeln(" *")?;
            } else {
                self.writeln(&format!(" * {}", line.replace("*/", "*\\/")))?;
            }
        }
        self.writeln(" */")
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level.get()
    }
}

/// Restores the previous indentation level on drop
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}
