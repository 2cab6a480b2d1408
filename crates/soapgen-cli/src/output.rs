//! Colored terminal output for CLI commands.
//!
//! Uses `termcolor`; respects `NO_COLOR` and the `--color` flag. Status
//! messages go to stderr so generated source can be piped from stdout.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(flag: Option<&str>) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Styled output writer for terminal.
pub struct StyledOutput {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StyledOutput {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }

    fn styled(stream: &mut StandardStream, text: &str, color: Option<Color>, bold: bool) {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        let _ = stream.set_color(&spec);
        let _ = write!(stream, "{}", text);
        let _ = stream.reset();
    }

    /// Bold text on stdout.
    pub fn heading(&mut self, text: &str) {
        Self::styled(&mut self.stdout, text, None, true);
    }

    /// Cyan text on stdout.
    pub fn info(&mut self, text: &str) {
        Self::styled(&mut self.stdout, text, Some(Color::Cyan), false);
    }

    /// Yellow text on stdout.
    pub fn highlight(&mut self, text: &str) {
        Self::styled(&mut self.stdout, text, Some(Color::Yellow), false);
    }

    pub fn plain(&mut self, text: &str) {
        let _ = write!(self.stdout, "{}", text);
    }

    pub fn newline(&mut self) {
        let _ = writeln!(self.stdout);
    }

    /// Raw text on stdout, e.g. generated source.
    pub fn source(&mut self, text: &str) -> std::io::Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()
    }

    // ── Status output (stderr) ───────────────────────────────────────

    /// Green bold status line on stderr.
    pub fn status_success(&mut self, label: &str, text: &str) {
        Self::styled(&mut self.stderr, label, Some(Color::Green), true);
        let _ = writeln!(self.stderr, " {}", text);
    }

    /// Red bold error line on stderr.
    pub fn status_error(&mut self, text: &str) {
        Self::styled(&mut self.stderr, "error:", Some(Color::Red), true);
        let _ = writeln!(self.stderr, " {}", text);
    }
}
