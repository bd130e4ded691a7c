// src/relay/status.rs — Decoration of status messages
//
// Status text is embedded in every generated program, so whatever a
// formatter adds must stay clear of backslashes, double quotes and newlines.
// ANSI SGR sequences qualify.

use crossterm::style::{Color, Stylize};

use super::language::LanguageKind;

/// Decorates the pieces of a status message. Passed explicitly to status
/// composition; the escaping and fold code never touch it.
pub trait StatusFormatter {
    /// A language name in the relay diagram or the summary line.
    fn language(&self, kind: LanguageKind) -> String;

    /// The bracketed current position in the relay diagram.
    fn current(&self, kind: LanguageKind) -> String;

    /// `Compile:` / `Run:` labels.
    fn label(&self, text: &str) -> String;

    /// Small connective words such as `or`.
    fn emphasis(&self, text: &str) -> String;

    /// Arrows and ellipses.
    fn muted(&self, text: &str) -> String;
}

/// No decoration at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl StatusFormatter for PlainFormatter {
    fn language(&self, kind: LanguageKind) -> String {
        kind.name().to_string()
    }

    fn current(&self, kind: LanguageKind) -> String {
        format!("[{}]", kind.name())
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn emphasis(&self, text: &str) -> String {
        text.to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Terminal colours via crossterm, one accent colour per language.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiFormatter;

fn accent(kind: LanguageKind) -> Color {
    let (r, g, b) = kind.info().accent;
    Color::Rgb { r, g, b }
}

impl StatusFormatter for AnsiFormatter {
    fn language(&self, kind: LanguageKind) -> String {
        kind.name().with(accent(kind)).to_string()
    }

    fn current(&self, kind: LanguageKind) -> String {
        format!("[{}]", kind.name()).with(accent(kind)).bold().to_string()
    }

    fn label(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn emphasis(&self, text: &str) -> String {
        text.white().bold().to_string()
    }

    fn muted(&self, text: &str) -> String {
        text.dark_grey().to_string()
    }
}

/// Pick a formatter for the `color` setting.
pub fn formatter(color: bool) -> Box<dyn StatusFormatter> {
    if color {
        Box::new(AnsiFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}
