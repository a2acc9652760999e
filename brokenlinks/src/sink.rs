//! Diagnostic output sinks.
//!
//! The engine reports through an injected sink rather than a global stream,
//! so tests observe diagnostics deterministically and the CLI decides about
//! color. The sink is append-only; the engine never reads back.

use std::io::Write;

use colored::Colorize;

/// Destination for human-readable diagnostics produced during validation.
///
/// Content diagnostics (broken links, environment errors) go through
/// [`DiagnosticSink::error`]; advisory output such as the web resolver's
/// `open <url> …` lines goes through [`DiagnosticSink::note`].
pub trait DiagnosticSink {
    /// Write one content-diagnostic line.
    fn error(&mut self, line: &str);
    /// Write one advisory line.
    fn note(&mut self, line: &str);
}

/// Sink that writes to any [`Write`] stream, wrapping diagnostics in red.
///
/// Coloring follows `colored`'s terminal detection, so redirected output
/// stays plain. Write failures are swallowed: diagnostics are best-effort
/// output, not state.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn error(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{}", line.red());
    }

    fn note(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
    }
}

/// Sink that records every line, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Content-diagnostic lines, in emission order.
    pub errors: Vec<String>,
    /// Advisory lines, in emission order.
    pub notes: Vec<String>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&mut self, line: &str) {
        self.errors.push(line.to_owned());
    }

    fn note(&mut self, line: &str) {
        self.notes.push(line.to_owned());
    }
}
