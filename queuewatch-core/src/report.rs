//! Report aggregation
//!
//! A [`Report`] is the ordered transcript of one monitoring pass. Lines are
//! appended in call order and optionally echoed to a [`ReportSink`] as they
//! are recorded.

use std::io::Write;

/// Destination for live report echo
///
/// Implementations must not fail: the echo is diagnostic only, so a sink
/// that cannot write simply drops the line.
pub trait ReportSink: Send {
    /// Write a single report line
    fn write(&mut self, line: &str);
}

/// Sink that echoes report lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn write(&mut self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Append-only transcript of one monitoring pass
#[derive(Default)]
pub struct Report {
    lines: Vec<String>,
    sink: Option<Box<dyn ReportSink>>,
}

impl Report {
    /// Creates an empty report without echo
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty report that echoes every recorded line to `sink`
    pub fn with_sink(sink: impl ReportSink + 'static) -> Self {
        Self {
            lines: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Appends a line, echoing it when a sink is attached
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        if let Some(sink) = self.sink.as_mut() {
            sink.write(&line);
        }
        self.lines.push(line);
    }

    /// Renders the transcript, each line terminated by a newline
    pub fn finalize(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Report")
            .field("lines", &self.lines)
            .field("echo", &self.sink.is_some())
            .finish()
    }
}
