/// Output Sink Module
///
/// Table listings and formatted rows are informational line output, not
/// structured return values. Rather than routing them through a hidden
/// process-wide logger, operations write to an `OutputSink` injected into
/// the accessor, so embedders and tests can capture the output.
use tracing::info;

/// Destination for line-oriented informational output.
pub trait OutputSink {
    /// Emits one line of output.
    fn line(&mut self, text: &str);
}

/// Routes output lines through `tracing` at info level.
///
/// This is the default sink and matches ordinary logging setups.
#[derive(Debug, Default)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn line(&mut self, text: &str) {
        info!("{}", text);
    }
}

/// Collects output lines in memory for later inspection.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink::default()
    }

    /// The lines emitted so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl OutputSink for BufferSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
