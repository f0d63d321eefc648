use crate::highlight::{self, HighlightMode};
use crate::record::{LineParser, LogRecord, ParsedLine};
use crate::theme;
use crate::timestamp;
use std::sync::Arc;

/// per-run pipeline configuration, built once from the command line
#[derive(Debug, Clone)]
pub struct PipelineDesc {
    /// highlight words in command-line order (duplicates allowed)
    pub highlights: Vec<String>,
    pub mode: HighlightMode,
    /// convert header timestamps from UTC to the local timezone
    pub into_local_time: bool,
}

impl Default for PipelineDesc {
    fn default() -> Self {
        Self {
            highlights: Vec::new(),
            mode: HighlightMode::Or,
            into_local_time: false,
        }
    }
}

/// what the processor decided for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedLine {
    /// metric sample, no output row
    Dropped,
    /// no header; the caller echoes the raw line verbatim
    PassThrough,
    /// reassembled, colorized replacement for the line
    Formatted(String),
}

/// runs one line through classify → timezone → reassembly → color → highlight
pub struct LineProcessor {
    parser: Arc<dyn LineParser>,
    desc: PipelineDesc,
}

impl LineProcessor {
    pub fn new(parser: Arc<dyn LineParser>, desc: PipelineDesc) -> Self {
        Self { parser, desc }
    }

    pub fn process(&self, line: &str) -> ProcessedLine {
        match self.parser.parse(line) {
            ParsedLine::Metric => ProcessedLine::Dropped,
            ParsedLine::PassThrough => ProcessedLine::PassThrough,
            ParsedLine::Record(record) => ProcessedLine::Formatted(self.format_record(record)),
        }
    }

    fn format_record(&self, record: LogRecord) -> String {
        let LogRecord {
            level,
            file,
            time,
            body,
        } = record;

        let time = if self.desc.into_local_time {
            timestamp::into_local(&time)
        } else {
            time
        };

        let assembled = format!("{level}\t{time}\t{file}\t{body}");
        highlight::apply(
            self.desc.mode,
            &assembled,
            &self.desc.highlights,
            theme::base_paint(&level),
            theme::highlight_paint(),
        )
    }
}
