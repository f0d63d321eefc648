//! Parser for the fixed pipe-delimited log header format:
//!
//! ```text
//! *1|LEVEL|0|1|ident|file|time|
//! ```
//!
//! where `LEVEL` is one of INFO/DEBUG/ERROR, `ident` is alphanumerics and
//! hyphens, `file` an identifier/path-like token, and `time` a
//! `YYYY/MM/DD HH:MM:SS.ffffff` timestamp. The pattern either matches with
//! all three named groups or not at all; a non-matching line is passed
//! through untouched.

use lazy_static::lazy_static;
use logtint_pipeline::record::{LineParser, LogRecord, ParsedLine};
use regex::Regex;

/// literal marker carried by metric sample lines; such lines are dropped
pub const METRIC_MARKER: &str = "_METRIC_";

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(
        r"\*1\|(?P<level>INFO|DEBUG|ERROR)\|0\|1\|[a-zA-Z0-9\-]+\|(?P<file>[a-zA-Z0-9\-_.:]+)\|(?P<time>[0-9/ .:]+)\|"
    )
    .unwrap();
}

/// parser for the pipe-delimited header format
pub struct PipeHeaderParser;

impl PipeHeaderParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PipeHeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for PipeHeaderParser {
    fn parse(&self, line: &str) -> ParsedLine {
        // the metric check runs before any header parsing, unconditionally
        if line.contains(METRIC_MARKER) {
            return ParsedLine::Metric;
        }

        let Some(caps) = HEADER_RE.captures(line) else {
            return ParsedLine::PassThrough;
        };

        // strip every occurrence of the header, not just the matched one
        let body = HEADER_RE.replace_all(line, "").into_owned();

        ParsedLine::Record(LogRecord {
            level: caps["level"].to_owned(),
            file: caps["file"].to_owned(),
            time: caps["time"].to_owned(),
            body,
        })
    }
}
