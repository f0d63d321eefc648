//! # logtint-pipeline
//!
//! The line-processing engine behind the `logtint` stream filter: it turns
//! raw structured log lines into colorized, highlight-marked output rows.
//!
//! ## Pipeline
//!
//! Every input line takes the same one-way trip:
//!
//! ```text
//! ┌──────────┐  parse()   ┌────────────┐            ┌───────────────────┐
//! │ raw line │ ─────────> │ ParsedLine │ ─Record──> │ timezone convert  │
//! └──────────┘            └─────┬──────┘            │ tab reassembly    │
//!                               │                   │ severity paint    │
//!                    Metric ────┤                   │ highlight overlay │
//!                    (dropped)  │                   └─────────┬─────────┘
//!                               │                             │
//!                    PassThrough└──── echoed verbatim ──> output row
//! ```
//!
//! The engine never names a concrete log format: a [`LineParser`]
//! implementation (injected as `Arc<dyn LineParser>`) decides how a raw line
//! classifies, and everything downstream is format-agnostic. Compiled
//! patterns and style values are process-wide, built once, immutable.
//!
//! ## Quick Start
//!
//! ```
//! use logtint_pipeline::highlight::{self, HighlightMode};
//! use logtint_pipeline::theme;
//!
//! let words = vec!["alloc".to_string()];
//! let painted = highlight::apply(
//!     HighlightMode::Or,
//!     "slow alloc path",
//!     &words,
//!     theme::base_paint("INFO"),
//!     theme::highlight_paint(),
//! );
//! assert!(painted.contains("alloc"));
//! ```
//!
//! The full loop is [`driver::run`]: give it any `BufRead`, any `Write`, and
//! a [`LineProcessor`], and it performs one blocking pass over the input.

pub mod driver;
pub mod highlight;
pub mod processor;
pub mod record;
pub mod theme;
pub mod timestamp;

// re-export commonly used types
pub use driver::{MAX_LINE_BYTES, run};
pub use highlight::HighlightMode;
pub use processor::{LineProcessor, PipelineDesc, ProcessedLine};
pub use record::{LineParser, LogRecord, ParsedLine};
pub use theme::Paint;
