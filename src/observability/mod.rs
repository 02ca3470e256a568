//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Spans go to `~/.local/share/zellij/marquee/marquee-spans.jsonl`, one
//!   JSON object per line
//! - The file rotates at 5 MB into `.1`, `.2`, `.3`
//! - The level comes from the `trace_level` configuration key (default
//!   `info`), in `EnvFilter` syntax
//!
//! Worker messages carry a [`TraceContext`](crate::worker::TraceContext) so
//! spans on the worker thread join the trace that posted them.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - [`span_record`]: JSON-lines span format
//! - `file_writer`: Rotating file writer

mod file_writer;
pub mod init;
pub mod span_record;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
pub use span_record::{EventRecord, SpanRecord};
