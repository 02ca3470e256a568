//! Background worker thread for catalog decoding.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation, independent of the Zellij host API

pub mod handler;
pub mod messages;

pub use handler::MarqueeWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
