//! Worker implementation for catalog decoding.
//!
//! Zellij runs plugin workers on their own thread. Marquee uses one to parse
//! catalog responses so large payloads never stall rendering. The worker
//! only turns bytes into a [`WorkerResponse`]; applying the result happens
//! back on the plugin thread in [`handle_event`](crate::app::handle_event).
//!
//! The Zellij-facing `ZellijWorker` impl lives in the binary, which wraps
//! [`MarqueeWorker::handle_payload`]. Keeping host calls out of the library
//! lets the worker run under plain `cargo test`.

use crate::catalog::{CatalogProvider, RequestToken, TmdbProvider};
use crate::domain::{MarqueeError, Result};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker-thread state.
pub struct MarqueeWorker {
    provider: Box<dyn CatalogProvider>,
}

impl MarqueeWorker {
    /// Creates a worker decoding with `provider`.
    #[must_use]
    pub fn new(provider: Box<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    fn handle_decode_catalog(&self, token: RequestToken, status: u16, body: &str) -> WorkerResponse {
        match self.provider.decode_list_response(status, body.as_bytes()) {
            Ok(items) => {
                tracing::debug!(token = %token, item_count = items.len(), "catalog decoded");
                WorkerResponse::CatalogDecoded { token, items }
            }
            Err(e) => {
                tracing::debug!(token = %token, status = status, error = %e, "catalog rejected");
                WorkerResponse::CatalogRejected {
                    token,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Attaches the sender's trace context to the current thread.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one message and returns the response to send back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message").entered();

        match message {
            WorkerMessage::DecodeCatalog {
                token, status, body, ..
            } => self.handle_decode_catalog(token, status, &body),
        }
    }

    /// Handles a JSON-encoded [`WorkerMessage`] and returns the JSON-encoded
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Decode`] if the payload is not a valid
    /// message, or if the response cannot be serialized.
    pub fn handle_payload(&mut self, payload: &str) -> Result<String> {
        let message: WorkerMessage = serde_json::from_str(payload)?;
        let response = self.handle_message(message);
        serde_json::to_string(&response).map_err(MarqueeError::from)
    }
}

impl Default for MarqueeWorker {
    fn default() -> Self {
        Self::new(Box::new(TmdbProvider::default()))
    }
}

impl std::fmt::Debug for MarqueeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarqueeWorker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HttpRequest;
    use crate::domain::CatalogItem;
    use std::collections::BTreeMap;

    /// Provider whose "wire format" is a comma-separated list of titles.
    struct CsvProvider;

    impl CatalogProvider for CsvProvider {
        fn list_popular_request(&self, page: u32) -> HttpRequest {
            HttpRequest {
                url: format!("memory://popular/{page}"),
                headers: BTreeMap::new(),
            }
        }

        fn decode_list_response(&self, status: u16, body: &[u8]) -> Result<Vec<CatalogItem>> {
            if status != 200 {
                return Err(MarqueeError::Fetch(format!("status {status}")));
            }
            let text = String::from_utf8_lossy(body);
            Ok(text
                .split(',')
                .enumerate()
                .map(|(i, title)| CatalogItem::new(i as u64 + 1, title))
                .collect())
        }
    }

    #[test]
    fn decodes_with_injected_provider() {
        let mut worker = MarqueeWorker::new(Box::new(CsvProvider));
        let token = RequestToken::from_value(4);

        let response = worker.handle_message(WorkerMessage::decode_catalog(token, 200, "A,B".to_string()));
        match response {
            WorkerResponse::CatalogDecoded { token: t, items } => {
                assert_eq!(t, token);
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].title, "B");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn provider_errors_become_rejections() {
        let mut worker = MarqueeWorker::new(Box::new(CsvProvider));
        let token = RequestToken::from_value(9);

        let response = worker.handle_message(WorkerMessage::decode_catalog(token, 500, String::new()));
        assert_eq!(
            response,
            WorkerResponse::CatalogRejected {
                token,
                reason: "status 500".to_string(),
            }
        );
    }

    #[test]
    fn payload_round_trip_through_json() {
        let mut worker = MarqueeWorker::default();
        let message = WorkerMessage::decode_catalog(
            RequestToken::from_value(1),
            200,
            r#"{"results":[{"id":5,"title":"Heat"}]}"#.to_string(),
        );
        let payload = serde_json::to_string(&message).unwrap();

        let reply = worker.handle_payload(&payload).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::CatalogDecoded { ref items, .. } if items[0].id == 5));
    }

    #[test]
    fn trace_level_travels_with_the_payload() {
        let message = WorkerMessage::decode_catalog(RequestToken::from_value(2), 200, "{}".to_string())
            .with_trace_level("marquee=trace");
        let payload = serde_json::to_string(&message).unwrap();

        let parsed: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed.trace_level(), Some("marquee=trace"));

        let bare = r#"{"DecodeCatalog":{"token":3,"status":200,"body":"{}"}}"#;
        let parsed: WorkerMessage = serde_json::from_str(bare).unwrap();
        assert_eq!(parsed.trace_level(), None);
    }

    #[test]
    fn garbage_payload_is_an_error() {
        let mut worker = MarqueeWorker::default();
        assert!(matches!(worker.handle_payload("not json"), Err(MarqueeError::Decode(_))));
    }
}
