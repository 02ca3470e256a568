//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread posts [`WorkerMessage`]s as JSON; the worker answers
//! with [`WorkerResponse`]s. Messages carry an optional [`TraceContext`] so
//! spans opened on the worker attach to the plugin span that sent them.

use crate::catalog::RequestToken;
use crate::domain::CatalogItem;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when there is no valid OpenTelemetry context, which is
    /// always the case when tracing was never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Decode a catalog response body for the request identified by `token`.
    DecodeCatalog {
        /// Token of the request this response belongs to.
        token: RequestToken,

        /// HTTP status reported by the host.
        status: u16,

        /// Response body. Bodies that are not UTF-8 never reach the worker.
        body: String,

        /// Trace context for linking spans across threads.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,

        /// Tracing filter the worker thread installs on its first message.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_level: Option<String>,
    },
}

impl WorkerMessage {
    /// Builds a `DecodeCatalog` message with the current trace context.
    #[must_use]
    pub fn decode_catalog(token: RequestToken, status: u16, body: String) -> Self {
        Self::DecodeCatalog {
            token,
            status,
            body,
            trace_context: TraceContext::from_current(),
            trace_level: None,
        }
    }

    /// Attaches the plugin's tracing filter.
    #[must_use]
    pub fn with_trace_level(mut self, level: impl Into<String>) -> Self {
        match &mut self {
            Self::DecodeCatalog { trace_level, .. } => *trace_level = Some(level.into()),
        }
        self
    }

    #[must_use]
    pub fn trace_level(&self) -> Option<&str> {
        match self {
            Self::DecodeCatalog { trace_level, .. } => trace_level.as_deref(),
        }
    }

    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::DecodeCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The body decoded into items.
    CatalogDecoded {
        token: RequestToken,
        items: Vec<CatalogItem>,
    },

    /// The response was an error status or an unreadable payload.
    CatalogRejected {
        token: RequestToken,
        /// Human-readable reason shown to the user.
        reason: String,
    },

    /// The worker could not process a message at all.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
