//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Marquee library and the
//! Zellij plugin system. It implements `ZellijPlugin` and `ZellijWorker`,
//! maps host events to library events, and executes library actions with
//! host calls.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │   Zellij Main Thread     │
//! │  ┌───────────────────┐   │     web_request
//! │  │  State (plugin)   │───┼──────────────────▶ catalog service
//! │  └───────────────────┘◀──┼── WebRequestResult
//! │          │  ▲            │
//! │   IPC    ▼  │            │
//! │  ┌───────────────────┐   │
//! │  │   CatalogWorker   │   │  ← decodes response bodies
//! │  │  (worker thread)  │   │
//! │  └───────────────────┘   │
//! └──────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! - `Key` → cursor, pane, favorite, remove, reload, confirm/cancel, quit
//! - `Mouse(LeftClick)` → `Event::PointerDown`
//! - `Mouse(RightClick)` → `Event::PointerSecondary`
//! - `Mouse(Hold)` / `Mouse(Release)` → `Event::PointerHold` / `Event::PointerUp`
//! - `WebRequestResult` → `Event::CatalogResponse` (token from request context)
//! - `CustomMessage` from the worker → `Event::WorkerResponse`
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Tab`: Switch between catalog and favorites
//! - `Enter`: Open detail (catalog), remove (favorites), close overlay
//! - `f`/`Space`: Add to favorites
//! - `x`: Remove favorite
//! - `X` (shift): Swipe-to-clear favorites
//! - `y`/`n`: Confirm or cancel the clear
//! - `r`: Reload catalog
//! - `Esc`: Dismiss confirmation, overlay, or notice
//! - `q`: Hide plugin

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use marquee::catalog::{CatalogProvider, RequestToken, TmdbProvider};
use marquee::ui::Viewport;
use marquee::worker::{MarqueeWorker, WorkerMessage, WorkerResponse};
use marquee::{handle_event, Action, Config, Event};

/// Worker name used for IPC in both directions.
const WORKER_NAME: &str = "marquee";

/// Web request context key carrying the fetch token.
const REQUEST_TOKEN_KEY: &str = "request_token";

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(CatalogWorker, marquee_worker, MARQUEE_WORKER);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: marquee::AppState,

    /// Builds catalog web requests.
    provider: TmdbProvider,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: marquee::initialize(&default_config),
            provider: TmdbProvider::from_config(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds state, requests permissions and
    /// subscribes to events. The first fetch waits for the permission grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        marquee::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            page = config.page,
            language = %config.language,
            has_api_key = config.api_key.is_some(),
            "parsed configuration"
        );
        self.app = marquee::initialize(&config);
        self.provider = TmdbProvider::from_config(&config);

        request_permission(&[
            PermissionType::WebAccess,
            PermissionType::ReadApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => Self::map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => Self::map_mouse_event(mouse),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result_event(status, body, &context)
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                Self::map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Some(Event::PermissionsResult {
                    granted: status == PermissionStatus::Granted,
                })
            }
            _ => None,
        };
        let Some(our_event) = our_event else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = Viewport { rows, cols };
        marquee::ui::render(&self.app);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::CursorUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Tab => Event::SwitchPane,
            BareKey::Enter => Event::Activate,
            BareKey::Char('f' | ' ') => Event::FavoriteCursor,
            BareKey::Char('x') => Event::RemoveCursor,
            BareKey::Char('X') => Event::SwipeClear,
            BareKey::Char('y') => Event::ConfirmClear,
            BareKey::Char('n') => Event::CancelClear,
            BareKey::Char('r') => Event::RequestFetch,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse events. Zellij reports zero-based lines; the library uses
    /// the renderer's 1-indexed rows.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        let row = |line: isize| usize::try_from(line).ok().map(|line| line + 1);

        match mouse {
            Mouse::LeftClick(line, column) => Some(Event::PointerDown {
                line: row(line)?,
                column,
            }),
            Mouse::RightClick(line, column) => Some(Event::PointerSecondary {
                line: row(line)?,
                column,
            }),
            Mouse::Hold(line, column) => Some(Event::PointerHold {
                line: row(line)?,
                column,
            }),
            Mouse::Release(line, column) => Some(Event::PointerUp {
                line: row(line)?,
                column,
            }),
            _ => None,
        }
    }

    fn map_web_result_event(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(token) = context
            .get(REQUEST_TOKEN_KEY)
            .and_then(|value| value.parse::<u64>().ok())
            .map(RequestToken::from_value)
        else {
            tracing::debug!(status = status, "web result without a request token");
            return None;
        };

        Some(Event::CatalogResponse {
            token,
            status,
            body,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            // Surfaced as a worker error so an outstanding fetch does not
            // stay loading forever.
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                Some(Event::WorkerResponse(WorkerResponse::Error {
                    message: format!("unreadable worker response: {e}"),
                }))
            }
        }
    }

    /// Serializes a message as JSON and posts it to the worker thread.
    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::FetchCatalog(request) => {
                let http = self.provider.list_popular_request(request.page);
                let mut context = BTreeMap::new();
                context.insert(REQUEST_TOKEN_KEY.to_string(), request.token.to_string());

                tracing::debug!(token = %request.token, page = request.page, "issuing catalog request");
                web_request(http.url, HttpVerb::Get, http.headers, vec![], context);
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}

/// Zellij-facing worker. Decoding lives in [`MarqueeWorker`].
#[derive(Default, Serialize, Deserialize)]
struct CatalogWorker {
    #[serde(skip)]
    inner: MarqueeWorker,
}

/// Tracing config for the worker thread, using the filter the plugin sent
/// along with the message.
fn worker_config(payload: &str) -> Config {
    let defaults = Config::default();
    let trace_level = serde_json::from_str::<WorkerMessage>(payload)
        .ok()
        .and_then(|message| message.trace_level().map(str::to_string))
        .unwrap_or_else(|| defaults.trace_level.clone());
    Config {
        trace_level,
        ..defaults
    }
}

/// Tracks whether the worker thread has set up its own tracing pipeline.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

impl ZellijWorker<'_> for CatalogWorker {
    fn on_message(&mut self, message: String, payload: String) {
        // Worker threads start without a subscriber.
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            marquee::observability::init_tracing(&worker_config(&payload));
        }

        let response = self.inner.handle_payload(&payload).or_else(|e| {
            tracing::error!(error = %e, "worker could not handle message");
            serde_json::to_string(&WorkerResponse::Error {
                message: e.to_string(),
            })
        });

        match response {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker response"),
        }
    }
}
