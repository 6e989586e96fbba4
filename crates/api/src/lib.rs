mod config;
mod error;

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{DefaultBodyLimit, Json, State};
use axum::http::header::{self, HeaderName};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use beacon_core::{
    classify_and_respond, emergency_contacts, ConversationTurn, EmergencyContact,
    GuidanceCategory, InboundMessage,
};
use beacon_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::{AllowedOrigins, ApiConfig};
pub use error::TransportError;

#[derive(Clone)]
pub struct ApiState {
    pub metrics: Arc<AppMetrics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: String,
    #[serde(default)]
    conversation_history: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

#[derive(Debug, Serialize)]
struct ContactsResponse {
    contacts: &'static [EmergencyContact],
}

pub fn build_app(config: &ApiConfig) -> Router {
    let state = ApiState {
        metrics: AppMetrics::shared(),
    };
    build_router(state, config)
}

pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/contacts", get(contacts))
        .route("/ai-chat", post(ai_chat))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(build_cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn contacts() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ContactsResponse {
            contacts: emergency_contacts(),
        }),
    )
}

async fn ai_chat(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let started = Instant::now();
    state.metrics.inc_request();

    let request = match body
        .map_err(|rejection| TransportError::MalformedBody(rejection.body_text()))
        .and_then(|bytes| parse_chat_request(&bytes))
    {
        Ok(request) => request,
        Err(err) => {
            state.metrics.inc_transport_error();
            state.metrics.observe_latency(started.elapsed());
            warn!(error = %err, "rejected chat request");
            return err.into_response();
        }
    };

    let (history, dropped_turns) = decode_history(request.conversation_history);
    if dropped_turns > 0 {
        warn!(dropped_turns, "ignored malformed conversation history entries");
    }
    let guidance = classify_and_respond(&InboundMessage::new(request.message), &history);

    if guidance.category == GuidanceCategory::Fallback {
        state.metrics.inc_fallback();
    }
    state.metrics.observe_latency(started.elapsed());
    info!(
        category = guidance.category.as_code(),
        history_turns = history.len(),
        "guidance dispatched"
    );

    (
        StatusCode::OK,
        Json(ChatResponse {
            response: guidance.text,
        }),
    )
        .into_response()
}

fn parse_chat_request(bytes: &[u8]) -> Result<ChatRequest, TransportError> {
    serde_json::from_slice(bytes).map_err(|err| TransportError::MalformedBody(err.to_string()))
}

/// History never decides anything, so a bad entry is dropped rather than
/// failing the request. Returns the usable turns and the number discarded.
fn decode_history(raw: Option<Value>) -> (Vec<ConversationTurn>, usize) {
    match raw {
        None | Some(Value::Null) => (Vec::new(), 0),
        Some(Value::Array(items)) => {
            let total = items.len();
            let turns = items
                .into_iter()
                .filter_map(|item| serde_json::from_value::<ConversationTurn>(item).ok())
                .collect::<Vec<_>>();
            let dropped = total - turns.len();
            (turns, dropped)
        }
        Some(_) => (Vec::new(), 1),
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "request handler panicked");

    TransportError::Internal("unexpected failure while dispatching guidance".to_string())
        .into_response()
}

fn build_cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match allowed_origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(origins) => {
            let origins = origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect::<Vec<_>>();
            if origins.is_empty() {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(origins)
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ])
}
