use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::contact::{self, ContactError, ContactForm, ContactSubmission};
use crate::guide::events::{GuideEvent, HistoryEntry, SseView, sse_event};
use crate::guide::SendOutcome;
use crate::i18n::Language;
use crate::llm::{GenerationDriver, gemini::GeminiDriver};
use crate::pages;
use crate::preferences::Preferences;
use crate::security::rate_limit::{contact_rate_limit, guide_rate_limit};

/// How often idle guide conversations are swept.
const CONVERSATION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Request body limit for forms and guide messages.
const BODY_LIMIT: usize = 1024 * 1024;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let settings = config.guide.generation_settings();
    info!(
        name: "guide.config.loaded",
        base_url = %settings.base_url,
        model = %settings.model,
        app_id = %settings.app_id,
        api_key_set = settings.api_key.is_some(),
        "Guide configuration loaded"
    );

    let driver: Arc<dyn GenerationDriver> = Arc::new(GeminiDriver::new(settings));
    let store = contact::build_store(&config.persistence).await?;
    let state = AppState::new(Arc::clone(&config), driver, store);

    // Conversations live in memory only; drop the idle ones.
    let conversations = state.conversations.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CONVERSATION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = conversations.cleanup_expired();
            if removed > 0 {
                info!(name: "guide.conversations.expired", removed, "Expired idle conversations");
            }
        }
    });

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the full application router.
///
/// Page and form routes run under the request timeout. Guide routes do not:
/// an answer streams for as long as the endpoint keeps sending.
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    // A disabled timeout is a very long one, so the layer stack keeps one type.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60) // 1 year
    } else {
        Duration::from_secs(config.resilience.timeout_secs)
    };

    let contact_limit = axum::middleware::from_fn_with_state(state.clone(), contact_rate_limit);
    let guide_limit = axum::middleware::from_fn_with_state(state.clone(), guide_rate_limit);

    let site = pages::router()
        .route(
            "/contact",
            get(pages::contact_page)
                .merge(post(pages::contact_submit).route_layer(contact_limit.clone())),
        )
        .route(
            "/api/contact",
            post(api_contact_submit).route_layer(contact_limit),
        )
        .route("/api/admin/submissions", get(api_admin_submissions))
        .route("/healthz", get(healthz))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| {
                let duration = timeout_duration;
                async move {
                    match tokio::time::timeout(duration, next.run(req)).await {
                        Ok(res) => res,
                        Err(_) => {
                            (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response()
                        }
                    }
                }
            },
        ));

    let guide = Router::new()
        .route(
            "/api/guide/chat",
            post(api_guide_chat).route_layer(guide_limit),
        )
        .route("/api/guide/sessions/{id}/messages", get(api_guide_messages));

    site.merge(guide)
        .nest_service("/static", ServeDir::new(&config.server.static_dir))
        .fallback(pages::fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Guide Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the guide chat API.
#[derive(Debug, Deserialize)]
struct GuideChatRequest {
    /// Visitor message.
    message: String,
    /// Conversation to continue (creates new if missing or unknown).
    #[serde(default)]
    session_id: Option<String>,
    /// Answer language code; falls back to the visitor's preference.
    #[serde(default)]
    language: Option<String>,
}

/// POST /api/guide/chat - Run one guide turn and stream its events.
async fn api_guide_chat(
    State(state): State<AppState>,
    prefs: Preferences,
    Json(req): Json<GuideChatRequest>,
) -> Response {
    let conversation = state.conversations.get_or_create(req.session_id.as_deref());
    let language = req
        .language
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or(prefs.language);
    conversation.set_language(language);

    info!(
        name: "guide.turn.received",
        session_id = %conversation.id(),
        language = %language,
        chars = req.message.chars().count(),
        "Guide turn received"
    );

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<GuideEvent>();
    let mut view = SseView::new(tx);
    view.emit(GuideEvent::Session {
        session_id: conversation.id().to_string(),
    });

    let guide = state.guide.clone();
    tokio::spawn(async move {
        let outcome = guide.send(&conversation, &req.message, &mut view).await;
        if let SendOutcome::Ignored(reason) = outcome {
            view.emit(GuideEvent::Ignored { reason });
        }
        view.emit(GuideEvent::Done);
    });

    let stream = UnboundedReceiverStream::new(rx)
        .map(|evt| Ok::<_, std::convert::Infallible>(sse_event(&evt)));

    build_sse_response(Body::from_stream(stream))
}

/// GET /api/guide/sessions/{id}/messages - Conversation history.
async fn api_guide_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, StatusCode> {
    match state.conversations.get(&id) {
        Some(conversation) => Ok(Json(
            conversation
                .messages()
                .iter()
                .map(HistoryEntry::from)
                .collect(),
        )),
        None => Err(StatusCode::NOT_FOUND),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contact Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Error body for the JSON contact API.
#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<&'static str>,
}

/// POST /api/contact - Store a submission.
async fn api_contact_submit(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<ContactSubmission>), (StatusCode, Json<ApiError>)> {
    match state.contact.submit(&form).await {
        Ok(stored) => Ok((StatusCode::CREATED, Json(stored))),
        Err(ContactError::MissingFields(missing)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiError {
                error: "missing required fields".to_string(),
                missing,
            }),
        )),
        Err(e @ ContactError::Store(_)) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ApiError {
                error: e.to_string(),
                missing: Vec::new(),
            }),
        )),
    }
}

/// GET /api/admin/submissions - Every submission, newest first.
///
/// Answers 404 unless `admin.enabled` is set.
async fn api_admin_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>, (StatusCode, String)> {
    if !state.config.admin.enabled {
        return Err((StatusCode::NOT_FOUND, "Not found".to_string()));
    }
    state
        .contact
        .all_submissions()
        .await
        .map(Json)
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))
}

/// GET /healthz - Liveness probe.
async fn healthz() -> &'static str {
    "ok"
}

// ─────────────────────────────────────────────────────────────────────────────
// Utilities
// ─────────────────────────────────────────────────────────────────────────────

/// Wrap a streaming body with the headers SSE clients and proxies expect.
fn build_sse_response(body: Body) -> Response {
    let mut resp = Response::new(body);
    let h = resp.headers_mut();
    h.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/event-stream"));
    h.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    h.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    h.insert("X-Accel-Buffering", HeaderValue::from_static("no"));
    resp
}
