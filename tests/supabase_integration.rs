//! Integration tests for the Supabase submission store.
//!
//! A local axum server plays the PostgREST endpoint of a Supabase project and
//! records every request the store makes.

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use chrono::{TimeZone, Timelike, Utc};
use museum_site::contact::supabase::SupabaseSubmissionStore;
use museum_site::contact::{NewSubmission, SubmissionStore};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// =============================================================================
// Test Utilities
// =============================================================================

const ROW_ID: &str = "8a6e0804-2bd0-4672-b79d-d97027f9071a";
const API_KEY: &str = "service-role-key";

/// One request as the fake endpoint saw it.
#[derive(Debug, Clone)]
struct Seen {
    method: &'static str,
    headers: HeaderMap,
    query: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    seen: Arc<Mutex<Vec<Seen>>>,
}

fn row(id: &str, subject: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": "Amina",
        "email": "amina@example.dz",
        "subject": subject,
        "message": "Can we book a guided tour?",
        "created_at": created_at,
    })
}

async fn mock_list(
    State(state): State<MockState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state.seen.lock().unwrap().push(Seen {
        method: "GET",
        headers,
        query,
        body: Value::Null,
    });
    let rows = json!([
        row(ROW_ID, "Donation", "2025-01-02T08:30:00+00:00"),
        row(
            "0f7c3f0e-5e4b-4c36-9d0a-3f4f1c2b9e11",
            "Group visit",
            "2025-01-01T10:00:00.123456+00:00"
        ),
    ]);
    (state.status, axum::Json(rows))
}

async fn mock_insert(
    State(state): State<MockState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    axum::Json(body): axum::Json<Value>,
) -> impl IntoResponse {
    state.seen.lock().unwrap().push(Seen {
        method: "POST",
        headers,
        query,
        body: body.clone(),
    });
    let subject = body[0]["subject"].as_str().unwrap_or_default().to_string();
    let rows = json!([row(ROW_ID, &subject, "2025-01-01T10:00:00.123456+00:00")]);
    (state.status, axum::Json(rows))
}

/// Start the fake project and return its base URL.
async fn spawn_mock(status: StatusCode) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route(
            "/rest/v1/contact_submissions",
            get(mock_list).post(mock_insert),
        )
        .with_state(MockState {
            status,
            seen: Arc::clone(&seen),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

fn new_submission() -> NewSubmission {
    NewSubmission {
        name: "Amina".to_string(),
        email: "amina@example.dz".to_string(),
        subject: "Group visit".to_string(),
        message: "Can we book a guided tour?".to_string(),
    }
}

fn header<'a>(seen: &'a Seen, name: &str) -> &'a str {
    seen.headers
        .get(name)
        .unwrap_or_else(|| panic!("missing {name} header"))
        .to_str()
        .unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_insert_requests_representation() {
    let (base_url, seen) = spawn_mock(StatusCode::CREATED).await;
    let store = SupabaseSubmissionStore::new(&format!("{base_url}/"), API_KEY);

    let stored = store.insert(&new_submission()).await.unwrap();
    assert_eq!(stored.id.to_string(), ROW_ID);
    assert_eq!(stored.subject, "Group visit");
    assert_eq!(
        stored.created_at,
        Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_000)
            .unwrap()
    );

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let request = &seen[0];
    assert_eq!(request.method, "POST");
    assert_eq!(header(request, "apikey"), API_KEY);
    assert_eq!(
        header(request, "authorization"),
        format!("Bearer {API_KEY}")
    );
    assert_eq!(header(request, "prefer"), "return=representation");
    assert_eq!(
        request.body,
        json!([{
            "name": "Amina",
            "email": "amina@example.dz",
            "subject": "Group visit",
            "message": "Can we book a guided tour?",
        }])
    );
}

#[tokio::test]
async fn test_list_recent_orders_newest_first() {
    let (base_url, seen) = spawn_mock(StatusCode::OK).await;
    let store = SupabaseSubmissionStore::new(&base_url, API_KEY);

    let rows = store.list_recent().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].subject, "Donation");
    assert_eq!(
        rows[0].created_at,
        Utc.with_ymd_and_hms(2025, 1, 2, 8, 30, 0).unwrap()
    );
    assert_eq!(rows[1].created_at.nanosecond(), 123_456_000);

    let seen = seen.lock().unwrap();
    let request = &seen[0];
    assert_eq!(request.method, "GET");
    assert_eq!(header(request, "apikey"), API_KEY);
    assert_eq!(
        header(request, "authorization"),
        format!("Bearer {API_KEY}")
    );
    let query = request.query.as_deref().unwrap_or_default();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    assert!(pairs.contains(&("select".to_string(), "*".to_string())));
    assert!(pairs.contains(&("order".to_string(), "created_at.desc".to_string())));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (base_url, _seen) = spawn_mock(StatusCode::UNAUTHORIZED).await;
    let store = SupabaseSubmissionStore::new(&base_url, "wrong-key");

    assert!(store.insert(&new_submission()).await.is_err());
    assert!(store.list_recent().await.is_err());
}
