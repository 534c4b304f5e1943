use super::*;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use shared::domain::{Submission, SubmissionSource};
use tokio::{net::TcpListener, sync::Mutex};

const TEST_API_KEY: &str = "test-anon-key";
const TEST_USER_AGENT: &str = "test-agent/1.0";

#[derive(Debug, Clone)]
struct RecordedRequest {
    headers: HeaderMap,
    raw_query: Option<String>,
    body: Option<Submission>,
}

#[derive(Clone)]
struct TableState {
    rows: Arc<Mutex<Vec<Value>>>,
    check_status: StatusCode,
    check_body: Option<Value>,
    insert_status: StatusCode,
    checks: Arc<Mutex<Vec<RecordedRequest>>>,
    inserts: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TableState {
    fn with_rows(rows: Vec<Value>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            check_status: StatusCode::OK,
            check_body: None,
            insert_status: StatusCode::CREATED,
            checks: Arc::new(Mutex::new(Vec::new())),
            inserts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn empty() -> Self {
        Self::with_rows(Vec::new())
    }

    fn check_status(mut self, status: StatusCode) -> Self {
        self.check_status = status;
        self
    }

    fn check_body(mut self, body: Value) -> Self {
        self.check_body = Some(body);
        self
    }

    fn insert_status(mut self, status: StatusCode) -> Self {
        self.insert_status = status;
        self
    }
}

async fn handle_check(
    State(state): State<TableState>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.checks.lock().await.push(RecordedRequest {
        headers,
        raw_query,
        body: None,
    });

    if !state.check_status.is_success() {
        return (
            state.check_status,
            Json(json!({ "message": "permission denied for table waitlist" })),
        )
            .into_response();
    }

    if let Some(body) = state.check_body.clone() {
        return Json(body).into_response();
    }

    let wanted = params
        .get("email")
        .and_then(|filter| filter.strip_prefix("eq."))
        .map(str::to_string);
    let rows = state.rows.lock().await;
    let matches: Vec<Value> = rows
        .iter()
        .filter(|row| row.get("email").and_then(Value::as_str) == wanted.as_deref())
        .cloned()
        .collect();
    Json(matches).into_response()
}

async fn handle_insert(
    State(state): State<TableState>,
    headers: HeaderMap,
    Json(submission): Json<Submission>,
) -> Response {
    state.inserts.lock().await.push(RecordedRequest {
        headers,
        raw_query: None,
        body: Some(submission.clone()),
    });

    if !state.insert_status.is_success() {
        return (
            state.insert_status,
            Json(json!({ "code": "XX000", "message": "database unavailable" })),
        )
            .into_response();
    }

    state
        .rows
        .lock()
        .await
        .push(json!({ "email": submission.email }));
    StatusCode::CREATED.into_response()
}

async fn spawn_table_server(state: TableState) -> anyhow::Result<String> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/rest/v1/waitlist", get(handle_check).post(handle_insert))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn service_for(base_url: &str, referrer: Option<&str>) -> WaitlistService {
    let config = StoreConfig::new(base_url, TEST_API_KEY).expect("config");
    WaitlistService::from_config(
        &config,
        Arc::new(StaticClientContext::new(
            TEST_USER_AGENT,
            referrer.map(str::to_string),
        )),
    )
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn new_email_is_checked_then_inserted() {
    let state = TableState::empty();
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let mut controller = WaitlistController::new(service_for(&base_url, None));

    controller.set_email_input("new@x.com");
    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::Success));
    let ui = controller.state();
    assert_eq!(ui.email_input, "");
    assert!(!ui.is_submitting);
    assert!(ui.modal.visible);
    assert_eq!(ui.modal.title, "Successfully Added!");
    assert!(ui.modal.message.starts_with("Welcome to Interview Lens!"));

    let checks = state.checks.lock().await;
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].raw_query.as_deref(), Some("email=eq.new%40x.com"));
    assert_eq!(header_value(&checks[0].headers, "apikey"), Some(TEST_API_KEY));
    assert_eq!(
        header_value(&checks[0].headers, "authorization"),
        Some("Bearer test-anon-key")
    );
    assert_eq!(
        header_value(&checks[0].headers, header::CONTENT_TYPE.as_str()),
        Some("application/json")
    );

    let inserts = state.inserts.lock().await;
    assert_eq!(inserts.len(), 1);
    assert_eq!(header_value(&inserts[0].headers, "apikey"), Some(TEST_API_KEY));
    assert_eq!(
        header_value(&inserts[0].headers, "authorization"),
        Some("Bearer test-anon-key")
    );
    assert_eq!(
        header_value(&inserts[0].headers, "prefer"),
        Some("return=minimal")
    );
    assert_eq!(
        inserts[0].body,
        Some(Submission {
            email: "new@x.com".to_string(),
            source: SubmissionSource::Website,
            user_agent: TEST_USER_AGENT.to_string(),
            referrer: "direct".to_string(),
        })
    );
}

#[tokio::test]
async fn duplicate_email_never_reaches_insert() {
    let state = TableState::with_rows(vec![json!({ "email": "dup@x.com" })]);
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let mut controller = WaitlistController::new(service_for(&base_url, None));

    controller.set_email_input("dup@x.com");
    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::Duplicate));
    let ui = controller.state();
    assert_eq!(ui.modal.title, "Already Subscribed!");
    assert!(ui.modal.visible);
    assert_eq!(ui.email_input, "dup@x.com");
    assert!(!ui.is_submitting);

    assert_eq!(state.checks.lock().await.len(), 1);
    assert!(state.inserts.lock().await.is_empty());
}

#[tokio::test]
async fn insert_failure_maps_to_generic_error_and_keeps_input() {
    let state = TableState::empty().insert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let mut controller = WaitlistController::new(service_for(&base_url, None));

    controller.set_email_input("fail@x.com");
    let outcome = controller.submit().await;

    assert_eq!(outcome, Some(SubmitOutcome::Error));
    let ui = controller.state();
    assert_eq!(ui.modal.title, "Submission Error");
    assert_eq!(
        ui.modal.message,
        "Could not add your email at this time. Please try again later."
    );
    assert_eq!(ui.email_input, "fail@x.com");
    assert!(!ui.is_submitting);
    assert_eq!(state.inserts.lock().await.len(), 1);
}

#[tokio::test]
async fn rejected_existence_check_skips_insert() {
    let state = TableState::empty().check_status(StatusCode::UNAUTHORIZED);
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let service = service_for(&base_url, None);

    assert_eq!(service.submit("new@x.com").await, SubmitOutcome::Error);
    assert_eq!(state.checks.lock().await.len(), 1);
    assert!(state.inserts.lock().await.is_empty());
}

#[tokio::test]
async fn non_array_check_body_is_treated_as_error() {
    let state = TableState::empty().check_body(json!({ "unexpected": "object" }));
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let service = service_for(&base_url, None);

    assert_eq!(service.submit("new@x.com").await, SubmitOutcome::Error);
    assert!(state.inserts.lock().await.is_empty());
}

#[tokio::test]
async fn row_with_offsetless_timestamp_counts_as_duplicate() {
    let state = TableState::empty().check_body(json!([{
        "id": 7,
        "email": "dup@x.com",
        "created_at": "2025-06-01T10:20:30.123456",
    }]));
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let service = service_for(&base_url, None);

    assert_eq!(service.submit("dup@x.com").await, SubmitOutcome::Duplicate);
    assert!(state.inserts.lock().await.is_empty());
}

#[tokio::test]
async fn row_without_email_column_counts_as_duplicate() {
    let state = TableState::empty().check_body(json!([{ "id": 7 }]));
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let service = service_for(&base_url, None);

    assert_eq!(service.submit("dup@x.com").await, SubmitOutcome::Duplicate);
    assert!(state.inserts.lock().await.is_empty());
}

#[tokio::test]
async fn unreachable_store_is_treated_as_error() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let service = service_for(&format!("http://{addr}"), None);
    assert_eq!(service.submit("new@x.com").await, SubmitOutcome::Error);
}

#[tokio::test]
async fn reserved_characters_are_encoded_and_second_attempt_is_duplicate() {
    let state = TableState::empty();
    let base_url = spawn_table_server(state.clone()).await.expect("spawn server");
    let service = service_for(&base_url, Some("https://news.example/launch"));

    assert_eq!(service.submit("a+b@x.com").await, SubmitOutcome::Success);
    assert_eq!(service.submit("a+b@x.com").await, SubmitOutcome::Duplicate);

    let checks = state.checks.lock().await;
    assert_eq!(checks.len(), 2);
    assert_eq!(
        checks[0].raw_query.as_deref(),
        Some("email=eq.a%2Bb%40x.com")
    );

    let inserts = state.inserts.lock().await;
    assert_eq!(inserts.len(), 1);
    let body = inserts[0].body.as_ref().expect("insert body");
    assert_eq!(body.email, "a+b@x.com");
    assert_eq!(body.referrer, "https://news.example/launch");
}

#[tokio::test]
async fn rest_store_surfaces_rejection_message() {
    let state = TableState::empty().insert_status(StatusCode::CONFLICT);
    let base_url = spawn_table_server(state).await.expect("spawn server");
    let config = StoreConfig::new(&base_url, TEST_API_KEY).expect("config");
    let store = RestWaitlistStore::new(&config);

    let err = store
        .insert(&Submission::new("new@x.com", TEST_USER_AGENT, None))
        .await
        .expect_err("conflict");

    match err {
        StoreError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message.as_deref(), Some("database unavailable"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn outcomes_map_to_fixed_modals() {
    let success = SubmitOutcome::Success.modal();
    assert!(success.visible);
    assert_eq!(success.title, "Successfully Added!");

    let duplicate = SubmitOutcome::Duplicate.modal();
    assert_eq!(duplicate.title, "Already Subscribed!");
    assert_eq!(
        duplicate.message,
        "You're already on our waitlist! We'll keep you updated."
    );

    let error = SubmitOutcome::Error.modal();
    assert_eq!(error.title, "Submission Error");
}
