//! Integration tests for the inspector pipeline
//!
//! Calls go through the interceptor into a mock transport; the resulting
//! entries flow into the console and its durable store.

use async_trait::async_trait;
use call_inspector::app::App;
use call_inspector::classify::{Entity, TypeTag};
use call_inspector::console::{ConsoleState, EntryBody};
use call_inspector::history::{EntryKind, FileStorage, FilterMode, LogEntry, LogStore, MemoryStorage};
use call_inspector::intercept::{
    BaseUrl, CallRequest, CallResponse, CallTransport, Interceptor, TransportError, UrlNormalizer,
};
use call_inspector::render::ViewFragment;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const BASE: &str = "http://api.test/api";

// =============================================================================
// Mock Transport
// =============================================================================

/// Scripted reply for one URL
#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
    delay: Duration,
}

/// Mock transport answering from a URL table; unknown URLs fail like a dropped connection
#[derive(Default)]
struct MockTransport {
    replies: HashMap<String, Reply>,
}

impl MockTransport {
    fn new() -> Self {
        Self::default()
    }

    fn reply(mut self, path: &str, status: u16, body: &str) -> Self {
        self.replies.insert(
            format!("{}{}", BASE, path),
            Reply {
                status,
                body: body.to_string(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    fn delayed(mut self, path: &str, body: &str, delay_ms: u64) -> Self {
        self.replies.insert(
            format!("{}{}", BASE, path),
            Reply {
                status: 200,
                body: body.to_string(),
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }
}

#[async_trait]
impl CallTransport for MockTransport {
    async fn send(&self, request: &CallRequest) -> Result<CallResponse, TransportError> {
        let reply = self
            .replies
            .get(&request.url)
            .cloned()
            .ok_or_else(|| TransportError::new("Network Error"))?;
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        Ok(CallResponse::new(reply.status, reply.body))
    }
}

fn intercept(mock: MockTransport) -> (Interceptor<MockTransport>, mpsc::UnboundedReceiver<LogEntry>) {
    Interceptor::new(mock, UrlNormalizer::new(BaseUrl::new(BASE), None))
}

fn memory_console() -> ConsoleState {
    let store = LogStore::new(Box::new(MemoryStorage::new()), 200);
    ConsoleState::new(store, BaseUrl::new(BASE), FilterMode::All)
}

fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

async fn next_entry(rx: &mut mpsc::UnboundedReceiver<LogEntry>) -> LogEntry {
    tokio::time::timeout(Duration::from_millis(500), rx.recv())
        .await
        .expect("timeout")
        .expect("channel closed")
}

// =============================================================================
// Call to view
// =============================================================================

#[tokio::test]
async fn test_board_call_renders_card() {
    let mock = MockTransport::new().reply(
        "/boards/5",
        200,
        r#"{"id":5,"name":"General","description":"Talk","postCount":12}"#,
    );
    let (icpt, mut rx) = intercept(mock);
    let mut console = memory_console();

    let response = icpt.call(&CallRequest::new("get", url("/boards/5"))).await.unwrap();
    assert_eq!(response.status, 200);

    let entry = next_entry(&mut rx).await;
    assert_eq!(entry.url, "/boards/5");
    assert_eq!(entry.method, "GET");
    assert_eq!(entry.kind, EntryKind::Success);
    assert_eq!(entry.data_type, TypeTag::Entity(Entity::Board));
    console.ingest(entry);

    let mounted = console.view().selected().expect("entry mounted");
    match &mounted.body.ui {
        Some(ViewFragment::Card { entity, .. }) => assert_eq!(*entity, Entity::Board),
        other => panic!("expected board card, got {:?}", other),
    }
    let text = mounted.body.ui.as_ref().unwrap().to_text();
    assert!(text.contains("General"));
    assert!(text.contains("#5"));
}

#[tokio::test]
async fn test_paged_posts_render_one_row_per_item() {
    let mock = MockTransport::new().reply(
        "/boards/1/posts",
        200,
        r#"{"content":[{"id":9,"title":"Hello","content":"Body","boardId":1}],"totalPages":1}"#,
    );
    let (icpt, mut rx) = intercept(mock);

    icpt.call(&CallRequest::new("GET", url("/boards/1/posts")))
        .await
        .unwrap();

    let entry = next_entry(&mut rx).await;
    assert_eq!(entry.data_type, TypeTag::List(Entity::Post));

    let body = EntryBody::build(&entry);
    match body.ui {
        Some(ViewFragment::List { entity, rows }) => {
            assert_eq!(entity, Entity::Post);
            assert_eq!(rows.len(), 1);
        }
        other => panic!("expected post list, got {:?}", other),
    }
}

#[tokio::test]
async fn test_network_failure_is_recorded_and_rethrown() {
    let (icpt, mut rx) = intercept(MockTransport::new());
    let mut console = memory_console();

    let request = CallRequest::new("POST", url("/auth/login"))
        .with_body(serde_json::json!({"email": "a@b.c", "password": "x"}));
    let err = icpt.call(&request).await.unwrap_err();
    assert_eq!(err.message, "Network Error");

    let entry = next_entry(&mut rx).await;
    assert_eq!(entry.kind, EntryKind::Error);
    assert!(entry.status.is_network());
    assert_eq!(entry.url, "/auth/login");
    console.ingest(entry);

    let mounted = console.view().selected().unwrap();
    match &mounted.body.ui {
        Some(ViewFragment::Error { message, .. }) => assert_eq!(message, "Network Error"),
        other => panic!("expected error card, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_filter_counts() {
    let mock = MockTransport::new()
        .reply("/users/me", 200, r#"{"id":1,"email":"a@b.c","nickname":"al"}"#)
        .reply("/boards/404", 404, r#"{"message":"Board not found"}"#);
    let (icpt, mut rx) = intercept(mock);
    let mut console = memory_console();

    for path in ["/users/me", "/boards/404", "/users/me", "/offline"] {
        let _ = icpt.call(&CallRequest::new("GET", url(path))).await;
        console.ingest(next_entry(&mut rx).await);
    }

    console.set_filter(FilterMode::Error);
    let counts = console.view().counts();
    assert_eq!(counts.visible, 2);
    assert_eq!(counts.total, 4);
    assert!(console
        .view()
        .visible()
        .all(|m| m.entry.kind == EntryKind::Error));

    console.set_filter(FilterMode::Success);
    assert_eq!(console.view().counts().visible, 2);
}

// =============================================================================
// History
// =============================================================================

#[tokio::test]
async fn test_history_capped_newest_first() {
    let mock = MockTransport::new().reply("/ping", 200, r#"{"ok":true}"#);
    let (icpt, mut rx) = intercept(mock);
    let storage = MemoryStorage::new();
    let mut console = ConsoleState::new(
        LogStore::new(Box::new(storage.clone()), 200),
        BaseUrl::new(BASE),
        FilterMode::All,
    );

    let mut ids = Vec::new();
    for _ in 0..205 {
        icpt.call(&CallRequest::new("GET", url("/ping"))).await.unwrap();
        let entry = next_entry(&mut rx).await;
        ids.push(entry.id.clone());
        console.ingest(entry);
    }

    // A fresh store over the same slots sees what was persisted
    let mut reloaded = LogStore::new(Box::new(storage), 200);
    let persisted = reloaded.load();
    assert_eq!(persisted.len(), 200);
    assert_eq!(persisted[0].id, ids[204]);
    assert_eq!(persisted[199].id, ids[5]);
}

#[tokio::test]
async fn test_delete_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let mock = MockTransport::new()
        .reply("/boards", 200, r#"[]"#)
        .reply("/users", 200, r#"[{"id":1,"email":"a@b.c","nickname":"al"}]"#);
    let (icpt, mut rx) = intercept(mock);

    let doomed = {
        let store = LogStore::new(Box::new(FileStorage::new(dir.path())), 200);
        let mut console = ConsoleState::new(store, BaseUrl::default(), FilterMode::All);
        console.restore();
        console.set_base_url("http://api.test/api/");

        for path in ["/boards", "/users"] {
            icpt.call(&CallRequest::new("GET", url(path))).await.unwrap();
            console.ingest(next_entry(&mut rx).await);
        }
        let doomed = console.view().mounted()[1].entry.id.clone();
        assert!(console.delete(&doomed));
        doomed
    };

    let base_url = BaseUrl::default();
    let store = LogStore::new(Box::new(FileStorage::new(dir.path())), 200);
    let mut console = ConsoleState::new(store, base_url.clone(), FilterMode::All);
    assert_eq!(console.restore(), 1);
    assert_eq!(base_url.get(), BASE);

    let remaining = &console.view().mounted()[0].entry;
    assert_eq!(remaining.url, "/users");
    assert_eq!(remaining.data_type, TypeTag::List(Entity::User));
    assert!(console.entry_json(&doomed).is_err());
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn test_entries_arrive_in_settlement_order() {
    let mock = MockTransport::new()
        .delayed("/slow", r#"{"n":1}"#, 80)
        .delayed("/fast", r#"{"n":2}"#, 5);
    let (icpt, rx) = intercept(mock);
    let mut app = App::new(memory_console(), Arc::new(icpt), rx);

    app.dispatch(CallRequest::new("GET", url("/slow")));
    app.dispatch(CallRequest::new("GET", url("/fast")));
    assert_eq!(app.state().in_flight, 2);

    let deadline = tokio::time::Instant::now() + Duration::from_millis(500);
    while app.view().counts().total < 2 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.poll();
    }

    // Newest on top: the slow call settled last
    let urls: Vec<_> = app.view().mounted().iter().map(|m| m.entry.url.clone()).collect();
    assert_eq!(urls, vec!["/slow", "/fast"]);
}
