use async_trait::async_trait;
use http::StatusCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::api::{ApiClient, HttpRequest, HttpResponse, Transport, TransportError};

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// In-memory transport for tests: answers every request through a handler
/// closure and records what it was asked.
pub struct MockTransport {
    handler: Box<Handler>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
    {
        MockTransport {
            handler: Box::new(handler),
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies to every request with the same status and body.
    pub fn respond_with(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(move |_| Ok(HttpResponse::new(status, body.clone())))
    }

    /// Fails every request with the given transport error.
    pub fn fail_with(error: TransportError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    /// Sleeps before answering, so tests can cancel an in-flight call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.handler)(&request)
    }
}

/// Client wired to a mock transport and the default production base URLs.
pub fn mock_client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(
        transport,
        crate::constants::DEFAULT_API_BASE_URL,
        crate::constants::DEFAULT_GAME_SERVER_URL,
    )
}

/// Sample bodies shaped like real API responses.
pub mod fixtures {
    pub const PROFILE: &str = r#"{
        "user": {
            "id": "5b0a80f8a6cfb4a8f4bb3a9e",
            "nick": "Plonker",
            "countryCode": "fi",
            "created": "2018-05-27T09:12:56.000Z",
            "isProUser": true,
            "isVerified": false,
            "progress": {
                "level": 104,
                "xp": 1250400,
                "nextLevelXp": 1300000,
                "title": { "id": 210, "tierId": 3 },
                "competitionMedals": { "bronze": 2, "silver": 1, "gold": 0, "platinum": 0 }
            },
            "competitive": {
                "elo": 1134,
                "rating": 1102,
                "lastRatingChange": -12,
                "division": { "type": 30, "startRating": 1100, "endRating": 1199 }
            }
        },
        "email": "plonker@example.com"
    }"#;

    pub const FEED_PAGE_1: &str = r#"{
        "entries": [
            {
                "type": 2,
                "time": "2024-03-02T18:00:00.000Z",
                "user": { "id": "u1", "nick": "Alice" },
                "payload": "{\"mapSlug\":\"world\",\"mapName\":\"A Diverse World\",\"points\":21000,\"gameToken\":\"t1\",\"gameMode\":\"Standard\"}"
            }
        ],
        "paginationToken": "cursor-2"
    }"#;

    pub const FEED_PAGE_2: &str = r#"{
        "entries": [
            {
                "type": 11,
                "time": "2024-03-01T10:00:00.000Z",
                "user": { "id": "u2", "nick": "Bob" },
                "payload": "{\"gameId\":\"d1\",\"gameMode\":\"Duels\"}"
            }
        ],
        "paginationToken": "cursor-3"
    }"#;

    pub const FEED_PAGE_LAST: &str = r#"{
        "entries": [],
        "paginationToken": null
    }"#;
}
