use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::LoadError;
use crate::model::Snapshot;

pub const CACHE_BUST_PARAM: &str = "cacheBust";

/// Status line and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the single GET a load needs. `Err` means no response arrived.
#[allow(async_fn_in_trait)]
pub trait SnapshotTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, String>;
}

/// Tri-state status shared by every view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready(Arc<Snapshot>),
    Error(String),
}

impl LoadStatus {
    pub fn snapshot(&self) -> Option<&Arc<Snapshot>> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Result<Snapshot, LoadError>> for LoadStatus {
    fn from(result: Result<Snapshot, LoadError>) -> Self {
        match result {
            Ok(snapshot) => Self::Ready(Arc::new(snapshot)),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Append the cache-busting parameter, respecting an existing query string.
pub fn cache_busted_url(endpoint: &str, now_ms: i64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{separator}{CACHE_BUST_PARAM}={now_ms}")
}

/// One fetch-and-normalize pass. No retries; any failure fails the whole load.
pub async fn fetch_snapshot<T: SnapshotTransport>(
    transport: &T,
    endpoint: Option<&str>,
    now_ms: i64,
) -> Result<Snapshot, LoadError> {
    let endpoint = endpoint
        .map(str::trim)
        .filter(|endpoint| !endpoint.is_empty())
        .ok_or(LoadError::MissingEndpoint)?;
    let url = cache_busted_url(endpoint, now_ms);

    let resp = transport.get(&url).await.map_err(LoadError::Transport)?;
    if !resp.is_success() {
        return Err(LoadError::Status(resp.status));
    }
    Snapshot::from_json(&resp.body)
}

/// Marks one started load; compared against the loader's generation before
/// the result is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Runs snapshot loads with last-load-wins semantics. A load whose ticket is
/// no longer current when its response arrives is dropped, as is any load
/// finishing after [`SnapshotLoader::close`]. The request itself is never aborted.
pub struct SnapshotLoader<T> {
    transport: T,
    endpoint: Option<String>,
    generation: AtomicU64,
    closed: AtomicBool,
}

impl<T: SnapshotTransport> SnapshotLoader<T> {
    pub fn new(transport: T, endpoint: Option<String>) -> Self {
        Self {
            transport,
            endpoint,
            generation: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Start a new generation, superseding any load in flight.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.closed.load(Ordering::Relaxed)
            && self.generation.load(Ordering::Relaxed) == ticket.0
    }

    /// Owner teardown: every load still in flight is discarded on arrival.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }

    /// Fetch a fresh snapshot. Returns the status to apply, or `None` when
    /// this load was superseded or the loader was closed while it waited.
    pub async fn load(&self, now_ms: i64) -> Option<LoadStatus> {
        let ticket = self.begin();
        let result = fetch_snapshot(&self.transport, self.endpoint.as_deref(), now_ms).await;
        self.is_current(ticket).then(|| LoadStatus::from(result))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll};

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::task::noop_waker_ref;

    use super::{
        HttpResponse, LoadStatus, SnapshotLoader, SnapshotTransport, cache_busted_url,
    };

    type Reply = Result<HttpResponse, String>;

    fn ok(body: &str) -> Reply {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    /// Answers every request with the same reply and records the URLs asked for.
    struct FixedTransport {
        reply: Reply,
        urls: RefCell<Vec<String>>,
    }

    impl FixedTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl SnapshotTransport for FixedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, String> {
            self.urls.borrow_mut().push(url.to_string());
            self.reply.clone()
        }
    }

    /// Hands out replies in request order, each resolved by the test.
    struct ScriptedTransport {
        pending: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
    }

    impl SnapshotTransport for ScriptedTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, String> {
            let rx = self
                .pending
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| "unexpected request".to_string())?;
            rx.await.map_err(|_| "request dropped".to_string())?
        }
    }

    fn endpoint() -> Option<String> {
        Some("https://points.example/exec".to_string())
    }

    #[test]
    fn successful_load_is_ready() {
        let loader = SnapshotLoader::new(
            FixedTransport::new(ok(r#"{"members": [{"First": "Ann", "Points": 3}]}"#)),
            endpoint(),
        );
        let status = block_on(loader.load(42)).expect("load should apply");
        let snapshot = status.snapshot().expect("status should be ready");
        assert_eq!(snapshot.members.len(), 1);
        assert!(snapshot.rules.is_empty(), "missing rules default to empty");
        assert_eq!(
            *loader.transport.urls.borrow(),
            vec!["https://points.example/exec?cacheBust=42"]
        );
    }

    #[test]
    fn http_failure_is_error() {
        let loader = SnapshotLoader::new(
            FixedTransport::new(Ok(HttpResponse {
                status: 500,
                body: "oops".into(),
            })),
            endpoint(),
        );
        let status = block_on(loader.load(0)).expect("load should apply");
        let message = status.error().expect("status should be error");
        assert!(message.contains("500"), "got {message}");
    }

    #[test]
    fn transport_and_parse_failures_are_errors() {
        let loader = SnapshotLoader::new(
            FixedTransport::new(Err("network down".into())),
            endpoint(),
        );
        let status = block_on(loader.load(0)).expect("load should apply");
        assert!(status.error().is_some_and(|m| m.contains("network down")));

        let loader = SnapshotLoader::new(FixedTransport::new(ok("<html>")), endpoint());
        let status = block_on(loader.load(0)).expect("load should apply");
        assert!(matches!(status, LoadStatus::Error(_)));
    }

    #[test]
    fn missing_endpoint_fails_without_a_request() {
        for configured in [None, Some("   ".to_string())] {
            let loader = SnapshotLoader::new(FixedTransport::new(ok("{}")), configured);
            let status = block_on(loader.load(0)).expect("load should apply");
            assert!(status.error().is_some());
            assert!(loader.transport.urls.borrow().is_empty());
        }
    }

    #[test]
    fn superseded_load_cannot_overwrite_newer_result() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let loader = SnapshotLoader::new(
            ScriptedTransport {
                pending: RefCell::new(VecDeque::from([first_rx, second_rx])),
            },
            endpoint(),
        );
        let mut cx = Context::from_waker(noop_waker_ref());

        let mut first = pin!(loader.load(1));
        let mut second = pin!(loader.load(2));
        assert!(first.as_mut().poll(&mut cx).is_pending());
        assert!(second.as_mut().poll(&mut cx).is_pending());

        second_tx
            .send(ok(r#"{"rules": [{"Rule": "newer"}]}"#))
            .expect("second load is waiting");
        let status = match second.as_mut().poll(&mut cx) {
            Poll::Ready(Some(next)) => next,
            other => panic!("second load should apply, got {other:?}"),
        };

        first_tx
            .send(ok(r#"{"rules": [{"Rule": "older"}]}"#))
            .expect("first load is waiting");
        match first.as_mut().poll(&mut cx) {
            Poll::Ready(None) => {}
            other => panic!("first load should be discarded, got {other:?}"),
        }

        let snapshot = status.snapshot().expect("status should be ready");
        assert_eq!(snapshot.rules[0].text, "newer");
    }

    #[test]
    fn load_finishing_after_close_is_discarded() {
        let (tx, rx) = oneshot::channel();
        let loader = SnapshotLoader::new(
            ScriptedTransport {
                pending: RefCell::new(VecDeque::from([rx])),
            },
            endpoint(),
        );
        let mut cx = Context::from_waker(noop_waker_ref());
        let mut load = pin!(loader.load(1));
        assert!(load.as_mut().poll(&mut cx).is_pending());

        loader.close();
        tx.send(ok("{}")).expect("load is waiting");
        assert!(matches!(load.as_mut().poll(&mut cx), Poll::Ready(None)));
    }

    #[test]
    fn cache_bust_respects_existing_query() {
        assert_eq!(cache_busted_url("https://x/exec", 7), "https://x/exec?cacheBust=7");
        assert_eq!(
            cache_busted_url("https://x/exec?sheet=1", 7),
            "https://x/exec?sheet=1&cacheBust=7"
        );
    }
}
