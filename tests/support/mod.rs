#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use tinder_http::{PreparedRequest, RawResponse, Transport, TransportError};
use tokio::time::Instant;

/// One scripted outcome of a mock network attempt.
#[derive(Clone, Debug)]
pub enum Scripted {
    Respond(u16, String),
    Fail(TransportError),
    /// Never completes; only the executor timeout ends the attempt.
    Hang,
}

impl Scripted {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::Respond(status, body.to_string())
    }

    pub fn refused() -> Self {
        Self::Fail(TransportError::Connect("connection refused".to_owned()))
    }
}

/// In-memory transport replaying a script and recording every attempt.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Mutex<Option<Scripted>>,
    calls: AtomicUsize,
    sent_at: Mutex<Vec<Instant>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl MockTransport {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            ..Self::default()
        })
    }

    /// Replays `outcome` on every attempt.
    pub fn always(outcome: Scripted) -> Arc<Self> {
        Arc::new(Self {
            fallback: Mutex::new(Some(outcome)),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Time elapsed between consecutive attempts.
    pub fn gaps(&self) -> Vec<std::time::Duration> {
        let sent_at = self.sent_at.lock().expect("sent_at mutex must not be poisoned");
        sent_at.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests
            .lock()
            .expect("requests mutex must not be poisoned")
            .clone()
    }

    fn next_outcome(&self) -> Scripted {
        let scripted = self
            .script
            .lock()
            .expect("script mutex must not be poisoned")
            .pop_front();
        scripted
            .or_else(|| {
                self.fallback
                    .lock()
                    .expect("fallback mutex must not be poisoned")
                    .clone()
            })
            .unwrap_or_else(|| Scripted::Respond(500, r#"{"error":"script exhausted"}"#.to_owned()))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent_at
            .lock()
            .expect("sent_at mutex must not be poisoned")
            .push(Instant::now());
        self.requests
            .lock()
            .expect("requests mutex must not be poisoned")
            .push(request);

        match self.next_outcome() {
            Scripted::Respond(status, body) => Ok(RawResponse::new(status, body)),
            Scripted::Fail(err) => Err(err),
            Scripted::Hang => std::future::pending().await,
        }
    }
}
