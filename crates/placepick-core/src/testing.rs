//! Test doubles shared by the Placepick crates.
//!
//! Enabled for this crate's own tests and, for sibling crates, through the
//! `test-support` feature.

use crate::error::{PlacepickError, Result};
use crate::notice::{Notice, NoticeSink};
use crate::transport::Transport;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::{Notify, oneshot};

/// HTTP method of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// A request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Ready(Result<Value>),
    Gated {
        reply: Result<Value>,
        gate: oneshot::Receiver<()>,
    },
}

/// Scripted transport.
///
/// Replies are queued per `(method, path)` and consumed in order. A gated
/// reply stays pending until its sender fires (or is dropped), which lets a
/// test interleave local edits with an in-flight request.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
    dispatched: Notify,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn reply(&self, method: Method, path: &str, value: Value) {
        self.push(method, path, Reply::Ready(Ok(value)));
    }

    /// Queues a failed reply.
    pub fn fail(&self, method: Method, path: &str, error: PlacepickError) {
        self.push(method, path, Reply::Ready(Err(error)));
    }

    /// Queues a reply that is held back until the returned sender fires.
    pub fn reply_gated(&self, method: Method, path: &str, value: Value) -> oneshot::Sender<()> {
        self.push_gated(method, path, Ok(value))
    }

    /// Queues a failure that is held back until the returned sender fires.
    pub fn fail_gated(
        &self,
        method: Method,
        path: &str,
        error: PlacepickError,
    ) -> oneshot::Sender<()> {
        self.push_gated(method, path, Err(error))
    }

    /// All calls observed so far, in dispatch order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Waits until at least `count` calls have been dispatched.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            if self.call_count() >= count {
                return;
            }
            self.dispatched.notified().await;
        }
    }

    fn push_gated(&self, method: Method, path: &str, reply: Result<Value>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.push(method, path, Reply::Gated { reply, gate });
        release
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    async fn dispatch(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        self.dispatched.notify_one();

        let next = self
            .replies
            .lock()
            .unwrap()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front);

        match next {
            Some(Reply::Ready(reply)) => reply,
            Some(Reply::Gated { reply, gate }) => {
                // A dropped sender releases the reply as well.
                let _ = gate.await;
                reply
            }
            None => Err(PlacepickError::transport(format!(
                "no scripted reply for {:?} {}",
                method, path
            ))),
        }
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.dispatch(Method::Get, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.dispatch(Method::Post, path, Some(body)).await
    }
}

/// Notice sink that keeps everything it receives.
#[derive(Debug, Default)]
pub struct RecordingNotices {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

impl NoticeSink for RecordingNotices {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
