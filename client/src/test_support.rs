//! Deterministic doubles for the router and submitter seams.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::config::WaitlistConfig;
use crate::net::waitlist::{SubmissionPayload, SubmitError, WaitlistTransport};
use crate::runtime::{Clock, Runtime};
use crate::state::waitlist::{WaitlistDeps, WaitlistSubmitter};
use crate::util::viewport::Viewport;

pub const FROZEN_TIME: &str = "2026-10-19T12:00:00.000Z";

// =============================================================
// Viewport
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollCall {
    Anchor { id: String, found: bool },
    Top,
}

/// Viewport that knows a fixed set of element ids and records every call.
#[derive(Default)]
pub struct RecordingViewport {
    pub rendered: RefCell<HashSet<String>>,
    pub calls: RefCell<Vec<ScrollCall>>,
}

impl RecordingViewport {
    pub fn with_anchors(ids: &[&str]) -> Rc<Self> {
        Rc::new(Self {
            rendered: RefCell::new(ids.iter().map(|id| (*id).to_owned()).collect()),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<ScrollCall> {
        self.calls.borrow().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool {
        let found = self.rendered.borrow().contains(anchor_id);
        self.calls.borrow_mut().push(ScrollCall::Anchor { id: anchor_id.to_owned(), found });
        found
    }

    fn scroll_to_top(&self) {
        self.calls.borrow_mut().push(ScrollCall::Top);
    }
}

// =============================================================
// Runtime + clock
// =============================================================

/// Runs tasks on the ambient `LocalSet` and sleeps on tokio's (paused) clock.
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn now_iso8601(&self) -> String {
        self.0.to_owned()
    }
}

// =============================================================
// Transport
// =============================================================

/// Reply for one scripted request.
pub enum Reply {
    Ok,
    Status(u16),
    TransportFailure,
    /// Resolved later by the test through the paired sender.
    Gated(oneshot::Receiver<Result<(), SubmitError>>),
}

/// Transport that counts calls, records payloads, and answers from a script.
/// An exhausted script answers `Ok`.
#[derive(Default)]
pub struct ScriptedTransport {
    pub calls: Cell<usize>,
    pub payloads: RefCell<Vec<(String, SubmissionPayload)>>,
    pub replies: RefCell<VecDeque<Reply>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<Reply>) -> Rc<Self> {
        Rc::new(Self {
            replies: RefCell::new(replies.into()),
            ..Self::default()
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    pub fn last_payload(&self) -> Option<SubmissionPayload> {
        self.payloads.borrow().last().map(|(_, payload)| payload.clone())
    }
}

impl WaitlistTransport for ScriptedTransport {
    fn post_submission(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.calls.set(self.calls.get() + 1);
        self.payloads.borrow_mut().push((endpoint.to_owned(), payload.clone()));
        let reply = self.replies.borrow_mut().pop_front().unwrap_or(Reply::Ok);
        match reply {
            Reply::Ok => Box::pin(async { Ok(()) }),
            Reply::Status(status) => Box::pin(async move { crate::net::waitlist::check_status(status) }),
            Reply::TransportFailure => {
                Box::pin(async { Err(SubmitError::Transport("connection refused".to_owned())) })
            }
            Reply::Gated(rx) => Box::pin(async move {
                rx.await
                    .unwrap_or_else(|_| Err(SubmitError::Transport("gate dropped".to_owned())))
            }),
        }
    }
}

/// Open gate: the test decides when and how the request finishes.
pub fn gate() -> (oneshot::Sender<Result<(), SubmitError>>, Reply) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Gated(rx))
}

// =============================================================
// Builders
// =============================================================

pub fn test_config() -> WaitlistConfig {
    WaitlistConfig {
        endpoint: "https://collect.example.test/hook".to_owned(),
        project: "EndALoop".to_owned(),
        error_reset_delay: Duration::from_secs(4),
    }
}

pub fn submitter(source: &str, transport: &Rc<ScriptedTransport>) -> WaitlistSubmitter {
    let transport: Rc<dyn WaitlistTransport> = transport.clone();
    WaitlistSubmitter::new(
        source,
        test_config(),
        WaitlistDeps {
            transport,
            runtime: Rc::new(TokioRuntime),
            clock: Rc::new(FixedClock(FROZEN_TIME)),
        },
    )
}

/// Let every ready local task run. Virtual time only moves once nothing is
/// runnable, so this advances the paused clock by at most `ms`.
pub async fn settle_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub async fn settle() {
    settle_ms(1).await;
}
