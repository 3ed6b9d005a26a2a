//! Waitlist submission state machine, one instance per embedded form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero and the closing call-to-action each own a submitter. Instances
//! share nothing; a failure in one never touches the other.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Success | Error`, with `Error -> Idle` after
//! [`WaitlistConfig::error_reset_delay`]. Success is terminal.
//!
//! Every attempt opens a new episode. Deferred effects (the request outcome
//! and the reset timer) carry the episode they belong to and are dropped if
//! the instance has moved on or been disposed. The reset timer is also an
//! abortable task, cancelled outright by a superseding submit or `dispose`.
//!
//! ERROR HANDLING
//! ==============
//! Transport and endpoint failures are logged and absorbed here. Callers only
//! observe [`SubmissionState::Error`].

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};

use super::store::{Store, SubscriptionId};
use crate::config::WaitlistConfig;
use crate::net::waitlist::{HttpTransport, SubmissionPayload, SubmitError, WaitlistTransport};
use crate::runtime::{BrowserRuntime, Clock, Runtime, SystemClock};

/// Lifecycle of one form's submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// Whether the email input may change.
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    /// Whether a new attempt may start.
    #[must_use]
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }
}

/// What a call to [`WaitlistSubmitter::submit`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request was issued.
    Started,
    /// Nothing to send.
    EmptyInput,
    /// A request is already in flight.
    Busy,
    /// The address is already on the list.
    Completed,
    /// The owning form has been torn down.
    Disposed,
}

/// Collaborators a submitter needs from its environment.
#[derive(Clone)]
pub struct WaitlistDeps {
    pub transport: Rc<dyn WaitlistTransport>,
    pub runtime: Rc<dyn Runtime>,
    pub clock: Rc<dyn Clock>,
}

impl WaitlistDeps {
    /// `gloo-net`, Leptos executor, and the browser clock.
    pub fn browser() -> Self {
        Self {
            transport: Rc::new(HttpTransport),
            runtime: Rc::new(BrowserRuntime),
            clock: Rc::new(SystemClock),
        }
    }
}

struct Inner {
    source: String,
    config: WaitlistConfig,
    deps: WaitlistDeps,
    state: Store<SubmissionState>,
    email: RefCell<String>,
    episode: Cell<u64>,
    alive: Cell<bool>,
    pending_reset: RefCell<Option<AbortHandle>>,
}

/// Email capture and delivery for one form instance.
///
/// Cloning yields another handle to the same instance.
#[derive(Clone)]
pub struct WaitlistSubmitter {
    inner: Rc<Inner>,
}

impl WaitlistSubmitter {
    pub fn new(source: impl Into<String>, config: WaitlistConfig, deps: WaitlistDeps) -> Self {
        Self {
            inner: Rc::new(Inner {
                source: source.into(),
                config,
                deps,
                state: Store::new(SubmissionState::Idle),
                email: RefCell::new(String::new()),
                episode: Cell::new(0),
                alive: Cell::new(true),
                pending_reset: RefCell::new(None),
            }),
        }
    }

    /// Submitter wired to the browser transport, executor, and clock.
    pub fn browser(source: impl Into<String>, config: WaitlistConfig) -> Self {
        Self::new(source, config, WaitlistDeps::browser())
    }

    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.inner.state.get()
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.inner.email.borrow().clone()
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.inner.source
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        !self.inner.alive.get()
    }

    /// Observe state transitions.
    pub fn subscribe(&self, listener: impl Fn(&SubmissionState) + 'static) -> SubscriptionId {
        self.inner.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.state.unsubscribe(id);
    }

    /// Update the email input. Ignored (returns `false`) unless the state is
    /// `Idle` or `Error`.
    pub fn set_email(&self, value: impl Into<String>) -> bool {
        if self.is_disposed() || !self.state().accepts_input() {
            return false;
        }
        *self.inner.email.borrow_mut() = value.into();
        true
    }

    /// Start one delivery attempt for the current email.
    pub fn submit(&self) -> SubmitAttempt {
        if self.is_disposed() {
            return SubmitAttempt::Disposed;
        }
        match self.state() {
            SubmissionState::Submitting => return SubmitAttempt::Busy,
            SubmissionState::Success => return SubmitAttempt::Completed,
            SubmissionState::Idle | SubmissionState::Error => {}
        }
        let email = self.email();
        if email.is_empty() {
            return SubmitAttempt::EmptyInput;
        }

        self.cancel_pending_reset();
        let episode = self.inner.episode.get() + 1;
        self.inner.episode.set(episode);
        self.inner.state.set(SubmissionState::Submitting);
        log::debug!("waitlist[{}]: submitting (episode {episode})", self.inner.source);

        let payload = SubmissionPayload::new(
            email,
            self.inner.source.as_str(),
            self.inner.deps.clock.now_iso8601(),
            self.inner.config.project.as_str(),
        );
        let response = self
            .inner
            .deps
            .transport
            .post_submission(&self.inner.config.endpoint, &payload);
        let this = self.clone();
        self.inner.deps.runtime.spawn(Box::pin(async move {
            let outcome = response.await;
            this.resolve(episode, outcome);
        }));
        SubmitAttempt::Started
    }

    /// Tear the instance down: pending timers are cancelled and late results
    /// are discarded.
    pub fn dispose(&self) {
        if self.is_disposed() {
            return;
        }
        self.inner.alive.set(false);
        self.cancel_pending_reset();
        self.inner.state.clear_subscribers();
        log::debug!("waitlist[{}]: disposed", self.inner.source);
    }

    fn is_current(&self, episode: u64) -> bool {
        !self.is_disposed() && self.inner.episode.get() == episode
    }

    fn resolve(&self, episode: u64, outcome: Result<(), SubmitError>) {
        if !self.is_current(episode) || self.state() != SubmissionState::Submitting {
            log::debug!("waitlist[{}]: discarding stale result (episode {episode})", self.inner.source);
            return;
        }
        match outcome {
            Ok(()) => {
                log::info!("waitlist[{}]: submission accepted", self.inner.source);
                self.inner.state.set(SubmissionState::Success);
            }
            Err(err) => {
                log::warn!("waitlist[{}]: submission failed: {err}", self.inner.source);
                self.inner.state.set(SubmissionState::Error);
                self.schedule_reset(episode);
            }
        }
    }

    fn schedule_reset(&self, episode: u64) {
        let (handle, registration) = AbortHandle::new_pair();
        *self.inner.pending_reset.borrow_mut() = Some(handle);
        let delay = self.inner.deps.runtime.sleep(self.inner.config.error_reset_delay);
        let this = self.clone();
        self.inner.deps.runtime.spawn(Box::pin(async move {
            if Abortable::new(delay, registration).await.is_ok() {
                this.reset_after_error(episode);
            }
        }));
    }

    fn reset_after_error(&self, episode: u64) {
        if !self.is_current(episode) || self.state() != SubmissionState::Error {
            return;
        }
        self.inner.pending_reset.borrow_mut().take();
        log::debug!("waitlist[{}]: error window elapsed", self.inner.source);
        self.inner.state.set(SubmissionState::Idle);
    }

    fn cancel_pending_reset(&self) {
        if let Some(handle) = self.inner.pending_reset.borrow_mut().take() {
            handle.abort();
        }
    }
}
