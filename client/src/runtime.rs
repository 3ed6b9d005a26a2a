//! Task scheduling and wall-clock seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The waitlist state machine spawns one request task per attempt and one
//! reset timer per error episode. Both go through [`Runtime`] so the browser
//! build uses the Leptos executor and `gloo-timers`, while tests drive the
//! same code on a paused tokio clock.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser `BrowserRuntime::sleep` never completes. Native builds
//! only exist for tests and tooling, which bring their own runtime.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Single-threaded executor facade.
pub trait Runtime {
    /// Run `task` on the current thread's executor.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    /// Future that completes after `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Source of submission timestamps.
pub trait Clock {
    /// Current time as an ISO-8601 string.
    fn now_iso8601(&self) -> String;
}

/// Leptos task executor plus browser timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        #[cfg(feature = "csr")]
        {
            Box::pin(gloo_timers::future::sleep(duration))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            Box::pin(futures::future::pending())
        }
    }
}

/// Wall clock: `Date.toISOString()` in the browser, RFC 3339 elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        #[cfg(feature = "csr")]
        {
            js_sys::Date::new_0().to_iso_string().into()
        }
        #[cfg(not(feature = "csr"))]
        {
            time::OffsetDateTime::now_utc()
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_default()
        }
    }
}
