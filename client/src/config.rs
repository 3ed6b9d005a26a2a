//! Waitlist collection settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection endpoint is the only piece of real configuration in the
//! client. It is resolved at compile time so the WASM bundle carries no
//! runtime lookup; everything else (copy, colors, links) lives with the
//! components that render it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Collection webhook used when no override is compiled in.
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://hook.eu1.make.com/qwnv5cx1cnycq99tc807eu13k6wz82bd";

/// Project identifier attached to every submission.
pub const PROJECT_NAME: &str = "EndALoop";

/// How long a form stays in the error state before it becomes editable again.
pub const DEFAULT_ERROR_RESET_DELAY: Duration = Duration::from_secs(4);

/// Settings shared by every waitlist form on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaitlistConfig {
    /// URL that receives the JSON submission.
    pub endpoint: String,
    /// Constant `project` field of the payload.
    pub project: String,
    /// Delay of the automatic Error -> Idle transition.
    pub error_reset_delay: Duration,
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WAITLIST_ENDPOINT.to_owned(),
            project: PROJECT_NAME.to_owned(),
            error_reset_delay: DEFAULT_ERROR_RESET_DELAY,
        }
    }
}

impl WaitlistConfig {
    /// Build the config from compile-time environment.
    ///
    /// `ENDALOOP_WAITLIST_URL` overrides the endpoint when set and non-blank.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: resolve_endpoint(option_env!("ENDALOOP_WAITLIST_URL")),
            ..Self::default()
        }
    }
}

fn resolve_endpoint(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => DEFAULT_WAITLIST_ENDPOINT.to_owned(),
    }
}
