//! Waitlist collection endpoint: payload, transport seam, and error taxonomy.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only outbound call the landing page makes. The body is a
//! small JSON object; the response body is never read, only its status.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are distinct variants so logs
//! can tell them apart, but the submitter folds both into one visible error
//! state.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use futures::future::LocalBoxFuture;
use serde::Serialize;

/// JSON body posted for one submission attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub email: String,
    /// Identifier of the form instance that produced the submission.
    pub source: String,
    /// ISO-8601 time of the submit action.
    pub timestamp: String,
    pub project: String,
}

impl SubmissionPayload {
    pub fn new(
        email: impl Into<String>,
        source: impl Into<String>,
        timestamp: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            source: source.into(),
            timestamp: timestamp.into(),
            project: project.into(),
        }
    }
}

/// Why a submission did not reach the list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be completed (offline, DNS, CORS, timeout).
    #[error("waitlist request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("waitlist endpoint rejected submission: {status}")]
    Rejected { status: u16 },
}

/// Map a response status to an outcome. Any 2xx status is success.
///
/// # Errors
///
/// Returns [`SubmitError::Rejected`] for every status outside 200..=299.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

/// Delivers a payload to the collection endpoint.
///
/// The request is issued when `post_submission` is called; the returned
/// future only resolves its outcome.
pub trait WaitlistTransport {
    fn post_submission(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// `gloo-net` transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl WaitlistTransport for HttpTransport {
    fn post_submission(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        #[cfg(feature = "csr")]
        {
            let request = gloo_net::http::Request::post(endpoint)
                .json(payload)
                .map_err(|e| SubmitError::Transport(e.to_string()));
            Box::pin(async move {
                let resp = request?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                check_status(resp.status())
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (endpoint, payload);
            Box::pin(async { Err(SubmitError::Transport("not available outside the browser".to_owned())) })
        }
    }
}
