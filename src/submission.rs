/// Submission flow for one review: bounded retry against the analysis
/// endpoint, reporting progress and the terminal outcome through an injected
/// display sink. One flow owns the submit trigger from the moment it starts
/// until it terminates, so a second submission cannot overlap the first.
use leptos::logging::log;
use std::time::Duration;

use crate::api::AnalysisBackend;
use crate::models::review::{ReviewRecord, ReviewRequest};

/// Rendering capability the flow reports into. The production sink writes
/// Leptos signals; tests record calls.
pub trait DisplaySink {
    fn set_status(&self, kind: StatusKind, message: &str);
    fn append_row(&self, record: &ReviewRecord);
    fn set_submit_enabled(&self, enabled: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    InProgress,
    Success,
    Failure,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::InProgress => "text-info",
            StatusKind::Success => "text-success",
            StatusKind::Failure => "text-danger",
        }
    }
}

/// Attempt cap and pacing for the retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The endpoint answered within the attempt cap.
    Completed { sentiment: String },
    /// Every attempt failed; the last failure message stays displayed.
    RetriesExhausted,
}

pub struct SubmissionController<B, S> {
    backend: B,
    sink: S,
    policy: RetryPolicy,
}

impl<B, S> SubmissionController<B, S>
where
    B: AnalysisBackend,
    S: DisplaySink,
{
    pub fn new(backend: B, sink: S) -> Self {
        Self::with_policy(backend, sink, RetryPolicy::default())
    }

    pub fn with_policy(backend: B, sink: S, policy: RetryPolicy) -> Self {
        Self {
            backend,
            sink,
            policy,
        }
    }

    /// Runs one submission flow to its terminal state. Attempts are strictly
    /// sequential; a retry is only scheduled after the previous attempt's
    /// outcome is known. The submit trigger is re-enabled exactly once, on
    /// terminal success or terminal failure. Note that an awaited retry delay
    /// still fires if the view that started the flow is gone.
    pub async fn submit(&self, request: ReviewRequest) -> SubmissionOutcome {
        self.sink.set_submit_enabled(false);
        self.sink.set_status(StatusKind::InProgress, "Analyzing...");

        let mut attempt: u32 = 1;
        loop {
            match self.backend.analyze(&request).await {
                Ok(result) => {
                    self.sink
                        .set_status(StatusKind::Success, &format!("Sentiment: {}", result.sentiment));
                    self.sink
                        .append_row(&ReviewRecord::from_analysis(&request, &result));
                    self.sink.set_submit_enabled(true);
                    return SubmissionOutcome::Completed {
                        sentiment: result.sentiment,
                    };
                }
                Err(err) => {
                    log!("[SUBMIT] attempt {} failed: {}", attempt, err);
                    self.sink.set_status(
                        StatusKind::Failure,
                        &format!(
                            "Failed after {} attempts. Please check your network and try again.",
                            attempt
                        ),
                    );
                    if attempt >= self.policy.max_attempts {
                        self.sink.set_submit_enabled(true);
                        return SubmissionOutcome::RetriesExhausted;
                    }
                    gloo_timers::future::sleep(self.policy.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One-shot pre-population of the table from the listing endpoint. Rows are
    /// appended in response order. A failed fetch only reaches the diagnostic
    /// log; the table stays empty for the session.
    pub async fn load_recent_reviews(&self) -> usize {
        match self.backend.recent_reviews().await {
            Ok(records) => {
                for record in &records {
                    self.sink.append_row(record);
                }
                records.len()
            }
            Err(err) => {
                log!("[REVIEWS] failed to load recent reviews: {}", err);
                0
            }
        }
    }
}
