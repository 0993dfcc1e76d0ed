use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use skyreview::api::{AnalysisBackend, ApiError};
use skyreview::models::review::{AnalysisResult, ReviewRecord, ReviewRequest};

/// This module provides a scripted stand-in for the HTTP backend so the
/// submission flow can be exercised without a network.

/// Scripted analyze outcome: Ok carries the endpoint's answer, Err a simulated
/// HTTP status code.
type ScriptedAnalyze = Result<AnalysisResult, u16>;

#[derive(Clone, Default)]
pub struct ScriptedBackend {
    inner: Rc<BackendState>,
}

#[derive(Default)]
struct BackendState {
    analyze_script: RefCell<VecDeque<ScriptedAnalyze>>,
    analyze_calls: Cell<usize>,
    seen_requests: RefCell<Vec<ReviewRequest>>,
    reviews: RefCell<Option<Result<Vec<ReviewRecord>, u16>>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_analyze_ok(&self, review_id: &str, sentiment: &str) {
        self.inner
            .analyze_script
            .borrow_mut()
            .push_back(Ok(AnalysisResult {
                review_id: review_id.to_string(),
                sentiment: sentiment.to_string(),
            }));
    }

    pub fn push_analyze_err(&self, status: u16) {
        self.inner.analyze_script.borrow_mut().push_back(Err(status));
    }

    pub fn set_reviews_ok(&self, records: Vec<ReviewRecord>) {
        *self.inner.reviews.borrow_mut() = Some(Ok(records));
    }

    pub fn set_reviews_err(&self, status: u16) {
        *self.inner.reviews.borrow_mut() = Some(Err(status));
    }

    /// Number of analyze calls observed so far.
    pub fn analyze_calls(&self) -> usize {
        self.inner.analyze_calls.get()
    }

    /// Every request payload the backend has seen, in call order.
    pub fn seen_requests(&self) -> Vec<ReviewRequest> {
        self.inner.seen_requests.borrow().clone()
    }
}

impl AnalysisBackend for ScriptedBackend {
    async fn analyze(&self, request: &ReviewRequest) -> Result<AnalysisResult, ApiError> {
        self.inner.analyze_calls.set(self.inner.analyze_calls.get() + 1);
        self.inner.seen_requests.borrow_mut().push(request.clone());
        match self.inner.analyze_script.borrow_mut().pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(status)) => Err(ApiError::Status(status)),
            // An exhausted script behaves like an unreachable endpoint.
            None => Err(ApiError::Status(503)),
        }
    }

    async fn recent_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        match self.inner.reviews.borrow_mut().take() {
            Some(Ok(records)) => Ok(records),
            Some(Err(status)) => Err(ApiError::Status(status)),
            None => Ok(Vec::new()),
        }
    }
}
