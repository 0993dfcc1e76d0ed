use std::cell::RefCell;
use std::rc::Rc;

use skyreview::models::review::ReviewRecord;
use skyreview::submission::{DisplaySink, StatusKind};

/// Recording display sink: keeps every report the flow makes so tests can
/// assert on ordering and counts without a rendering environment.
#[derive(Clone, Default)]
pub struct RecordingSink {
    inner: Rc<RefCell<SinkLog>>,
}

#[derive(Default)]
struct SinkLog {
    statuses: Vec<(StatusKind, String)>,
    rows: Vec<ReviewRecord>,
    enabled_events: Vec<bool>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<(StatusKind, String)> {
        self.inner.borrow().statuses.clone()
    }

    pub fn last_status(&self) -> Option<(StatusKind, String)> {
        self.inner.borrow().statuses.last().cloned()
    }

    pub fn rows(&self) -> Vec<ReviewRecord> {
        self.inner.borrow().rows.clone()
    }

    /// Every enable/disable transition of the submit trigger, in order.
    pub fn enabled_events(&self) -> Vec<bool> {
        self.inner.borrow().enabled_events.clone()
    }
}

impl DisplaySink for RecordingSink {
    fn set_status(&self, kind: StatusKind, message: &str) {
        self.inner
            .borrow_mut()
            .statuses
            .push((kind, message.to_string()));
    }

    fn append_row(&self, record: &ReviewRecord) {
        self.inner.borrow_mut().rows.push(record.clone());
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().enabled_events.push(enabled);
    }
}
