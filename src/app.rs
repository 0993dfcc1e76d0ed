/// Main application entry point for SkyReview.
/// Wires the review form, status line and reviews table to one submission
/// controller, and pre-populates the table once on mount.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpBackend;
use crate::components::{review_form::ReviewForm, reviews_table::ReviewsTable};
use crate::models::review::{ReviewRecord, ReviewRequest};
use crate::submission::{DisplaySink, StatusKind, SubmissionController};

/// Production display sink: every report from the flow lands in a signal the
/// view tracks.
#[derive(Clone, Copy)]
struct SignalSink {
    set_rows: WriteSignal<Vec<ReviewRecord>>,
    set_status: WriteSignal<Option<(StatusKind, String)>>,
    set_disabled: WriteSignal<bool>,
}

impl DisplaySink for SignalSink {
    fn set_status(&self, kind: StatusKind, message: &str) {
        self.set_status.set(Some((kind, message.to_string())));
    }

    fn append_row(&self, record: &ReviewRecord) {
        let record = record.clone();
        self.set_rows.update(|rows| rows.push(record));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.set_disabled.set(!enabled);
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (rows, set_rows) = create_signal(Vec::<ReviewRecord>::new());
    let (status, set_status) = create_signal(None::<(StatusKind, String)>);
    let (disabled, set_disabled) = create_signal(false);

    let sink = SignalSink {
        set_rows,
        set_status,
        set_disabled,
    };
    let controller = Rc::new(SubmissionController::new(HttpBackend::new(), sink));

    // One-shot load of previously analyzed reviews.
    {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.load_recent_reviews().await;
        });
    }

    let on_submit = Callback::new(move |request: ReviewRequest| {
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.submit(request).await;
        });
    });

    view! {
        <div>
            <Title text="SkyReview"/>
            <h1>{ "SkyReview" }</h1>
            // Form component for submitting a review for analysis.
            <ReviewForm disabled=disabled on_submit=on_submit />
            // Status line tracking the in-flight submission.
            <p
                id="result"
                class=move || status.get().map(|(kind, _)| kind.css_class()).unwrap_or("")
            >
                {move || status.get().map(|(_, message)| message).unwrap_or_default()}
            </p>
            // Table of analyzed reviews, with image export.
            <ReviewsTable rows=rows />
        </div>
    }
}
