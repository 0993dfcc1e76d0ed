use leptos::ev::SubmitEvent;
use leptos::*;

use crate::models::review::ReviewRequest;

/// Form for one airline review. Emits a fully-populated request on submit; the
/// caller owns the disabled state so the button stays locked for the whole
/// retry window of an in-flight submission.
#[component]
pub fn ReviewForm(disabled: ReadSignal<bool>, on_submit: Callback<ReviewRequest>) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (aircraft_type, set_aircraft_type) = create_signal(String::new());
    let (route, set_route) = create_signal(String::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Field values are captured here, once; a retrying flow never re-reads
        // the form.
        on_submit.call(ReviewRequest {
            text: text.get(),
            aircraft_type: aircraft_type.get(),
            route: route.get(),
        });
    };

    view! {
        <form on:submit=handle_submit>
            <h3>{ "Submit a Review" }</h3>
            <textarea
                id="reviewText"
                placeholder="Write your review here"
                prop:value=move || text.get()
                on:input=move |e| set_text.set(event_target_value(&e))
            />
            <input
                type="text"
                id="aircraftType"
                placeholder="Aircraft type"
                prop:value=move || aircraft_type.get()
                on:input=move |e| set_aircraft_type.set(event_target_value(&e))
            />
            <input
                type="text"
                id="route"
                placeholder="Route (e.g. NBO-LHR)"
                prop:value=move || route.get()
                on:input=move |e| set_route.set(event_target_value(&e))
            />
            <button type="submit" prop:disabled=move || disabled.get()>
                { "Analyze Review" }
            </button>
        </form>
    }
}
