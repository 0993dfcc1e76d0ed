use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::export::export_region_png;
use crate::models::review::ReviewRecord;

/// Id of the region the PNG export captures.
pub const TABLE_REGION_ID: &str = "reviewTableRegion";

/// Table of analyzed reviews plus the image-export trigger. Rows arrive via
/// the display sink: historical reviews on page load, then one per successful
/// submission.
#[component]
pub fn ReviewsTable(rows: ReadSignal<Vec<ReviewRecord>>) -> impl IntoView {
    let export = move |_| {
        spawn_local(export_region_png(TABLE_REGION_ID));
    };

    view! {
        <div>
            <h2>{ "Analyzed Reviews" }</h2>
            <div id=TABLE_REGION_ID>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Review ID" }</th>
                            <th>{ "Aircraft Type" }</th>
                            <th>{ "Route" }</th>
                            <th>{ "Review" }</th>
                            <th>{ "Sentiment" }</th>
                        </tr>
                    </thead>
                    <tbody id="reviewTable">
                        {move || rows.get().iter().map(|record| view! {
                            <tr>
                                <td>{ record.review_id.clone() }</td>
                                <td>{ record.aircraft_type.clone() }</td>
                                <td>{ record.route.clone() }</td>
                                <td>{ record.review_text.clone() }</td>
                                <td>{ record.sentiment.clone() }</td>
                            </tr>
                        }).collect::<Vec<_>>() }
                    </tbody>
                </table>
            </div>
            <button on:click=export>{ "Download Table as Image" }</button>
        </div>
    }
}
