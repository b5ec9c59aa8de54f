//! Read-only table for list screens.

use leptos::prelude::*;

use crate::state::listing::ListState;

/// Renders `listing` under `headers`, with loading, error and empty states.
#[component]
pub fn RecordTable(headers: &'static [&'static str], listing: RwSignal<ListState>) -> impl IntoView {
    view! {
        <div class="record-table">
            <Show when=move || listing.get().loading>
                <p class="record-table__status">"Loading..."</p>
            </Show>
            <Show when=move || listing.get().error.is_some()>
                <p class="record-table__status record-table__status--error">
                    {move || listing.get().error.unwrap_or_default()}
                </p>
            </Show>
            <Show when=move || listing.get().is_empty()>
                <p class="record-table__status">"No records."</p>
            </Show>
            <Show when=move || !listing.get().rows.is_empty()>
                <table>
                    <thead>
                        <tr>
                            {headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            listing
                                .get()
                                .rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
