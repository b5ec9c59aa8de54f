//! Doctors list page.

use leptos::prelude::*;

use super::load_listing;
use crate::components::nav_bar::NavBar;
use crate::components::record_table::RecordTable;
use crate::net::api::fetch_doctors;
use crate::net::http::HttpClient;
use crate::net::types::{DoctorSummary, TableRow};

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let listing = load_listing(&client, |client, role| async move { fetch_doctors(&client, role).await });

    view! {
        <div class="page doctors-page">
            <NavBar/>
            <h1>"Doctors"</h1>
            <RecordTable headers=DoctorSummary::HEADERS listing/>
        </div>
    }
}
