//! Appointments list page.

use leptos::prelude::*;

use super::load_listing;
use crate::components::nav_bar::NavBar;
use crate::components::record_table::RecordTable;
use crate::net::api::fetch_appointments;
use crate::net::http::HttpClient;
use crate::net::types::{AppointmentSummary, TableRow};

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let listing = load_listing(&client, |client, role| async move { fetch_appointments(&client, role).await });

    view! {
        <div class="page appointments-page">
            <NavBar/>
            <h1>"Appointments"</h1>
            <RecordTable headers=AppointmentSummary::HEADERS listing/>
        </div>
    }
}
