//! Patients list page.

use leptos::prelude::*;

use super::load_listing;
use crate::components::nav_bar::NavBar;
use crate::components::record_table::RecordTable;
use crate::net::api::fetch_patients;
use crate::net::http::HttpClient;
use crate::net::types::{PatientSummary, TableRow};

#[component]
pub fn PatientsPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let listing = load_listing(&client, |client, role| async move { fetch_patients(&client, role).await });

    view! {
        <div class="page patients-page">
            <NavBar/>
            <h1>"Patients"</h1>
            <RecordTable headers=PatientSummary::HEADERS listing/>
        </div>
    }
}
