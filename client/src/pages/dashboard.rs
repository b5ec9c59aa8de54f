//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-restricted routes redirect here when the signed-in role is not
//! allowed, so the page always offers the sections the role can open.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::nav_bar::{NavBar, nav_links};
use crate::net::http::HttpClient;
use crate::routes::{DASHBOARD_PATH, View};
use crate::state::session::SessionUser;

/// One-line description of a section for the dashboard cards.
pub fn section_summary(view: View) -> &'static str {
    match view {
        View::Login => "Sign in",
        View::Dashboard => "Overview",
        View::Patients => "Browse registered patients",
        View::Doctors => "Find doctors and specializations",
        View::Appointments => "Review scheduled appointments",
    }
}

pub fn greeting(user: Option<&SessionUser>) -> String {
    match user {
        Some(user) => format!("Welcome, {}", user.display_name()),
        None => "Welcome".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let user = client.session_store().load();

    let cards = nav_links(user.as_ref())
        .into_iter()
        .filter(|route| route.path != DASHBOARD_PATH)
        .filter_map(|route| Some((route, route.view()?)))
        .map(|(route, view)| {
            view! {
                <a class="section-card" href=route.path>
                    <span class="section-card__name">{route.name.unwrap_or(route.path)}</span>
                    <span class="section-card__summary">{section_summary(view)}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="page dashboard-page">
            <NavBar/>
            <h1>{greeting(user.as_ref())}</h1>
            <div class="section-grid">{cards}</div>
        </div>
    }
}
