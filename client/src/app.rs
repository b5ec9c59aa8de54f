//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::http::{HttpClient, HttpConfig};
use crate::pages::{
    appointments::AppointmentsPage, dashboard::DashboardPage, doctors::DoctorsPage, login::LoginPage,
    patients::PatientsPage,
};
use crate::routes::{APPOINTMENTS, DASHBOARD, DOCTORS, LOGIN, PATIENTS, ROOT, RouteDescriptor, RouteTarget, View};
use crate::state::store::{BrowserSessionStore, SharedSessionStore};
use crate::util::guard::RouteGuard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn page(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::Patients => view! { <PatientsPage/> }.into_any(),
        View::Doctors => view! { <DoctorsPage/> }.into_any(),
        View::Appointments => view! { <AppointmentsPage/> }.into_any(),
    }
}

/// Render a route-table entry: redirects become `<Redirect>`, views that
/// need a session or role are wrapped in [`RouteGuard`].
fn route_view(route: &'static RouteDescriptor) -> AnyView {
    match route.target {
        RouteTarget::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        RouteTarget::View(view) if route.meta.requires_auth || route.meta.roles.is_some() => {
            view! { <RouteGuard route=route>{page(view)}</RouteGuard> }.into_any()
        }
        RouteTarget::View(view) => page(view),
    }
}

/// Root application component.
///
/// Builds the session store and HTTP client once and provides them to every
/// page. Each `<Route>` below names one entry of `routes::ROUTES` and
/// renders it through [`route_view`]; a new table entry needs a line here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: SharedSessionStore = Arc::new(BrowserSessionStore);
    let client = HttpClient::new(HttpConfig::from_build_env(), store.clone());
    provide_context(store);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/hospital-portal.css"/>
        <Title text="Hospital Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(ROOT.segment()) view=|| route_view(&ROOT)/>
                <Route path=StaticSegment(LOGIN.segment()) view=|| route_view(&LOGIN)/>
                <Route path=StaticSegment(DASHBOARD.segment()) view=|| route_view(&DASHBOARD)/>
                <Route path=StaticSegment(PATIENTS.segment()) view=|| route_view(&PATIENTS)/>
                <Route path=StaticSegment(DOCTORS.segment()) view=|| route_view(&DOCTORS)/>
                <Route path=StaticSegment(APPOINTMENTS.segment()) view=|| route_view(&APPOINTMENTS)/>
            </Routes>
        </Router>
    }
}
