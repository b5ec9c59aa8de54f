//! Top navigation with role-aware links and sign-out.
//!
//! DESIGN
//! ======
//! Links are derived from the route table through the same guard decision
//! used on navigation, so the bar never offers a route that would bounce.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::net::http::HttpClient;
use crate::routes::{LOGIN_PATH, ROUTES, RouteDescriptor};
use crate::state::session::SessionUser;
use crate::util::guard::is_reachable;

/// Guarded view routes `user` may open, in table order.
pub fn nav_links(user: Option<&SessionUser>) -> Vec<&'static RouteDescriptor> {
    ROUTES
        .iter()
        .filter(|route| route.meta.requires_auth && route.view().is_some() && is_reachable(route, user))
        .collect()
}

#[component]
pub fn NavBar() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let user = client.session_store().load();
    let navigate = use_navigate();

    let links = nav_links(user.as_ref())
        .into_iter()
        .map(|route| {
            view! {
                <a class="nav-bar__link" href=route.path>
                    {route.name.unwrap_or(route.path)}
                </a>
            }
        })
        .collect_view();

    let identity = user
        .as_ref()
        .map(|u| format!("{} ({})", u.display_name(), u.role.label()))
        .unwrap_or_default();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::logout(&client).await {
                    log::warn!("logout request failed: {e}");
                }
                navigate(LOGIN_PATH, NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            client.session_store().clear();
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Hospital Portal"</span>
            <div class="nav-bar__links">{links}</div>
            <span class="nav-bar__identity">{identity}</span>
            <button class="nav-bar__logout" on:click=on_logout>"Sign out"</button>
        </nav>
    }
}
