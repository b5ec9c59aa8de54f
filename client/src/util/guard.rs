//! Pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route wraps its page in [`RouteGuard`]. The guard reads the
//! stored session record and either lets the page render or redirects. The
//! decision itself is the pure [`evaluate`] so it can be checked without a
//! browser.
//!
//! The missing-user check runs before the role check. With `requires_auth`
//! set, a missing user therefore lands on `/login` even for role-restricted
//! routes; a role-restricted route without `requires_auth` sends a missing
//! user to `/dashboard` because an absent role is never in the allowed set.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{DASHBOARD_PATH, LOGIN_PATH, RouteDescriptor, RouteMeta};
use crate::state::session::SessionUser;
use crate::state::store::{SessionStore, SharedSessionStore};

/// Outcome of a guarded navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to a route with `meta` may proceed for `user`.
pub fn evaluate(meta: &RouteMeta, user: Option<&SessionUser>) -> NavigationDecision {
    if meta.requires_auth && user.is_none() {
        NavigationDecision::Redirect(LOGIN_PATH)
    } else if !meta.permits_role(user.map(|u| u.role)) {
        NavigationDecision::Redirect(DASHBOARD_PATH)
    } else {
        NavigationDecision::Proceed
    }
}

/// Guard decision for entering `route`, reading the session from `store`.
///
/// A redirect back to the route being entered is treated as `Proceed`.
pub fn check_route(route: &RouteDescriptor, store: &dyn SessionStore) -> NavigationDecision {
    match evaluate(&route.meta, store.load().as_ref()) {
        NavigationDecision::Redirect(path) if path == route.path => NavigationDecision::Proceed,
        decision => decision,
    }
}

/// Whether `user` may open `route`; used to build role-aware navigation.
pub fn is_reachable(route: &RouteDescriptor, user: Option<&SessionUser>) -> bool {
    evaluate(&route.meta, user) == NavigationDecision::Proceed
}

/// Run the guard for `route` once the page is live in the browser.
///
/// Sets `allowed` on `Proceed`; otherwise navigates to the redirect target.
pub fn install_route_guard<F>(
    route: &'static RouteDescriptor,
    store: SharedSessionStore,
    allowed: RwSignal<bool>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || match check_route(route, store.as_ref()) {
        NavigationDecision::Proceed => allowed.set(true),
        NavigationDecision::Redirect(path) => {
            #[cfg(feature = "hydrate")]
            log::debug!("guard redirect {} -> {path}", route.path);
            allowed.set(false);
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Renders `children` only after the guard lets navigation to `route` proceed.
#[component]
pub fn RouteGuard(route: &'static RouteDescriptor, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SharedSessionStore>();
    let allowed = RwSignal::new(false);
    install_route_guard(route, store, allowed, use_navigate());

    view! {
        <Show when=move || allowed.get()>
            {children()}
        </Show>
    }
}
