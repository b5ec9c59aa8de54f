//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Guarding happens in `app::App`, before a page renders.

pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod login;
pub mod patients;

use std::future::Future;

use leptos::prelude::*;

use crate::net::http::{ApiError, HttpClient};
use crate::net::types::TableRow;
use crate::state::listing::ListState;
use crate::state::session::Role;

/// Fetch rows for the signed-in role into a fresh [`ListState`] signal.
pub(crate) fn load_listing<T, F, Fut>(client: &HttpClient, fetch: F) -> RwSignal<ListState>
where
    T: TableRow + 'static,
    F: FnOnce(HttpClient, Role) -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let Some(role) = client.session_store().load().map(|user| user.role) else {
        return RwSignal::new(ListState::failed("Not signed in."));
    };
    let listing = RwSignal::new(ListState::loading());
    let pending = fetch(client.clone(), role);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        listing.set(ListState::from_result(pending.await));
    });
    #[cfg(not(feature = "hydrate"))]
    drop(pending);
    listing
}
