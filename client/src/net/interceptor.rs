//! Response interceptor applied to every API response.
//!
//! A 401 means the server-side session is gone: the stored session record is
//! dropped and the user is sent to `/login`. Any non-2xx status is still
//! returned to the caller as an error so it can react locally. No retries.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use super::http::ApiError;
use crate::routes::LOGIN_PATH;
use crate::state::store::SessionStore;

/// Inspect a response status. 2xx passes through; anything else becomes
/// [`ApiError::Status`] after the 401 side effects run.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for every non-2xx status.
pub fn intercept<F>(status: u16, body: &str, store: &dyn SessionStore, navigate: F) -> Result<(), ApiError>
where
    F: FnOnce(&str),
{
    if (200..300).contains(&status) {
        return Ok(());
    }
    let err = ApiError::Status { status, body: body.to_owned() };
    if err.is_unauthorized() {
        #[cfg(feature = "hydrate")]
        log::warn!("unauthorized response, clearing session");
        store.clear();
        navigate(LOGIN_PATH);
    }
    Err(err)
}
