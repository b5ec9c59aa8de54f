//! REST API helpers for the hospital backend.
//!
//! ERROR HANDLING
//! ==============
//! All calls go through [`HttpClient`], so a 401 from any endpoint clears the
//! stored session and redirects before the error reaches the caller.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, HttpClient};
use super::types::{AppointmentSummary, DoctorSummary, LoginRequest, LoginResponse, PatientSummary};
use crate::state::session::{Role, SessionUser};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Collections listed by the portal's role-restricted screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Patients,
    Doctors,
    Appointments,
}

/// Backend list endpoint for `collection` as seen by `role`.
///
/// Returns `None` when the backend offers that role no such listing.
pub fn list_endpoint(collection: Collection, role: Role) -> Option<&'static str> {
    match (collection, role) {
        (Collection::Patients, Role::Admin) => Some("/api/admin/patients"),
        (Collection::Doctors, Role::Admin) => Some("/api/admin/doctors"),
        (Collection::Doctors, Role::Patient) => Some("/api/patient/doctors"),
        (Collection::Appointments, Role::Admin) => Some("/api/admin/appointments"),
        (Collection::Appointments, Role::Doctor) => Some("/api/doctor/appointments"),
        (Collection::Appointments, Role::Patient) => Some("/api/patient/appointments"),
        _ => None,
    }
}

fn no_listing_message(collection: Collection, role: Role) -> String {
    format!("no {collection:?} listing for role {}", role.as_str()).to_lowercase()
}

/// Validate login form input. Values are sent exactly as typed.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("Username and password required");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Sign in and persist the returned user as the session record.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or credentials are rejected.
pub async fn login(client: &HttpClient, request: &LoginRequest) -> Result<SessionUser, ApiError> {
    let resp: LoginResponse = client.post_json(LOGIN_ENDPOINT, request).await?;
    client.session_store().save(&resp.user);
    Ok(resp.user)
}

/// Sign out. The local session record is dropped even if the request fails.
///
/// # Errors
///
/// Returns the [`ApiError`] from the logout request, after clearing the session.
pub async fn logout(client: &HttpClient) -> Result<(), ApiError> {
    let result = client.post_empty(LOGOUT_ENDPOINT).await;
    client.session_store().clear();
    result
}

async fn fetch_list<T>(client: &HttpClient, collection: Collection, role: Role) -> Result<Vec<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let Some(endpoint) = list_endpoint(collection, role) else {
        return Err(ApiError::Unsupported(no_listing_message(collection, role)));
    };
    client.get_json(endpoint).await
}

/// # Errors
///
/// Returns [`ApiError`] on request failure or when `role` cannot list patients.
pub async fn fetch_patients(client: &HttpClient, role: Role) -> Result<Vec<PatientSummary>, ApiError> {
    fetch_list(client, Collection::Patients, role).await
}

/// # Errors
///
/// Returns [`ApiError`] on request failure or when `role` cannot list doctors.
pub async fn fetch_doctors(client: &HttpClient, role: Role) -> Result<Vec<DoctorSummary>, ApiError> {
    fetch_list(client, Collection::Doctors, role).await
}

/// # Errors
///
/// Returns [`ApiError`] on request failure or when `role` cannot list appointments.
pub async fn fetch_appointments(client: &HttpClient, role: Role) -> Result<Vec<AppointmentSummary>, ApiError> {
    fetch_list(client, Collection::Appointments, role).await
}
