use std::sync::Arc;

use super::*;
use crate::net::http::HttpConfig;
use crate::state::store::{MemorySessionStore, SessionStore};

#[test]
fn list_endpoint_selects_backend_route_per_role() {
    assert_eq!(list_endpoint(Collection::Patients, Role::Admin), Some("/api/admin/patients"));
    assert_eq!(list_endpoint(Collection::Doctors, Role::Admin), Some("/api/admin/doctors"));
    assert_eq!(list_endpoint(Collection::Doctors, Role::Patient), Some("/api/patient/doctors"));
    assert_eq!(list_endpoint(Collection::Appointments, Role::Admin), Some("/api/admin/appointments"));
    assert_eq!(list_endpoint(Collection::Appointments, Role::Doctor), Some("/api/doctor/appointments"));
    assert_eq!(list_endpoint(Collection::Appointments, Role::Patient), Some("/api/patient/appointments"));
}

#[test]
fn list_endpoint_is_none_for_roles_without_listing() {
    assert_eq!(list_endpoint(Collection::Patients, Role::Doctor), None);
    assert_eq!(list_endpoint(Collection::Patients, Role::Patient), None);
    assert_eq!(list_endpoint(Collection::Doctors, Role::Doctor), None);
    assert_eq!(list_endpoint(Collection::Appointments, Role::Unknown), None);
}

#[test]
fn no_listing_message_names_collection_and_role() {
    assert_eq!(no_listing_message(Collection::Patients, Role::Doctor), "no patients listing for role doctor");
}

#[test]
fn validate_login_input_sends_username_as_typed() {
    assert_eq!(
        validate_login_input(" admin ", "admin123"),
        Ok(LoginRequest { username: " admin ".to_owned(), password: "admin123".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Username and password required"));
    assert_eq!(validate_login_input("admin", ""), Err("Username and password required"));
}

#[test]
fn fetch_for_role_without_listing_fails_before_request() {
    let client = HttpClient::new(HttpConfig::new(None), Arc::new(MemorySessionStore::new()));
    let result = futures::executor::block_on(fetch_patients(&client, Role::Patient));
    assert_eq!(result, Err(ApiError::Unsupported("no patients listing for role patient".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_clears_session_even_when_request_fails() {
    let store = Arc::new(MemorySessionStore::with_user(&SessionUser::with_role(Role::Admin)));
    let client = HttpClient::new(HttpConfig::new(None), store.clone());
    let result = futures::executor::block_on(logout(&client));
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(store.load(), None);
}
