use super::*;

#[test]
fn decode_session_missing_is_none() {
    assert_eq!(decode_session(None), None);
}

#[test]
fn decode_session_null_literal_is_none() {
    assert_eq!(decode_session(Some("null")), None);
}

#[test]
fn decode_session_malformed_json_is_none() {
    assert_eq!(decode_session(Some("{not json")), None);
    assert_eq!(decode_session(Some("")), None);
}

#[test]
fn decode_session_without_role_is_none() {
    assert_eq!(decode_session(Some(r#"{"username":"amy"}"#)), None);
}

#[test]
fn decode_session_role_only() {
    let user = decode_session(Some(r#"{"role":"doctor"}"#)).unwrap();
    assert_eq!(user, SessionUser::with_role(Role::Doctor));
}

#[test]
fn decode_session_full_backend_payload_ignores_extra_fields() {
    let raw = r#"{
        "id": 7,
        "username": "admin",
        "email": "admin@hospital.com",
        "role": "admin",
        "full_name": "Hospital Administrator",
        "phone": null,
        "is_active": true,
        "created_at": "2025-01-01T00:00:00"
    }"#;
    let user = decode_session(Some(raw)).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.id, Some(7));
    assert_eq!(user.username.as_deref(), Some("admin"));
    assert_eq!(user.phone, None);
    assert_eq!(user.is_active, Some(true));
}

#[test]
fn decode_session_keeps_role_when_display_field_has_wrong_type() {
    let user = decode_session(Some(r#"{"role":"admin","phone":5551234}"#)).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.phone, None);

    let user = decode_session(Some(r#"{"role":"doctor","id":"7","is_active":"yes","username":"drx"}"#)).unwrap();
    assert_eq!(user.role, Role::Doctor);
    assert_eq!(user.id, None);
    assert_eq!(user.is_active, None);
    assert_eq!(user.username.as_deref(), Some("drx"));
}

#[test]
fn unknown_role_string_maps_to_unknown() {
    let user = decode_session(Some(r#"{"role":"nurse"}"#)).unwrap();
    assert_eq!(user.role, Role::Unknown);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Patient).unwrap(), "\"patient\"");
    assert_eq!(Role::Doctor.as_str(), "doctor");
}

#[test]
fn session_user_serialization_skips_missing_fields() {
    let json = serde_json::to_value(SessionUser::with_role(Role::Admin)).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "admin" }));
}

#[test]
fn display_name_prefers_full_name_then_username_then_role() {
    let mut user = SessionUser::with_role(Role::Patient);
    assert_eq!(user.display_name(), "Patient");
    user.username = Some("pat".to_owned());
    assert_eq!(user.display_name(), "pat");
    user.full_name = Some("Pat Doe".to_owned());
    assert_eq!(user.display_name(), "Pat Doe");
}
