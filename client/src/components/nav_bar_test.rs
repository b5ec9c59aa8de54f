use super::*;
use crate::state::session::Role;

fn paths_for(role: Option<Role>) -> Vec<&'static str> {
    let user = role.map(SessionUser::with_role);
    nav_links(user.as_ref()).into_iter().map(|r| r.path).collect()
}

#[test]
fn admin_sees_every_section() {
    assert_eq!(paths_for(Some(Role::Admin)), ["/dashboard", "/patients", "/doctors", "/appointments"]);
}

#[test]
fn doctor_sees_dashboard_and_appointments() {
    assert_eq!(paths_for(Some(Role::Doctor)), ["/dashboard", "/appointments"]);
}

#[test]
fn patient_sees_doctors_and_appointments() {
    assert_eq!(paths_for(Some(Role::Patient)), ["/dashboard", "/doctors", "/appointments"]);
}

#[test]
fn unknown_role_only_sees_dashboard() {
    assert_eq!(paths_for(Some(Role::Unknown)), ["/dashboard"]);
}

#[test]
fn signed_out_sees_nothing() {
    assert!(paths_for(None).is_empty());
}
