use super::*;

#[test]
fn table_declares_all_routes_in_order() {
    let paths: Vec<&str> = ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/", "/login", "/dashboard", "/patients", "/doctors", "/appointments"]);
}

#[test]
fn root_redirects_to_login() {
    assert_eq!(ROOT.target, RouteTarget::Redirect(LOGIN_PATH));
    assert_eq!(ROOT.view(), None);
}

#[test]
fn login_is_public() {
    assert_eq!(LOGIN.meta, RouteMeta::PUBLIC);
}

#[test]
fn dashboard_requires_auth_without_roles() {
    assert!(DASHBOARD.meta.requires_auth);
    assert_eq!(DASHBOARD.meta.roles, None);
}

#[test]
fn role_restrictions_match_table() {
    assert_eq!(PATIENTS.meta.roles, Some(&[Role::Admin][..]));
    assert_eq!(DOCTORS.meta.roles, Some(&[Role::Admin, Role::Patient][..]));
    assert_eq!(APPOINTMENTS.meta.roles, Some(&[Role::Admin, Role::Doctor, Role::Patient][..]));
}

#[test]
fn every_role_restricted_route_requires_auth() {
    for route in ROUTES.iter().filter(|r| r.meta.roles.is_some()) {
        assert!(route.meta.requires_auth, "{} has roles without auth", route.path);
    }
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(PATIENTS.segment(), "patients");
    assert_eq!(ROOT.segment(), "");
}

#[test]
fn permits_role_rejects_missing_and_unknown_roles() {
    let meta = RouteMeta::restricted(&[Role::Admin]);
    assert!(meta.permits_role(Some(Role::Admin)));
    assert!(!meta.permits_role(Some(Role::Doctor)));
    assert!(!meta.permits_role(Some(Role::Unknown)));
    assert!(!meta.permits_role(None));
    assert!(RouteMeta::AUTHENTICATED.permits_role(None));
}
