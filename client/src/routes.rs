//! Static route table for the hospital portal.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` lists one Leptos route per entry here, and the navigation guard
//! reads each entry's [`RouteMeta`] to decide whether a transition proceeds.
//! The table is built at compile time and never mutated.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Screen rendered for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Patients,
    Doctors,
    Appointments,
}

/// What a route resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

/// Access metadata consulted by the navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    /// Allowed roles. `None` means any role.
    pub roles: Option<&'static [Role]>,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, roles: None };
    pub const AUTHENTICATED: Self = Self { requires_auth: true, roles: None };

    pub const fn restricted(roles: &'static [Role]) -> Self {
        Self { requires_auth: true, roles: Some(roles) }
    }

    /// Whether `role` passes the role restriction. A missing role fails any
    /// non-empty restriction.
    pub fn permits_role(&self, role: Option<Role>) -> bool {
        match self.roles {
            None => true,
            Some(allowed) => role.is_some_and(|role| allowed.contains(&role)),
        }
    }
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// Path without the leading slash, as Leptos `StaticSegment` expects.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }

    pub fn view(&self) -> Option<View> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

pub const ROOT: RouteDescriptor = RouteDescriptor {
    path: ROOT_PATH,
    name: None,
    target: RouteTarget::Redirect(LOGIN_PATH),
    meta: RouteMeta::PUBLIC,
};

pub const LOGIN: RouteDescriptor = RouteDescriptor {
    path: LOGIN_PATH,
    name: Some("Login"),
    target: RouteTarget::View(View::Login),
    meta: RouteMeta::PUBLIC,
};

pub const DASHBOARD: RouteDescriptor = RouteDescriptor {
    path: DASHBOARD_PATH,
    name: Some("Dashboard"),
    target: RouteTarget::View(View::Dashboard),
    meta: RouteMeta::AUTHENTICATED,
};

pub const PATIENTS: RouteDescriptor = RouteDescriptor {
    path: "/patients",
    name: Some("Patients"),
    target: RouteTarget::View(View::Patients),
    meta: RouteMeta::restricted(&[Role::Admin]),
};

pub const DOCTORS: RouteDescriptor = RouteDescriptor {
    path: "/doctors",
    name: Some("Doctors"),
    target: RouteTarget::View(View::Doctors),
    meta: RouteMeta::restricted(&[Role::Admin, Role::Patient]),
};

pub const APPOINTMENTS: RouteDescriptor = RouteDescriptor {
    path: "/appointments",
    name: Some("Appointments"),
    target: RouteTarget::View(View::Appointments),
    meta: RouteMeta::restricted(&[Role::Admin, Role::Doctor, Role::Patient]),
};

/// Every route, in declaration order.
pub static ROUTES: [RouteDescriptor; 6] = [ROOT, LOGIN, DASHBOARD, PATIENTS, DOCTORS, APPOINTMENTS];
