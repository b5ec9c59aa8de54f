//! Networking modules for the hospital REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns client defaults and request dispatch, `interceptor` reacts to
//! failed responses, `api` wraps individual endpoints, and `types` defines the
//! wire schema.

pub mod api;
pub mod http;
pub mod interceptor;
pub mod types;
